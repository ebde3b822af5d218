//! Capability checks for triggering the cycle and administering it.
//!
//! Capabilities are namespaced strings (`<ns>.use`, `<ns>.reload`,
//! `<ns>.info`). The gate builds them once so the per-interaction check is a
//! lookup on the subject, not a string format.

use crate::actor::Actor;

/// Default capability namespace.
pub const DEFAULT_NAMESPACE: &str = "autofarm";

/// Anything the host can ask "do you hold this capability?".
pub trait Permissible {
    /// Whether the subject holds `capability`.
    fn has_capability(&self, capability: &str) -> bool;
}

impl Permissible for Actor {
    fn has_capability(&self, capability: &str) -> bool {
        self.holds(capability)
    }
}

/// The three capabilities the reactor recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Trigger the harvest-and-replant cycle.
    Use,
    /// Reload configuration.
    Reload,
    /// View full settings and the catalog listing.
    Info,
}

impl Capability {
    /// Suffix appended to the namespace.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Use => "use",
            Self::Reload => "reload",
            Self::Info => "info",
        }
    }
}

/// Stateless capability checker for one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGate {
    namespace: String,
    use_capability: String,
    reload_capability: String,
    info_capability: String,
}

impl Default for PermissionGate {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl PermissionGate {
    /// Create a gate for `namespace`.
    pub fn new(namespace: &str) -> Self {
        let qualify = |cap: Capability| format!("{namespace}.{}", cap.suffix());
        Self {
            namespace: namespace.to_owned(),
            use_capability: qualify(Capability::Use),
            reload_capability: qualify(Capability::Reload),
            info_capability: qualify(Capability::Info),
        }
    }

    /// The namespace this gate qualifies capabilities with.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fully qualified capability string, e.g. `autofarm.use`.
    pub fn capability(&self, capability: Capability) -> &str {
        match capability {
            Capability::Use => &self.use_capability,
            Capability::Reload => &self.reload_capability,
            Capability::Info => &self.info_capability,
        }
    }

    /// Whether `subject` holds `capability` in this namespace.
    pub fn allows<P: Permissible + ?Sized>(&self, subject: &P, capability: Capability) -> bool {
        subject.has_capability(self.capability(capability))
    }
}
