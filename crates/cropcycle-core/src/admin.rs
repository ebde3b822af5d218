//! The `/autofarm` admin command: status, reload, info, tab completion.
//!
//! [`AdminSurface`] exposes each sub-action as a typed call returning a
//! report, plus [`AdminSurface::execute`] which renders those reports into
//! chat lines for a command sender. Reload and info are gated on the
//! `<ns>.reload` and `<ns>.info` capabilities; status is open to everyone.

use std::sync::Arc;

use tracing::{info, warn};

use cropcycle_actors::{Capability, Permissible, PermissionGate};
use cropcycle_types::{ItemKind, ResourceKind};

use crate::config::EngineSettings;
use crate::context::ConfigurationContext;
use crate::error::AdminError;

/// Product name shown in command output.
pub const PRODUCT_NAME: &str = "AutoFarm";

/// Version reported by `status` and `info`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line shown to a sender lacking the capability for a sub-action.
pub const DENIAL_MESSAGE: &str = "You do not have permission to run this command!";

/// Presentation hint for an output line; hosts map it to a chat colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Section header.
    Heading,
    /// Normal informational line.
    Info,
    /// Something is switched off or refused.
    Warning,
    /// Usage hint.
    Hint,
    /// Listing detail.
    Detail,
}

/// One line of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLine {
    /// How the host should colour the line.
    pub tone: Tone,
    /// The text.
    pub text: String,
}

impl AdminLine {
    fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// Result of [`AdminSurface::execute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the command was recognised. Unrecognised input yields
    /// `false` so the host can print its own usage text.
    pub handled: bool,
    /// Lines to send back to the sender.
    pub lines: Vec<AdminLine>,
}

impl CommandOutcome {
    const fn handled(lines: Vec<AdminLine>) -> Self {
        Self {
            handled: true,
            lines,
        }
    }
}

/// Output of the ungated status sub-action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Reactor version.
    pub version: &'static str,
    /// Settings in force.
    pub settings: EngineSettings,
    /// Number of cyclable crops.
    pub catalog_size: usize,
}

/// Output of a successful reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadReport {
    /// Settings now in force.
    pub settings: EngineSettings,
    /// Number of cyclable crops after the rebuild.
    pub catalog_size: usize,
}

/// Output of the info sub-action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailReport {
    /// Reactor version.
    pub version: &'static str,
    /// Settings in force.
    pub settings: EngineSettings,
    /// Every catalog entry, ordered by crop.
    pub catalog: Vec<(ResourceKind, ItemKind)>,
}

/// The admin command bound to one context and capability namespace.
#[derive(Debug, Clone)]
pub struct AdminSurface {
    context: Arc<ConfigurationContext>,
    gate: PermissionGate,
    command: String,
}

impl AdminSurface {
    /// Create the admin surface for command `command`.
    pub fn new(context: Arc<ConfigurationContext>, gate: PermissionGate, command: &str) -> Self {
        Self {
            context,
            gate,
            command: command.to_owned(),
        }
    }

    /// The command name, e.g. `autofarm`.
    pub fn command_name(&self) -> &str {
        &self.command
    }

    /// Current status. Needs no capability.
    pub fn status(&self) -> StatusReport {
        let snapshot = self.context.snapshot();
        StatusReport {
            version: VERSION,
            settings: snapshot.settings.clone(),
            catalog_size: snapshot.catalog.len(),
        }
    }

    /// Re-read configuration and rebuild the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] without touching state if
    /// `sender` lacks the reload capability, or [`AdminError::Reload`] if
    /// the configuration cannot be read (previous settings stay in force).
    pub fn reload<P: Permissible + ?Sized>(&self, sender: &P) -> Result<ReloadReport, AdminError> {
        self.require(sender, Capability::Reload)?;
        let snapshot = self.context.reload().inspect_err(|err| {
            warn!(source = %self.context.source_description(), error = %err, "Reload failed");
        })?;
        info!(
            enabled = snapshot.settings.enabled,
            crops = snapshot.catalog.len(),
            "Configuration reloaded"
        );
        Ok(ReloadReport {
            settings: snapshot.settings.clone(),
            catalog_size: snapshot.catalog.len(),
        })
    }

    /// Full settings and catalog listing.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::PermissionDenied`] if `sender` lacks the info
    /// capability.
    pub fn detail<P: Permissible + ?Sized>(&self, sender: &P) -> Result<DetailReport, AdminError> {
        self.require(sender, Capability::Info)?;
        let snapshot = self.context.snapshot();
        Ok(DetailReport {
            version: VERSION,
            settings: snapshot.settings.clone(),
            catalog: snapshot.catalog.iter().collect(),
        })
    }

    /// Run the command with `args` and render the result as chat lines.
    ///
    /// No arguments shows status. `reload` and `info` match case-insensitively.
    /// Anything else is not handled and produces no lines.
    pub fn execute<P: Permissible + ?Sized>(&self, sender: &P, args: &[&str]) -> CommandOutcome {
        let Some(sub) = args.first() else {
            return CommandOutcome::handled(render_status(&self.status(), &self.command));
        };

        if sub.eq_ignore_ascii_case(Capability::Reload.suffix()) {
            let lines = match self.reload(sender) {
                Ok(report) => render_reload(&report),
                Err(err) => render_error(&err),
            };
            return CommandOutcome::handled(lines);
        }

        if sub.eq_ignore_ascii_case(Capability::Info.suffix()) {
            let lines = match self.detail(sender) {
                Ok(report) => render_detail(&report),
                Err(err) => render_error(&err),
            };
            return CommandOutcome::handled(lines);
        }

        CommandOutcome::default()
    }

    /// Tab completion for the command.
    ///
    /// For the first argument, offers `reload` and `info` filtered by the
    /// capabilities the sender holds. Returns `None` past the first
    /// argument so the host falls back to its default completion.
    pub fn complete<P: Permissible + ?Sized>(
        &self,
        sender: &P,
        args: &[&str],
    ) -> Option<Vec<String>> {
        if args.len() != 1 {
            return None;
        }
        let offers = [Capability::Reload, Capability::Info]
            .into_iter()
            .filter(|cap| self.gate.allows(sender, *cap))
            .map(|cap| cap.suffix().to_owned())
            .collect();
        Some(offers)
    }

    fn require<P: Permissible + ?Sized>(
        &self,
        sender: &P,
        capability: Capability,
    ) -> Result<(), AdminError> {
        if self.gate.allows(sender, capability) {
            Ok(())
        } else {
            Err(AdminError::PermissionDenied {
                capability: self.gate.capability(capability).to_owned(),
            })
        }
    }
}

const fn on_off(enabled: bool) -> (Tone, &'static str) {
    if enabled {
        (Tone::Info, "enabled")
    } else {
        (Tone::Warning, "disabled")
    }
}

fn yes_no(flag: bool, detail: &str) -> String {
    if flag {
        format!("yes ({detail})")
    } else {
        String::from("no")
    }
}

fn render_status(report: &StatusReport, command: &str) -> Vec<AdminLine> {
    let (tone, state) = on_off(report.settings.enabled);
    vec![
        AdminLine::new(Tone::Heading, format!("=== {PRODUCT_NAME} ===")),
        AdminLine::new(Tone::Info, format!("Version: {}", report.version)),
        AdminLine::new(tone, format!("Status: {state}")),
        AdminLine::new(
            Tone::Info,
            format!("Supported crops: {}", report.catalog_size),
        ),
        AdminLine::new(
            Tone::Hint,
            format!("Use /{command} reload to reload the configuration"),
        ),
        AdminLine::new(Tone::Hint, format!("Use /{command} info for details")),
    ]
}

fn render_reload(report: &ReloadReport) -> Vec<AdminLine> {
    let (_, state) = on_off(report.settings.enabled);
    vec![
        AdminLine::new(
            Tone::Info,
            format!("{PRODUCT_NAME} configuration reloaded!"),
        ),
        AdminLine::new(Tone::Info, format!("Status: {state}")),
    ]
}

fn render_detail(report: &DetailReport) -> Vec<AdminLine> {
    let settings = &report.settings;
    let (tone, state) = on_off(settings.enabled);
    let mut lines = vec![
        AdminLine::new(Tone::Heading, format!("=== {PRODUCT_NAME} details ===")),
        AdminLine::new(Tone::Info, format!("Version: {}", report.version)),
        AdminLine::new(tone, format!("Status: {state}")),
        AdminLine::new(
            Tone::Info,
            format!(
                "Requires permission: {}",
                if settings.require_permission { "yes" } else { "no" }
            ),
        ),
        AdminLine::new(
            Tone::Info,
            format!(
                "Gives experience: {}",
                yes_no(
                    settings.give_reward,
                    &format!("{} points", settings.reward_amount)
                )
            ),
        ),
        AdminLine::new(
            Tone::Info,
            format!(
                "Plays sound: {}",
                yes_no(settings.feedback_enabled, &settings.feedback_kind)
            ),
        ),
        AdminLine::new(Tone::Heading, "Supported crops:"),
    ];
    lines.extend(
        report
            .catalog
            .iter()
            .map(|(kind, seed)| AdminLine::new(Tone::Detail, format!("- {kind} -> {seed}"))),
    );
    lines
}

fn render_error(err: &AdminError) -> Vec<AdminLine> {
    match err {
        AdminError::PermissionDenied { .. } => vec![AdminLine::new(Tone::Warning, DENIAL_MESSAGE)],
        AdminError::Reload { source } => vec![AdminLine::new(
            Tone::Warning,
            format!("Failed to reload configuration: {source}"),
        )],
    }
}
