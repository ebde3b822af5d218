//! Process-wide settings and catalog, replaced wholesale on reload.
//!
//! The context publishes an [`Arc<ContextSnapshot>`] behind a short-lived
//! [`RwLock`]. Readers clone the `Arc` and drop the lock immediately, so an
//! interaction that started before a reload finishes on the old snapshot
//! and one that starts after sees the new one. No reader ever observes a
//! snapshot with fields from both.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::info;

use cropcycle_world::ResourceCycleCatalog;

use crate::config::{ConfigError, EngineSettings, SettingsSource};

/// One consistent view of settings and catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextSnapshot {
    /// The engine settings.
    pub settings: EngineSettings,
    /// The crop catalog, rebuilt alongside the settings.
    pub catalog: ResourceCycleCatalog,
    /// When this snapshot was built.
    pub loaded_at: DateTime<Utc>,
}

impl ContextSnapshot {
    /// Build a snapshot from settings and the standard catalog.
    pub fn build(settings: EngineSettings) -> Self {
        Self {
            settings,
            catalog: ResourceCycleCatalog::standard(),
            loaded_at: Utc::now(),
        }
    }
}

/// Owner of the current [`ContextSnapshot`] and the source it came from.
pub struct ConfigurationContext {
    source: Box<dyn SettingsSource + Send + Sync>,
    current: RwLock<Arc<ContextSnapshot>>,
}

impl core::fmt::Debug for ConfigurationContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfigurationContext")
            .field("source", &self.source.describe())
            .field("current", &self.snapshot())
            .finish()
    }
}

impl ConfigurationContext {
    /// Load the initial snapshot from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the source cannot produce settings.
    pub fn load<S>(source: S) -> Result<Self, ConfigError>
    where
        S: SettingsSource + Send + Sync + 'static,
    {
        let snapshot = Self::construct(&source)?;
        Ok(Self {
            source: Box::new(source),
            current: RwLock::new(Arc::new(snapshot)),
        })
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<ContextSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Re-read the source, rebuild the catalog, and publish the result.
    ///
    /// The new snapshot is fully built before the swap. On error the
    /// previous snapshot stays published.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the source cannot produce settings.
    pub fn reload(&self) -> Result<Arc<ContextSnapshot>, ConfigError> {
        let next = Arc::new(Self::construct(self.source.as_ref())?);
        {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *guard = Arc::clone(&next);
        }
        Ok(next)
    }

    /// Description of the settings source.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    fn construct<S>(source: &S) -> Result<ContextSnapshot, ConfigError>
    where
        S: SettingsSource + ?Sized,
    {
        let settings = source.load()?;
        info!(
            source = %source.describe(),
            enabled = settings.enabled,
            require_permission = settings.require_permission,
            "Configuration loaded"
        );
        let snapshot = ContextSnapshot::build(settings);
        info!(entries = snapshot.catalog.len(), "Crop catalog built");
        Ok(snapshot)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::config::StaticSettingsSource;

    /// Source whose next load result can be swapped by the test.
    struct ScriptedSource(Mutex<Result<EngineSettings, String>>);

    impl SettingsSource for ScriptedSource {
        fn load(&self) -> Result<EngineSettings, ConfigError> {
            let next = self.0.lock().unwrap().clone();
            next.map_err(|msg| ConfigError::Io {
                source: std::io::Error::other(msg),
            })
        }

        fn describe(&self) -> String {
            String::from("scripted")
        }
    }

    #[test]
    fn load_builds_standard_catalog() {
        let ctx = ConfigurationContext::load(StaticSettingsSource::default()).unwrap();
        let snap = ctx.snapshot();
        assert_eq!(snap.settings, EngineSettings::default());
        assert_eq!(snap.catalog.len(), 5);
    }

    #[test]
    fn reload_swaps_the_whole_snapshot() {
        let source = Arc::new(ScriptedSource(Mutex::new(Ok(EngineSettings::default()))));
        let ctx = ConfigurationContext::load(Arc::clone(&source)).unwrap();
        let before = ctx.snapshot();

        let disabled = EngineSettings {
            enabled: false,
            ..EngineSettings::default()
        };
        *source.0.lock().unwrap() = Ok(disabled.clone());
        let after = ctx.reload().unwrap();

        assert_eq!(after.settings, disabled);
        assert_eq!(ctx.snapshot().settings, disabled);
        // A reader holding the old snapshot keeps a consistent old view.
        assert_eq!(before.settings, EngineSettings::default());
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let source = Arc::new(ScriptedSource(Mutex::new(Ok(EngineSettings::default()))));
        let ctx = ConfigurationContext::load(Arc::clone(&source)).unwrap();
        let before = ctx.snapshot();

        *source.0.lock().unwrap() = Err(String::from("disk gone"));
        assert!(ctx.reload().is_err());
        assert!(Arc::ptr_eq(&before, &ctx.snapshot()));
    }

    #[test]
    fn failed_initial_load_is_reported() {
        let source = ScriptedSource(Mutex::new(Err(String::from("unreadable"))));
        assert!(ConfigurationContext::load(source).is_err());
    }
}
