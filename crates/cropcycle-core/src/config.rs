//! Configuration loading and typed settings for the crop cycle reactor.
//!
//! The operator-facing configuration lives in `cropcycle-config.yaml`. This
//! module defines [`EngineSettings`], which mirrors the YAML keys, and the
//! [`SettingsSource`] seam the [`ConfigurationContext`] reads from on every
//! load and reload.
//!
//! The `sound-type` value is kept as a raw string and only parsed when a
//! cycle wants to play it, so an unknown sound never fails a load.
//!
//! [`ConfigurationContext`]: crate::context::ConfigurationContext

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

/// The configuration file shipped with the reactor, written to disk when no
/// file exists yet.
pub const DEFAULT_CONFIG_YAML: &str = "\
# Crop cycle reactor configuration

# Global switch. When false every interaction is ignored.
enabled: true

# Require the <namespace>.use capability to auto-harvest.
require-permission: true

# Grant experience for each harvested crop.
give-experience: true
experience-amount: 1

# Play an acknowledgement sound at the crop.
play-sound: true
sound-type: ENTITY_ITEM_PICKUP
";

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cropcycle-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file.
    #[error("failed to access config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Settings read by the decision engine and the mutator.
///
/// Built whole from configuration and replaced whole on reload; no field
/// is ever updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(clippy::struct_excessive_bools)]
pub struct EngineSettings {
    /// Global kill switch.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether actors need the use capability.
    #[serde(default = "default_true")]
    pub require_permission: bool,

    /// Whether to grant experience after a cycle.
    #[serde(rename = "give-experience", default = "default_true")]
    pub give_reward: bool,

    /// Experience points granted per cycle.
    #[serde(rename = "experience-amount", default = "default_reward_amount")]
    pub reward_amount: u32,

    /// Whether to play an acknowledgement sound.
    #[serde(rename = "play-sound", default = "default_true")]
    pub feedback_enabled: bool,

    /// Sound name, validated only when played.
    #[serde(rename = "sound-type", default = "default_feedback_kind")]
    pub feedback_kind: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            require_permission: true,
            give_reward: true,
            reward_amount: default_reward_amount(),
            feedback_enabled: true,
            feedback_kind: default_feedback_kind(),
        }
    }
}

impl EngineSettings {
    /// Load settings from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse settings from a YAML string. Missing keys take their defaults;
    /// an empty document yields [`EngineSettings::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yml::from_str(yaml)?;
        Ok(settings)
    }
}

/// Where the configuration context reads settings from.
pub trait SettingsSource {
    /// Produce a complete settings value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the backing store cannot be read or
    /// parsed.
    fn load(&self) -> Result<EngineSettings, ConfigError>;

    /// Short description for log lines (e.g. the file path).
    fn describe(&self) -> String;
}

impl<S: SettingsSource + ?Sized> SettingsSource for std::sync::Arc<S> {
    fn load(&self) -> Result<EngineSettings, ConfigError> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Settings read from a YAML file on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSettingsSource {
    path: PathBuf,
}

impl FileSettingsSource {
    /// Read settings from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write [`DEFAULT_CONFIG_YAML`] to the path if no file exists.
    ///
    /// Returns `true` when a file was written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be written.
    pub fn write_default_if_missing(&self) -> Result<bool, ConfigError> {
        if self.path.exists() {
            return Ok(false);
        }
        std::fs::write(&self.path, DEFAULT_CONFIG_YAML)?;
        info!(path = %self.path.display(), "Wrote default configuration");
        Ok(true)
    }
}

impl SettingsSource for FileSettingsSource {
    fn load(&self) -> Result<EngineSettings, ConfigError> {
        if self.path.exists() {
            EngineSettings::from_file(&self.path)
        } else {
            info!(path = %self.path.display(), "Config file not found, using defaults");
            Ok(EngineSettings::default())
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed settings, for embedding hosts that configure in code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSettingsSource(pub EngineSettings);

impl SettingsSource for StaticSettingsSource {
    fn load(&self) -> Result<EngineSettings, ConfigError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        String::from("static settings")
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_true() -> bool {
    true
}

const fn default_reward_amount() -> u32 {
    1
}

fn default_feedback_kind() -> String {
    "ENTITY_ITEM_PICKUP".to_owned()
}
