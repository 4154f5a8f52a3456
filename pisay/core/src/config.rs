//! TOML Configuration File Support
//!
//! Configuration for the `/pisay` command and the completion notifier, read
//! from `~/.config/pisay/pisay.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (via [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # XDG Base Directory Compliance
//!
//! - `$XDG_CONFIG_HOME/pisay/pisay.toml` (typically `~/.config/pisay/pisay.toml`)
//!
//! # Example Configuration
//!
//! ```toml
//! [fortune]
//! command = "fortune"
//! args = ["-s"]
//! timeout_ms = 2000
//!
//! [title]
//! default_title = "pi"
//!
//! [completion]
//! enabled = true
//! summary = "pi Ready"
//! expire_ms = 5000
//! sound = "/usr/share/sounds/freedesktop/stereo/complete.oga"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[fortune]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneToml {
    /// Program that prints a fortune
    pub command: Option<String>,

    /// Arguments passed to the program
    pub args: Option<Vec<String>>,

    /// Give up after this many milliseconds
    pub timeout_ms: Option<u64>,
}

/// `[title]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleToml {
    /// Title restored by `title-reset`
    pub default_title: Option<String>,
}

/// `[completion]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionToml {
    /// Whether to notify when the agent finishes
    pub enabled: Option<bool>,

    /// Notification summary line
    pub summary: Option<String>,

    /// Notification expiry in milliseconds
    pub expire_ms: Option<u64>,

    /// Sound file played on completion
    pub sound: Option<String>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PisayToml {
    /// Fortune configuration section
    pub fortune: FortuneToml,

    /// Title configuration section
    pub title: TitleToml,

    /// Completion notifier section
    pub completion: CompletionToml,
}

// =============================================================================
// Main Configuration Structs
// =============================================================================

/// Where the echo path gets a message when none was typed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FortuneConfig {
    /// Program to run
    pub command: String,
    /// Arguments
    pub args: Vec<String>,
    /// Kill the program after this long
    pub timeout: Duration,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            command: "fortune".to_string(),
            args: vec!["-s".to_string()],
            timeout: Duration::from_millis(2000),
        }
    }
}

/// Desktop notification sent when the agent finishes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Master switch
    pub enabled: bool,
    /// Notification summary line
    pub summary: String,
    /// How long the notification stays up
    pub expire: Duration,
    /// Sound file for `paplay`
    pub sound: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            summary: "pi Ready".to_string(),
            expire: Duration::from_millis(5000),
            sound: "/usr/share/sounds/freedesktop/stereo/complete.oga".to_string(),
        }
    }
}

/// Centralized configuration for pisay
///
/// Use [`load_config`] to load configuration with proper priority handling.
#[derive(Clone, Debug)]
pub struct PisayConfig {
    /// Fortune source for the echo path
    pub fortune: FortuneConfig,

    /// Title restored by `title-reset`
    pub default_title: String,

    /// Completion notifier settings
    pub completion: CompletionConfig,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for PisayConfig {
    fn default() -> Self {
        Self {
            fortune: FortuneConfig::default(),
            default_title: "pi".to_string(),
            completion: CompletionConfig::default(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl PisayConfig {
    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Reject values that would make commands misbehave
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an empty fortune command
    /// or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fortune.command.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "fortune.command must not be empty".to_string(),
            ));
        }
        if self.fortune.timeout.is_zero() {
            return Err(ConfigError::ValidationError(
                "fortune.timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/pisay/pisay.toml` or
/// `~/.config/pisay/pisay.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pisay").join("pisay.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the merged values fail validation. A missing config file is not an error.
pub fn load_config() -> Result<PisayConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<PisayConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration, reading environment variables through `env`
///
/// # Errors
///
/// Same as [`load_config_from_path`].
pub fn load_config_with_env(
    path: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PisayConfig, ConfigError> {
    let mut config = PisayConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: PisayToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut PisayConfig, toml: &PisayToml) {
    if let Some(ref command) = toml.fortune.command {
        config.fortune.command.clone_from(command);
    }
    if let Some(ref args) = toml.fortune.args {
        config.fortune.args.clone_from(args);
    }
    if let Some(ms) = toml.fortune.timeout_ms {
        config.fortune.timeout = Duration::from_millis(ms);
    }

    if let Some(ref title) = toml.title.default_title {
        config.default_title.clone_from(title);
    }

    if let Some(enabled) = toml.completion.enabled {
        config.completion.enabled = enabled;
    }
    if let Some(ref summary) = toml.completion.summary {
        config.completion.summary.clone_from(summary);
    }
    if let Some(ms) = toml.completion.expire_ms {
        config.completion.expire = Duration::from_millis(ms);
    }
    if let Some(ref sound) = toml.completion.sound {
        config.completion.sound.clone_from(sound);
    }
}

/// Apply environment variable overrides to the config
fn apply_env_config(config: &mut PisayConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(command) = env("PISAY_FORTUNE_CMD") {
        config.fortune.command = command;
        config.source = ConfigSource::Env;
    }
    if let Some(timeout) = env("PISAY_FORTUNE_TIMEOUT_MS") {
        if let Ok(ms) = timeout.parse::<u64>() {
            config.fortune.timeout = Duration::from_millis(ms);
            config.source = ConfigSource::Env;
        } else {
            tracing::warn!(value = %timeout, "Ignoring unparsable PISAY_FORTUNE_TIMEOUT_MS");
        }
    }
    if let Some(title) = env("PISAY_DEFAULT_TITLE") {
        config.default_title = title;
        config.source = ConfigSource::Env;
    }
    if let Some(enabled) = env("PISAY_COMPLETION") {
        config.completion.enabled = enabled != "0" && enabled.to_lowercase() != "false";
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Fortune command override
    pub fortune_command: Option<String>,

    /// Fortune timeout override (milliseconds)
    pub fortune_timeout_ms: Option<u64>,

    /// Default title override
    pub default_title: Option<String>,

    /// Completion notifier switch override
    pub completion_enabled: Option<bool>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fortune command override
    #[must_use]
    pub fn with_fortune_command(mut self, command: String) -> Self {
        self.fortune_command = Some(command);
        self
    }

    /// Set fortune timeout override
    #[must_use]
    pub fn with_fortune_timeout_ms(mut self, ms: u64) -> Self {
        self.fortune_timeout_ms = Some(ms);
        self
    }

    /// Set default title override
    #[must_use]
    pub fn with_default_title(mut self, title: String) -> Self {
        self.default_title = Some(title);
        self
    }

    /// Set completion notifier override
    #[must_use]
    pub fn with_completion_enabled(mut self, enabled: bool) -> Self {
        self.completion_enabled = Some(enabled);
        self
    }

    /// Apply overrides to a configuration
    pub fn apply(&self, config: &mut PisayConfig) {
        if self.fortune_command.is_some()
            || self.fortune_timeout_ms.is_some()
            || self.default_title.is_some()
            || self.completion_enabled.is_some()
        {
            config.source = ConfigSource::Cli;
        }

        if let Some(ref command) = self.fortune_command {
            config.fortune.command.clone_from(command);
        }
        if let Some(ms) = self.fortune_timeout_ms {
            config.fortune.timeout = Duration::from_millis(ms);
        }
        if let Some(ref title) = self.default_title {
            config.default_title.clone_from(title);
        }
        if let Some(enabled) = self.completion_enabled {
            config.completion.enabled = enabled;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
