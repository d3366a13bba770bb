//! # Diner Configuration
//!
//! Presentation settings for the terminal app.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DINER_RECEIPT_FORMAT=json                                          │
//! │     DINER_LOG=debug                                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, or                                                │
//! │     ~/.config/diner/config.toml (Linux)                                │
//! │     ~/Library/Application Support/com.shell.diner/config.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The menu itself is compiled in and is not configurable.
//!
//! ## Configuration File Format
//! ```toml
//! [prompt]
//! pointer = "=>"
//! announce_additions = true
//!
//! [receipt]
//! format = "text"  # text | json
//!
//! [logging]
//! filter = "warn"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{CliError, CliResult};

// =============================================================================
// Receipt Format
// =============================================================================

/// How the final bill is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptFormat {
    /// Numbered item list followed by the three amount lines.
    #[default]
    Text,

    /// A single JSON document on stdout.
    Json,
}

impl std::fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceiptFormat::Text => write!(f, "text"),
            ReceiptFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ReceiptFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown receipt format: '{}'. Valid options: text, json",
                other
            ))),
        }
    }
}

// =============================================================================
// Settings Sections
// =============================================================================

/// Selection prompt settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSettings {
    /// Marker drawn next to the highlighted choice.
    #[serde(default = "default_pointer")]
    pub pointer: String,

    /// Print "<item> is added to your order" after each pick.
    #[serde(default = "default_true")]
    pub announce_additions: bool,
}

fn default_pointer() -> String {
    "=>".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PromptSettings {
    fn default() -> Self {
        PromptSettings {
            pointer: default_pointer(),
            announce_additions: true,
        }
    }
}

/// Bill output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptSettings {
    #[serde(default)]
    pub format: ReceiptFormat,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber` filter directive, e.g. `warn` or `diner_cli=debug`.
    /// `--log-level` and `RUST_LOG` take precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete app configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinerConfig {
    #[serde(default)]
    pub prompt: PromptSettings,

    #[serde(default)]
    pub receipt: ReceiptSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl DinerConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// A missing file at the default location is fine; a missing file that
    /// was named explicitly is an error. So is an override value that does
    /// not parse.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                config = Self::from_file(&path)?;
            } else if explicit {
                return Err(CliError::ConfigLoadFailed(format!(
                    "{} does not exist",
                    path.display()
                )));
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    /// Parses config text.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.prompt.pointer.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "prompt.pointer must not be empty".into(),
            ));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) -> CliResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup.
    ///
    /// Runs before tracing is initialized, so a bad value is returned as an
    /// error rather than logged.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> CliResult<()> {
        if let Some(pointer) = lookup("DINER_POINTER") {
            self.prompt.pointer = pointer;
        }

        if let Some(announce) = lookup("DINER_ANNOUNCE_ADDITIONS") {
            self.prompt.announce_additions = match announce.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(CliError::InvalidConfig(format!(
                        "DINER_ANNOUNCE_ADDITIONS: expected true or false, got '{}'",
                        announce
                    )))
                }
            };
        }

        if let Some(format) = lookup("DINER_RECEIPT_FORMAT") {
            self.receipt.format = format.parse().map_err(|e| match e {
                CliError::InvalidConfig(msg) => {
                    CliError::InvalidConfig(format!("DINER_RECEIPT_FORMAT: {}", msg))
                }
                other => other,
            })?;
        }

        if let Some(filter) = lookup("DINER_LOG") {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shell", "diner")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
