//! Configuration for SVGBounds
//!
//! Supports JSON and TOML files, chosen by file extension. Every section has
//! defaults, so a partial file (or no file at all) is valid.
//!
//! Sections:
//! - Parser settings (numeric literal grammar)
//! - Output settings (record format, pretty printing, union mode)
//! - Logging settings (default level when `RUST_LOG` is unset)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use svgbounds_core::{NumberGrammar, PathParser};

use crate::error::{ConfigError, SettingsResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// How measured bounds are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One JSON object per record
    #[default]
    Json,
    /// TOML table per record
    Toml,
    /// Human-readable `x1=.. y1=..` lines
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "text" => Ok(Self::Text),
            other => Err(ConfigError::InvalidSetting {
                key: "output.format".to_string(),
                reason: format!("unknown format '{}'", other),
            }),
        }
    }
}

/// Path parser settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Numeric literal grammar; `legacy` is a degraded mode without exponents
    pub grammar: NumberGrammar,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Report the union of all inputs instead of one record per input
    pub union: bool,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> Result<FileFormat, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("toml") => Ok(FileFormat::Toml),
        _ => Err(ConfigError::UnsupportedFormat(format!(
            "{} (config file must be .json or .toml)",
            path.display()
        ))),
    }
}

impl Config {
    /// Platform config file location, e.g. `~/.config/svgbounds/config.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform("no configuration directory available".to_string())
        })?;
        Ok(dir.join("svgbounds").join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidSetting {
                key: "logging.level".to_string(),
                reason: format!(
                    "'{}' is not one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// Path parser configured with the selected number grammar
    pub fn parser(&self) -> PathParser {
        PathParser::with_grammar(self.parser.grammar)
    }
}
