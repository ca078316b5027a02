//! SVGBounds Settings Crate
//!
//! Handles configuration loading, validation and persistence.

pub mod config;
pub mod error;

pub use config::{
    Config, LoggingSettings, OutputFormat, OutputSettings, ParserSettings, CONFIG_FILE_NAME,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
