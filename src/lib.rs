//! # SVGBounds
//!
//! Bounding rectangles of SVG path data made of straight lines, as a library
//! and a command-line tool.
//!
//! ## Architecture
//!
//! SVGBounds is organized as a workspace with multiple crates:
//!
//! 1. **svgbounds-core** - Path tokenizer, cursor stepper, bounds accumulator
//! 2. **svgbounds-settings** - Configuration model and persistence
//! 3. **svgbounds** - CLI binary and logging setup that integrate both crates
//!
//! ```
//! use svgbounds::Bounds;
//!
//! let mut bounds = Bounds::from_path("M 100 100L300 100 200 300z").unwrap();
//! assert_eq!(bounds.width(), Some(200.0));
//! bounds.extend(350.0, 100.0);
//! assert_eq!(bounds.width(), Some(250.0));
//! ```

pub mod cli;

pub use svgbounds_core::{
    bounds_from_path, tokenize, Bounds, BoundsRecord, Command, CommandGroup, CommandKind,
    MalformedPathError, Mode, NumberGrammar, PathError, PathParser, Point, Rect,
};

pub use svgbounds_settings::{
    Config, ConfigError, LoggingSettings, OutputFormat, OutputSettings, ParserSettings,
    SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("SVGBOUNDS_BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout only carries measured records
/// - RUST_LOG environment variable support, falling back to `default_level`
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", default_level, e))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
