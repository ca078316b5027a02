//! Command-line front end: argument parsing, input collection and output rendering.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use svgbounds_core::{Bounds, BoundsRecord, NumberGrammar, PathError, PathParser};
use svgbounds_settings::{Config, OutputFormat, SettingsError};

/// Errors surfaced by the command-line tool.
#[derive(Error, Debug)]
pub enum CliError {
    /// Bad arguments; carries the message to print with the usage text
    #[error("{0}")]
    Usage(String),

    /// A path string was rejected
    #[error("input {index} rejected")]
    Path {
        /// 1-based position of the input.
        index: usize,
        #[source]
        source: PathError,
    },

    /// No path data was supplied
    #[error("no path data given")]
    NoInput,

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to format output: {0}")]
    Format(String),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Parsed command-line arguments. Options left unset defer to the config file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub grammar: Option<NumberGrammar>,
    pub format: Option<OutputFormat>,
    pub pretty: bool,
    pub union: bool,
    pub help: bool,
    pub version: bool,
    /// Path data strings; empty or `-` means read stdin
    pub inputs: Vec<String>,
}

pub fn usage() -> String {
    "\
USAGE:
  svgbounds [--config <file>] [--legacy-numbers] [--format json|toml|text] [--pretty] [--union] [<path-data>...|-]

NOTES:
  - Each <path-data> argument is measured separately; quote it, e.g. 'M 0 0 L 10 10'.
  - With no path data (or '-'), one path is read from each non-empty stdin line.
  - --union prints a single record enclosing every input.
  - Only M/L/H/V/Z commands (and their relative forms) are supported.
"
    .to_string()
}

fn value_for<'a>(
    flag: &str,
    it: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a String, CliError> {
    it.next()
        .ok_or_else(|| CliError::Usage(format!("{} requires a value", flag)))
}

/// Parses `argv` (including the program name).
pub fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();
    let mut it = argv.iter().skip(1);
    let mut only_inputs = false;

    while let Some(a) = it.next() {
        if only_inputs {
            args.inputs.push(a.clone());
            continue;
        }
        match a.as_str() {
            "--help" | "-h" => args.help = true,
            "--version" | "-V" => args.version = true,
            "--pretty" => args.pretty = true,
            "--union" => args.union = true,
            "--legacy-numbers" => args.grammar = Some(NumberGrammar::Legacy),
            "--config" => args.config = Some(PathBuf::from(value_for(a, &mut it)?)),
            "--format" => {
                let value = value_for(a, &mut it)?;
                let format = value
                    .parse::<OutputFormat>()
                    .map_err(|e| CliError::Usage(e.to_string()))?;
                args.format = Some(format);
            }
            "--" => only_inputs = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown option {}", flag)));
            }
            _ => args.inputs.push(a.clone()),
        }
    }

    Ok(args)
}

/// Loads the config named by `--config`, or the platform default if present.
pub fn load_config(args: &Args) -> Result<Config, CliError> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => match Config::default_config_path() {
            Ok(path) => Config::load_or_default(&path)?,
            Err(_) => Config::default(),
        },
    };
    apply_args(&mut config, args);
    Ok(config)
}

/// Command-line flags override config file values.
pub fn apply_args(config: &mut Config, args: &Args) {
    if let Some(grammar) = args.grammar {
        config.parser.grammar = grammar;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if args.pretty {
        config.output.pretty = true;
    }
    if args.union {
        config.output.union = true;
    }
}

/// Collects path strings from the arguments, or from `stdin` when none are given.
pub fn collect_inputs(args: &Args, stdin: impl BufRead) -> Result<Vec<String>, CliError> {
    let from_stdin = args.inputs.is_empty() || args.inputs.iter().all(|i| i == "-");
    if !from_stdin {
        return Ok(args.inputs.clone());
    }

    let mut inputs = Vec::new();
    for line in stdin.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    if inputs.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(inputs)
}

/// Measures every input, stopping at the first rejected path.
pub fn measure(parser: &PathParser, inputs: &[String], union: bool) -> Result<Vec<Bounds>, CliError> {
    let mut measured = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.iter().enumerate() {
        let bounds = parser.bounds(input).map_err(|source| {
            tracing::debug!("rejected input {}: {}", i + 1, source);
            CliError::Path {
                index: i + 1,
                source,
            }
        })?;
        measured.push(bounds);
    }

    if union {
        let mut total = Bounds::new();
        for bounds in &measured {
            total.union(bounds);
        }
        tracing::info!("union of {} paths: {}", measured.len(), total);
        return Ok(vec![total]);
    }
    Ok(measured)
}

#[derive(Serialize)]
struct TomlDocument<'a> {
    bounds: &'a [BoundsRecord],
}

/// Renders measured bounds in the configured output format.
pub fn render(measured: &[Bounds], config: &Config) -> Result<String, CliError> {
    let records: Vec<BoundsRecord> = measured.iter().filter_map(Bounds::to_record).collect();

    let mut out = String::new();
    match config.output.format {
        OutputFormat::Json => {
            for record in &records {
                let line = if config.output.pretty {
                    serde_json::to_string_pretty(record)
                } else {
                    serde_json::to_string(record)
                }
                .map_err(|e| CliError::Format(e.to_string()))?;
                out.push_str(&line);
                out.push('\n');
            }
        }
        OutputFormat::Toml => {
            let doc = TomlDocument { bounds: &records };
            out = toml::to_string_pretty(&doc).map_err(|e| CliError::Format(e.to_string()))?;
        }
        OutputFormat::Text => {
            for bounds in measured {
                out.push_str(&bounds.to_string());
                out.push('\n');
            }
        }
    }
    Ok(out)
}

/// Runs the tool against already-parsed arguments and a loaded config.
pub fn run(
    args: &Args,
    config: &Config,
    stdin: impl BufRead,
    stdout: &mut impl Write,
) -> Result<(), CliError> {
    if args.help {
        write!(stdout, "{}", usage())?;
        return Ok(());
    }
    if args.version {
        writeln!(stdout, "svgbounds {} ({})", crate::VERSION, crate::BUILD_DATE)?;
        return Ok(());
    }

    let inputs = collect_inputs(args, stdin)?;
    tracing::debug!("measuring {} path(s)", inputs.len());

    let parser = config.parser();
    let measured = measure(&parser, &inputs, config.output.union)?;
    stdout.write_all(render(&measured, config)?.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
