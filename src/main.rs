use svgbounds::cli::{self, CliError};
use svgbounds::init_logging;

fn main() -> anyhow::Result<()> {
    let argv: Vec<String> = std::env::args().collect();

    let args = cli::parse_args(&argv).map_err(usage_exit)?;
    let config = cli::load_config(&args)?;

    init_logging(&config.logging.level)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    cli::run(&args, &config, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Usage errors print the help text and exit with their own code; every
/// other error is returned to `main` and reported by `anyhow` with exit code 1.
fn usage_exit(err: CliError) -> CliError {
    if let CliError::Usage(msg) = &err {
        eprintln!("{msg}\n\n{}", cli::usage());
        std::process::exit(err.exit_code());
    }
    err
}
