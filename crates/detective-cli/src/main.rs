//! Detective Quest CLI - explore the mansion and name the culprit.

use clap::Parser;
use detective_cli::commands;
use detective_cli::repl;
use detective_cli::{load_case, Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> detective_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => {
            let first_run = Config::path().map(|p| !p.exists()).unwrap_or(false);
            let cfg = Config::load().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default configuration");
                Config::default()
            });
            if first_run {
                cfg.save().ok();
            }
            cfg
        }
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Command-line case file wins over the configured one
    let case = load_case(cli.case.as_deref().or(config.case_file.as_deref()))?;

    match cli.command {
        None | Some(Command::Play) => repl::run_repl(&case, &config, &formatter)?,
        Some(Command::Replay(args)) => commands::execute_replay(args, &case, &formatter)?,
        Some(Command::Map) => commands::execute_map(&case, &formatter)?,
        Some(Command::Suspects) => commands::execute_suspects(&case, &formatter)?,
        Some(Command::Export(args)) => commands::execute_export(args, &case, &formatter)?,
    }

    Ok(())
}

/// Log to stderr so game output on stdout stays clean. `RUST_LOG` wins over
/// the `-v` count.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
