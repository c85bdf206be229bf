//! Main entry point for the ziptrim CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use ziptrim::{Action, Cli, actions};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Dispatch the selected action.
fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();

    match cli.action()? {
        Action::Report { file } => {
            let mut stdout = std::io::stdout().lock();
            actions::report(&file, &config, &mut stdout)
                .with_context(|| file.display().to_string())?;
        }
        Action::Copy { src, dst } => {
            actions::copy(&src, &dst, &config).with_context(|| src.display().to_string())?;
        }
        Action::Truncate { file } => {
            actions::truncate(&file, &config).with_context(|| file.display().to_string())?;
        }
    }

    Ok(())
}
