//! ecrypt command-line front-end
//!
//! Generates key pairs as PEM files and encrypts or decrypts payloads into
//! Base64 ECIES envelopes.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ecrypt::api::{Error as EciesError, ErrorClass};
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::Command;

/// ECIES over NIST curves
#[derive(Parser, Debug)]
#[command(name = "ecrypt")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log filter (trace, debug, info, warn, error, or an EnvFilter directive)
    #[arg(long, global = true, env = "ECRYPT_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

fn setup_logging(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("invalid log filter {:?}", log_level))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    Ok(())
}

/// Bad input exits with 2, everything else with 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<EciesError>().map(EciesError::class) {
        Some(ErrorClass::Input) => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = setup_logging(&cli.log_level) {
        eprintln!("error: {:#}", err);
        return ExitCode::from(2);
    }

    match commands::run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn input_errors_exit_with_two() {
        let err = anyhow::Error::new(EciesError::InvalidMessage).context("decrypting envelope");
        assert_eq!(exit_code(&err), 2);

        let err = anyhow::Error::new(EciesError::UnsupportedParams);
        assert_eq!(exit_code(&err), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("io failure")), 1);
    }

    #[test]
    fn log_level_parses_from_args() {
        let cli = Cli::try_parse_from(["ecrypt", "--log-level", "debug", "curves"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Curves));
    }
}
