use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::{Cli, Commands};
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use dispatch::{CatalogCommand, CatalogDispatch, LocalCommand, LocalDispatch};
use string_store_rs::ManagerError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(s) => eprintln!("{s}"),
                    Err(_) => eprintln!("{error_json}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, `--verbose`
/// raises that to debug, and `serve` logs at info so requests are visible.
fn setup_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let default_level = if cli.verbose {
        "debug"
    } else if matches!(cli.command, Some(Commands::Serve { .. })) {
        "info"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config();

    // Local commands must keep working with a broken config file so it can
    // be inspected and repaired.
    if let Some(dispatch) = LocalDispatch::try_from_cli(cli) {
        let fallback = Config::default();
        let config_ref = match &config {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("ignoring config error for local command: {}", e);
                &fallback
            }
        };
        let ctx = CommandContext::from_cli(cli, config_ref);
        return dispatch.execute(&ctx);
    }

    let config = config?;
    let ctx = CommandContext::from_cli(cli, &config);

    match CatalogDispatch::from_cli(cli) {
        Some(dispatch) => dispatch.execute(&ctx, &config, cli.store.as_deref()).await,
        None => Err(CommandError::Usage(format!(
            "unhandled command: {:?}",
            cli.command
        ))),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Manager(ManagerError::NotFound { .. }) => "NOT_FOUND",
        CommandError::Manager(ManagerError::AlreadyExists { .. }) => "ALREADY_EXISTS",
        CommandError::Manager(ManagerError::InvalidValue { .. }) => "INVALID_VALUE",
        CommandError::Manager(ManagerError::Filter(f)) => f.code(),
        CommandError::Filter(f) => f.code(),
        CommandError::Manager(ManagerError::Store(_)) | CommandError::Store(_) => "STORE_ERROR",
        CommandError::Server(_) => "SERVER_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Usage(_) => "USAGE_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Manager(ManagerError::NotFound { .. })
        | CommandError::Manager(ManagerError::AlreadyExists { .. }) => ExitCode::from(4),
        CommandError::Manager(ManagerError::InvalidValue { .. })
        | CommandError::Manager(ManagerError::Filter(_))
        | CommandError::Filter(_)
        | CommandError::Usage(_)
        | CommandError::Json(_) => ExitCode::from(1),
        CommandError::Manager(ManagerError::Store(_))
        | CommandError::Store(_)
        | CommandError::Config(_) => ExitCode::from(5),
        CommandError::Server(_) | CommandError::Io(_) => ExitCode::from(3),
    }
}
