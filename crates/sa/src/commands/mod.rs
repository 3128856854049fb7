//! Command implementations for the sa CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod list;
pub mod query;
pub mod serve;
pub mod show;

use std::io::IsTerminal;
use std::path::Path;

use string_server_rs::ServerError;
use string_store_rs::filter::FilterError;
use string_store_rs::{CatalogStore, CatalogStoreError, ManagerError, StringManager};

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Catalog operation error.
    #[error("{0}")]
    Manager(#[from] ManagerError),

    /// Filter construction error.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// Catalog store error.
    #[error("store error: {0}")]
    Store(#[from] CatalogStoreError),

    /// HTTP service error.
    #[error("{0}")]
    Server(#[from] ServerError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid combination of arguments.
    #[error("{0}")]
    Usage(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a command context from CLI arguments and the loaded config.
    ///
    /// Colors are on unless `--no-color`, `NO_COLOR` or `output.color = false`
    /// says otherwise.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        let use_colors = !cli.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && config.output.color.unwrap_or(true);
        Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}

/// Resolves the catalog store: `--store`/`SA_STORE`, then `store.path` from
/// the config file, then the XDG data directory.
pub fn resolve_store(flag: Option<&Path>, config: &Config) -> Result<CatalogStore> {
    if let Some(path) = flag.or(config.store.path.as_deref()) {
        return Ok(CatalogStore::with_path(path));
    }
    Ok(CatalogStore::new()?)
}

/// Opens a manager over the resolved store.
pub fn open_manager(flag: Option<&Path>, config: &Config) -> Result<StringManager> {
    let store = resolve_store(flag, config)?;
    tracing::debug!(path = %store.path().display(), "opening catalog");
    Ok(StringManager::new(store)?)
}

/// Outcome of a confirmation prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Aborted,
}

/// Asks before acting on more than one value.
///
/// Single values and `--force` skip the prompt. Without a terminal there is
/// nobody to ask, so bulk operations then require `--force`.
pub fn confirm_bulk_operation(
    action: &str,
    values: &[String],
    force: bool,
    quiet: bool,
) -> Result<ConfirmResult> {
    if force || values.len() <= 1 {
        return Ok(ConfirmResult::Confirmed);
    }

    if !std::io::stdin().is_terminal() {
        return Err(CommandError::Usage(format!(
            "refusing to {} {} strings without --force in a non-interactive session",
            action,
            values.len()
        )));
    }

    if !quiet {
        eprintln!("About to {} {} strings:", action, values.len());
        for value in values {
            eprintln!("  {}", value);
        }
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("{} {} strings?", capitalize(action), values.len()))
        .default(false)
        .interact()
        .map_err(|e| CommandError::Io(std::io::Error::other(e)))?;

    Ok(if confirmed {
        ConfirmResult::Confirmed
    } else {
        ConfirmResult::Aborted
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_confirm_skipped_for_single_value() {
        let values = vec!["a".to_string()];
        assert_eq!(
            confirm_bulk_operation("delete", &values, false, true).unwrap(),
            ConfirmResult::Confirmed
        );
    }

    #[test]
    fn test_confirm_skipped_with_force() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            confirm_bulk_operation("delete", &values, true, true).unwrap(),
            ConfirmResult::Confirmed
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("delete"), "Delete");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_no_color_flag_disables_colors() {
        let cli = Cli::parse_from(["sa", "--no-color", "list"]);
        let ctx = CommandContext::from_cli(&cli, &Config::default());
        assert!(!ctx.use_colors);
    }

    #[test]
    fn test_config_color_preference() {
        let cli = Cli::parse_from(["sa", "list"]);
        let mut config = Config::default();
        config.output.color = Some(false);
        assert!(!CommandContext::from_cli(&cli, &config).use_colors);
    }

    #[test]
    fn test_resolve_store_precedence() {
        let mut config = Config::default();
        config.store.path = Some("/from/config.json".into());

        let store = resolve_store(Some(Path::new("/from/flag.json")), &config).unwrap();
        assert_eq!(store.path(), Path::new("/from/flag.json"));

        let store = resolve_store(None, &config).unwrap();
        assert_eq!(store.path(), Path::new("/from/config.json"));
    }
}
