//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split into two groups: local ones that never touch the catalog
//! (config, completions, bare `sa`), and catalog commands that need a store
//! resolved from the flags and config first.

use std::path::Path;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::config::Config;
use crate::commands::{self, open_manager, resolve_store, CommandContext, CommandError, Result};

/// Trait for commands that run without a catalog.
pub trait LocalCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that operate on the catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogCommand {
    /// Execute the command against the catalog at `store` (or the configured
    /// default).
    async fn execute(&self, ctx: &CommandContext, config: &Config, store: Option<&Path>)
        -> Result<()>;
}

/// Commands that don't need the catalog.
pub enum LocalDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a crate::cli::Shell),
    Help,
}

impl<'a> LocalDispatch<'a> {
    /// Try to create a local dispatch from the CLI command.
    /// Returns None if the command needs the catalog.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl LocalCommand for LocalDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("sa - analyze, store and filter strings");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that operate on the catalog.
pub enum CatalogDispatch<'a> {
    Add {
        value: &'a str,
    },
    Show {
        value: &'a str,
    },
    List {
        palindrome: Option<bool>,
        min_length: Option<u32>,
        max_length: Option<u32>,
        word_count: Option<u32>,
        contains: &'a Option<String>,
    },
    Query {
        text: &'a [String],
        explain: bool,
    },
    Delete {
        values: &'a [String],
        force: bool,
    },
    Serve {
        host: &'a Option<String>,
        port: Option<u16>,
    },
}

impl<'a> CatalogDispatch<'a> {
    /// Create a catalog dispatch from the CLI command.
    /// Returns None for local commands (use LocalDispatch first).
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Add { value }) => Some(Self::Add { value }),
            Some(Commands::Show { value }) => Some(Self::Show { value }),
            Some(Commands::List {
                palindrome,
                min_length,
                max_length,
                word_count,
                contains,
            }) => Some(Self::List {
                palindrome: *palindrome,
                min_length: *min_length,
                max_length: *max_length,
                word_count: *word_count,
                contains,
            }),
            Some(Commands::Query { text, explain }) => Some(Self::Query {
                text,
                explain: *explain,
            }),
            Some(Commands::Delete { values, force }) => Some(Self::Delete {
                values,
                force: *force,
            }),
            Some(Commands::Serve { host, port }) => Some(Self::Serve { host, port: *port }),
            Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) | None => None,
        }
    }
}

impl CatalogCommand for CatalogDispatch<'_> {
    async fn execute(
        &self,
        ctx: &CommandContext,
        config: &Config,
        store: Option<&Path>,
    ) -> Result<()> {
        match self {
            Self::Add { value } => {
                let opts = commands::add::AddOptions {
                    value: value.to_string(),
                };
                let mut manager = open_manager(store, config)?;
                commands::add::execute(ctx, &opts, &mut manager).await
            }
            Self::Show { value } => {
                let opts = commands::show::ShowOptions {
                    value: value.to_string(),
                };
                let manager = open_manager(store, config)?;
                commands::show::execute(ctx, &opts, &manager)
            }
            Self::List {
                palindrome,
                min_length,
                max_length,
                word_count,
                contains,
            } => {
                let opts = commands::list::ListOptions {
                    palindrome: *palindrome,
                    min_length: *min_length,
                    max_length: *max_length,
                    word_count: *word_count,
                    contains: (*contains).clone(),
                };
                let manager = open_manager(store, config)?;
                commands::list::execute(ctx, &opts, &manager)
            }
            Self::Query { text, explain } => {
                let opts = commands::query::QueryOptions {
                    text: text.join(" "),
                    explain: *explain,
                };
                let manager = open_manager(store, config)?;
                commands::query::execute(ctx, &opts, &manager)
            }
            Self::Delete { values, force } => {
                let opts = commands::delete::DeleteOptions {
                    values: values.to_vec(),
                    force: *force,
                };
                let mut manager = open_manager(store, config)?;
                commands::delete::execute(ctx, &opts, &mut manager).await
            }
            Self::Serve { host, port } => {
                let opts = commands::serve::ServeOptions {
                    host: (*host).clone(),
                    port: *port,
                };
                let store = resolve_store(store, config)?;
                commands::serve::execute(ctx, &opts, config, store).await
            }
        }
    }
}
