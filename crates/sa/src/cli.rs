//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the sa CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sa - analyze, store and filter strings
#[derive(Parser, Debug)]
#[command(name = "sa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog file to use (default: from config, then the XDG data dir)
    #[arg(long, global = true, env = "SA_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze and store a string
    #[command(alias = "a")]
    Add {
        /// The string to analyze
        value: String,
    },

    /// Show a stored string with all its properties
    #[command(alias = "s")]
    Show {
        /// The stored string
        value: String,
    },

    /// List stored strings, optionally filtered by property
    #[command(alias = "l")]
    List {
        /// Only palindromes (true) or non-palindromes (false)
        #[arg(long, value_name = "BOOL")]
        palindrome: Option<bool>,

        /// Minimum length in characters (inclusive)
        #[arg(long, value_name = "N")]
        min_length: Option<u32>,

        /// Maximum length in characters (inclusive)
        #[arg(long, value_name = "N")]
        max_length: Option<u32>,

        /// Exact number of words
        #[arg(long, value_name = "N")]
        word_count: Option<u32>,

        /// Character that must occur in the string
        #[arg(short, long, value_name = "CHAR")]
        contains: Option<String>,
    },

    /// Filter stored strings with a natural-language query
    #[command(alias = "q")]
    Query {
        /// Query text, e.g. "single word palindromic strings"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print each recognized phrase before the results
        #[arg(long)]
        explain: bool,
    },

    /// Delete stored strings
    #[command(alias = "rm")]
    Delete {
        /// Strings to delete
        #[arg(required = true, num_args = 1..)]
        values: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Run the HTTP service
    Serve {
        /// Listen host (default: from config, then 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: from config, then 8000)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. server.port)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
