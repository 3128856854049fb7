//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/sa/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default listen host for `sa serve`.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port for `sa serve`.
pub const DEFAULT_PORT: u16 = 8000;

/// Keys accepted by `sa config set`.
const SETTABLE_KEYS: &[&str] = &["store.path", "server.host", "server.port", "output.color"];

/// Configuration file structure.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Catalog storage settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// HTTP service settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            store: StoreConfig::default(),
            server: ServerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Catalog storage configuration.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Catalog file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// HTTP service configuration.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// Output configuration.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/sa/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("sa"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("sa"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path. `SA_CONFIG` overrides the default location.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("SA_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk, or the defaults if no file exists.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }
    // Version 1 is the initial schema; later migrations go here in order.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        println!("[store]");
        match config.store.path {
            Some(ref p) => println!("  path: {}", p.display()),
            None => println!("  path: (default)"),
        }

        println!("\n[server]");
        println!(
            "  host: {}",
            config.server.host.as_deref().unwrap_or(DEFAULT_HOST)
        );
        println!("  port: {}", config.server.port.unwrap_or(DEFAULT_PORT));

        println!("\n[output]");
        if let Some(color) = config.output.color {
            println!("  color: {}", color);
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `section.field = value` assignment to `config`.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "store.path" => config.store.path = Some(PathBuf::from(value)),
        "server.host" => config.server.host = Some(value.to_string()),
        "server.port" => {
            let port = value.parse::<u16>().map_err(|_| {
                CommandError::Config(format!("Invalid port '{}'. Use 0-65535", value))
            })?;
            config.server.port = Some(port);
        }
        "output.color" => config.output.color = Some(parse_bool(value)?),
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                SETTABLE_KEYS.join(", ")
            )));
        }
    }
    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
pub(crate) fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}
