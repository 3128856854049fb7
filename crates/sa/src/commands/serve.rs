//! Serve command implementation.
//!
//! Runs the HTTP service over the resolved catalog until interrupted.

use std::net::{SocketAddr, ToSocketAddrs};

use string_store_rs::CatalogStore;

use super::config::{Config, DEFAULT_HOST, DEFAULT_PORT};
use super::{CommandContext, CommandError, Result};

/// Options for the serve command.
#[derive(Debug, Default)]
pub struct ServeOptions {
    /// Listen host from the command line.
    pub host: Option<String>,
    /// Listen port from the command line or `PORT`.
    pub port: Option<u16>,
}

/// Resolves the listen address: flags first, then config, then defaults.
///
/// # Errors
///
/// Returns `CommandError::Usage` if the host does not resolve.
pub fn resolve_addr(opts: &ServeOptions, config: &Config) -> Result<SocketAddr> {
    let host = opts
        .host
        .as_deref()
        .or(config.server.host.as_deref())
        .unwrap_or(DEFAULT_HOST);
    let port = opts.port.or(config.server.port).unwrap_or(DEFAULT_PORT);

    (host, port)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| CommandError::Usage(format!("invalid listen address '{}:{}'", host, port)))
}

/// Executes the serve command.
///
/// # Errors
///
/// Returns an error if the address is invalid, cannot be bound, or the
/// catalog fails to load.
pub async fn execute(
    ctx: &CommandContext,
    opts: &ServeOptions,
    config: &Config,
    store: CatalogStore,
) -> Result<()> {
    let addr = resolve_addr(opts, config)?;
    if !ctx.quiet && !ctx.json_output {
        eprintln!("Serving {} on http://{}", store.path().display(), addr);
    }
    string_server_rs::serve(addr, store).await?;
    Ok(())
}
