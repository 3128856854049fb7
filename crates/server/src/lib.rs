//! HTTP service for the string analyzer.
//!
//! Exposes the catalog over a small JSON REST API (see [`api::create_router`]).
//! Storage and filter interpretation live in `string-store-rs`.

/// REST API layer: Axum router, handlers, models and error mapping.
pub mod api;

use std::future::Future;
use std::net::SocketAddr;

use string_store_rs::{CatalogStore, ManagerError, StringManager};
use thiserror::Error;
use tokio::net::TcpListener;

use api::handlers::AppState;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The catalog could not be loaded.
    #[error(transparent)]
    Manager(#[from] ManagerError),

    /// The server loop failed.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads the catalog from `store` and serves the API on `addr` until Ctrl+C
/// or SIGTERM.
pub async fn serve(addr: SocketAddr, store: CatalogStore) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve_with_shutdown(listener, store, wait_for_signal()).await
}

/// Serves the API on an already-bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown(
    listener: TcpListener,
    store: CatalogStore,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let path = store.path().display().to_string();
    let manager = StringManager::new_async(store).await?;
    tracing::info!(
        store = %path,
        records = manager.catalog().len(),
        "catalog loaded"
    );

    let app = api::create_router(AppState::new(manager));
    let local = listener.local_addr()?;
    tracing::info!("listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully");
}
