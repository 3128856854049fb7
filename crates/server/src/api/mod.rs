//! REST API layer: Axum router, handlers, models and error mapping.

pub mod errors;
pub mod handlers;
pub mod models;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use handlers::AppState;

/// Builds the application router with permissive CORS.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/strings",
            get(handlers::list_strings).post(handlers::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handlers::filter_by_natural_language),
        )
        .route(
            "/strings/:value",
            get(handlers::get_string).delete(handlers::delete_string),
        )
        .with_state(state)
        .layer(cors)
}
