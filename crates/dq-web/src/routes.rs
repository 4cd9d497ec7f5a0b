//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the complete router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/figma/endpoints", get(handlers::figma::list_endpoints_handler))
        .route("/figma/:endpoint", get(handlers::figma::fetch_handler))
        .route("/compare", post(handlers::compare::compare_handler));

    Router::new()
        .route("/", get(handlers::index::index_handler))
        .route("/generate", post(handlers::generate::generate_handler))
        .route(
            "/download/json/:timestamp",
            get(handlers::download::download_json_handler),
        )
        .route(
            "/download/summary/:timestamp",
            get(handlers::download::download_summary_handler),
        )
        .nest("/api", api_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
