//! HTTP API Route Definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};

use super::handlers::{self, AppState};

/// Create the API router with all routes mounted under `/api`
pub fn create_router(app_state: AppState, max_body_bytes: usize) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        // Text library
        .route("/txt-files", get(handlers::list_files))
        .route("/txt-files/:filename", get(handlers::read_file))
        .route("/txt-file", get(handlers::read_file_by_query))
        // Segmentation and editing
        .route("/auto-split", post(handlers::auto_split))
        .route("/chapters/split", post(handlers::split_chapter))
        .route("/chapters/merge", post(handlers::merge_chapter))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(handlers::log_requests))
        .with_state(app_state);

    Router::new().nest("/api", api)
}
