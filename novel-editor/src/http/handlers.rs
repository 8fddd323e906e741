//! HTTP API Request Handlers
//!
//! Thin wrappers mapping requests onto the text library, the segmenter and
//! the chapter editor.

use axum::{
    Json,
    body::Body,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chapter_split::{ChapterDocument, SplitError, TxtLibrary, split_content};
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Instant;

use super::types::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<TxtLibrary>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(library: TxtLibrary) -> Self {
        Self {
            library: Arc::new(library),
            started_at: Utc::now(),
        }
    }
}

/// Failure of a handler, rendered as an [`ErrorResponse`]
#[derive(Debug)]
pub enum ApiError {
    Split(SplitError),
    Rejected(JsonRejection),
    Internal(String),
}

impl From<SplitError> for ApiError {
    fn from(err: SplitError) -> Self {
        ApiError::Split(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Split(err) if err.is_client_error() => {
                debug!("Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, ErrorResponse::from(&err))
            }
            ApiError::Split(err) => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::from(&err))
            }
            ApiError::Rejected(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                (
                    rejection.status(),
                    ErrorResponse::new("Invalid request body").with_detail(rejection.body_text()),
                )
            }
            ApiError::Internal(message) => {
                error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal error").with_detail(message),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Run blocking library I/O off the async workers.
async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> chapter_split::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ApiError::Internal(format!("Blocking task failed: {}", e)))?
        .map_err(ApiError::from)
}

/// Log method, path, status and latency of every request
pub async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
    })
}

/// List the `.txt` files in the library
pub async fn list_files(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let library = state.library.clone();
    let names = run_blocking(move || library.list()).await?;
    Ok(Json(names))
}

/// Read a file named in the path
pub async fn read_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<FileContentResponse>, ApiError> {
    load_file(&state, filename).await
}

/// Read a file named by the `name` query parameter
pub async fn read_file_by_query(
    State(state): State<AppState>,
    Query(query): Query<FileQuery>,
) -> Result<Json<FileContentResponse>, ApiError> {
    load_file(&state, query.name.unwrap_or_default()).await
}

async fn load_file(state: &AppState, name: String) -> Result<Json<FileContentResponse>, ApiError> {
    let library = state.library.clone();
    let content = run_blocking(move || library.read(&name)).await?;
    Ok(Json(FileContentResponse { content }))
}

/// Segment raw text into chapters
pub async fn auto_split(
    payload: Result<Json<SplitRequest>, JsonRejection>,
) -> Result<Json<SplitResponse>, ApiError> {
    let Json(request) = payload?;
    let chapters = split_content(request.content.as_deref())?;
    debug!("Auto-split produced {} chapters", chapters.len());
    Ok(Json(SplitResponse { chapters }))
}

/// Split the open chapter at its split markers
pub async fn split_chapter(
    payload: Result<Json<SplitChapterRequest>, JsonRejection>,
) -> Result<Json<EditResponse>, ApiError> {
    let Json(request) = payload?;
    let mut document = ChapterDocument::new(request.chapters, request.current)?;
    if let Some(content) = request.content {
        document = document.edit_current(content);
    }
    Ok(Json(document.split_current().into()))
}

/// Merge a chapter with the one after it
pub async fn merge_chapter(
    payload: Result<Json<MergeChapterRequest>, JsonRejection>,
) -> Result<Json<EditResponse>, ApiError> {
    let Json(request) = payload?;
    let document = ChapterDocument::new(request.chapters, request.current)?;
    Ok(Json(document.merge_with_next(request.index)?.into()))
}
