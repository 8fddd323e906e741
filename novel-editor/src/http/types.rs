//! HTTP API Request/Response Types
//!
//! JSON-serializable types for the HTTP API.

use chapter_split::{Chapter, ChapterDocument, SplitError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Auto-split request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRequest {
    /// Raw novel text
    #[serde(default)]
    pub content: Option<String>,
}

/// Auto-split response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResponse {
    pub chapters: Vec<Chapter>,
}

/// Contents of a single novel file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContentResponse {
    pub content: String,
}

/// Query string for `GET /api/txt-file?name=...`
#[derive(Debug, Clone, Deserialize)]
pub struct FileQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// Split the open chapter at its split markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitChapterRequest {
    pub chapters: Vec<Chapter>,
    /// Index of the open chapter
    #[serde(default)]
    pub current: usize,
    /// Live editor contents of the open chapter, if newer than `chapters`
    #[serde(default)]
    pub content: Option<String>,
}

/// Merge chapter `index` with the following one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeChapterRequest {
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub current: usize,
    pub index: usize,
}

/// Chapter list and cursor after an edit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditResponse {
    pub chapters: Vec<Chapter>,
    pub current: usize,
}

impl From<ChapterDocument> for EditResponse {
    fn from(document: ChapterDocument) -> Self {
        let (chapters, current) = document.into_parts();
        Self { chapters, current }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub version: String,
    pub started_at: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short description of what failed
    pub error: String,
    /// Underlying cause, for server-side failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<&SplitError> for ErrorResponse {
    fn from(err: &SplitError) -> Self {
        match err {
            SplitError::InvalidFileName(_) => Self::new("Missing or invalid filename"),
            SplitError::NotFound(_) | SplitError::ReadFailure { .. } => {
                Self::new("Failed to read file").with_detail(err.to_string())
            }
            SplitError::ListFailure { .. } => {
                Self::new("Failed to list files").with_detail(err.to_string())
            }
            SplitError::InvalidInput(_)
            | SplitError::IndexOutOfRange { .. }
            | SplitError::EmptyDocument => Self::new(err.to_string()),
        }
    }
}
