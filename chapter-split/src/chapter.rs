//! The chapter record shared by the segmenter, the editor and the HTTP API.

use serde::{Deserialize, Serialize};

/// Title used when the text contains no recognizable heading
pub const FALLBACK_TITLE: &str = "Main Text";

/// One contiguous slice of a novel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Heading text, e.g. "Chapter 3"
    pub title: String,
    /// Text after the `:`/`-` separator on the heading line (empty if none)
    #[serde(default)]
    pub subtitle: String,
    /// Body text between this heading and the next
    pub content: String,
}

impl Chapter {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            content: content.into(),
        }
    }

    /// Whole text as a single chapter, used when no heading is found.
    pub fn whole_text(text: &str) -> Self {
        Self::new(FALLBACK_TITLE, "", text)
    }

    /// Approximate word count of the body
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
