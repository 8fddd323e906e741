//! Heading detection and chapter segmentation.
//!
//! A single left-to-right regex scan finds every `Chapter N` / `Appendix N`
//! heading; the text between consecutive headings becomes a chapter body.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chapter::Chapter;
use crate::error::{Result, SplitError};

/// Heading word, whitespace, label, then an optional `:`/`-` subtitle.
///
/// Labels are digits, a capitalized word, a run of Roman numeral letters, or
/// a lone capital letter (`Appendix A`). Alternatives are tried in that order.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"((?:Chapter|CHAPTER|Appendix|APPENDIX)\s+(?:[0-9]+|[A-Z][a-z]+|[IVXLCDM]+|[A-Z]\b))(?:\s*[:\-]\s*([^\n]+))?",
    )
    .expect("heading pattern should compile")
});

/// One heading match, with byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Offset of the first byte of the heading word
    pub start: usize,
    /// Offset just past the heading, including any subtitle
    pub end: usize,
    /// Heading word and label, trimmed
    pub title: String,
    /// Trimmed subtitle, empty if the heading has none
    pub subtitle: String,
}

/// Find all headings in document order.
pub fn headings(text: &str) -> Vec<Heading> {
    HEADING_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = caps.get(1)?;
            Some(Heading {
                start: whole.start(),
                end: whole.end(),
                title: trim_text(title.as_str()).to_string(),
                subtitle: caps
                    .get(2)
                    .map(|m| trim_text(m.as_str()).to_string())
                    .unwrap_or_default(),
            })
        })
        .collect()
}

/// Split text into chapters, one per heading.
///
/// Text before the first heading is dropped. With no heading at all the
/// whole input is returned verbatim as a single "Main Text" chapter, so the
/// result is never empty.
pub fn segment(text: &str) -> Vec<Chapter> {
    let found = headings(text);
    if found.is_empty() {
        return vec![Chapter::whole_text(text)];
    }

    let mut chapters = Vec::with_capacity(found.len());
    let mut iter = found.into_iter().peekable();
    while let Some(heading) = iter.next() {
        let body_end = iter.peek().map_or(text.len(), |next| next.start);
        chapters.push(Chapter {
            title: heading.title,
            subtitle: heading.subtitle,
            content: trim_text(&text[heading.end..body_end]).to_string(),
        });
    }

    log::debug!("Segmented {} bytes into {} chapters", text.len(), chapters.len());
    chapters
}

/// Segment request content, rejecting a missing or empty body.
pub fn split_content(content: Option<&str>) -> Result<Vec<Chapter>> {
    match content {
        Some(text) if !text.is_empty() => Ok(segment(text)),
        _ => Err(SplitError::InvalidInput("Missing content".to_string())),
    }
}

/// Trim whitespace and stray byte-order marks.
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
