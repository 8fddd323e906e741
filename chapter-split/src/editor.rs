//! Manual chapter editing: split markers, splitting and merging.
//!
//! A [`ChapterDocument`] is an immutable chapter list plus the index of the
//! chapter open in the editor. Every operation consumes the document and
//! returns the updated one.

use crate::chapter::Chapter;
use crate::error::{Result, SplitError};
use crate::segmenter::segment;

/// Marker the user inserts into a chapter body to request a split.
pub const SPLIT_MARKER: &str = "====SPLIT CHAPTER====";

/// Non-empty chapter list with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDocument {
    chapters: Vec<Chapter>,
    current: usize,
}

impl ChapterDocument {
    /// Build a document from existing chapters.
    pub fn new(chapters: Vec<Chapter>, current: usize) -> Result<Self> {
        if chapters.is_empty() {
            return Err(SplitError::EmptyDocument);
        }
        check_index(current, chapters.len())?;
        Ok(Self { chapters, current })
    }

    /// Segment raw text and open the first chapter.
    pub fn from_text(text: &str) -> Self {
        Self {
            chapters: segment(text),
            current: 0,
        }
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Chapter {
        &self.chapters[self.current]
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Never true for a document built through `new` or `from_text`.
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Chapter>, usize) {
        (self.chapters, self.current)
    }

    /// Open another chapter.
    pub fn select(self, index: usize) -> Result<Self> {
        check_index(index, self.chapters.len())?;
        Ok(Self {
            current: index,
            ..self
        })
    }

    /// Replace the body of the open chapter.
    pub fn edit_current(mut self, content: impl Into<String>) -> Self {
        self.chapters[self.current].content = content.into();
        self
    }

    /// Replace the selection `[start, end)` of the open chapter with the split
    /// marker.
    ///
    /// Offsets count characters and are clamped to the body length. Returns
    /// the document and the cursor offset just past the marker.
    pub fn insert_split_marker(mut self, start: usize, end: usize) -> (Self, usize) {
        let body = &self.chapters[self.current].content;
        let char_len = body.chars().count();
        let start = start.min(char_len);
        let end = end.clamp(start, char_len);

        let start_byte = byte_offset(body, start);
        let end_byte = byte_offset(body, end);
        let mut updated = String::with_capacity(body.len() + SPLIT_MARKER.len());
        updated.push_str(&body[..start_byte]);
        updated.push_str(SPLIT_MARKER);
        updated.push_str(&body[end_byte..]);

        self.chapters[self.current].content = updated;
        (self, start + SPLIT_MARKER.chars().count())
    }

    /// Split the open chapter at every marker.
    ///
    /// Each part keeps the chapter's title and subtitle and loses exactly one
    /// leading newline. The cursor stays on the first part. Without a marker
    /// the document is returned unchanged.
    pub fn split_current(mut self) -> Self {
        let current = &self.chapters[self.current];
        if !current.content.contains(SPLIT_MARKER) {
            return self;
        }

        let parts: Vec<Chapter> = current
            .content
            .split(SPLIT_MARKER)
            .map(|part| Chapter {
                title: current.title.clone(),
                subtitle: current.subtitle.clone(),
                content: part.strip_prefix('\n').unwrap_or(part).to_string(),
            })
            .collect();

        log::debug!(
            "Splitting chapter {} ({:?}) into {} parts",
            self.current,
            current.title,
            parts.len()
        );
        self.chapters.splice(self.current..=self.current, parts);
        self
    }

    /// Merge chapter `index` with the one after it.
    ///
    /// The merged chapter keeps the first chapter's title and subtitle, with
    /// the bodies joined by a newline. Merging the last chapter does nothing.
    pub fn merge_with_next(mut self, index: usize) -> Result<Self> {
        check_index(index, self.chapters.len())?;
        if index + 1 == self.chapters.len() {
            return Ok(self);
        }

        let next = self.chapters.remove(index + 1);
        let merged = &mut self.chapters[index];
        merged.content.push('\n');
        merged.content.push_str(&next.content);

        if self.current > index {
            self.current -= 1;
        }
        Ok(self)
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SplitError::IndexOutOfRange { index, len })
    }
}

/// Byte offset of the `chars`-th character, or the end of the string.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(contents: &[&str], current: usize) -> ChapterDocument {
        let chapters = contents
            .iter()
            .enumerate()
            .map(|(i, body)| Chapter::new(format!("Chapter {}", i + 1), "", *body))
            .collect();
        ChapterDocument::new(chapters, current).unwrap()
    }

    fn bodies(document: &ChapterDocument) -> Vec<&str> {
        document.chapters().iter().map(|c| c.content.as_str()).collect()
    }

    #[test]
    fn test_new_rejects_empty_and_bad_cursor() {
        assert!(matches!(
            ChapterDocument::new(Vec::new(), 0),
            Err(SplitError::EmptyDocument)
        ));
        assert!(matches!(
            ChapterDocument::new(vec![Chapter::default()], 1),
            Err(SplitError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_from_text() {
        let document = ChapterDocument::from_text("Chapter 1\nOne\nChapter 2\nTwo");
        assert_eq!(document.len(), 2);
        assert_eq!(document.current_index(), 0);
        assert_eq!(document.current().content, "One");
    }

    #[test]
    fn test_select_and_edit() {
        let document = doc(&["a", "b"], 0).select(1).unwrap().edit_current("changed");
        assert_eq!(bodies(&document), vec!["a", "changed"]);
        assert!(doc(&["a"], 0).select(5).is_err());
    }

    #[test]
    fn test_insert_split_marker() {
        let (document, cursor) = doc(&["hello world"], 0).insert_split_marker(5, 6);
        assert_eq!(document.current().content, format!("hello{SPLIT_MARKER}world"));
        assert_eq!(cursor, 5 + SPLIT_MARKER.len());
    }

    #[test]
    fn test_insert_split_marker_clamps_and_counts_chars() {
        let (document, cursor) = doc(&["日本語"], 0).insert_split_marker(1, 0);
        assert_eq!(document.current().content, format!("日{SPLIT_MARKER}本語"));
        assert_eq!(cursor, 1 + SPLIT_MARKER.len());

        let (document, _) = doc(&["ab"], 0).insert_split_marker(10, 20);
        assert_eq!(document.current().content, format!("ab{SPLIT_MARKER}"));
    }

    #[test]
    fn test_split_without_marker_is_unchanged() {
        let document = doc(&["a", "b"], 1);
        assert_eq!(document.clone().split_current(), document);
    }

    #[test]
    fn test_split_current() {
        let body = format!("first\n{SPLIT_MARKER}\n\nsecond{SPLIT_MARKER}third");
        let mut document = doc(&["before", "x", "after"], 1).edit_current(body);
        document.chapters[1].subtitle = "Sub".to_string();

        let document = document.split_current();
        assert_eq!(
            bodies(&document),
            vec!["before", "first\n", "\nsecond", "third", "after"]
        );
        assert_eq!(document.current_index(), 1);
        for chapter in &document.chapters()[1..4] {
            assert_eq!(chapter.title, "Chapter 2");
            assert_eq!(chapter.subtitle, "Sub");
        }
    }

    #[test]
    fn test_merge_with_next() {
        let document = doc(&["a", "b", "c"], 0).merge_with_next(0).unwrap();
        assert_eq!(bodies(&document), vec!["a\nb", "c"]);
        assert_eq!(document.chapters()[0].title, "Chapter 1");
        assert_eq!(document.current_index(), 0);
    }

    #[test]
    fn test_merge_moves_cursor_back() {
        let document = doc(&["a", "b", "c"], 2).merge_with_next(0).unwrap();
        assert_eq!(document.current_index(), 1);
        assert_eq!(document.current().content, "c");

        let document = doc(&["a", "b", "c"], 1).merge_with_next(0).unwrap();
        assert_eq!(document.current_index(), 0);
        assert_eq!(document.current().content, "a\nb");
    }

    #[test]
    fn test_merge_last_is_noop() {
        let document = doc(&["a", "b"], 1);
        assert_eq!(document.clone().merge_with_next(1).unwrap(), document);
        assert!(matches!(
            document.merge_with_next(2),
            Err(SplitError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }
}
