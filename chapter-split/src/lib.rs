//! Chapter detection and editing for plain-text novels
//!
//! Provides the pieces behind the novel editor:
//! - Heading detection and segmentation of raw text into chapters
//! - Split/merge editing over an immutable chapter list with a cursor
//! - Access to a directory of `.txt` source files

pub mod chapter;
pub mod editor;
pub mod error;
pub mod library;
pub mod segmenter;

pub use chapter::Chapter;
pub use editor::{ChapterDocument, SPLIT_MARKER};
pub use error::{Result, SplitError};
pub use library::TxtLibrary;
pub use segmenter::{Heading, headings, segment, split_content};
