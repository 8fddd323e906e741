//! Access to the directory of `.txt` novels offered to the editor.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SplitError};

/// Default directory scanned for novels, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "input-txt";

const TXT_SUFFIX: &str = ".txt";

/// A flat directory of plain-text novels
#[derive(Debug, Clone)]
pub struct TxtLibrary {
    root: PathBuf,
}

impl TxtLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the `.txt` files in the library, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let list_failure = |source| SplitError::ListFailure {
            dir: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(list_failure)? {
            let entry = entry.map_err(list_failure)?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.ends_with(TXT_SUFFIX) && entry.path().is_file() {
                names.push(name);
            }
        }

        names.sort();
        log::debug!("Found {} text files in {}", names.len(), self.root.display());
        Ok(names)
    }

    /// Read a novel by file name.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;
        let bytes = std::fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SplitError::NotFound(name.to_string()),
            _ => SplitError::ReadFailure {
                name: name.to_string(),
                source,
            },
        })?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Map a file name to a path inside the library root.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        if !is_valid_name(name) {
            return Err(SplitError::InvalidFileName(name.to_string()));
        }
        Ok(self.root.join(name))
    }
}

/// A single plain path component ending in `.txt`
fn is_valid_name(name: &str) -> bool {
    if !name.ends_with(TXT_SUFFIX) || name.contains(|c: char| c == '/' || c == '\\') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == OsStr::new(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn library_with(files: &[(&str, &str)]) -> (TempDir, TxtLibrary) {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let library = TxtLibrary::new(dir.path());
        (dir, library)
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let (dir, library) = library_with(&[
            ("b.txt", "two"),
            ("a.txt", "one"),
            ("notes.md", "skip"),
            ("upper.TXT", "skip"),
        ]);
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        assert_eq!(library.list().unwrap(), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let library = TxtLibrary::new("/definitely/not/a/real/dir");
        assert!(matches!(library.list(), Err(SplitError::ListFailure { .. })));
    }

    #[test]
    fn test_read() {
        let (_dir, library) = library_with(&[("novel.txt", "Chapter 1\nHi ✓")]);
        assert_eq!(library.read("novel.txt").unwrap(), "Chapter 1\nHi ✓");
    }

    #[test]
    fn test_read_lossy_utf8() {
        let (dir, library) = library_with(&[]);
        fs::write(dir.path().join("bad.txt"), b"ok \xff ok").unwrap();
        assert_eq!(library.read("bad.txt").unwrap(), "ok \u{fffd} ok");
    }

    #[test]
    fn test_read_missing() {
        let (_dir, library) = library_with(&[]);
        assert!(matches!(
            library.read("gone.txt"),
            Err(SplitError::NotFound(name)) if name == "gone.txt"
        ));
    }

    #[test]
    fn test_read_rejects_bad_names() {
        let (_dir, library) = library_with(&[("a.txt", "x")]);
        for name in ["", "a.md", "../a.txt", "sub/a.txt", "..\\a.txt", "/etc/a.txt", "..txt/.."] {
            assert!(
                matches!(library.read(name), Err(SplitError::InvalidFileName(_))),
                "{name:?}"
            );
        }
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("novel.txt"));
        assert!(is_valid_name("my novel (1).txt"));
        assert!(!is_valid_name(".."));
        assert!(!is_valid_name("."));
    }
}
