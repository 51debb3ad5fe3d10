//! File session handling
//!
//! Tracks the currently open layout file and performs the reads and
//! writes. I/O failures are fatal to the operation only; the in-memory
//! document is never touched here.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No file is open")]
    NoPath,
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The open-file state of one editor instance
#[derive(Debug, Default)]
pub struct Session {
    current_path: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Read a layout file and make it the current file
    ///
    /// A UTF-8 byte-order mark is stripped if present.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<String, SessionError> {
        let path = path.into();
        let text = fs::read_to_string(&path).map_err(|source| SessionError::Read {
            path: path.clone(),
            source,
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text).to_string();
        info!(path = %path.display(), bytes = text.len(), "opened");
        self.current_path = Some(path);
        Ok(text)
    }

    /// Write to the current file
    ///
    /// Output is plain UTF-8; no byte-order mark is ever written.
    pub fn save(&self, text: &str) -> Result<&Path, SessionError> {
        let path = self.current_path.as_deref().ok_or(SessionError::NoPath)?;
        fs::write(path, text).map_err(|source| SessionError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved");
        Ok(path)
    }

    /// Write to a new path and make it the current file
    pub fn save_as(&mut self, path: impl Into<PathBuf>, text: &str) -> Result<(), SessionError> {
        let path = path.into();
        fs::write(&path, text).map_err(|source| SessionError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "saved");
        self.current_path = Some(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join("jsonui-editor-session-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_open_strips_bom() {
        let path = temp_file("bom.json", b"\xef\xbb\xbf{}");
        let mut session = Session::new();
        assert_eq!(session.open(&path).unwrap(), "{}");
        assert_eq!(session.current_path(), Some(path.as_path()));
    }

    #[test]
    fn test_save_requires_open_file() {
        let session = Session::new();
        assert!(matches!(session.save("{}"), Err(SessionError::NoPath)));
    }

    #[test]
    fn test_save_as_sets_current_path() {
        let path = std::env::temp_dir()
            .join("jsonui-editor-session-test")
            .join("out.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        let mut session = Session::new();
        session.save_as(&path, "{\n  \"a\": 1\n}").unwrap();
        assert_eq!(session.current_path(), Some(path.as_path()));
        // No BOM in the written bytes
        assert_eq!(fs::read(&path).unwrap()[0], b'{');
    }

    #[test]
    fn test_open_failure_reports_path() {
        let mut session = Session::new();
        let err = session.open("/no/such/file.json").unwrap_err();
        assert!(err.to_string().contains("/no/such/file.json"));
        assert_eq!(session.current_path(), None);
    }
}
