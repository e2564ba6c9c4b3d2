//! Input sources for real puzzle runs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Anything that can hand over the full text of a puzzle input
///
/// A day reads its source once per run, in full, before normalization starts.
/// Implementations must not hold the underlying resource open after `read`
/// returns.
pub trait InputSource {
    /// Return the complete input text
    fn read(&self) -> io::Result<String>;

    /// Short human-readable description, used in logs
    fn describe(&self) -> String;
}

/// Input stored in a file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    path: PathBuf,
}

impl FileInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for FileInput {
    fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Input held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineInput {
    text: String,
}

impl InlineInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl InputSource for InlineInput {
    fn read(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("<inline, {} bytes>", self.text.len())
    }
}
