//! Source artifacts: the raw text of a UI description.

use std::path::{Path, PathBuf};

use crate::CheckError;

/// Read-only text to be scanned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceArtifact {
    origin: Option<PathBuf>,
    content: String,
}

impl SourceArtifact {
    /// Wrap already-loaded text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            origin: None,
            content: content.into(),
        }
    }

    /// Read a UTF-8 file fully. The handle is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::ArtifactUnreadable`] if the file is missing,
    /// unreadable, or not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), bytes = content.len(), "artifact loaded");
                Ok(Self {
                    origin: Some(path.to_path_buf()),
                    content,
                })
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "artifact unreadable");
                Err(CheckError::ArtifactUnreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// File the content came from, if it was loaded from disk.
    #[must_use]
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
#[path = "artifact_test.rs"]
mod tests;
