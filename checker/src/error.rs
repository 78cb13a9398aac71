//! Error taxonomy for scans and artifact loading.

use std::path::PathBuf;

/// Error returned by [`crate::scan`], [`crate::BindingPattern::parse`] and
/// [`crate::SourceArtifact::load`].
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The category list passed to a scan was empty.
    #[error("invalid input: category list is empty")]
    NoCategories,
    /// A category name was empty or whitespace only.
    #[error("invalid input: category name is empty")]
    EmptyCategoryName,
    /// The same category name was listed twice.
    #[error("invalid input: duplicate category `{0}`")]
    DuplicateCategory(String),
    /// The binding template did not contain exactly one `{category}` slot.
    #[error("invalid input: binding template {0}")]
    InvalidTemplate(String),
    /// The artifact file could not be read.
    #[error("artifact unreadable: {path}: {source}")]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The extraction expression built from the template failed to compile.
    #[error("binding pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

impl CheckError {
    /// True for caller mistakes (bad category list or template), as opposed
    /// to loader failures.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NoCategories
                | Self::EmptyCategoryName
                | Self::DuplicateCategory(_)
                | Self::InvalidTemplate(_)
        )
    }
}
