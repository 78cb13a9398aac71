//! Category support checker for UI descriptions.
//!
//! Given a list of expected categories and the raw text of a UI file, reports
//! per category whether the text carries an active highlight binding for it
//! (`Full`), merely mentions it (`Partial`), or does not mention it at all
//! (`None`). Everything here is pure computation over in-memory text; file
//! reading lives in [`SourceArtifact::load`] and is done before a scan.

mod artifact;
mod error;
mod pattern;

use std::collections::HashSet;

use serde::Serialize;

pub use artifact::SourceArtifact;
pub use error::CheckError;
pub use pattern::{Binding, BindingPattern, Bindings, CATEGORY_SLOT, DEFAULT_TEMPLATE};

/// A named domain concept expected to have UI support.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Category {
    name: String,
}

impl Category {
    /// # Errors
    ///
    /// Returns [`CheckError::EmptyCategoryName`] for empty or whitespace-only
    /// names.
    pub fn new(name: impl Into<String>) -> Result<Self, CheckError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CheckError::EmptyCategoryName);
        }
        Ok(Self { name })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Build a category list from plain names, preserving order.
///
/// # Errors
///
/// Returns [`CheckError::EmptyCategoryName`] if any name is blank.
pub fn categories<I, S>(names: I) -> Result<Vec<Category>, CheckError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Category::new).collect()
}

/// How strongly a category is represented in an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    /// The rendered binding pattern occurs in the artifact.
    Full,
    /// The name occurs, but no binding for it.
    Partial,
    /// The name does not occur.
    None,
}

impl SupportLevel {
    /// Fixed-width tag for text reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Partial => "PART",
            Self::None => "NONE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    pub category: Category,
    pub level: SupportLevel,
}

/// Result of one scan: one entry per input category, in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    entries: Vec<ScanEntry>,
    full_count: usize,
    partial_count: usize,
    none_count: usize,
    all_supported: bool,
}

impl ScanReport {
    fn from_entries(entries: Vec<ScanEntry>) -> Self {
        let count = |level: SupportLevel| entries.iter().filter(|e| e.level == level).count();
        let full_count = count(SupportLevel::Full);
        let partial_count = count(SupportLevel::Partial);
        let none_count = count(SupportLevel::None);
        let all_supported = full_count == entries.len();
        Self {
            entries,
            full_count,
            partial_count,
            none_count,
            all_supported,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn full_count(&self) -> usize {
        self.full_count
    }

    #[must_use]
    pub fn partial_count(&self) -> usize {
        self.partial_count
    }

    #[must_use]
    pub fn none_count(&self) -> usize {
        self.none_count
    }

    /// True iff every entry is [`SupportLevel::Full`].
    #[must_use]
    pub fn all_supported(&self) -> bool {
        self.all_supported
    }

    #[must_use]
    pub fn level_of(&self, name: &str) -> Option<SupportLevel> {
        self.entries
            .iter()
            .find(|e| e.category.name() == name)
            .map(|e| e.level)
    }
}

/// Classify a single category name against artifact text.
///
/// Matching is exact, case-sensitive substring containment.
#[must_use]
pub fn classify(name: &str, content: &str, pattern: &BindingPattern) -> SupportLevel {
    if content.contains(&pattern.render(name)) {
        SupportLevel::Full
    } else if content.contains(name) {
        SupportLevel::Partial
    } else {
        SupportLevel::None
    }
}

/// Scan `artifact` for every category, in order.
///
/// # Errors
///
/// Returns [`CheckError::NoCategories`] for an empty list and
/// [`CheckError::DuplicateCategory`] when a name repeats. No partial report
/// is ever produced.
pub fn scan(
    categories: &[Category],
    artifact: &SourceArtifact,
    pattern: &BindingPattern,
) -> Result<ScanReport, CheckError> {
    if categories.is_empty() {
        return Err(CheckError::NoCategories);
    }
    let mut seen = HashSet::with_capacity(categories.len());
    for category in categories {
        if !seen.insert(category.name()) {
            return Err(CheckError::DuplicateCategory(category.name().to_owned()));
        }
    }

    let content = artifact.content();
    let entries = categories
        .iter()
        .map(|category| ScanEntry {
            category: category.clone(),
            level: classify(category.name(), content, pattern),
        })
        .collect::<Vec<_>>();

    let report = ScanReport::from_entries(entries);
    tracing::debug!(
        categories = report.total(),
        full = report.full_count,
        partial = report.partial_count,
        pattern = %pattern,
        "scan complete"
    );
    Ok(report)
}

/// Every occurrence of the binding shape in `artifact`, for any name.
///
/// Duplicates are kept; each occurrence is its own observation.
#[must_use]
pub fn extract_bindings<'a>(
    artifact: &'a SourceArtifact,
    pattern: &'a BindingPattern,
) -> Bindings<'a> {
    pattern.bindings(artifact)
}

/// Bindings whose captured name is not one of `categories`.
#[must_use]
pub fn unknown_bindings<'a>(
    categories: &[Category],
    artifact: &'a SourceArtifact,
    pattern: &'a BindingPattern,
) -> Vec<Binding<'a>> {
    let known = categories
        .iter()
        .map(Category::name)
        .collect::<HashSet<_>>();
    extract_bindings(artifact, pattern)
        .filter(|b| !known.contains(b.category))
        .collect()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
