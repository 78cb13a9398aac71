//! Binding templates: the literal text shape of an active highlight
//! conditional, with one slot where the category name goes.

use regex::Regex;
use serde::Serialize;

use crate::{CheckError, SourceArtifact};

/// Placeholder a template must contain exactly once.
pub const CATEGORY_SLOT: &str = "{category}";

/// Strict-equality highlight check as written in the chart screen.
pub const DEFAULT_TEMPLATE: &str = "highlightedCategory === '{category}'";

/// A parsed binding template.
///
/// Rendering is plain concatenation, so [`BindingPattern::render`] output is
/// searched as a literal. Extraction uses a compiled expression built from
/// the escaped prefix and suffix with a single capture for the name. A
/// captured name is one line at most, never contains `\r`, and never contains
/// the first character of the suffix, so `highlightedCategory === ''` is not a
/// binding at all.
#[derive(Clone, Debug)]
pub struct BindingPattern {
    template: String,
    prefix: String,
    suffix: String,
    extractor: Regex,
}

impl BindingPattern {
    /// Parse a template such as `highlightedCategory === '{category}'`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::InvalidTemplate`] when the template is empty,
    /// has no slot, has more than one slot, or has no literal text around
    /// the slot. Returns [`CheckError::Pattern`] if the extraction
    /// expression cannot be compiled.
    pub fn parse(template: &str) -> Result<Self, CheckError> {
        if template.is_empty() {
            return Err(CheckError::InvalidTemplate("is empty".to_owned()));
        }
        let Some((prefix, suffix)) = template.split_once(CATEGORY_SLOT) else {
            return Err(CheckError::InvalidTemplate(format!(
                "`{template}` has no {CATEGORY_SLOT} slot"
            )));
        };
        if suffix.contains(CATEGORY_SLOT) {
            return Err(CheckError::InvalidTemplate(format!(
                "`{template}` has more than one {CATEGORY_SLOT} slot"
            )));
        }
        if prefix.is_empty() && suffix.is_empty() {
            return Err(CheckError::InvalidTemplate(
                "has no literal text around the slot".to_owned(),
            ));
        }

        // Names never span lines, CRLF included. Without a suffix there is
        // nothing to stop a lazy capture, so take the rest of the line. With
        // one, the name cannot contain the suffix's first character, so an
        // empty name never swallows the text up to a later suffix.
        let capture = match suffix.chars().next() {
            None => "([^\\r\\n]+)".to_owned(),
            Some(stop) => format!("([^\\r\\n{}]+?)", regex::escape(&stop.to_string())),
        };
        let extractor = Regex::new(&format!(
            "{}{capture}{}",
            regex::escape(prefix),
            regex::escape(suffix)
        ))?;

        Ok(Self {
            template: template.to_owned(),
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
            extractor,
        })
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitute `name` into the slot.
    #[must_use]
    pub fn render(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + name.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(name);
        out.push_str(&self.suffix);
        out
    }

    /// Enumerate every occurrence of the template shape in `artifact`.
    #[must_use]
    pub fn bindings<'a>(&'a self, artifact: &'a SourceArtifact) -> Bindings<'a> {
        Bindings {
            extractor: &self.extractor,
            haystack: artifact.content(),
            pos: 0,
        }
    }
}

impl std::fmt::Display for BindingPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

/// One textual occurrence of a binding in an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Binding<'a> {
    /// Byte offset of the first character of the match.
    pub offset: usize,
    /// The full matched literal, e.g. `highlightedCategory === 'Strengths'`.
    pub text: &'a str,
    /// The text captured by the slot.
    pub category: &'a str,
}

/// Lazy, finite iterator over [`Binding`]s in offset order.
///
/// Cloning yields an independent cursor at the same position.
#[derive(Clone, Debug)]
pub struct Bindings<'a> {
    extractor: &'a Regex,
    haystack: &'a str,
    pos: usize,
}

impl<'a> Iterator for Bindings<'a> {
    type Item = Binding<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.haystack.len() {
            return None;
        }
        let caps = self.extractor.captures_at(self.haystack, self.pos)?;
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        // The capture is at least one character, so the cursor always moves.
        self.pos = whole.end();
        Some(Binding {
            offset: whole.start(),
            text: whole.as_str(),
            category: name.as_str(),
        })
    }
}

impl std::iter::FusedIterator for Bindings<'_> {}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;
