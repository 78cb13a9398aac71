//! Text and JSON presentation of scan results.

use std::fmt::Write as _;

use checker::{Binding, BindingPattern, Category, ScanReport, SourceArtifact};
use serde::Serialize;

/// Bindings found in the artifact, for `--bindings`.
#[derive(Debug, Serialize)]
pub struct BindingSummary<'a> {
    pub all: Vec<Binding<'a>>,
    pub unknown: Vec<Binding<'a>>,
}

impl<'a> BindingSummary<'a> {
    #[must_use]
    pub fn collect(
        categories: &[Category],
        artifact: &'a SourceArtifact,
        pattern: &'a BindingPattern,
    ) -> Self {
        Self {
            all: checker::extract_bindings(artifact, pattern).collect(),
            unknown: checker::unknown_bindings(categories, artifact, pattern),
        }
    }
}

#[derive(Serialize)]
struct JsonOut<'r, 'a> {
    ok: bool,
    report: &'r ScanReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    bindings: Option<&'r BindingSummary<'a>>,
}

#[must_use]
pub fn render_text(report: &ScanReport, bindings: Option<&BindingSummary<'_>>) -> String {
    let mut out = String::new();
    for entry in report.entries() {
        let _ = writeln!(out, "[{}] {}", entry.level.label(), entry.category);
    }
    let _ = writeln!(
        out,
        "{}/{} categories fully supported",
        report.full_count(),
        report.total()
    );

    if let Some(summary) = bindings {
        out.push_str("bindings:\n");
        push_bindings(&mut out, &summary.all);
        if !summary.unknown.is_empty() {
            out.push_str("unknown bindings:\n");
            push_bindings(&mut out, &summary.unknown);
        }
    }
    out
}

pub fn render_json(
    report: &ScanReport,
    bindings: Option<&BindingSummary<'_>>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOut {
        ok: report.all_supported(),
        report,
        bindings,
    })
}

fn push_bindings(out: &mut String, bindings: &[Binding<'_>]) {
    for b in bindings {
        let _ = writeln!(out, "  {}\t{}", b.offset, b.category);
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
