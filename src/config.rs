//! Check configuration resolved from flags, environment and defaults.

use std::path::{Path, PathBuf};

use checker::{BindingPattern, Category};

use crate::{Cli, CliError};

pub const DEFAULT_ARTIFACT: &str = "src/components/BlueprintChart.tsx";

/// Env var holding a comma-separated category list.
pub const CATEGORIES_ENV: &str = "BLUEPRINT_CATEGORIES";

/// Categories the chart screen is expected to highlight.
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Energy Family",
    "Energy Type",
    "Core Traits",
    "Strengths",
    "Challenges",
    "Tension Points",
    "Life Path",
    "Decision Style",
    "Relationships",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    Flags,
    File,
    Env,
    Default,
}

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub artifact: PathBuf,
    pub pattern: BindingPattern,
    pub categories: Vec<Category>,
    pub category_source: CategorySource,
}

impl CheckConfig {
    /// Resolve config for a parsed command line.
    ///
    /// Category precedence: `--category` flags, then `--categories-file`,
    /// then `BLUEPRINT_CATEGORIES`, then [`DEFAULT_CATEGORIES`]. The artifact
    /// path and pattern template already carry clap's env fallback.
    pub fn resolve(cli: &Cli) -> Result<Self, CliError> {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    pub fn resolve_with(
        cli: &Cli,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let pattern = BindingPattern::parse(&cli.pattern)?;

        let (names, category_source) = if !cli.category.is_empty() {
            (cli.category.clone(), CategorySource::Flags)
        } else if let Some(path) = &cli.categories_file {
            (read_categories_file(path)?, CategorySource::File)
        } else if let Some(names) = env(CATEGORIES_ENV)
            .map(|raw| split_list(&raw))
            .filter(|names| !names.is_empty())
        {
            (names, CategorySource::Env)
        } else {
            (
                DEFAULT_CATEGORIES.iter().map(|&s| s.to_owned()).collect(),
                CategorySource::Default,
            )
        };

        let categories = checker::categories(names)?;
        tracing::debug!(
            source = ?category_source,
            count = categories.len(),
            artifact = %cli.artifact.display(),
            "config resolved"
        );

        Ok(Self {
            artifact: cli.artifact.clone(),
            pattern,
            categories,
            category_source,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn read_categories_file(path: &Path) -> Result<Vec<String>, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::CategoriesFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str::<Vec<String>>(&raw).map_err(|source| CliError::CategoriesJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
