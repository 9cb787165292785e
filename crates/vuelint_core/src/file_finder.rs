//! File discovery under the project root.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::info;
use walkdir::WalkDir;

use crate::LintError;

/// Patterns of lintable sources, relative to the project root.
pub const SOURCE_PATTERNS: &[&str] = &["**/*.ts", "**/*.vue", "**/*.tsx"];

/// Discovers lintable files, honoring project include/exclude patterns.
#[derive(Debug)]
pub struct FileFinder {
    sources: GlobSet,
    include_globs: Option<GlobSet>,
    exclude_globs: Option<GlobSet>,
}

impl FileFinder {
    /// Creates a finder for the fixed source patterns filtered by the
    /// project's include/exclude patterns.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, LintError> {
        let sources = build_globset(SOURCE_PATTERNS.iter().map(|s| s.to_string()))?
            .expect("source patterns are never empty");
        let include_globs = build_globset(include.iter().cloned())?;
        let exclude_globs = build_globset(exclude.iter().cloned())?;

        Ok(Self {
            sources,
            include_globs,
            exclude_globs,
        })
    }

    /// Checks if a root-relative path is filtered out by the project
    /// patterns. Exclude takes priority over include.
    fn should_ignore(&self, relative: &Path) -> bool {
        if self
            .exclude_globs
            .as_ref()
            .is_some_and(|excludes| excludes.is_match(relative))
        {
            return true;
        }

        if self
            .include_globs
            .as_ref()
            .is_some_and(|includes| !includes.is_match(relative))
        {
            return true;
        }

        false
    }

    /// Walks `root` and returns the sorted, deduplicated list of lintable
    /// files.
    pub fn discover(&self, root: &Path) -> Result<Vec<PathBuf>, LintError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(root).unwrap_or(path);
            if self.sources.is_match(relative) && !self.should_ignore(relative) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }
}

fn build_globset(patterns: impl Iterator<Item = String>) -> Result<Option<GlobSet>, LintError> {
    let mut builder = GlobSetBuilder::new();
    let mut any = false;
    for pattern in patterns {
        let glob = Glob::new(&pattern)
            .map_err(|e| LintError::config(format!("Invalid glob pattern: {e}")))?;
        builder.add(glob);
        any = true;
    }
    if !any {
        return Ok(None);
    }

    let globset = builder
        .build()
        .map_err(|e| LintError::config(format!("Failed to build globset: {e}")))?;
    Ok(Some(globset))
}
