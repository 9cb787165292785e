//! Source resolution: the hybrid source adapter.
//!
//! Every file the engine analyzes is resolved through [`Program::source`],
//! which presents a uniform "analyzable TypeScript" view regardless of
//! document kind. Hybrid documents are resolved to their padded script
//! region; the resolution is structural, so rebuilding any engine state
//! cannot lose the override.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use vuelint_sfc::DocumentKind;

use crate::{LintError, SubstitutionCache};

/// An analyzable source unit: the original path plus the content the rule
/// engine should see for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// Path as reported in diagnostics.
    pub path: PathBuf,
    /// Document kind the path was classified as.
    pub kind: DocumentKind,
    /// Analyzable content: the file itself for plain documents, the padded
    /// script region (or `""`) for hybrid documents.
    pub content: String,
}

/// An analysis session over one project tree.
#[derive(Debug, Clone)]
pub struct Program {
    root: PathBuf,
}

impl Program {
    /// Creates a program rooted at the project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a path to its analyzable source unit.
    ///
    /// For hybrid documents the extracted region is recorded in `cache` so
    /// a later fix pass can reintegrate the script. A hybrid document with
    /// no recognized TypeScript script resolves to empty content and gets
    /// no cache entry; it lints clean by construction.
    pub fn source(
        &self,
        path: &Path,
        cache: &mut SubstitutionCache,
    ) -> Result<SourceUnit, LintError> {
        let full = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        let raw = fs::read_to_string(&full)
            .map_err(|e| LintError::file(format!("Failed to read {}: {}", full.display(), e)))?;

        let kind = DocumentKind::of(&full);
        let content = match kind {
            DocumentKind::Plain => raw,
            DocumentKind::Hybrid => match vuelint_sfc::extract(&raw) {
                Some(region) => {
                    let padded = region.padded_script();
                    cache.insert(&full, region);
                    padded
                }
                None => {
                    debug!("No TypeScript script block in {}", full.display());
                    String::new()
                }
            },
        };

        Ok(SourceUnit {
            path: full,
            kind,
            content,
        })
    }
}
