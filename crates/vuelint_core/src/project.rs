//! Project configuration (`tsconfig.json`).
//!
//! Only the parts of the compiler configuration that drive file discovery
//! are consumed: the project root (the file's directory) and the optional
//! `include`/`exclude` pattern lists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::LintError;

#[derive(Debug, Deserialize)]
struct RawTsconfig {
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    exclude: Option<Vec<String>>,
}

/// Discovery-relevant view of a TypeScript project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Directory containing the project file; discovery root.
    pub root: PathBuf,
    /// `include` patterns, empty when the project does not restrict them.
    pub include: Vec<String>,
    /// `exclude` patterns. Defaults to `node_modules` like the compiler.
    pub exclude: Vec<String>,
}

impl ProjectConfig {
    /// Loads a project from a `tsconfig.json` file (comments allowed).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LintError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LintError::project(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let value = jsonc_parser::parse_to_serde_value(&content, &Default::default())
            .map_err(|e| LintError::project(format!("Invalid JSON in {}: {e}", path.display())))?
            .unwrap_or(serde_json::Value::Null);
        let raw: RawTsconfig = serde_json::from_value(value)
            .map_err(|e| LintError::project(format!("Invalid project file: {e}")))?;

        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        Ok(Self {
            root,
            include: raw.include.iter().map(|p| as_glob(p)).collect(),
            exclude: raw
                .exclude
                .unwrap_or_else(|| vec!["node_modules".to_string()])
                .iter()
                .map(|p| as_glob(p))
                .collect(),
        })
    }

    /// Creates a project rooted at a directory, with compiler defaults.
    pub fn at_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include: Vec::new(),
            exclude: vec!["node_modules/**".to_string()],
        }
    }
}

/// Widens a bare tsconfig path entry into a glob covering its subtree;
/// entries that already contain glob metacharacters pass through.
fn as_glob(entry: &str) -> String {
    if entry.contains(['*', '?', '[']) {
        entry.to_string()
    } else {
        format!("{}/**", entry.trim_end_matches('/'))
    }
}
