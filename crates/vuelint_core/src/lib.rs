//! # vuelint_core
//!
//! Core lint engine for vuelint.
//!
//! This crate provides:
//! - Configuration loading (`tslint.json`, `tsconfig.json`)
//! - File discovery under the project root
//! - Source resolution through the hybrid source adapter
//! - The sequential lint/fix orchestrator
//! - Fix application and write reintegration for hybrid documents
//! - Report formatters
//!
//! ## Example
//!
//! ```rust,ignore
//! use vuelint_core::{LintConfig, Linter, ProjectConfig};
//!
//! let config = LintConfig::from_file("tslint.json")?;
//! let project = ProjectConfig::from_file("tsconfig.json")?;
//! let linter = Linter::new(config, project)?;
//!
//! let summary = linter.run(false)?;
//! for result in &summary.results {
//!     println!("{}: {} failures", result.path.display(), result.diagnostics.len());
//! }
//! ```

mod config;
mod error;
mod file_finder;
mod fixer;
pub mod formatters;
mod linter;
mod program;
mod project;
mod result;
mod sink;

pub use config::{LintConfig, RuleSettings};
pub use error::LintError;
pub use file_finder::FileFinder;
pub use fixer::{FixerResult, apply_fixes_to_content};
pub use linter::{Linter, RunSummary};
pub use program::{Program, SourceUnit};
pub use project::ProjectConfig;
pub use result::LintResult;
pub use sink::{DiskSink, ReintegratingSink, SubstitutionCache, WriteSink, normalize_path};

pub use vuelint_rules::{Diagnostic, Fix, Severity};
pub use vuelint_sfc::DocumentKind;
