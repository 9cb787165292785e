//! The sequential lint/fix orchestrator.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use vuelint_rules::{Diagnostic, Rule, RuleContext};
use vuelint_syntax::{LineIndex, tokenize};

use crate::fixer::apply_fixes_to_content;
use crate::sink::{DiskSink, ReintegratingSink, SubstitutionCache, WriteSink};
use crate::{FileFinder, LintConfig, LintError, LintResult, Program, ProjectConfig};

/// The rule whose report would be garbage on padded hybrid sources: the
/// padding lines are indistinguishable from real blank lines.
const PADDING_SENSITIVE_RULE: &str = "no-consecutive-blank-lines";

/// Aggregate outcome of one lint run.
#[derive(Debug)]
pub struct RunSummary {
    /// Per-file results, in discovery order.
    pub results: Vec<LintResult>,
    /// Files that could not be linted, with their errors.
    pub failures: Vec<(PathBuf, LintError)>,
}

impl RunSummary {
    /// Returns true if any file reported diagnostics or failed to lint.
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(LintResult::has_failures) || !self.failures.is_empty()
    }

    /// Total number of fixes applied across all files.
    pub fn fixes_applied(&self) -> usize {
        self.results.iter().map(|r| r.fixes_applied).sum()
    }
}

/// The lint engine: discovers files under the project root and lints them
/// one at a time, in a fixed order.
pub struct Linter {
    config: LintConfig,
    project: ProjectConfig,
    program: Program,
    finder: FileFinder,
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    /// Creates a linter over a project.
    pub fn new(config: LintConfig, project: ProjectConfig) -> Result<Self, LintError> {
        let finder = FileFinder::new(&project.include, &project.exclude)?;
        let program = Program::new(&project.root);
        Ok(Self {
            config,
            project,
            program,
            finder,
            rules: vuelint_rules::all_rules(),
        })
    }

    /// Runs the linter over every discovered file.
    ///
    /// Unreadable files accumulate in the summary; a failed write during a
    /// fix pass is fatal and aborts the run.
    pub fn run(&self, fix: bool) -> Result<RunSummary, LintError> {
        let files = self.finder.discover(&self.project.root)?;

        // One substitution cache and one disk sink per run; each file's
        // fix pass wraps the sink in a scoped reintegration decorator.
        let mut cache = SubstitutionCache::new();
        let mut disk = DiskSink;

        let mut results = Vec::new();
        let mut failures = Vec::new();

        for path in files {
            match self.lint_file(&path, fix, &mut cache, &mut disk) {
                Ok(result) => results.push(result),
                Err(err @ LintError::Io(_)) => return Err(err),
                Err(err) => {
                    warn!("Failed to lint {}: {}", path.display(), err);
                    failures.push((path, err));
                }
            }
        }

        Ok(RunSummary { results, failures })
    }

    /// Lints a single file, optionally applying fixes.
    fn lint_file(
        &self,
        path: &Path,
        fix: bool,
        cache: &mut SubstitutionCache,
        disk: &mut DiskSink,
    ) -> Result<LintResult, LintError> {
        debug!("Linting {}", path.display());
        let unit = self.program.source(path, cache)?;

        // Hybrid sources are line-padded, so the blank-lines rule would
        // report the padding; lint them with that rule forced off.
        let config_view;
        let config = if unit.kind.is_hybrid() {
            config_view = self.config.with_rule_off(PADDING_SENSITIVE_RULE);
            &config_view
        } else {
            &self.config
        };

        let diagnostics = self.check_source(&unit.path, &unit.content, config);
        let mut result = LintResult::new(unit.path.clone(), unit.kind, unit.content, diagnostics);

        if fix {
            let outcome = apply_fixes_to_content(&result.source, &result.diagnostics);
            if outcome.modified {
                let mut sink = ReintegratingSink::new(disk, cache);
                sink.write(&unit.path, &outcome.fixed_content)?;
                result.fixes_applied = outcome.fixes_applied;
                // What still fails after the pass is what had no fix.
                result.diagnostics.retain(|d| d.fix.is_none());
            }
        }

        Ok(result)
    }

    /// Runs every enabled rule over one analyzable source.
    fn check_source(&self, path: &Path, source: &str, config: &LintConfig) -> Vec<Diagnostic> {
        let tokens = tokenize(source);
        let line_index = LineIndex::new(source);
        let mut diagnostics = Vec::new();

        for (name, settings) in config.enabled_rules() {
            let Some(rule) = self.rules.iter().find(|r| r.name() == name) else {
                // Config validation guarantees known names; guard anyway.
                warn!("No implementation for configured rule '{name}'");
                continue;
            };
            let ctx = RuleContext {
                path,
                source,
                tokens: &tokens,
                line_index: &line_index,
                options: &settings.options,
            };
            for diagnostic in rule.check(&ctx) {
                let loc = line_index.location(diagnostic.span);
                diagnostics.push(diagnostic.with_severity(settings.severity).with_location(loc));
            }
        }

        diagnostics.sort_by(|a, b| {
            a.span
                .start
                .cmp(&b.span.start)
                .then_with(|| a.rule_id.cmp(&b.rule_id))
        });
        diagnostics.dedup();
        diagnostics
    }
}
