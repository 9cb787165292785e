//! vuelint CLI
//!
//! Lints the TypeScript sources of a project, including the script blocks
//! of Vue single-file components.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::error;
use tracing_subscriber::EnvFilter;

use vuelint_core::{LintConfig, Linter, ProjectConfig, RunSummary, formatters};

/// vuelint - TypeScript linter with Vue single-file component support
#[derive(Parser)]
#[command(name = "vuelint")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Lint configuration file
    #[arg(short, long, default_value = "tslint.json")]
    config: PathBuf,

    /// TypeScript project file
    #[arg(short, long, default_value = "tsconfig.json")]
    project: PathBuf,

    /// Fix lint failures for fixable rules (rewrites linted files)
    #[arg(long)]
    fix: bool,

    /// Report failures but exit with status 0
    #[arg(long)]
    force: bool,

    /// Report formatter (code-frame, prose)
    #[arg(long, default_value = "code-frame")]
    formatter: String,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,

    /// Print version
    #[arg(
        short = 'v',
        long = "version",
        action = clap::ArgAction::Version,
        value_parser = clap::value_parser!(bool)
    )]
    version: Option<bool>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(has_failures) => {
            if has_failures {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    if !formatters::FORMATTER_NAMES.contains(&cli.formatter.as_str()) {
        return Err(miette::miette!(
            "Unknown formatter '{}'. Known formatters: {}",
            cli.formatter,
            formatters::FORMATTER_NAMES.join(", ")
        ));
    }

    let config = LintConfig::from_file(&cli.config).into_diagnostic()?;
    let project = ProjectConfig::from_file(&cli.project).into_diagnostic()?;
    let linter = Linter::new(config, project).into_diagnostic()?;

    let summary = linter.run(cli.fix).into_diagnostic()?;
    report(&cli, &summary)?;

    Ok(summary.has_failures() && !cli.force)
}

fn report(cli: &Cli, summary: &RunSummary) -> Result<()> {
    if !summary.failures.is_empty() {
        eprintln!("{} file(s) failed to lint:", summary.failures.len());
        for (path, error) in &summary.failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    let output = formatters::render(&summary.results, &cli.formatter).into_diagnostic()?;
    if !output.trim().is_empty() {
        print!("{output}");
    } else if summary.fixes_applied() > 0 {
        // Some formatters report nothing once every failure is fixed.
        print!("{}", formatters::format_fix_summary(&summary.results));
    } else if !summary.has_failures() {
        println!("No lint errors found.");
    }

    Ok(())
}
