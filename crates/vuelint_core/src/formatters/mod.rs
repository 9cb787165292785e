//! Report formatters.
//!
//! `code-frame` is the default human-readable report: each failure with a
//! framed source excerpt. `prose` is one line per failure, and also
//! renders the fix summary printed after a fix pass when the main
//! formatter has nothing to say.

mod code_frame;
mod prose;

pub use code_frame::format_code_frame;
pub use prose::{format_fix_summary, format_prose};

/// Names accepted by the `--formatter` flag.
pub const FORMATTER_NAMES: &[&str] = &["code-frame", "prose"];

use crate::{LintError, LintResult};

/// Renders results with the named formatter.
pub fn render(results: &[LintResult], formatter: &str) -> Result<String, LintError> {
    match formatter {
        "code-frame" => Ok(format_code_frame(results)),
        "prose" => Ok(format_prose(results)),
        other => Err(LintError::config(format!(
            "Unknown formatter '{}'. Known formatters: {}",
            other,
            FORMATTER_NAMES.join(", ")
        ))),
    }
}
