//! Rendering of a validation outcome.
//!
//! A [`Report`] is the user-facing summary of one run: either success, or
//! the single diagnostic of the first syntax error. It renders as the plain
//! text line printed by the CLI, or as JSON via `serde`.

use std::fmt;

use serde::Serialize;

use crate::error::{CheckResult, SyntaxError};

/// Message printed when a document is accepted.
pub const SUCCESS_MESSAGE: &str = "Successful parse!";

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Report {
    /// The document is valid.
    Ok,
    /// The first syntax error.
    Err {
        /// 1-based row of the failure point.
        row: u64,
        /// Column of the failure point.
        col: u64,
        /// Grammar rule that detected the error.
        rule: &'static str,
        /// Diagnostic message.
        message: String,
        /// The offending character, or `EOF`.
        next: String,
    },
}

impl Report {
    /// Whether the document was accepted.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Render as a single line of JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&SyntaxError> for Report {
    fn from(err: &SyntaxError) -> Self {
        Self::Err {
            row: err.row(),
            col: err.col(),
            rule: err.rule().name(),
            message: err.kind().to_string(),
            next: err.next().to_string(),
        }
    }
}

impl From<&CheckResult<()>> for Report {
    fn from(result: &CheckResult<()>) -> Self {
        match result {
            Ok(()) => Self::Ok,
            Err(err) => Self::from(err),
        }
    }
}

impl fmt::Display for Report {
    /// The text form: the success message or the `ERROR(row:col)` line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str(SUCCESS_MESSAGE),
            Self::Err {
                row,
                col,
                message,
                next,
                ..
            } => write!(f, "ERROR({}:{}): {} (next: '{}')", row, col, message, next),
        }
    }
}
