//! jsoncheck - recursive descent JSON syntax validator.
//!
//! Decides whether a stream of code points is a syntactically valid JSON
//! document (an object or array followed by end of input). Nothing is
//! deserialized: the only output is acceptance or the first syntax error,
//! with its row, column and the offending lookahead.
//!
//! # Architecture
//!
//! - [`json`] - Scanner, grammar engine, limits and trace hooks
//! - [`error`] - The terminal [`SyntaxError`] and its [`ErrorKind`]s
//! - [`report`] - Text and JSON rendering of a validation outcome
//!
//! # Example
//!
//! ```
//! assert!(jsoncheck::validate_str("[1, 2, 3]").is_ok());
//!
//! let err = jsoncheck::validate_str("{}  extra").unwrap_err();
//! assert_eq!(err.to_string(), "ERROR(1:5): expected end of input (next: 'e')");
//! ```

// Library code reports every failure through `SyntaxError`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod json;
pub mod report;

pub use error::{CheckResult, ErrorKind, SyntaxError};
pub use json::{CharSource, Limits, Location, Lookahead, Rule, Validator};
pub use report::Report;

/// Validate a complete document held in memory, with default limits.
pub fn validate_str(input: &str) -> CheckResult<()> {
    validate_with_limits(input, Limits::default())
}

/// Validate a complete document held in memory, with custom limits.
pub fn validate_with_limits(input: &str, limits: Limits) -> CheckResult<()> {
    validate_chars(input.chars(), limits)
}

/// Validate the code points supplied by `source`.
pub fn validate_chars<S: CharSource>(source: S, limits: Limits) -> CheckResult<()> {
    Validator::new(source).with_limits(limits).validate()
}
