//! Error handling for the validator.
//!
//! Every fatal condition is a [`SyntaxError`]. It is raised at the point of
//! detection and propagated with `?` up to the single top-level caller; no
//! grammar rule ever recovers from one.

use std::fmt;

use thiserror::Error;

use crate::json::scanner::{Location, Lookahead};
use crate::json::trace::Rule;

/// Result type used by every grammar rule and public entry point.
pub type CheckResult<T> = Result<T, SyntaxError>;

/// What went wrong. The `Display` text is the diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Neither an object nor an array at the start of the document.
    #[error("expected an object or array")]
    ExpectedDocument,

    /// Input continues after the root container.
    #[error("expected end of input")]
    ExpectedEof,

    /// A `,` inside an object was not followed by a pair.
    #[error("expected another pair after ','")]
    ExpectedPair,

    /// An object was not closed.
    #[error("expected a pair or '}}' to end object")]
    UnterminatedObject,

    /// An object key was not followed by `:`.
    #[error("expected a ':' after object name")]
    ExpectedColon,

    /// A `:` was not followed by a value.
    #[error("expected a value after ':'")]
    ExpectedMemberValue,

    /// A `,` inside an array was not followed by a value.
    #[error("expected another value after ','")]
    ExpectedElement,

    /// An array was not closed.
    #[error("expected a ']' to end array")]
    UnterminatedArray,

    /// A string was not closed.
    #[error("expected a '\"' to end a string")]
    UnterminatedString,

    /// A `-` was not followed by a digit.
    #[error("expected a digit after '-'")]
    ExpectedIntegerDigit,

    /// A `.` in a number was not followed by a digit.
    #[error("expected a digit after '.'")]
    ExpectedFractionDigit,

    /// An exponent marker was not followed by a digit.
    #[error("expected a digit after exponent marker")]
    ExpectedExponentDigit,

    /// `\u` was followed by fewer than four hex digits.
    #[error("expected exactly 4 hex digits after \"\\u\"")]
    InvalidUnicodeEscape,

    /// `true`, `false` or `null` started but was misspelled.
    #[error("unexpected token in literal")]
    InvalidLiteral,

    /// Containers nested deeper than the configured limit (depth, max).
    #[error("nesting too deep ({0} > {1})")]
    NestingTooDeep(u64, u64),
}

/// The terminal error record of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    kind: ErrorKind,
    rule: Rule,
    location: Location,
    next: Lookahead,
}

impl SyntaxError {
    pub(crate) fn new(kind: ErrorKind, rule: Rule, location: Location, next: Lookahead) -> Self {
        Self {
            kind,
            rule,
            location,
            next,
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The grammar rule that detected the error.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Location of the lookahead when the error was raised.
    pub fn location(&self) -> Location {
        self.location
    }

    /// 1-based row of the failure point.
    pub fn row(&self) -> u64 {
        self.location.row
    }

    /// Column of the failure point.
    pub fn col(&self) -> u64 {
        self.location.col
    }

    /// The unconsumed lookahead at the failure point.
    pub fn next(&self) -> Lookahead {
        self.next
    }
}

impl fmt::Display for SyntaxError {
    /// Renders `ERROR(<row>:<col>): <message> (next: '<token>')`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR({}:{}): {} (next: '{}')",
            self.location.row, self.location.col, self.kind, self.next
        )
    }
}

impl std::error::Error for SyntaxError {}
