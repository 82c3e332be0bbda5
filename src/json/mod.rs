//! JSON syntax validation.
//!
//! # Architecture
//!
//! - [`scanner`] - Single-code-point lookahead with row/column tracking
//! - [`grammar`] - Recursive descent rules, one per production
//! - [`limits`] - Nesting limits
//! - [`trace`] - Optional rule enter/leave hooks
//!
//! # Example
//!
//! ```
//! use jsoncheck::json::{Validator, ErrorKind};
//!
//! assert!(Validator::new(r#"{"a": [1, 2.5e3, null]}"#.chars()).validate().is_ok());
//!
//! let err = Validator::new(r#"{"a":}"#.chars()).validate().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ExpectedMemberValue);
//! assert_eq!(err.to_string(), "ERROR(1:6): expected a value after ':' (next: '}')");
//! ```

pub mod grammar;
pub mod limits;
pub mod scanner;
pub mod trace;

pub use crate::error::{CheckResult, ErrorKind, SyntaxError};
pub use grammar::Validator;
pub use limits::Limits;
pub use scanner::{CharSource, Location, Lookahead, Scanner};
pub use trace::{NoTrace, Rule, Trace, TracingTrace, TreeTrace};
