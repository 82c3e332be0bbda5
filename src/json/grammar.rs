//! Recursive descent grammar engine.
//!
//! One method per production. Every rule returns a [`CheckResult<bool>`]:
//!
//! - `Ok(true)`: the production matched and its input was consumed.
//! - `Ok(false)`: the production does not start at the lookahead; nothing
//!   was consumed, so the caller may try an alternative.
//! - `Err(_)`: the rule had already consumed its leading token (its commit
//!   point) and could not complete. The error unwinds the whole run.
//!
//! Whitespace is skipped before and after the root container and around
//! every structural token and value, never inside strings, numbers or
//! keywords.
//!
//! ```text
//! document = ( object | array ), EOF;
//! object   = "{", [ pair, { ",", pair } ], "}";
//! pair     = string, ":", value;
//! array    = "[", [ value, { ",", value } ], "]";
//! value    = string | number | object | array | true | false | null;
//! string   = '"', { unescaped | escape }, '"';
//! number   = [ "-" ], ( "0" | nonzero, { digit } ), [ ".", digit, { digit } ],
//!            [ ( "e" | "E" ), [ "+" | "-" ], digit, { digit } ];
//! escape   = "\", ( '"' | "\" | "/" | "b" | "f" | "n" | "r" | "t" | "u", hex * 4 );
//! ```

use super::limits::Limits;
use super::scanner::{CharSource, Scanner};
use super::trace::{NoTrace, Rule, Trace};
use crate::error::{CheckResult, ErrorKind, SyntaxError};

/// Characters that may follow `\` on their own.
const SIMPLE_ESCAPES: [char; 8] = ['"', '\\', '/', 'b', 'f', 'n', 'r', 't'];

/// Characters that cannot appear unescaped inside a string.
const STRING_DELIMITERS: [char; 2] = ['"', '\\'];

/// Validates one JSON document read from a [`CharSource`].
pub struct Validator<S, T = NoTrace> {
    scanner: Scanner<S>,
    trace: T,
    limits: Limits,
    depth: u64,
}

impl<S: CharSource> Validator<S> {
    /// Create a validator with default limits and no tracing.
    ///
    /// The first code point is read from `source` immediately.
    pub fn new(source: S) -> Self {
        Self {
            scanner: Scanner::new(source),
            trace: NoTrace,
            limits: Limits::default(),
            depth: 0,
        }
    }
}

impl<S: CharSource, T: Trace> Validator<S, T> {
    /// Replace the resource limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Install a tracing hook.
    pub fn with_trace<U: Trace>(self, trace: U) -> Validator<S, U> {
        Validator {
            scanner: self.scanner,
            trace,
            limits: self.limits,
            depth: self.depth,
        }
    }

    /// Validate the whole input, stopping at the first syntax error.
    pub fn validate(mut self) -> CheckResult<()> {
        match self.document() {
            Ok(_) => {
                let at = self.scanner.location();
                tracing::debug!(row = at.row, col = at.col, "document accepted");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    row = err.row(),
                    col = err.col(),
                    rule = err.rule().name(),
                    kind = %err.kind(),
                    "document rejected"
                );
                Err(err)
            }
        }
    }

    /// Run `body` as `rule`, reporting entry and exit to the trace hook.
    fn rule(
        &mut self,
        rule: Rule,
        body: impl FnOnce(&mut Self) -> CheckResult<bool>,
    ) -> CheckResult<bool> {
        self.trace.enter(rule, self.scanner.peek(), self.scanner.location());
        let matched = body(self)?;
        self.trace.leave(rule, matched, self.scanner.peek(), self.scanner.location());
        Ok(matched)
    }

    fn fail<R>(&self, rule: Rule, kind: ErrorKind) -> CheckResult<R> {
        Err(SyntaxError::new(
            kind,
            rule,
            self.scanner.location(),
            self.scanner.peek(),
        ))
    }

    /// Enter a container, enforcing the nesting limit.
    fn descend(&mut self, rule: Rule) -> CheckResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return self.fail(
                rule,
                ErrorKind::NestingTooDeep(self.depth, self.limits.max_nesting_depth),
            );
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn document(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Document, |v| {
            v.scanner.skip_whitespace();
            if !(v.object()? || v.array()?) {
                return v.fail(Rule::Document, ErrorKind::ExpectedDocument);
            }
            v.scanner.skip_whitespace();
            if !v.scanner.is_eof() {
                return v.fail(Rule::Document, ErrorKind::ExpectedEof);
            }
            Ok(true)
        })
    }

    fn object(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Object, |v| {
            if !v.scanner.matches('{') {
                return Ok(false);
            }
            v.descend(Rule::Object)?;
            v.scanner.skip_whitespace();
            if v.pair()? {
                v.scanner.skip_whitespace();
                while v.scanner.matches(',') {
                    v.scanner.skip_whitespace();
                    if !v.pair()? {
                        return v.fail(Rule::Object, ErrorKind::ExpectedPair);
                    }
                    v.scanner.skip_whitespace();
                }
            }
            if !v.scanner.matches('}') {
                return v.fail(Rule::Object, ErrorKind::UnterminatedObject);
            }
            v.ascend();
            Ok(true)
        })
    }

    fn pair(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Pair, |v| {
            if !v.string()? {
                return Ok(false);
            }
            v.scanner.skip_whitespace();
            if !v.scanner.matches(':') {
                return v.fail(Rule::Pair, ErrorKind::ExpectedColon);
            }
            v.scanner.skip_whitespace();
            if !v.value()? {
                return v.fail(Rule::Pair, ErrorKind::ExpectedMemberValue);
            }
            Ok(true)
        })
    }

    fn array(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Array, |v| {
            if !v.scanner.matches('[') {
                return Ok(false);
            }
            v.descend(Rule::Array)?;
            v.scanner.skip_whitespace();
            if v.value()? {
                v.scanner.skip_whitespace();
                while v.scanner.matches(',') {
                    v.scanner.skip_whitespace();
                    if !v.value()? {
                        return v.fail(Rule::Array, ErrorKind::ExpectedElement);
                    }
                    v.scanner.skip_whitespace();
                }
            }
            if !v.scanner.matches(']') {
                return v.fail(Rule::Array, ErrorKind::UnterminatedArray);
            }
            v.ascend();
            Ok(true)
        })
    }

    /// Ordered choice over the seven value alternatives.
    fn value(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Value, |v| {
            Ok(v.string()?
                || v.number()?
                || v.object()?
                || v.array()?
                || v.literal(Rule::True, "true")?
                || v.literal(Rule::False, "false")?
                || v.literal(Rule::Null, "null")?)
        })
    }

    fn string(&mut self) -> CheckResult<bool> {
        self.rule(Rule::String, |v| {
            if !v.scanner.matches('"') {
                return Ok(false);
            }
            while v.unescaped()? || v.escape()? {}
            if !v.scanner.matches('"') {
                return v.fail(Rule::String, ErrorKind::UnterminatedString);
            }
            Ok(true)
        })
    }

    fn unescaped(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Unescaped, |v| {
            Ok(v.scanner.matches_none_of(&STRING_DELIMITERS))
        })
    }

    /// An unknown character after `\` is a no-match. The backslash stays
    /// consumed, so the enclosing string then fails on its closing quote.
    fn escape(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Escape, |v| {
            if !v.scanner.matches('\\') {
                return Ok(false);
            }
            if SIMPLE_ESCAPES.iter().any(|&c| v.scanner.matches(c)) {
                return Ok(true);
            }
            if !v.scanner.matches('u') {
                return Ok(false);
            }
            for _ in 0..4 {
                if !v.scanner.matches_with(|c| c.is_ascii_hexdigit()) {
                    return v.fail(Rule::Escape, ErrorKind::InvalidUnicodeEscape);
                }
            }
            Ok(true)
        })
    }

    fn number(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Number, |v| {
            let signed = v.scanner.matches('-');
            // A leading zero stands alone.
            if !v.scanner.matches('0') {
                if v.nonzero()? {
                    while v.digit()? {}
                } else if signed {
                    return v.fail(Rule::Number, ErrorKind::ExpectedIntegerDigit);
                } else {
                    return Ok(false);
                }
            }

            if v.scanner.matches('.') {
                if !v.digit()? {
                    return v.fail(Rule::Number, ErrorKind::ExpectedFractionDigit);
                }
                while v.digit()? {}
            }

            if v.scanner.matches('e') || v.scanner.matches('E') {
                if !v.scanner.matches('+') {
                    v.scanner.matches('-');
                }
                if !v.digit()? {
                    return v.fail(Rule::Number, ErrorKind::ExpectedExponentDigit);
                }
                while v.digit()? {}
            }
            Ok(true)
        })
    }

    fn nonzero(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Nonzero, |v| {
            Ok(v.scanner.matches_with(|c| matches!(c, '1'..='9')))
        })
    }

    fn digit(&mut self) -> CheckResult<bool> {
        self.rule(Rule::Digit, |v| {
            Ok(v.scanner.matches_with(|c| c.is_ascii_digit()))
        })
    }

    /// `true`, `false` and `null` commit on their first letter.
    fn literal(&mut self, rule: Rule, word: &'static str) -> CheckResult<bool> {
        self.rule(rule, |v| {
            let mut letters = word.chars();
            let Some(first) = letters.next() else {
                return Ok(false);
            };
            if !v.scanner.matches(first) {
                return Ok(false);
            }
            for letter in letters {
                if !v.scanner.matches(letter) {
                    return v.fail(rule, ErrorKind::InvalidLiteral);
                }
            }
            Ok(true)
        })
    }
}
