//! Grammar tracing hooks.
//!
//! The validator calls [`Trace::enter`] and [`Trace::leave`] around every
//! grammar rule. The default [`NoTrace`] does nothing and compiles away.

use std::fmt;
use std::io::Write;

use super::scanner::{Location, Lookahead};

/// The grammar productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `( object | array ), EOF`
    Document,
    /// `"{", [ pair { ",", pair } ], "}"`
    Object,
    /// `string, ":", value`
    Pair,
    /// `"[", [ value { ",", value } ], "]"`
    Array,
    /// `string | number | object | array | true | false | null`
    Value,
    /// `'"', { unescaped | escape }, '"'`
    String,
    /// Any code point except `"` and `\`.
    Unescaped,
    /// `"\", ( one of "\/bfnrt | "u", hex * 4 )`
    Escape,
    /// `[ "-" ], ( "0" | nonzero { digit } ), [ fraction ], [ exponent ]`
    Number,
    /// `1` to `9`
    Nonzero,
    /// `0` to `9`
    Digit,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
}

impl Rule {
    /// Short lowercase name used in traces and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Object => "object",
            Self::Pair => "pair",
            Self::Array => "array",
            Self::Value => "value",
            Self::String => "string",
            Self::Unescaped => "unescaped",
            Self::Escape => "escape",
            Self::Number => "number",
            Self::Nonzero => "nonzero",
            Self::Digit => "digit",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Observer for grammar rule entry and exit.
///
/// `leave` is not called for rules unwound by a fatal error.
pub trait Trace {
    /// Called before a rule inspects the lookahead.
    fn enter(&mut self, _rule: Rule, _next: Lookahead, _at: Location) {}

    /// Called after a rule finished, matched or not.
    fn leave(&mut self, _rule: Rule, _matched: bool, _next: Lookahead, _at: Location) {}
}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn enter(&mut self, rule: Rule, next: Lookahead, at: Location) {
        (**self).enter(rule, next, at)
    }

    fn leave(&mut self, rule: Rule, matched: bool, next: Lookahead, at: Location) {
        (**self).leave(rule, matched, next, at)
    }
}

/// The default hook: records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {}

/// Renders the rule call tree as indented text.
///
/// ```text
/// +-document: enter    next: '[' (1:1)
/// | +-object: enter    next: '[' (1:1)
/// | +-object: leave    next: '[' (1:1)
/// ```
pub struct TreeTrace<W> {
    out: W,
    depth: usize,
}

impl<W: Write> TreeTrace<W> {
    /// Write the trace to `out`.
    pub fn new(out: W) -> Self {
        Self { out, depth: 0 }
    }

    fn line(&mut self, rule: Rule, event: &str, next: Lookahead, at: Location) {
        // Trace output is best effort.
        let _ = writeln!(
            self.out,
            "{}+-{}: {}\tnext: '{}' ({})",
            "| ".repeat(self.depth),
            rule,
            event,
            next,
            at
        );
    }
}

impl<W: Write> Trace for TreeTrace<W> {
    fn enter(&mut self, rule: Rule, next: Lookahead, at: Location) {
        self.line(rule, "enter", next, at);
        self.depth += 1;
    }

    fn leave(&mut self, rule: Rule, _matched: bool, next: Lookahead, at: Location) {
        self.depth = self.depth.saturating_sub(1);
        self.line(rule, "leave", next, at);
    }
}

/// Emits each rule entry and exit as a `tracing` event at TRACE level.
#[derive(Debug, Default)]
pub struct TracingTrace {
    depth: usize,
}

impl TracingTrace {
    /// Create a hook starting at depth zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Trace for TracingTrace {
    fn enter(&mut self, rule: Rule, next: Lookahead, at: Location) {
        tracing::trace!(rule = rule.name(), depth = self.depth, next = %next, at = %at, "enter");
        self.depth += 1;
    }

    fn leave(&mut self, rule: Rule, matched: bool, next: Lookahead, at: Location) {
        self.depth = self.depth.saturating_sub(1);
        tracing::trace!(
            rule = rule.name(),
            depth = self.depth,
            matched,
            next = %next,
            at = %at,
            "leave"
        );
    }
}
