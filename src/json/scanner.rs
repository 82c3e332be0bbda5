//! Single-lookahead scanner.
//!
//! Pulls code points one at a time from a [`CharSource`] into a single
//! lookahead cell and tracks the (row, column) of that cell for diagnostics.
//! The grammar engine consumes input exclusively through this type.

use std::fmt;

/// Supplies code points one at a time, or `None` at end of input.
pub trait CharSource {
    /// Read the next code point.
    fn next_char(&mut self) -> Option<char>;
}

impl<I> CharSource for I
where
    I: Iterator<Item = char>,
{
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// The next unconsumed code point, or the end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookahead {
    /// A code point not yet consumed.
    Char(char),
    /// The source is exhausted.
    Eof,
}

impl Lookahead {
    /// The code point, unless at end of input.
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            Self::Eof => None,
        }
    }
}

impl fmt::Display for Lookahead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::Eof => f.write_str("EOF"),
        }
    }
}

/// Position of the lookahead cell.
///
/// Rows are 1-based. The column counts advances since the last row break,
/// so the first code point of the input sits at column 1 and a row-breaking
/// code point sits at column 0 of the row it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Row, starting at 1.
    pub row: u64,
    /// Column within the row.
    pub col: u64,
}

impl Location {
    const fn start() -> Self {
        Self { row: 1, col: 0 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Whitespace as understood by the scanner.
///
/// Unicode `White_Space` minus the no-break spaces, which are printable
/// characters as far as the grammar is concerned.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && !matches!(c, '\u{a0}' | '\u{2007}' | '\u{202f}')
}

/// Blank whitespace: separates tokens on the same row.
pub fn is_blank(c: char) -> bool {
    matches!(
        c,
        ' '
            | '\t'
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200a}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

/// Any whitespace that is not blank starts a new row. That covers line feed
/// and carriage return, but also vertical tab, form feed, NEL and the Unicode
/// line and paragraph separators.
pub fn is_row_break(c: char) -> bool {
    is_whitespace(c) && !is_blank(c)
}

/// Single-code-point lookahead over a [`CharSource`].
pub struct Scanner<S> {
    source: S,
    next: Lookahead,
    location: Location,
}

impl<S: CharSource> Scanner<S> {
    /// Create a scanner and load the first code point into the lookahead.
    pub fn new(source: S) -> Self {
        let mut scanner = Self {
            source,
            next: Lookahead::Eof,
            location: Location::start(),
        };
        scanner.pull();
        scanner
    }

    /// The current lookahead.
    pub fn peek(&self) -> Lookahead {
        self.next
    }

    /// Location of the current lookahead.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Whether the source is exhausted.
    pub fn is_eof(&self) -> bool {
        self.next == Lookahead::Eof
    }

    fn pull(&mut self) {
        self.next = match self.source.next_char() {
            Some(c) => Lookahead::Char(c),
            None => Lookahead::Eof,
        };
        self.location.col += 1;
        if let Lookahead::Char(c) = self.next {
            if is_row_break(c) {
                self.location.col = 0;
                self.location.row += 1;
            }
        }
    }

    /// Consume the lookahead and load the next code point.
    ///
    /// No-op once end of input has been reached.
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pull();
        }
    }

    /// Advance once, then keep advancing past whitespace.
    pub fn advance_skipping_whitespace(&mut self) {
        self.advance();
        self.skip_whitespace();
    }

    /// Advance while the lookahead is whitespace.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.next, Lookahead::Char(c) if is_whitespace(c)) {
            self.advance();
        }
    }

    /// Consume the lookahead if it equals `expected`.
    pub fn matches(&mut self, expected: char) -> bool {
        self.matches_with(|c| c == expected)
    }

    /// Consume one code point unless it is in `excluded` or at end of input.
    pub fn matches_none_of(&mut self, excluded: &[char]) -> bool {
        self.matches_with(|c| !excluded.contains(&c))
    }

    /// Consume the lookahead if it satisfies `accept`.
    pub fn matches_with(&mut self, accept: impl FnOnce(char) -> bool) -> bool {
        match self.next {
            Lookahead::Char(c) if accept(c) => {
                self.advance();
                true
            }
            _ => false,
        }
    }
}
