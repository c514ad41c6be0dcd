//! The two-symbol Morse alphabet.

use std::fmt;

/// Character written for a dot.
pub const DOT: char = '.';
/// Character written for a dash.
pub const DASH: char = '-';

/// One Morse symbol: a trie edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short mark, left child in the trie
    Dot,
    /// Long mark, right child in the trie
    Dash,
}

impl Symbol {
    /// Recognize a code character. Anything other than `.` or `-` is `None`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            DOT => Some(Symbol::Dot),
            DASH => Some(Symbol::Dash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => DOT,
            Symbol::Dash => DASH,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Symbols of a written code, in order. Unrecognized characters are skipped.
pub fn symbols(code: &str) -> impl Iterator<Item = Symbol> + '_ {
    code.chars().filter_map(Symbol::from_char)
}
