//! Input symbols and the alphabet they are drawn from.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single-character input token.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::Symbol;
///
/// let zero = Symbol::from('0');
/// assert_eq!(zero.as_char(), '0');
/// assert_eq!(zero.to_string(), "0");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Symbol(char);

impl Symbol {
    /// Wrap a character
    pub fn new(c: char) -> Self {
        Symbol(c)
    }

    /// Get the wrapped character
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The finite set of symbols an automaton accepts as input.
///
/// Built from any iterator of `char` or [`Symbol`]:
///
/// ```rust
/// use finite_automaton::core::{Alphabet, Symbol};
///
/// let binary: Alphabet = "01".chars().collect();
/// assert!(binary.contains(Symbol::from('1')));
/// assert!(!binary.contains(Symbol::from('2')));
/// assert_eq!(binary.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: HashSet<Symbol>,
}

impl Alphabet {
    /// Create an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol. Returns `false` if it was already present.
    pub fn insert(&mut self, symbol: impl Into<Symbol>) -> bool {
        self.symbols.insert(symbol.into())
    }

    /// Check membership
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the alphabet has no symbol
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in ascending order.
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.symbols.iter().copied().collect();
        symbols.sort();
        symbols
    }
}

impl FromIterator<Symbol> for Alphabet {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter().map(Symbol::from).collect()
    }
}
