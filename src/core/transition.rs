//! Transition function descriptors.

use super::state::StateId;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// Binding of (source state, input symbol) to a target state.
///
/// A descriptor only; it does not touch any state. The automaton wires it
/// into the source state's table during construction.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::{StateArena, Symbol, TransitionFunction};
///
/// let mut arena = StateArena::new();
/// let s0 = arena.add("0");
/// let s1 = arena.add("1");
///
/// let delta = TransitionFunction::new(s0, '1', s1);
/// assert_eq!(delta.source(), s0);
/// assert_eq!(delta.symbol(), Symbol::from('1'));
/// assert_eq!(delta.target(), s1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TransitionFunction {
    source: StateId,
    symbol: Symbol,
    target: StateId,
}

impl TransitionFunction {
    /// Bind `source` on `symbol` to `target`.
    pub fn new(source: StateId, symbol: impl Into<Symbol>, target: StateId) -> Self {
        Self {
            source,
            symbol: symbol.into(),
            target,
        }
    }

    /// Get the source state
    pub fn source(&self) -> StateId {
        self.source
    }

    /// Get the input symbol
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Get the target state
    pub fn target(&self) -> StateId {
        self.target
    }
}
