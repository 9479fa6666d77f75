//! Errors raised while computing over an input sequence.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// Reasons an input sequence is rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComputeError {
    #[error("Finite automaton has not been initialized")]
    NotInitialized,

    #[error("Invalid input '{symbol}' at position {position}")]
    InvalidInput { symbol: Symbol, position: usize },

    #[error("Invalid transition from {state} on '{symbol}' at position {position}")]
    InvalidTransition {
        state: StateId,
        symbol: Symbol,
        position: usize,
    },

    #[error("Invalid final state {state}: not in the set of accepting states")]
    InvalidFinalState { state: StateId },
}
