//! Errors raised while constructing an automaton.

use crate::core::{StateId, Symbol};
use std::fmt;
use thiserror::Error;

/// Which construction argument a state reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateRole {
    Initial,
    Accepting,
    TransitionSource,
    TransitionTarget,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self {
            Self::Initial => "initial state",
            Self::Accepting => "accepting state",
            Self::TransitionSource => "transition source",
            Self::TransitionTarget => "transition target",
        };
        f.write_str(role)
    }
}

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Required argument '{argument}' not provided")]
    InvalidArgument { argument: &'static str },

    #[error("Unknown {role} {state}: not in the set of states")]
    UnknownState { role: StateRole, state: StateId },

    #[error("Invalid symbol '{symbol}': not in the alphabet")]
    InvalidSymbol { symbol: Symbol },
}
