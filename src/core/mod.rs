//! Core automaton data types.
//!
//! This module contains the building blocks the automaton is assembled from:
//! - Symbols and the alphabet they belong to
//! - States, owned by an arena and referenced by handle
//! - Transition function descriptors
//! - Traces of a computation's walk

mod state;
mod symbol;
mod trace;
mod transition;

pub use state::{State, StateArena, StateId};
pub use symbol::{Alphabet, Symbol};
pub use trace::{Step, Trace};
pub use transition::TransitionFunction;
