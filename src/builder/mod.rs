//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a macro for assembling automata
//! with minimal boilerplate. Both funnel into the same validate-then-wire
//! construction as [`Automaton::initialize`](crate::automaton::Automaton::initialize).

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::{BuildError, StateRole};
