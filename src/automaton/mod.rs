//! Automaton construction and computation.
//!
//! - **Construction**: validate every component, then wire transitions
//! - **Computation**: a single linear walk from the initial state
//! - **Tracing**: the same walk, recorded step by step
//!
//! Construction errors are [`BuildError`](crate::BuildError)s; computation
//! errors are [`ComputeError`]s.

mod error;
mod machine;

pub use error::ComputeError;
pub use machine::Automaton;
