//! Finite Automaton: deterministic finite automata with validated construction
//!
//! An automaton is assembled from five components: a state set, an alphabet,
//! an initial state, the accepting states and an ordered list of transition
//! functions. Construction validates all of them before any state is touched,
//! then wires each transition into its source state. Computation is a single
//! read-only walk over the wired graph.
//!
//! # Core Concepts
//!
//! - **States**: owned by a `StateArena` and referenced by `StateId` handles,
//!   so identity never depends on a state's output value
//! - **Validation**: pure fail-fast checks, plus an accumulating diagnostic pass
//! - **Computation**: returns the final state's output or the reason the input
//!   was rejected
//!
//! # Example
//!
//! ```rust
//! use finite_automaton::builder::AutomatonBuilder;
//! use finite_automaton::core::StateArena;
//! use finite_automaton::transitions;
//!
//! // Remainder of a binary number divided by three.
//! let mut states = StateArena::new();
//! let s0 = states.add("0");
//! let s1 = states.add("1");
//! let s2 = states.add("2");
//!
//! let mod_three = AutomatonBuilder::new()
//!     .states(states)
//!     .alphabet("01".chars().collect())
//!     .initial(s0)
//!     .accepting([s0, s1, s2])
//!     .transitions(transitions![
//!         s0, '0' => s0;
//!         s0, '1' => s1;
//!         s1, '0' => s2;
//!         s1, '1' => s0;
//!         s2, '0' => s1;
//!         s2, '1' => s2;
//!     ])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(mod_three.compute("1001"), Ok(&"0"));
//! assert_eq!(mod_three.compute("10110"), Ok(&"1"));
//! assert_eq!(mod_three.compute("101100"), Ok(&"2"));
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod validation;

// Re-export commonly used types
pub use crate::automaton::{Automaton, ComputeError};
pub use crate::builder::{AutomatonBuilder, BuildError, StateRole};
pub use crate::core::{Alphabet, State, StateArena, StateId, Symbol, Trace, TransitionFunction};
