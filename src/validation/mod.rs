//! Construction-time checks over the raw automaton components.
//!
//! Every check is pure: it borrows the components and never mutates a state.
//! The individual checks are fail-fast and report the first violation found,
//! in argument order. [`validate_all`] runs the same checks but accumulates
//! every violation using Stillwater's `Validation`, for diagnostics.
//!
//! # Example
//!
//! ```rust
//! use finite_automaton::core::{Alphabet, StateArena, TransitionFunction};
//! use finite_automaton::validation;
//! use finite_automaton::BuildError;
//!
//! let mut states = StateArena::new();
//! let s0 = states.add("0");
//! let s1 = states.add("1");
//! let alphabet: Alphabet = "01".chars().collect();
//!
//! assert!(validation::initial_state_valid(&states, s0).is_ok());
//! assert!(validation::accepting_states_valid(&states, &[s0, s1]).is_ok());
//!
//! let functions = vec![TransitionFunction::new(s0, '2', s1)];
//! let result = validation::transition_functions_valid(&states, &alphabet, &functions);
//! assert!(matches!(result, Err(BuildError::InvalidSymbol { .. })));
//! ```

use crate::builder::error::{BuildError, StateRole};
use crate::core::{Alphabet, StateArena, StateId, Symbol, TransitionFunction};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check that every accepting state is a member of `states`.
pub fn accepting_states_valid<O>(
    states: &StateArena<O>,
    accepting: &[StateId],
) -> Result<(), BuildError> {
    accepting
        .iter()
        .try_for_each(|&state| ensure_member(states, state, StateRole::Accepting))
}

/// Check that the initial state is a member of `states`.
pub fn initial_state_valid<O>(states: &StateArena<O>, initial: StateId) -> Result<(), BuildError> {
    ensure_member(states, initial, StateRole::Initial)
}

/// Check every transition function, in sequence order.
///
/// For each function the source is checked, then the target, then the symbol.
pub fn transition_functions_valid<O>(
    states: &StateArena<O>,
    alphabet: &Alphabet,
    functions: &[TransitionFunction],
) -> Result<(), BuildError> {
    functions
        .iter()
        .try_for_each(|function| transition_function_valid(states, alphabet, function))
}

/// Run every check and collect all violations instead of stopping at the first.
pub fn validate_all<O>(
    states: &StateArena<O>,
    alphabet: &Alphabet,
    initial: StateId,
    accepting: &[StateId],
    functions: &[TransitionFunction],
) -> Validation<(), NonEmptyVec<BuildError>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

    for &state in accepting {
        checks.push(lift(ensure_member(states, state, StateRole::Accepting)));
    }

    checks.push(lift(initial_state_valid(states, initial)));

    for function in functions {
        checks.push(lift(ensure_member(
            states,
            function.source(),
            StateRole::TransitionSource,
        )));
        checks.push(lift(ensure_member(
            states,
            function.target(),
            StateRole::TransitionTarget,
        )));
        checks.push(lift(ensure_symbol(alphabet, function.symbol())));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn transition_function_valid<O>(
    states: &StateArena<O>,
    alphabet: &Alphabet,
    function: &TransitionFunction,
) -> Result<(), BuildError> {
    ensure_member(states, function.source(), StateRole::TransitionSource)?;
    ensure_member(states, function.target(), StateRole::TransitionTarget)?;
    ensure_symbol(alphabet, function.symbol())
}

fn ensure_member<O>(
    states: &StateArena<O>,
    state: StateId,
    role: StateRole,
) -> Result<(), BuildError> {
    if states.contains(state) {
        Ok(())
    } else {
        Err(BuildError::UnknownState { role, state })
    }
}

fn ensure_symbol(alphabet: &Alphabet, symbol: Symbol) -> Result<(), BuildError> {
    if alphabet.contains(symbol) {
        Ok(())
    } else {
        Err(BuildError::InvalidSymbol { symbol })
    }
}

fn lift(result: Result<(), BuildError>) -> Validation<(), NonEmptyVec<BuildError>> {
    match result {
        Ok(()) => Validation::success(()),
        Err(error) => Validation::fail(error),
    }
}
