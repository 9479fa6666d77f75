//! Builder for constructing automata.

use crate::automaton::Automaton;
use crate::builder::error::BuildError;
use crate::core::{Alphabet, StateArena, StateId, Symbol, TransitionFunction};
use crate::validation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing automata with a fluent API.
///
/// The state set, the initial state and the accepting states are required;
/// leaving any of them out makes [`build`](Self::build) fail with
/// [`BuildError::InvalidArgument`]. The alphabet and the transition list
/// default to empty.
pub struct AutomatonBuilder<O> {
    states: Option<StateArena<O>>,
    alphabet: Alphabet,
    initial: Option<StateId>,
    accepting: Option<Vec<StateId>>,
    transitions: Vec<TransitionFunction>,
}

impl<O> AutomatonBuilder<O> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: None,
            alphabet: Alphabet::new(),
            initial: None,
            accepting: None,
            transitions: Vec::new(),
        }
    }

    /// Set the state set (required).
    pub fn states(mut self, states: StateArena<O>) -> Self {
        self.states = Some(states);
        self
    }

    /// Replace the alphabet.
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Add one symbol to the alphabet.
    pub fn symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.alphabet.insert(symbol);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the accepting states (required, may be empty).
    pub fn accepting<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = StateId>,
    {
        self.accepting = Some(states.into_iter().collect());
        self
    }

    /// Add one accepting state.
    pub fn accept(mut self, state: StateId) -> Self {
        self.accepting.get_or_insert_with(Vec::new).push(state);
        self
    }

    /// Add a transition function.
    pub fn transition(mut self, source: StateId, symbol: impl Into<Symbol>, target: StateId) -> Self {
        self.transitions.push(TransitionFunction::new(source, symbol, target));
        self
    }

    /// Add a pre-built transition function.
    pub fn add_transition(mut self, transition: TransitionFunction) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transition functions at once, keeping their order.
    pub fn transitions(mut self, transitions: Vec<TransitionFunction>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Report every problem that would stop [`build`](Self::build), instead
    /// of just the first.
    pub fn diagnose(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        match (&self.states, self.initial, &self.accepting) {
            (Some(states), Some(initial), Some(accepting)) => validation::validate_all(
                states,
                &self.alphabet,
                initial,
                accepting,
                &self.transitions,
            ),
            (states, initial, accepting) => {
                let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();
                if states.is_none() {
                    checks.push(Validation::fail(BuildError::InvalidArgument {
                        argument: "states",
                    }));
                }
                if initial.is_none() {
                    checks.push(Validation::fail(BuildError::InvalidArgument {
                        argument: "initial",
                    }));
                }
                if accepting.is_none() {
                    checks.push(Validation::fail(BuildError::InvalidArgument {
                        argument: "accepting",
                    }));
                }
                Validation::all_vec(checks).map(|_| ())
            }
        }
    }

    /// Build the automaton.
    /// Returns the first missing argument or validation failure.
    pub fn build(self) -> Result<Automaton<O>, BuildError> {
        let states = self.states.ok_or(BuildError::InvalidArgument {
            argument: "states",
        })?;
        let initial = self.initial.ok_or(BuildError::InvalidArgument {
            argument: "initial",
        })?;
        let accepting = self.accepting.ok_or(BuildError::InvalidArgument {
            argument: "accepting",
        })?;

        let mut automaton = Automaton::new();
        automaton.initialize(states, self.alphabet, initial, &accepting, self.transitions)?;

        Ok(automaton)
    }
}

impl<O> Default for AutomatonBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}
