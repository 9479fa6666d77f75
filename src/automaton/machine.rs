//! Deterministic finite automaton: validated construction and computation.

use crate::automaton::error::ComputeError;
use crate::builder::error::BuildError;
use crate::core::{Alphabet, StateArena, StateId, Step, Symbol, Trace, TransitionFunction};
use crate::validation;
use std::collections::HashSet;
use tracing::{debug, trace};

/// A deterministic finite automaton over outputs of type `O`.
///
/// An automaton starts out unformed. [`initialize`](Self::initialize)
/// validates all five components before touching any state, then wires each
/// transition function into its source state. Once formed it is read-only:
/// [`compute`](Self::compute) only traverses the wired graph.
///
/// # Example
///
/// ```rust
/// use finite_automaton::automaton::Automaton;
/// use finite_automaton::core::{StateArena, TransitionFunction};
/// use finite_automaton::ComputeError;
///
/// let mut states = StateArena::new();
/// let even = states.add("even");
/// let odd = states.add("odd");
///
/// let mut parity = Automaton::new();
/// parity
///     .initialize(
///         states,
///         "ab".chars().collect(),
///         even,
///         &[even, odd],
///         vec![
///             TransitionFunction::new(even, 'a', odd),
///             TransitionFunction::new(odd, 'a', even),
///             TransitionFunction::new(even, 'b', even),
///             TransitionFunction::new(odd, 'b', odd),
///         ],
///     )
///     .unwrap();
///
/// assert_eq!(parity.compute("abab"), Ok(&"even"));
/// assert_eq!(parity.compute("bab"), Ok(&"odd"));
/// assert!(matches!(parity.compute("abc"), Err(ComputeError::InvalidInput { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton<O> {
    states: Option<StateArena<O>>,
    alphabet: Alphabet,
    initial: Option<StateId>,
    accepting: Option<HashSet<StateId>>,
    transition_functions: Vec<TransitionFunction>,
}

impl<O> Automaton<O> {
    /// Create an unformed automaton. Computing on it fails with
    /// [`ComputeError::NotInitialized`].
    pub fn new() -> Self {
        Self {
            states: None,
            alphabet: Alphabet::new(),
            initial: None,
            accepting: None,
            transition_functions: Vec::new(),
        }
    }

    /// Validate the components and wire the transitions.
    ///
    /// Checks run in order: accepting states, initial state, transition
    /// functions. The first violation is returned and `self` is left exactly
    /// as it was. Entries a caller already placed in a state's table are not
    /// checked; a walk that reaches a foreign handle is rejected at run time.
    ///
    /// On success transition functions are wired in the given order. When two
    /// functions share a (source, symbol) pair the later one wins.
    pub fn initialize(
        &mut self,
        mut states: StateArena<O>,
        alphabet: Alphabet,
        initial: StateId,
        accepting: &[StateId],
        functions: Vec<TransitionFunction>,
    ) -> Result<(), BuildError> {
        validation::accepting_states_valid(&states, accepting)?;
        validation::initial_state_valid(&states, initial)?;
        validation::transition_functions_valid(&states, &alphabet, &functions)?;

        for function in &functions {
            // Sources were checked above, so indexing cannot miss.
            let previous =
                states[function.source()].add_transition(function.symbol(), function.target());
            if let Some(previous) = previous.filter(|&p| p != function.target()) {
                debug!(
                    source = %function.source(),
                    symbol = %function.symbol(),
                    previous = %previous,
                    target = %function.target(),
                    "transition overwritten by later function"
                );
            }
        }

        debug!(
            states = states.len(),
            symbols = alphabet.len(),
            accepting = accepting.len(),
            transitions = functions.len(),
            initial = %initial,
            "finite automaton initialized"
        );

        self.states = Some(states);
        self.alphabet = alphabet;
        self.initial = Some(initial);
        self.accepting = Some(accepting.iter().copied().collect());
        self.transition_functions = functions;

        Ok(())
    }

    /// Whether the automaton has been successfully initialized.
    pub fn is_initialized(&self) -> bool {
        self.states.is_some() && self.initial.is_some() && self.accepting.is_some()
    }

    /// Run `input` and return the output of the accepting final state.
    ///
    /// Each character of `input` is one symbol.
    pub fn compute(&self, input: &str) -> Result<&O, ComputeError> {
        self.compute_symbols(input.chars().map(Symbol::from))
    }

    /// Run a sequence of symbols and return the output of the accepting
    /// final state.
    pub fn compute_symbols<I>(&self, input: I) -> Result<&O, ComputeError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let (states, initial, accepting) = self.parts()?;
        let last = self.walk(states, initial, input, |_| {})?;

        if !accepting.contains(&last) {
            debug!(state = %last, "input rejected: final state not accepting");
            return Err(ComputeError::InvalidFinalState { state: last });
        }

        // Accepting states are members of the arena.
        Ok(states[last].output())
    }

    /// Run `input` and record every step taken.
    ///
    /// Fails like [`compute`](Self::compute) on an unformed automaton, an
    /// invalid symbol or a missing transition. A walk that ends outside the
    /// accepting set is not an error here; it is reported through
    /// [`Trace::is_accepted`].
    pub fn trace(&self, input: &str) -> Result<Trace, ComputeError> {
        let (states, initial, accepting) = self.parts()?;
        let mut record = Trace::new(initial);
        let last = self.walk(states, initial, input.chars().map(Symbol::from), |step| {
            record.record(step)
        })?;

        Ok(record.finish(accepting.contains(&last)))
    }

    /// Whether `input` is accepted.
    pub fn accepts(&self, input: &str) -> bool {
        self.compute(input).is_ok()
    }

    /// The state set, if initialized.
    pub fn states(&self) -> Option<&StateArena<O>> {
        self.states.as_ref()
    }

    /// Get the alphabet (empty until initialized)
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Get the initial state, if initialized
    pub fn initial(&self) -> Option<StateId> {
        self.initial
    }

    /// Check if `state` is in the accepting set
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting
            .as_ref()
            .is_some_and(|accepting| accepting.contains(&state))
    }

    /// The transition functions wired at construction, in input order.
    pub fn transition_functions(&self) -> &[TransitionFunction] {
        &self.transition_functions
    }

    fn parts(&self) -> Result<(&StateArena<O>, StateId, &HashSet<StateId>), ComputeError> {
        match (&self.states, self.initial, &self.accepting) {
            (Some(states), Some(initial), Some(accepting)) => Ok((states, initial, accepting)),
            _ => Err(ComputeError::NotInitialized),
        }
    }

    fn walk<I, F>(
        &self,
        states: &StateArena<O>,
        initial: StateId,
        input: I,
        mut on_step: F,
    ) -> Result<StateId, ComputeError>
    where
        I: IntoIterator<Item = Symbol>,
        F: FnMut(Step),
    {
        let mut current = initial;

        for (position, symbol) in input.into_iter().enumerate() {
            if !self.alphabet.contains(symbol) {
                debug!(%symbol, position, "input rejected: symbol not in alphabet");
                return Err(ComputeError::InvalidInput { symbol, position });
            }

            let next = states
                .get(current)
                .and_then(|state| state.transition(symbol))
                .ok_or_else(|| {
                    debug!(state = %current, %symbol, position, "input rejected: no transition");
                    ComputeError::InvalidTransition {
                        state: current,
                        symbol,
                        position,
                    }
                })?;

            trace!(from = %current, %symbol, to = %next, "step");
            on_step(Step {
                from: current,
                symbol,
                to: next,
            });
            current = next;
        }

        Ok(current)
    }
}

impl<O> Default for Automaton<O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::error::StateRole;
    use std::collections::HashMap;

    struct TwoStates {
        automaton: Automaton<&'static str>,
        s0: StateId,
        s1: StateId,
    }

    // s0 --0--> s1 --1--> s0, only s0 accepting
    fn two_state_automaton() -> TwoStates {
        let mut states = StateArena::new();
        let s0 = states.add("0");
        let s1 = states.add("1");

        let mut automaton = Automaton::new();
        automaton
            .initialize(
                states,
                "01".chars().collect(),
                s0,
                &[s0],
                vec![
                    TransitionFunction::new(s0, '0', s1),
                    TransitionFunction::new(s1, '1', s0),
                ],
            )
            .unwrap();

        TwoStates { automaton, s0, s1 }
    }

    #[test]
    fn initialize_wires_every_function() {
        let t = two_state_automaton();
        let states = t.automaton.states().unwrap();

        assert!(t.automaton.is_initialized());
        assert_eq!(
            states.get(t.s0).unwrap().transition(Symbol::from('0')),
            Some(t.s1)
        );
        assert_eq!(
            states.get(t.s1).unwrap().transition(Symbol::from('1')),
            Some(t.s0)
        );
        assert_eq!(t.automaton.transition_functions().len(), 2);
        assert_eq!(t.automaton.initial(), Some(t.s0));
        assert!(t.automaton.is_accepting(t.s0));
        assert!(!t.automaton.is_accepting(t.s1));
    }

    #[test]
    fn initialize_rejects_unknown_accepting_state() {
        let mut states = StateArena::new();
        let s0 = states.add("0");
        let mut elsewhere = StateArena::new();
        let s2 = elsewhere.add("2");

        let mut automaton = Automaton::new();
        let result = automaton.initialize(states, "01".chars().collect(), s0, &[s2], vec![]);

        assert!(matches!(
            result,
            Err(BuildError::UnknownState {
                role: StateRole::Accepting,
                ..
            })
        ));
        assert!(!automaton.is_initialized());
    }

    #[test]
    fn initialize_rejects_unknown_initial_state() {
        let mut states = StateArena::new();
        let s0 = states.add("0");
        let mut elsewhere = StateArena::new();
        let s2 = elsewhere.add("2");

        let mut automaton = Automaton::new();
        let result = automaton.initialize(states, "01".chars().collect(), s2, &[s0], vec![]);

        assert!(matches!(
            result,
            Err(BuildError::UnknownState {
                role: StateRole::Initial,
                ..
            })
        ));
        assert_eq!(automaton.compute(""), Err(ComputeError::NotInitialized));
    }

    #[test]
    fn accepting_states_are_checked_before_initial_state() {
        let mut states: StateArena<()> = StateArena::new();
        states.add(());
        let mut elsewhere = StateArena::new();
        let foreign = elsewhere.add(());

        let mut automaton = Automaton::new();
        let result = automaton.initialize(states, Alphabet::new(), foreign, &[foreign], vec![]);

        assert!(matches!(
            result,
            Err(BuildError::UnknownState {
                role: StateRole::Accepting,
                ..
            })
        ));
    }

    #[test]
    fn initialize_rejects_symbol_outside_alphabet() {
        let mut states = StateArena::new();
        let s0 = states.add("0");
        let s1 = states.add("1");

        let mut automaton = Automaton::new();
        let result = automaton.initialize(
            states,
            "01".chars().collect(),
            s0,
            &[s0],
            vec![
                TransitionFunction::new(s0, '0', s1),
                TransitionFunction::new(s1, '2', s0),
            ],
        );

        assert_eq!(
            result,
            Err(BuildError::InvalidSymbol {
                symbol: Symbol::from('2'),
            })
        );
        assert!(!automaton.is_initialized());
    }

    #[test]
    fn failed_initialize_keeps_previous_automaton() {
        let mut t = two_state_automaton();

        let mut states = StateArena::new();
        let s0 = states.add("other");
        let mut elsewhere = StateArena::new();
        let foreign = elsewhere.add("foreign");
        let result = t
            .automaton
            .initialize(states, Alphabet::new(), s0, &[foreign], vec![]);

        assert!(result.is_err());
        assert_eq!(t.automaton.compute("01"), Ok(&"0"));
    }

    #[test]
    fn duplicate_transition_last_wins() {
        let mut states = StateArena::new();
        let s0 = states.add("0");
        let s1 = states.add("1");
        let s2 = states.add("2");

        let mut automaton = Automaton::new();
        automaton
            .initialize(
                states,
                "a".chars().collect(),
                s0,
                &[s1, s2],
                vec![
                    TransitionFunction::new(s0, 'a', s1),
                    TransitionFunction::new(s0, 'a', s2),
                ],
            )
            .unwrap();

        assert_eq!(automaton.compute("a"), Ok(&"2"));
    }

    #[test]
    fn prefilled_symbol_outside_alphabet_still_builds() {
        let mut states = StateArena::new();
        let s0 = states.add("0");
        let s1 = states.add("1");
        states[s0].add_transition(Symbol::from('x'), s1);

        let mut automaton = Automaton::new();
        let result = automaton.initialize(
            states,
            "01".chars().collect(),
            s0,
            &[s0, s1],
            vec![TransitionFunction::new(s0, '0', s1)],
        );

        assert!(result.is_ok());
        assert_eq!(automaton.compute("0"), Ok(&"1"));
        assert!(matches!(
            automaton.compute("x"),
            Err(ComputeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn prefilled_foreign_target_is_rejected_at_run_time() {
        let mut states = StateArena::new();
        let s0 = states.add("0");
        let mut elsewhere = StateArena::new();
        let foreign = elsewhere.add("foreign");
        let mut table = HashMap::new();
        table.insert(Symbol::from('0'), foreign);
        states[s0].initialize("0", table);

        let mut automaton = Automaton::new();
        automaton
            .initialize(states, "01".chars().collect(), s0, &[s0], vec![])
            .unwrap();

        assert_eq!(
            automaton.compute("0"),
            Err(ComputeError::InvalidFinalState { state: foreign })
        );
        assert_eq!(
            automaton.compute("01"),
            Err(ComputeError::InvalidTransition {
                state: foreign,
                symbol: Symbol::from('1'),
                position: 1,
            })
        );
    }

    #[test]
    fn compute_accepts_valid_input() {
        let t = two_state_automaton();
        assert_eq!(t.automaton.compute("01"), Ok(&"0"));
    }

    #[test]
    fn compute_rejects_symbol_outside_alphabet() {
        let t = two_state_automaton();
        let result = t.automaton.compute("21");

        assert_eq!(
            result,
            Err(ComputeError::InvalidInput {
                symbol: Symbol::from('2'),
                position: 0,
            })
        );
        assert!(result.unwrap_err().to_string().contains("Invalid input"));
    }

    #[test]
    fn compute_rejects_missing_transition() {
        let t = two_state_automaton();
        let result = t.automaton.compute("00");

        assert_eq!(
            result,
            Err(ComputeError::InvalidTransition {
                state: t.s1,
                symbol: Symbol::from('0'),
                position: 1,
            })
        );
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid transition"));
    }

    #[test]
    fn compute_rejects_non_accepting_final_state() {
        let t = two_state_automaton();
        let result = t.automaton.compute("0");

        assert_eq!(result, Err(ComputeError::InvalidFinalState { state: t.s1 }));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid final state"));
    }

    #[test]
    fn compute_on_unformed_automaton_fails() {
        let automaton: Automaton<String> = Automaton::default();
        let result = automaton.compute("10");

        assert_eq!(result, Err(ComputeError::NotInitialized));
        assert!(result.unwrap_err().to_string().contains("initialized"));
    }

    #[test]
    fn empty_input_evaluates_initial_state() {
        let t = two_state_automaton();
        assert_eq!(t.automaton.compute(""), Ok(&"0"));
    }

    #[test]
    fn invalid_symbol_is_reported_before_missing_transition() {
        let t = two_state_automaton();
        // s0 has no '1' transition, so the walk stops before reaching 'x'.
        let result = t.automaton.compute("1x");
        assert!(matches!(result, Err(ComputeError::InvalidTransition { .. })));

        let result = t.automaton.compute("x1");
        assert!(matches!(result, Err(ComputeError::InvalidInput { .. })));
    }

    #[test]
    fn compute_does_not_change_automaton() {
        let t = two_state_automaton();
        let _ = t.automaton.compute("00");
        let _ = t.automaton.compute("0");

        assert_eq!(t.automaton.compute("0101"), Ok(&"0"));
    }

    #[test]
    fn compute_symbols_matches_compute() {
        let t = two_state_automaton();
        let symbols = vec![Symbol::from('0'), Symbol::from('1')];

        assert_eq!(t.automaton.compute_symbols(symbols), t.automaton.compute("01"));
    }

    #[test]
    fn trace_records_path() {
        let t = two_state_automaton();
        let trace = t.automaton.trace("010").unwrap();

        assert_eq!(trace.path(), vec![t.s0, t.s1, t.s0, t.s1]);
        assert_eq!(trace.final_state(), t.s1);
        assert!(!trace.is_accepted());
        assert_eq!(trace.steps()[1].symbol, Symbol::from('1'));
    }

    #[test]
    fn trace_fails_on_missing_transition() {
        let t = two_state_automaton();
        assert!(matches!(
            t.automaton.trace("1"),
            Err(ComputeError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn accepts_reflects_compute() {
        let t = two_state_automaton();
        assert!(t.automaton.accepts("0101"));
        assert!(!t.automaton.accepts("010"));
        assert!(!Automaton::<()>::new().accepts(""));
    }
}
