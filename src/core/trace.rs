//! Record of a computation's walk through the transition graph.

use super::state::StateId;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// One consumed symbol and the move it caused.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Step {
    /// The state the symbol was read in
    pub from: StateId,
    /// The symbol consumed
    pub symbol: Symbol,
    /// The state moved to
    pub to: StateId,
}

/// Ordered record of a full walk over an input sequence.
///
/// Produced by [`Automaton::trace`](crate::automaton::Automaton::trace).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Trace {
    initial: StateId,
    steps: Vec<Step>,
    accepted: bool,
}

impl Trace {
    pub(crate) fn new(initial: StateId) -> Self {
        Self {
            initial,
            steps: Vec::new(),
            accepted: false,
        }
    }

    pub(crate) fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn finish(mut self, accepted: bool) -> Self {
        self.accepted = accepted;
        self
    }

    /// Get the state the walk started in
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Get the recorded steps, in order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The state the walk ended in. For empty input this is the initial state.
    pub fn final_state(&self) -> StateId {
        self.steps.last().map_or(self.initial, |step| step.to)
    }

    /// Whether the final state is accepting.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// States visited in order: the initial state, then the target of each step.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(self.initial);
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }

    /// Number of symbols consumed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no symbol was consumed
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
