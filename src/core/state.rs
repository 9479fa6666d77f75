//! Automaton states and the arena that owns them.
//!
//! States are identified by the [`StateId`] handle the arena hands out when
//! the state is added, never by their output value. Two states with the same
//! output remain distinct.

use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use uuid::Uuid;

/// Handle to a state stored in a [`StateArena`].
///
/// A handle carries the identity of the arena that issued it, so a handle
/// from one arena is never a member of another.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StateId {
    arena: Uuid,
    index: usize,
}

impl StateId {
    /// Position of the state inside its arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.index)
    }
}

/// A node of the automaton: an opaque output and its outgoing transitions.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::{StateArena, Symbol};
///
/// let mut arena = StateArena::new();
/// let even = arena.add("even");
/// let odd = arena.add("odd");
///
/// let state = arena.get_mut(even).unwrap();
/// state.add_transition(Symbol::from('1'), odd);
///
/// assert_eq!(arena.get(even).unwrap().transition(Symbol::from('1')), Some(odd));
/// assert_eq!(arena.get(odd).unwrap().output(), &"odd");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct State<O> {
    output: O,
    transitions: HashMap<Symbol, StateId>,
}

impl<O> State<O> {
    /// Create a state with an empty transition table.
    pub fn new(output: O) -> Self {
        Self {
            output,
            transitions: HashMap::new(),
        }
    }

    /// Replace both the output and the transition table.
    ///
    /// Re-initializing a state is allowed; prior content is discarded.
    pub fn initialize(&mut self, output: O, transitions: HashMap<Symbol, StateId>) {
        self.output = output;
        self.transitions = transitions;
    }

    /// Get the state's output (pure)
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Insert or overwrite the transition for `symbol`.
    ///
    /// Returns the previous target when an existing entry was replaced.
    /// The symbol is not checked against any alphabet.
    pub fn add_transition(&mut self, symbol: Symbol, target: StateId) -> Option<StateId> {
        self.transitions.insert(symbol, target)
    }

    /// Target for `symbol`, if the table has one
    pub fn transition(&self, symbol: Symbol) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }

    /// Get the whole transition table
    pub fn transitions(&self) -> &HashMap<Symbol, StateId> {
        &self.transitions
    }
}

/// Owning collection of states. Its contents are the automaton's state set.
#[derive(Clone, Debug)]
pub struct StateArena<O> {
    id: Uuid,
    states: Vec<State<O>>,
}

impl<O> StateArena<O> {
    /// Create an empty arena with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            states: Vec::new(),
        }
    }

    /// Add a fresh state with the given output and return its handle.
    pub fn add(&mut self, output: O) -> StateId {
        self.add_state(State::new(output))
    }

    /// Add a prepared state and return its handle.
    pub fn add_state(&mut self, state: State<O>) -> StateId {
        let id = StateId {
            arena: self.id,
            index: self.states.len(),
        };
        self.states.push(state);
        id
    }

    /// Whether `id` was issued by this arena.
    pub fn contains(&self, id: StateId) -> bool {
        id.arena == self.id && id.index < self.states.len()
    }

    /// Get a state by handle; `None` for a foreign handle
    pub fn get(&self, id: StateId) -> Option<&State<O>> {
        if id.arena != self.id {
            return None;
        }
        self.states.get(id.index)
    }

    /// Mutable variant of [`get`](Self::get)
    pub fn get_mut(&mut self, id: StateId) -> Option<&mut State<O>> {
        if id.arena != self.id {
            return None;
        }
        self.states.get_mut(id.index)
    }

    /// Number of states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the arena holds no state
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Handles of all states, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.states.len()).map(move |index| StateId {
            arena: self.id,
            index,
        })
    }

    /// Iterate `(handle, state)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &State<O>)> + '_ {
        self.ids().zip(self.states.iter())
    }
}

/// Direct access by handle.
///
/// # Panics
///
/// Panics if `id` was issued by another arena. Use
/// [`StateArena::get`] when membership is not already known.
impl<O> Index<StateId> for StateArena<O> {
    type Output = State<O>;

    fn index(&self, id: StateId) -> &State<O> {
        match self.get(id) {
            Some(state) => state,
            None => panic!("state {id} is not a member of this arena"),
        }
    }
}

impl<O> IndexMut<StateId> for StateArena<O> {
    fn index_mut(&mut self, id: StateId) -> &mut State<O> {
        match self.get_mut(id) {
            Some(state) => state,
            None => panic!("state {id} is not a member of this arena"),
        }
    }
}

impl<O> Default for StateArena<O> {
    fn default() -> Self {
        Self::new()
    }
}
