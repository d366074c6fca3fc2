use std::collections::BTreeSet;

use crate::AutomatonError;
use crate::FiniteAutomaton;
use crate::State;
use crate::Symbol;
use crate::TransitionTable;

/// Incrementally constructs a [FiniteAutomaton]. States and symbols used by a
/// transition are registered automatically, so only isolated states have to be
/// added explicitly.
#[derive(Default)]
pub struct AutomatonBuilder {
    states: BTreeSet<State>,
    alphabet: BTreeSet<Symbol>,
    transitions: TransitionTable,
    final_states: BTreeSet<State>,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state, returns true iff it was not known yet.
    pub fn add_state(&mut self, state: State) -> bool {
        self.states.insert(state)
    }

    /// Registers a symbol of the alphabet.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.alphabet.insert(symbol);
    }

    /// Registers the state and marks it as accepting.
    pub fn add_final_state(&mut self, state: State) {
        self.states.insert(state.clone());
        self.final_states.insert(state);
    }

    /// Adds a transition to the builder.
    pub fn add_transition(&mut self, from: State, symbol: Symbol, to: State) {
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.alphabet.insert(symbol.clone());

        self.transitions
            .entry(from)
            .or_default()
            .entry(symbol)
            .or_default()
            .insert(to);
    }

    /// Returns true iff a state with the given name has been registered.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains(name)
    }

    /// Returns the number of registered states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the automaton with the given initial state, which must have
    /// been registered.
    pub fn finish(self, initial_state: State) -> Result<FiniteAutomaton, AutomatonError> {
        FiniteAutomaton::new(
            self.states,
            self.alphabet,
            self.transitions,
            initial_state,
            self.final_states,
        )
    }
}
