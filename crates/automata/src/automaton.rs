use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use std::mem;

use itertools::Itertools;
use log::trace;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::State;
use crate::Symbol;

/// The transition relation, for every state and symbol the set of successor states.
pub type TransitionTable = BTreeMap<State, BTreeMap<Symbol, BTreeSet<State>>>;

/// Violations of the structure of an automaton, detected during construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("The initial state {0} is not a state of the automaton")]
    UnknownInitialState(State),

    #[error("The final state {0} is not a state of the automaton")]
    UnknownFinalState(State),

    #[error("The transition from {from} on {symbol} leaves from an unknown state")]
    UnknownSource { from: State, symbol: Symbol },

    #[error("The transition from {from} on {symbol} uses a symbol outside of the alphabet")]
    UnknownSymbol { from: State, symbol: Symbol },

    #[error("The transition {from} --[{symbol}]-> {to} enters an unknown state")]
    UnknownTarget { from: State, symbol: Symbol, to: State },
}

/// A (non)deterministic finite automaton with named states and symbols.
///
/// Determinism is not a structural property, see [FiniteAutomaton::is_deterministic].
/// Once constructed the automaton is never modified, conversions return new
/// automata.
#[derive(Clone, PartialEq, Eq)]
pub struct FiniteAutomaton {
    states: BTreeSet<State>,
    alphabet: BTreeSet<Symbol>,

    /// Only contains non-empty sets of successors.
    transitions: TransitionTable,

    initial_state: State,
    final_states: BTreeSet<State>,
}

impl FiniteAutomaton {
    /// Creates a new automaton from an explicit transition table.
    ///
    /// Every state and symbol used by the transitions, the initial state and
    /// the final states must be declared in `states` and `alphabet`. Empty
    /// sets of successors are the same as having no transition and are dropped.
    pub fn new(
        states: impl IntoIterator<Item = State>,
        alphabet: impl IntoIterator<Item = Symbol>,
        transitions: TransitionTable,
        initial_state: State,
        final_states: impl IntoIterator<Item = State>,
    ) -> Result<FiniteAutomaton, AutomatonError> {
        let states: BTreeSet<State> = states.into_iter().collect();
        let alphabet: BTreeSet<Symbol> = alphabet.into_iter().collect();
        let final_states: BTreeSet<State> = final_states.into_iter().collect();

        if !states.contains(&initial_state) {
            return Err(AutomatonError::UnknownInitialState(initial_state));
        }

        if let Some(state) = final_states.iter().find(|state| !states.contains(*state)) {
            return Err(AutomatonError::UnknownFinalState(state.clone()));
        }

        let mut checked = TransitionTable::new();
        for (from, outgoing) in transitions {
            for (symbol, targets) in outgoing {
                if !states.contains(&from) {
                    return Err(AutomatonError::UnknownSource { from, symbol });
                }

                if !alphabet.contains(&symbol) {
                    return Err(AutomatonError::UnknownSymbol { from, symbol });
                }

                if let Some(to) = targets.iter().find(|to| !states.contains(*to)) {
                    return Err(AutomatonError::UnknownTarget {
                        to: to.clone(),
                        from,
                        symbol,
                    });
                }

                if !targets.is_empty() {
                    checked.entry(from.clone()).or_default().insert(symbol, targets);
                }
            }
        }

        Ok(FiniteAutomaton {
            states,
            alphabet,
            transitions: checked,
            initial_state,
            final_states,
        })
    }

    /// Creates a new automaton from a list of `(from, symbol, to)` transitions,
    /// with the same checks as [FiniteAutomaton::new].
    pub fn from_transitions<'a>(
        states: impl IntoIterator<Item = State>,
        alphabet: impl IntoIterator<Item = Symbol>,
        transitions: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
        initial_state: State,
        final_states: impl IntoIterator<Item = State>,
    ) -> Result<FiniteAutomaton, AutomatonError> {
        let mut table = TransitionTable::new();
        for (from, symbol, to) in transitions {
            table
                .entry(State::from(from))
                .or_default()
                .entry(Symbol::from(symbol))
                .or_default()
                .insert(State::from(to));
        }

        FiniteAutomaton::new(states, alphabet, table, initial_state, final_states)
    }

    /// Returns the initial state.
    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    /// Returns the set of states, ordered by name.
    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    /// Returns the alphabet, ordered by name.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// Returns the set of accepting states.
    pub fn final_states(&self) -> &BTreeSet<State> {
        &self.final_states
    }

    /// Returns true iff the given state is accepting.
    pub fn is_final(&self, state: &State) -> bool {
        self.final_states.contains(state)
    }

    /// Returns the states reachable from `state` by reading `symbol`, empty if there is no transition.
    pub fn successors<'a>(&'a self, state: &State, symbol: &Symbol) -> impl Iterator<Item = &'a State> + use<'a> {
        self.transitions
            .get(state)
            .and_then(|outgoing| outgoing.get(symbol))
            .into_iter()
            .flatten()
    }

    /// Iterates over all `(from, symbol, to)` triples in sorted order.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, &Symbol, &State)> + '_ {
        self.transitions.iter().flat_map(|(from, outgoing)| {
            outgoing
                .iter()
                .flat_map(move |(symbol, targets)| targets.iter().map(move |to| (from, symbol, to)))
        })
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of `(from, symbol, to)` transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|outgoing| outgoing.values())
            .map(BTreeSet::len)
            .sum()
    }

    /// Returns true iff every state has at most one successor for every symbol.
    ///
    /// A missing transition does not make the automaton nondeterministic, it
    /// implicitly leads to a rejecting sink.
    pub fn is_deterministic(&self) -> bool {
        self.transitions
            .values()
            .flat_map(|outgoing| outgoing.values())
            .all(|targets| targets.len() == 1)
    }

    /// Returns true iff the automaton accepts the given word.
    ///
    /// All reachable states are tracked simultaneously, so this works for
    /// nondeterministic automata as well. The word is rejected as soon as no
    /// state is active anymore.
    pub fn accepts<'a>(&self, word: impl IntoIterator<Item = &'a Symbol>) -> bool {
        let mut current: FxHashSet<&State> = FxHashSet::default();
        let mut next: FxHashSet<&State> = FxHashSet::default();
        current.insert(&self.initial_state);

        for symbol in word {
            for state in &current {
                next.extend(self.successors(state, symbol));
            }

            // Reuses the allocation of the previous set.
            current.clear();
            mem::swap(&mut current, &mut next);

            if current.is_empty() {
                trace!("No transition on {symbol}, rejecting");
                return false;
            }
        }

        current.iter().any(|state| self.is_final(state))
    }

    /// Returns true iff the automaton accepts the word where every character is a symbol.
    pub fn accepts_str(&self, input: &str) -> bool {
        self.accepts(&crate::word(input))
    }
}

impl fmt::Display for FiniteAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of states: {}", self.num_of_states())?;
        writeln!(f, "Number of symbols: {}", self.alphabet.len())?;
        writeln!(f, "Number of transitions: {}", self.num_of_transitions())?;
        write!(f, "Deterministic: {}", self.is_deterministic())
    }
}

impl fmt::Debug for FiniteAutomaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "States: {}", self.states.iter().format(" "))?;
        writeln!(f, "Alphabet: {}", self.alphabet.iter().format(" "))?;
        writeln!(f, "Initial state: {}", self.initial_state)?;
        writeln!(f, "Final states: {}", self.final_states.iter().format(" "))?;
        writeln!(f, "Transitions:")?;

        for (from, outgoing) in &self.transitions {
            for (symbol, targets) in outgoing {
                writeln!(f, "  {from} --[{symbol}]-> {}", targets.iter().format(", "))?;
            }
        }

        Ok(())
    }
}
