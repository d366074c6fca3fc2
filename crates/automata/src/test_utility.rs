use crate::FiniteAutomaton;
use crate::State;
use crate::Symbol;

/// The nondeterministic automaton over {a, b} that accepts exactly the words
/// ending in `ab` followed by any number of `b`s.
pub fn example_nfa() -> FiniteAutomaton {
    FiniteAutomaton::from_transitions(
        ["q0", "q1", "q2"].map(State::from),
        ["a", "b"].map(Symbol::from),
        [
            ("q0", "a", "q0"),
            ("q0", "a", "q1"),
            ("q0", "b", "q0"),
            ("q1", "a", "q0"),
            ("q1", "b", "q2"),
            ("q2", "b", "q2"),
        ],
        State::from("q0"),
        [State::from("q2")],
    )
    .expect("The example automaton is well formed")
}

/// The deterministic automaton over {a, b, c} corresponding to the grammar
/// `S -> aB, B -> aC | bB, C -> bB | c | aS`, with the accepting state `F`
/// reached after the terminating `c`.
pub fn example_dfa() -> FiniteAutomaton {
    FiniteAutomaton::from_transitions(
        ["S", "B", "C", "F"].map(State::from),
        ["a", "b", "c"].map(Symbol::from),
        [
            ("S", "a", "B"),
            ("B", "a", "C"),
            ("B", "b", "B"),
            ("C", "b", "B"),
            ("C", "c", "F"),
            ("C", "a", "S"),
        ],
        State::from("S"),
        [State::from("F")],
    )
    .expect("The example automaton is well formed")
}
