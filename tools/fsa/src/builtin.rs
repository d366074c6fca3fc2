use clap::ValueEnum;

use fsa_automata::FiniteAutomaton;
use fsa_automata::test_utility::example_dfa;
use fsa_automata::test_utility::example_nfa;

/// The automata that are available from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BuiltinAutomaton {
    /// Nondeterministic automaton over {a, b} accepting the words that end with `ab` followed by `b`s
    Nfa,

    /// Deterministic automaton over {a, b, c} of the grammar S -> aB, B -> aC | bB, C -> bB | c | aS
    Dfa,
}

impl BuiltinAutomaton {
    pub fn automaton(self) -> FiniteAutomaton {
        match self {
            BuiltinAutomaton::Nfa => example_nfa(),
            BuiltinAutomaton::Dfa => example_dfa(),
        }
    }
}
