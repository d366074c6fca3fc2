use log::debug;

use fsa_automata::AutomatonBuilder;
use fsa_automata::FiniteAutomaton;
use fsa_automata::State;

use crate::Grammar;
use crate::GrammarError;
use crate::format_production;

/// Converts a right-linear grammar into an equivalent finite automaton.
///
/// Every non-terminal becomes a state, the start symbol becomes the initial
/// state and the terminals form the alphabet. A production `A -> t B` becomes
/// the transition `A --[t]-> B`, and a production `A -> t` becomes a transition
/// to a fresh accepting state `F` (primed until it is unused). The result is
/// in general nondeterministic.
///
/// Every production must have one of these two shapes, otherwise
/// [GrammarError::UnsupportedGrammarShape] is returned.
pub fn to_automaton(grammar: &Grammar) -> Result<FiniteAutomaton, GrammarError> {
    let mut final_name = String::from("F");
    while grammar.non_terminals().iter().any(|symbol| symbol.as_str() == final_name) {
        final_name.push('\'');
    }
    let final_state = State::new(final_name);

    let mut builder = AutomatonBuilder::new();
    for non_terminal in grammar.non_terminals() {
        builder.add_state(State::new(non_terminal.as_str()));
    }

    for terminal in grammar.terminals() {
        builder.add_symbol(terminal.clone());
    }

    builder.add_final_state(final_state.clone());

    for (lhs, body) in grammar.productions() {
        let from = match lhs {
            [non_terminal] if grammar.is_non_terminal(non_terminal) => State::new(non_terminal.as_str()),
            _ => return Err(GrammarError::UnsupportedGrammarShape(format_production(lhs, body))),
        };

        match body {
            [terminal] if grammar.is_terminal(terminal) => {
                builder.add_transition(from, terminal.clone(), final_state.clone());
            }
            [terminal, next] if grammar.is_terminal(terminal) && grammar.is_non_terminal(next) => {
                builder.add_transition(from, terminal.clone(), State::new(next.as_str()));
            }
            _ => return Err(GrammarError::UnsupportedGrammarShape(format_production(lhs, body))),
        }
    }

    debug!(
        "Converted {} productions into an automaton with {} states",
        grammar.num_of_productions(),
        builder.num_of_states()
    );

    Ok(builder
        .finish(State::new(grammar.start_symbol().as_str()))
        .expect("The start symbol is a non-terminal and thus a state"))
}
