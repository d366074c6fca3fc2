use std::collections::BTreeMap;
use std::collections::BTreeSet;

use log::debug;
use log::trace;

use fsa_automata::FiniteAutomaton;
use fsa_automata::State;
use fsa_automata::Symbol;

use crate::Body;
use crate::Grammar;

/// Converts the automaton into an equivalent right-linear grammar.
///
/// Every state becomes a non-terminal, and every transition `p --[a]-> q`
/// becomes the production `N(p) -> a N(q)`, together with `N(p) -> a` when `q`
/// is accepting. The start symbol is the non-terminal of the initial state.
/// The grammar has no epsilon productions, so it generates the non-empty
/// words accepted by the automaton.
pub fn to_grammar(automaton: &FiniteAutomaton) -> Grammar {
    let names = non_terminal_names(automaton);

    let mut productions: Vec<(Vec<Symbol>, Body)> = Vec::new();
    for (from, symbol, to) in automaton.transitions() {
        let lhs = vec![names[from].clone()];

        productions.push((lhs.clone(), vec![symbol.clone(), names[to].clone()]));
        if automaton.is_final(to) {
            productions.push((lhs, vec![symbol.clone()]));
        }
    }

    debug!(
        "Converted automaton with {} states into {} productions",
        automaton.num_of_states(),
        productions.len()
    );

    Grammar::new(
        names.values().cloned(),
        automaton.alphabet().iter().cloned(),
        productions,
        names[automaton.initial_state()].clone(),
    )
    .expect("The non-terminals are fresh and every state has a non-terminal")
}

/// Assigns a fresh non-terminal to every state. The initial state becomes `S`,
/// the other states get `A`, `B`, ... in the order of their names, followed by
/// `A1`, `B1`, ... when the letters run out. Names that are used as symbols in
/// the alphabet are skipped.
pub fn non_terminal_names(automaton: &FiniteAutomaton) -> BTreeMap<State, Symbol> {
    let mut used: BTreeSet<Symbol> = automaton.alphabet().clone();
    let mut candidates = (0usize..)
        .flat_map(|round| {
            ('A'..='Z').filter(|letter| *letter != 'S').map(move |letter| {
                if round == 0 {
                    Symbol::new(letter.to_string())
                } else {
                    Symbol::new(format!("{letter}{round}"))
                }
            })
        });

    let mut fresh = |used: &mut BTreeSet<Symbol>| -> Symbol {
        loop {
            let candidate = candidates.next().expect("The candidate names are unbounded");
            if used.insert(candidate.clone()) {
                return candidate;
            }
        }
    };

    let mut names = BTreeMap::new();

    let start = Symbol::new("S");
    let initial_name = if used.insert(start.clone()) { start } else { fresh(&mut used) };
    trace!("State {} is non-terminal {initial_name}", automaton.initial_state());
    names.insert(automaton.initial_state().clone(), initial_name);

    for state in automaton.states() {
        if state != automaton.initial_state() {
            let name = fresh(&mut used);
            trace!("State {state} is non-terminal {name}");
            names.insert(state.clone(), name);
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use fsa_automata::determinize;
    use fsa_automata::random_automaton;
    use fsa_automata::test_utility::example_dfa;
    use fsa_automata::test_utility::example_nfa;
    use fsa_utilities::random_test;

    use crate::ChomskyType;
    use crate::DerivationError;
    use crate::derive_word;
    use crate::format_production;

    #[test]
    fn test_example_to_grammar() {
        let grammar = to_grammar(&example_nfa());

        assert_eq!(grammar.start_symbol().as_str(), "S");
        assert_eq!(grammar.classify(), ChomskyType::Regular);

        let productions: Vec<String> = grammar
            .productions()
            .map(|(lhs, body)| format_production(lhs, body))
            .collect();

        // q0 -> S, q1 -> A, q2 -> B
        assert_eq!(
            productions,
            vec![
                "A -> a S",
                "A -> b B",
                "A -> b",
                "B -> b B",
                "B -> b",
                "S -> a S",
                "S -> a A",
                "S -> b S",
            ]
        );
    }

    #[test]
    fn test_fresh_names_avoid_terminals() {
        let automaton = FiniteAutomaton::from_transitions(
            ["p", "q", "r"].map(State::from),
            ["S", "A"].map(Symbol::from),
            [("p", "S", "q"), ("q", "A", "r")],
            State::from("p"),
            [State::from("r")],
        )
        .unwrap();

        let names = non_terminal_names(&automaton);
        let names: Vec<&str> = names.values().map(Symbol::as_str).collect();
        assert_eq!(names, vec!["B", "C", "D"]);

        let grammar = to_grammar(&automaton);
        assert!(grammar.non_terminals().is_disjoint(grammar.terminals()));
    }

    #[test]
    fn test_many_states_get_unique_names() {
        let states: Vec<State> = (0..60).map(|i| State::new(format!("s{i:02}"))).collect();
        let automaton = FiniteAutomaton::from_transitions(
            states.clone(),
            [Symbol::from("a")],
            [],
            states[0].clone(),
            [],
        )
        .unwrap();

        let names = non_terminal_names(&automaton);
        let unique: BTreeSet<&Symbol> = names.values().collect();
        assert_eq!(unique.len(), 60);
        assert!(unique.contains(&Symbol::from("A1")));
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_random_derivations_are_accepted() {
        random_test(100, |rng| {
            let dfa = determinize(&random_automaton(rng, 5, 2, 4));
            let grammar = to_grammar(&dfa);

            assert_eq!(grammar.classify(), ChomskyType::Regular);

            for _ in 0..10 {
                if let Ok(word) = derive_word(&grammar, rng, 50) {
                    assert!(!word.is_empty());
                    assert!(dfa.accepts(&word), "Derived word {word:?} is not accepted");
                }
            }
        });
    }

    #[test]
    fn test_example_derivations_are_accepted() {
        random_test(10, |rng| {
            let dfa = example_dfa();
            let grammar = to_grammar(&dfa);

            // The accepting state has no outgoing transitions, so its non-terminal has no productions.
            let mut words = Vec::new();
            for _ in 0..50 {
                match derive_word(&grammar, rng, 1000) {
                    Ok(word) => words.push(word),
                    Err(error) => assert!(matches!(error, DerivationError::Stuck(_))),
                }
            }

            assert!(!words.is_empty());
            assert!(words.iter().all(|word| dfa.accepts(word)));
        });
    }
}
