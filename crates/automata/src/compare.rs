use std::collections::BTreeSet;

use log::debug;

use crate::FiniteAutomaton;
use crate::Symbol;

/// Returns all words over the given alphabet with at most `max_length`
/// symbols, shortest words first. This includes the empty word.
pub fn words_up_to(alphabet: &[Symbol], max_length: usize) -> Vec<Vec<Symbol>> {
    let mut words: Vec<Vec<Symbol>> = vec![Vec::new()];
    let mut frontier: Vec<Vec<Symbol>> = vec![Vec::new()];

    for _ in 0..max_length {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for word in &frontier {
            for symbol in alphabet {
                let mut extended = word.clone();
                extended.push(symbol.clone());
                next.push(extended);
            }
        }

        words.extend(next.iter().cloned());
        frontier = next;
    }

    words
}

/// Compares the languages of both automata on all words of at most
/// `max_length` symbols over the union of their alphabets. Returns the first
/// (shortest) word on which they disagree, if any.
///
/// This is a bounded check only, used to validate the conversions.
pub fn equivalent_up_to(left: &FiniteAutomaton, right: &FiniteAutomaton, max_length: usize) -> Option<Vec<Symbol>> {
    let alphabet: Vec<Symbol> = left
        .alphabet()
        .iter()
        .chain(right.alphabet())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let counterexample = words_up_to(&alphabet, max_length)
        .into_iter()
        .find(|word| left.accepts(word) != right.accepts(word));

    if let Some(word) = &counterexample {
        debug!("Automata disagree on {word:?}");
    }

    counterexample
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::State;
    use crate::test_utility::example_dfa;
    use crate::test_utility::example_nfa;
    use crate::word;

    #[test]
    fn test_words_up_to() {
        let alphabet = [Symbol::from("a"), Symbol::from("b")];

        let words = words_up_to(&alphabet, 2);
        assert_eq!(words.len(), 1 + 2 + 4);
        assert!(words[0].is_empty());
        assert_eq!(words[3], word("aa"));

        assert_eq!(words_up_to(&alphabet, 0), vec![Vec::<Symbol>::new()]);
        assert_eq!(words_up_to(&[], 3).len(), 1);
    }

    #[test]
    fn test_counterexample() {
        let nfa = example_nfa();
        assert_eq!(equivalent_up_to(&nfa, &nfa, 4), None);

        // Accepts everything the example does, and additionally the single `a`.
        let mut transitions: Vec<(&str, &str, &str)> = nfa
            .transitions()
            .map(|(from, symbol, to)| (from.as_str(), symbol.as_str(), to.as_str()))
            .collect();
        transitions.push(("q0", "a", "q2"));
        let larger = FiniteAutomaton::from_transitions(
            nfa.states().iter().cloned(),
            nfa.alphabet().iter().cloned(),
            transitions,
            State::from("q0"),
            [State::from("q2")],
        )
        .unwrap();

        assert_eq!(equivalent_up_to(&nfa, &larger, 4), Some(word("a")));
        assert!(equivalent_up_to(&nfa, &example_dfa(), 2).is_some());
    }
}
