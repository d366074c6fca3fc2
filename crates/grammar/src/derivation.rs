use itertools::Itertools;
use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use fsa_automata::Symbol;

use crate::Grammar;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    #[error("No production applies to the sentential form {0}")]
    Stuck(String),

    #[error("The derivation did not produce a word within {0} steps")]
    TooLong(usize),
}

/// Derives a random word from the start symbol of the grammar.
///
/// In every step the leftmost position of the sentential form at which a
/// left-hand side matches is rewritten using one of the matching productions,
/// chosen uniformly with the given random number generator. Fails when
/// non-terminals remain that no production applies to, or when no word was
/// derived within `max_steps` steps.
pub fn derive_word(grammar: &Grammar, rng: &mut impl Rng, max_steps: usize) -> Result<Vec<Symbol>, DerivationError> {
    let mut form: Vec<Symbol> = vec![grammar.start_symbol().clone()];

    for _ in 0..max_steps {
        if form.iter().all(|symbol| grammar.is_terminal(symbol)) {
            return Ok(form);
        }

        let rewrite = (0..form.len()).find_map(|position| {
            let candidates: Vec<(&[Symbol], &[Symbol])> = grammar
                .productions()
                .filter(|(lhs, _)| form[position..].starts_with(lhs))
                .collect();

            candidates
                .choose(&mut *rng)
                .map(|(lhs, body)| (position, lhs.len(), body.to_vec()))
        });

        match rewrite {
            Some((position, length, body)) => {
                form.splice(position..position + length, body);
                trace!("Derived {}", form.iter().format(" "));
            }
            None => {
                return Err(DerivationError::Stuck(form.iter().join(" ")));
            }
        }
    }

    if form.iter().all(|symbol| grammar.is_terminal(symbol)) {
        Ok(form)
    } else {
        Err(DerivationError::TooLong(max_steps))
    }
}

/// Returns an endless sequence of randomly derived words, see [derive_word].
pub fn generate_words<'a, R: Rng>(
    grammar: &'a Grammar,
    rng: &'a mut R,
    max_steps: usize,
) -> impl Iterator<Item = Result<Vec<Symbol>, DerivationError>> + 'a {
    std::iter::repeat_with(move || derive_word(grammar, rng, max_steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use test_log::test;

    use fsa_automata::word;
    use fsa_utilities::random_test;

    use crate::test_utility::example_grammar;

    #[test]
    fn test_example_words_have_the_expected_shape() {
        let grammar = example_grammar();

        random_test(100, |rng| {
            let word = derive_word(&grammar, rng, 1000).unwrap();

            // Every word starts with `a` and ends with `c`, and contains only terminals.
            assert_eq!(word.first(), Some(&Symbol::from("a")));
            assert_eq!(word.last(), Some(&Symbol::from("c")));
            assert!(word.iter().all(|symbol| grammar.is_terminal(symbol)));
        });
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let grammar = example_grammar();

        let first: Vec<_> = generate_words(&grammar, &mut StdRng::seed_from_u64(7), 1000)
            .take(5)
            .collect();
        let second: Vec<_> = generate_words(&grammar, &mut StdRng::seed_from_u64(7), 1000)
            .take(5)
            .collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_stuck_and_too_long() {
        let mut rng = StdRng::seed_from_u64(0);

        let grammar = Grammar::from_rules(&["S", "A"], &["a"], &[("S", "a A")], "S").unwrap();
        assert_eq!(
            derive_word(&grammar, &mut rng, 10),
            Err(DerivationError::Stuck("a A".to_string()))
        );

        let grammar = Grammar::from_rules(&["S"], &["a"], &[("S", "a S")], "S").unwrap();
        assert_eq!(derive_word(&grammar, &mut rng, 10), Err(DerivationError::TooLong(10)));
    }

    #[test]
    fn test_context_sensitive_derivation() {
        // The a^n b^n c^n grammar, the rewriting is not restricted to a single non-terminal.
        let grammar = Grammar::from_rules(
            &["S", "B"],
            &["a", "b", "c"],
            &[
                ("S", "a S B c"),
                ("S", "a b c"),
                ("c B", "B c"),
                ("b B", "b b"),
            ],
            "S",
        )
        .unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        for result in generate_words(&grammar, &mut rng, 200).take(20) {
            match result {
                Ok(derived) => {
                    let n = derived.len() / 3;
                    let expected = format!("{}{}{}", "a".repeat(n), "b".repeat(n), "c".repeat(n));
                    assert_eq!(derived, word(&expected));
                }
                Err(error) => assert_eq!(error, DerivationError::TooLong(200)),
            }
        }
    }

    #[test]
    fn test_epsilon_productions() {
        let grammar = Grammar::from_rules(&["S"], &["a"], &[("S", "a S"), ("S", "")], "S").unwrap();

        random_test(20, |rng| {
            let derived = derive_word(&grammar, rng, 1000).unwrap();
            assert!(derived.iter().all(|symbol| symbol.as_str() == "a"));
        });
    }
}
