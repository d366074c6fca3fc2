use crate::Grammar;

/// Returns the right-linear grammar with start symbol `S` that generates the
/// language of [fsa_automata::test_utility::example_dfa].
pub fn example_grammar() -> Grammar {
    Grammar::from_rules(
        &["S", "B", "C"],
        &["a", "b", "c"],
        &[
            ("S", "a B"),
            ("B", "a C"),
            ("B", "b B"),
            ("C", "b B"),
            ("C", "c"),
            ("C", "a S"),
        ],
        "S",
    )
    .expect("The example grammar is well-formed")
}
