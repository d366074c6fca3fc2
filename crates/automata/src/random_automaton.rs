use rand::Rng;

use crate::AutomatonBuilder;
use crate::FiniteAutomaton;
use crate::State;
use crate::Symbol;

/// Generates a random, typically nondeterministic, automaton with the desired
/// number of states and symbols. Every state gets fewer than `outdegree`
/// outgoing transitions and is accepting with probability one third. The
/// states are named `q0`, `q1`, ... and `q0` is the initial state.
pub fn random_automaton(
    rng: &mut impl Rng,
    num_of_states: usize,
    num_of_symbols: u32,
    outdegree: usize,
) -> FiniteAutomaton {
    assert!(num_of_states > 0, "An automaton needs at least an initial state");
    assert!(
        num_of_symbols > 0 && num_of_symbols <= 26,
        "Only lower case alphabetic symbols are supported."
    );
    assert!(outdegree > 0, "The out degree should be positive");

    // Introduce lower case letters for the symbols.
    let symbols: Vec<Symbol> = (0..num_of_symbols)
        .map(|i| Symbol::new(char::from(b'a' + i as u8).to_string()))
        .collect();
    let states: Vec<State> = (0..num_of_states).map(|i| State::new(format!("q{i}"))).collect();

    let mut builder = AutomatonBuilder::new();
    for symbol in &symbols {
        builder.add_symbol(symbol.clone());
    }

    for state in &states {
        builder.add_state(state.clone());
        if rng.random_ratio(1, 3) {
            builder.add_final_state(state.clone());
        }

        // Introduce outgoing transitions for this state based on the desired out degree.
        for _ in 0..rng.random_range(0..outdegree) {
            let symbol = &symbols[rng.random_range(0..symbols.len())];
            let to = &states[rng.random_range(0..states.len())];

            builder.add_transition(state.clone(), symbol.clone(), to.clone());
        }
    }

    builder
        .finish(states[0].clone())
        .expect("The initial state was added to the builder")
}
