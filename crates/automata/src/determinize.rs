use std::collections::VecDeque;

use fsa_utilities::VecSet;
use log::debug;
use log::trace;
use rustc_hash::FxHashMap;

use crate::AutomatonBuilder;
use crate::FiniteAutomaton;
use crate::State;

/// Computes an equivalent deterministic automaton using the subset construction.
///
/// Every state of the result corresponds to a reachable set of states of the
/// input, and is named after the sorted members of that set, for example
/// `{q0,q1}`. The empty set is never introduced; a missing transition already
/// rejects. An automaton that is deterministic already is returned unchanged.
pub fn determinize(automaton: &FiniteAutomaton) -> FiniteAutomaton {
    if automaton.is_deterministic() {
        debug!("Automaton is already deterministic");
        return automaton.clone();
    }

    let mut builder = AutomatonBuilder::new();
    for symbol in automaton.alphabet() {
        builder.add_symbol(symbol.clone());
    }

    // Maps every discovered subset to the name of its composite state.
    let mut discovered: FxHashMap<VecSet<State>, State> = FxHashMap::default();
    let mut queue: VecDeque<VecSet<State>> = VecDeque::new();

    let initial_subset = VecSet::singleton(automaton.initial_state().clone());
    let initial_state = discover(automaton, &mut builder, &mut discovered, &mut queue, initial_subset);

    while let Some(subset) = queue.pop_front() {
        let from = discovered[&subset].clone();
        trace!("Considering {subset}");

        for symbol in automaton.alphabet() {
            let next: VecSet<State> = subset
                .iter()
                .flat_map(|state| automaton.successors(state, symbol))
                .cloned()
                .collect();

            if next.is_empty() {
                continue;
            }

            let to = match discovered.get(&next) {
                Some(to) => to.clone(),
                None => discover(automaton, &mut builder, &mut discovered, &mut queue, next),
            };

            builder.add_transition(from.clone(), symbol.clone(), to);
        }
    }

    debug!(
        "Subset construction resulted in {} states from {} states",
        discovered.len(),
        automaton.num_of_states()
    );

    builder
        .finish(initial_state)
        .expect("The initial subset is always discovered")
}

/// Registers a new subset as a state of the deterministic automaton and schedules it for exploration.
///
/// Member names may themselves contain `,`, `{` or `}`, so two different
/// subsets can render to the same name. The later subset is then primed until
/// its name is unused.
fn discover(
    automaton: &FiniteAutomaton,
    builder: &mut AutomatonBuilder,
    discovered: &mut FxHashMap<VecSet<State>, State>,
    queue: &mut VecDeque<VecSet<State>>,
    subset: VecSet<State>,
) -> State {
    let mut name = subset.to_string();
    while builder.contains_state(name.as_str()) {
        name.push('\'');
    }

    let state = State::new(name);
    trace!("Discovered {state} for {subset}");

    builder.add_state(state.clone());
    if subset.iter().any(|member| automaton.is_final(member)) {
        builder.add_final_state(state.clone());
    }

    discovered.insert(subset.clone(), state.clone());
    queue.push_back(subset);
    state
}
