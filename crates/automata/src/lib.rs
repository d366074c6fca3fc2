//!
//! A crate containing finite automata related functionality: deciding
//! determinism, the subset construction, membership testing and Graphviz
//! export.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod automaton;
mod automaton_builder;
mod compare;
mod determinize;
mod io_dot;
mod random_automaton;
mod symbol;

pub mod test_utility;

pub use automaton::*;
pub use automaton_builder::*;
pub use compare::*;
pub use determinize::*;
pub use io_dot::*;
pub use random_automaton::*;
pub use symbol::*;
