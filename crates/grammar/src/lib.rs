//!
//! A crate containing formal grammars: the structural classification in the
//! Chomsky hierarchy, the conversion between finite automata and right-linear
//! grammars, and random derivation of words.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod classify;
mod derivation;
mod grammar;
mod to_automaton;
mod to_grammar;

pub mod test_utility;

pub use classify::*;
pub use derivation::*;
pub use grammar::*;
pub use to_automaton::*;
pub use to_grammar::*;
