//! Utility types and functions for the FSA toolset.
//!
//! Forbid unsafe code in this crate.
#![forbid(unsafe_code)]

mod error;
mod random_test;
mod vecset;

pub mod verbosity;

pub use error::*;
pub use random_test::*;
pub use vecset::*;
