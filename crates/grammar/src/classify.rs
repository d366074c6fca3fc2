use std::fmt;

use log::debug;

use crate::Grammar;
use crate::format_production;

/// The classes of the Chomsky hierarchy, ordered from the least to the most restrictive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChomskyType {
    Unrestricted,
    ContextSensitive,
    ContextFree,
    Regular,
}

impl ChomskyType {
    /// Returns the type number in the hierarchy, from 0 (unrestricted) to 3 (regular).
    pub fn level(&self) -> u8 {
        match self {
            ChomskyType::Unrestricted => 0,
            ChomskyType::ContextSensitive => 1,
            ChomskyType::ContextFree => 2,
            ChomskyType::Regular => 3,
        }
    }
}

impl fmt::Display for ChomskyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChomskyType::Unrestricted => write!(f, "Type 0: Unrestricted Grammar"),
            ChomskyType::ContextSensitive => write!(f, "Type 1: Context-Sensitive Grammar"),
            ChomskyType::ContextFree => write!(f, "Type 2: Context-Free Grammar"),
            ChomskyType::Regular => write!(f, "Type 3: Regular Grammar"),
        }
    }
}

/// Classifies the grammar by the shape of its productions, returning the most
/// restrictive class that every production satisfies.
///
///  - Regular: every body has at most two symbols, the second of which is a non-terminal.
///  - Context-free: every left-hand side is one non-terminal.
///  - Context-sensitive: every body is at least as long as its left-hand side.
///
/// The classes are tried in this order, so a grammar with right-linear bodies
/// is regular regardless of its left-hand sides. Epsilon bodies are exempt
/// from the body shape and length criteria, but their left-hand side must
/// still be a single non-terminal for the grammar to be context-free. This is
/// a structural check of the productions; it does not decide whether the
/// generated language is regular.
pub fn classify(grammar: &Grammar) -> ChomskyType {
    let mut regular = true;
    let mut context_free = true;
    let mut context_sensitive = true;

    for (lhs, body) in grammar.productions() {
        if lhs.len() != 1 || !grammar.is_non_terminal(&lhs[0]) {
            context_free = false;
        }

        if !body.is_empty() {
            let right_linear = body.len() == 1 || (body.len() == 2 && grammar.is_non_terminal(&body[1]));
            if !right_linear {
                regular = false;
            }

            if lhs.len() > body.len() {
                context_sensitive = false;
            }
        }

        if !regular && !context_free && !context_sensitive {
            debug!("Production {} is unrestricted", format_production(lhs, body));
            break;
        }
    }

    if regular {
        ChomskyType::Regular
    } else if context_free {
        ChomskyType::ContextFree
    } else if context_sensitive {
        ChomskyType::ContextSensitive
    } else {
        ChomskyType::Unrestricted
    }
}

impl Grammar {
    /// See [classify].
    pub fn classify(&self) -> ChomskyType {
        classify(self)
    }
}
