use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use fsa_automata::Symbol;

/// The right-hand side of a production, the empty body is an epsilon production.
pub type Body = Vec<Symbol>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("The start symbol {0} is not a non-terminal")]
    UnknownStartSymbol(Symbol),

    #[error("The symbol {0} is both a terminal and a non-terminal")]
    OverlappingSymbol(Symbol),

    #[error("The production {production} uses the undeclared symbol {symbol}")]
    UnknownSymbol { production: String, symbol: Symbol },

    #[error("A production has an empty left-hand side")]
    EmptyLeftHandSide,

    #[error("The production {0} cannot be represented by a finite automaton")]
    UnsupportedGrammarShape(String),
}

/// A formal grammar. A left-hand side is a sequence of symbols, which is a
/// single non-terminal for all grammars that are at least context-free.
///
/// Once constructed the grammar is never modified.
#[derive(Clone, PartialEq, Eq)]
pub struct Grammar {
    non_terminals: BTreeSet<Symbol>,
    terminals: BTreeSet<Symbol>,

    /// For every left-hand side the bodies in the order they were given.
    productions: BTreeMap<Vec<Symbol>, Vec<Body>>,

    start_symbol: Symbol,
}

impl Grammar {
    /// Creates a new grammar, the productions are `(left-hand side, body)` pairs.
    ///
    /// All symbols must be declared, and no symbol can be both a terminal and a non-terminal.
    pub fn new(
        non_terminals: impl IntoIterator<Item = Symbol>,
        terminals: impl IntoIterator<Item = Symbol>,
        productions: impl IntoIterator<Item = (Vec<Symbol>, Body)>,
        start_symbol: Symbol,
    ) -> Result<Grammar, GrammarError> {
        let non_terminals: BTreeSet<Symbol> = non_terminals.into_iter().collect();
        let terminals: BTreeSet<Symbol> = terminals.into_iter().collect();

        if let Some(symbol) = non_terminals.intersection(&terminals).next() {
            return Err(GrammarError::OverlappingSymbol(symbol.clone()));
        }

        if !non_terminals.contains(&start_symbol) {
            return Err(GrammarError::UnknownStartSymbol(start_symbol));
        }

        let mut grouped: BTreeMap<Vec<Symbol>, Vec<Body>> = BTreeMap::new();
        for (lhs, body) in productions {
            if lhs.is_empty() {
                return Err(GrammarError::EmptyLeftHandSide);
            }

            if let Some(symbol) = lhs
                .iter()
                .chain(&body)
                .find(|symbol| !non_terminals.contains(*symbol) && !terminals.contains(*symbol))
            {
                return Err(GrammarError::UnknownSymbol {
                    production: format_production(&lhs, &body),
                    symbol: symbol.clone(),
                });
            }

            grouped.entry(lhs).or_default().push(body);
        }

        Ok(Grammar {
            non_terminals,
            terminals,
            productions: grouped,
            start_symbol,
        })
    }

    /// Creates a grammar from textual rules `(lhs, body)` in which the symbols
    /// are separated by whitespace, for example `("S", "a B")`. An empty body is
    /// an epsilon production.
    pub fn from_rules(
        non_terminals: &[&str],
        terminals: &[&str],
        rules: &[(&str, &str)],
        start_symbol: &str,
    ) -> Result<Grammar, GrammarError> {
        let split = |text: &str| -> Vec<Symbol> { text.split_whitespace().map(Symbol::from).collect() };

        Grammar::new(
            non_terminals.iter().copied().map(Symbol::from),
            terminals.iter().copied().map(Symbol::from),
            rules.iter().map(|(lhs, body)| (split(lhs), split(body))),
            Symbol::from(start_symbol),
        )
    }

    /// Returns the set of non-terminals.
    pub fn non_terminals(&self) -> &BTreeSet<Symbol> {
        &self.non_terminals
    }

    /// Returns the set of terminals.
    pub fn terminals(&self) -> &BTreeSet<Symbol> {
        &self.terminals
    }

    /// Returns the non-terminal that every derivation starts from.
    pub fn start_symbol(&self) -> &Symbol {
        &self.start_symbol
    }

    /// Returns true iff the symbol is a declared non-terminal.
    pub fn is_non_terminal(&self, symbol: &Symbol) -> bool {
        self.non_terminals.contains(symbol)
    }

    /// Returns true iff the symbol is a declared terminal.
    pub fn is_terminal(&self, symbol: &Symbol) -> bool {
        self.terminals.contains(symbol)
    }

    /// Iterates over all productions as `(lhs, body)` pairs, grouped by left-hand side.
    pub fn productions(&self) -> impl Iterator<Item = (&[Symbol], &[Symbol])> + '_ {
        self.productions
            .iter()
            .flat_map(|(lhs, bodies)| bodies.iter().map(move |body| (lhs.as_slice(), body.as_slice())))
    }

    /// Returns the bodies of the productions with the given left-hand side.
    pub fn alternatives(&self, lhs: &[Symbol]) -> &[Body] {
        self.productions.get(lhs).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of productions.
    pub fn num_of_productions(&self) -> usize {
        self.productions.values().map(Vec::len).sum()
    }
}

/// Formats a production as `lhs -> body`, with `ε` for the empty body.
pub fn format_production(lhs: &[Symbol], body: &[Symbol]) -> String {
    format!("{} -> {}", lhs.iter().format(" "), FormatBody(body))
}

/// Prints the symbols of a body separated by spaces.
struct FormatBody<'a>(&'a [Symbol]);

impl fmt::Display for FormatBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "ε")
        } else {
            write!(f, "{}", self.0.iter().format(" "))
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Non-terminals: {}", self.non_terminals.iter().format(" "))?;
        writeln!(f, "Terminals: {}", self.terminals.iter().format(" "))?;
        writeln!(f, "Start symbol: {}", self.start_symbol)?;
        write!(f, "Productions:")?;

        for (lhs, bodies) in &self.productions {
            write!(
                f,
                "\n  {} -> {}",
                lhs.iter().format(" "),
                bodies.iter().map(|body| FormatBody(body)).format(" | ")
            )?;
        }

        Ok(())
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::test_utility::example_grammar;

    #[test]
    fn test_example_grammar() {
        let grammar = example_grammar();

        assert_eq!(grammar.start_symbol().as_str(), "S");
        assert_eq!(grammar.num_of_productions(), 6);
        assert!(grammar.is_non_terminal(&Symbol::from("B")));
        assert!(grammar.is_terminal(&Symbol::from("c")));

        let alternatives: Vec<String> = grammar
            .alternatives(&[Symbol::from("C")])
            .iter()
            .map(|body| body.iter().join(""))
            .collect();
        assert_eq!(alternatives, vec!["bB", "c", "aS"]);
        assert!(grammar.alternatives(&[Symbol::from("a")]).is_empty());

        assert_eq!(
            grammar.to_string(),
            "\
Non-terminals: B C S
Terminals: a b c
Start symbol: S
Productions:
  B -> a C | b B
  C -> b B | c | a S
  S -> a B"
        );
    }

    #[test]
    fn test_invalid_grammars() {
        assert_eq!(
            Grammar::from_rules(&["S"], &["a"], &[("S", "a")], "A"),
            Err(GrammarError::UnknownStartSymbol(Symbol::from("A")))
        );

        assert_eq!(
            Grammar::from_rules(&["S", "a"], &["a"], &[], "S"),
            Err(GrammarError::OverlappingSymbol(Symbol::from("a")))
        );

        assert_eq!(
            Grammar::from_rules(&["S"], &["a"], &[("S", "a B")], "S"),
            Err(GrammarError::UnknownSymbol {
                production: "S -> a B".to_string(),
                symbol: Symbol::from("B")
            })
        );

        assert_eq!(
            Grammar::from_rules(&["S"], &["a"], &[("", "a")], "S"),
            Err(GrammarError::EmptyLeftHandSide)
        );
    }

    #[test]
    fn test_epsilon_production() {
        let grammar = Grammar::from_rules(&["S"], &["a"], &[("S", "a S"), ("S", "")], "S").unwrap();

        let productions: Vec<String> = grammar
            .productions()
            .map(|(lhs, body)| format_production(lhs, body))
            .collect();
        assert_eq!(productions, vec!["S -> a S", "S -> ε"]);
    }
}
