use std::fmt;
use std::io::BufWriter;
use std::io::Write;

use fsa_utilities::FsaError;
use log::info;

use crate::FiniteAutomaton;

/// Helper to render a finite automaton in Graphviz DOT format.
///
/// All collections of the automaton are sorted, so the output is the same on every run.
pub struct AutomatonDot<'a> {
    pub automaton: &'a FiniteAutomaton,
}

impl<'a> AutomatonDot<'a> {
    /// Creates a new AutomatonDot Display for the given automaton.
    pub fn new(automaton: &'a FiniteAutomaton) -> Self {
        Self { automaton }
    }

    /// Returns a node identifier for the start arrow that is not the name of a state.
    fn start_node(&self) -> String {
        let mut name = String::from("init");
        while self.automaton.states().contains(name.as_str()) {
            name.push('\'');
        }
        name
    }
}

impl fmt::Display for AutomatonDot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph automaton {{")?;
        writeln!(f, "  rankdir=LR;")?;
        writeln!(f, "  node [shape=circle];")?;

        for state in self.automaton.final_states() {
            writeln!(f, "  {} [shape=doublecircle];", Quoted(state.as_str()))?;
        }

        // A small incoming arrow to the initial state.
        let start = self.start_node();
        writeln!(f, "  {} [shape=point, width=0.05, label=\"\"];", Quoted(&start))?;
        writeln!(
            f,
            "  {} -> {};",
            Quoted(&start),
            Quoted(self.automaton.initial_state().as_str())
        )?;

        for (from, symbol, to) in self.automaton.transitions() {
            writeln!(
                f,
                "  {} -> {} [label={}];",
                Quoted(from.as_str()),
                Quoted(to.as_str()),
                Quoted(symbol.as_str())
            )?;
        }

        writeln!(f, "}}")
    }
}

impl FiniteAutomaton {
    /// Returns the automaton in Graphviz DOT format.
    pub fn to_dot(&self) -> String {
        AutomatonDot::new(self).to_string()
    }
}

/// Writes the automaton in Graphviz DOT format to the given writer. Note that
/// the writer is buffered internally using a `BufWriter`.
pub fn write_dot(writer: &mut impl Write, automaton: &FiniteAutomaton) -> Result<(), FsaError> {
    info!("Writing automaton in .dot format...");

    let mut writer = BufWriter::new(writer);
    write!(writer, "{}", AutomatonDot::new(automaton))?;
    writer.flush()?;

    Ok(())
}

/// Prints a DOT identifier as a quoted string.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.0.chars() {
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                c => write!(f, "{c}")?,
            }
        }
        write!(f, "\"")
    }
}
