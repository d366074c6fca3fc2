use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// A name that is only comparable to names with the same tag, so that states
/// and symbols cannot be mixed up even though both are plain strings.
pub struct TagName<T> {
    name: String,
    marker: PhantomData<T>,
}

/// A unique type for the states.
pub struct StateTag;

/// A unique type for the symbols of an alphabet.
pub struct SymbolTag;

/// The name of a state.
pub type State = TagName<StateTag>;

/// A terminal symbol, or a non-terminal in a grammar.
pub type Symbol = TagName<SymbolTag>;

impl<T> TagName<T> {
    /// Creates a new name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: PhantomData,
        }
    }

    /// Returns the underlying name.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for TagName<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> PartialEq for TagName<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for TagName<T> {}

impl<T> PartialOrd for TagName<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TagName<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

// Must hash exactly like `str` for the `Borrow<str>` implementation below.
impl<T> Hash for TagName<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl<T> Borrow<str> for TagName<T> {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl<T> From<&str> for TagName<T> {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl<T> From<String> for TagName<T> {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl<T> fmt::Display for TagName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<T> fmt::Debug for TagName<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.name)
    }
}

/// Splits the input into a word where every character is a single symbol.
pub fn word(input: &str) -> Vec<Symbol> {
    input.chars().map(|c| Symbol::new(c.to_string())).collect()
}

/// Splits the input into a word of (possibly multi-character) symbols
/// separated by the delimiter. Empty parts are skipped, so the empty string is
/// the empty word.
pub fn delimited_word(input: &str, delimiter: char) -> Vec<Symbol> {
    input
        .split(delimiter)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Symbol::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    use test_log::test;

    #[test]
    fn test_lookup_by_str() {
        let states: BTreeSet<State> = ["q1", "q0"].into_iter().map(State::from).collect();

        assert!(states.contains("q0"));
        assert!(!states.contains("q2"));
        assert_eq!(states.first().map(State::as_str), Some("q0"));
    }

    #[test]
    fn test_words() {
        assert_eq!(word("ab"), vec![Symbol::new("a"), Symbol::new("b")]);
        assert!(word("").is_empty());

        assert_eq!(
            delimited_word("if, then ,else", ','),
            vec![Symbol::new("if"), Symbol::new("then"), Symbol::new("else")]
        );
        assert!(delimited_word("", ',').is_empty());
    }
}
