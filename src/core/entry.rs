//! A single pictographic symbol and its weighted search terms.

use std::collections::HashMap;

/// One database entry: a symbol plus the terms that find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    symbol: String,
    weights: HashMap<String, i64>,
}

impl Entry {
    /// Create an entry with no search terms.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            weights: HashMap::new(),
        }
    }

    /// Add a weighted term. A repeated term replaces the earlier weight.
    pub fn with_weight(mut self, term: impl Into<String>, weight: i64) -> Self {
        self.weights.insert(term.into(), weight);
        self
    }

    /// The symbol that gets copied on confirm.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Weight of an exact term, if the entry has it.
    pub fn weight(&self, term: &str) -> Option<i64> {
        self.weights.get(term).copied()
    }

    /// All terms with their weights, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, i64)> {
        self.weights.iter().map(|(term, weight)| (term.as_str(), *weight))
    }

    pub(crate) fn insert_weight(&mut self, term: String, weight: i64) {
        self.weights.insert(term, weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_lookup() {
        let cat = Entry::new("🐱").with_weight("cat", 5).with_weight("kitten", 2);

        assert_eq!(cat.symbol(), "🐱");
        assert_eq!(cat.weight("cat"), Some(5));
        assert_eq!(cat.weight("kitten"), Some(2));
        assert_eq!(cat.weight("dog"), None);
        assert_eq!(cat.terms().count(), 2);
    }

    #[test]
    fn test_repeated_term_replaces_weight() {
        let entry = Entry::new("🐶").with_weight("dog", 1).with_weight("dog", 7);

        assert_eq!(entry.weight("dog"), Some(7));
        assert_eq!(entry.terms().count(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Queries are lowercased, so an uppercase key can never be matched
        let entry = Entry::new("🚀").with_weight("Rocket", 3);
        assert_eq!(entry.weight("rocket"), None);
    }
}
