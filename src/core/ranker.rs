//! Weighted keyword ranking.
//!
//! A query is normalized to lowercase ASCII letters and spaces, split into
//! terms, and every entry is scored by summing the weights of the terms it
//! contains. Only entries with a positive score are ranked.
//!
//! Ranking itself works for any result size; the fixed ten-slot layout the
//! picker shows is a separate padding step in [`ResultList::from_ranked`].

use super::database::Database;
use super::entry::Entry;

/// Number of result slots the picker displays.
pub const RESULT_SLOTS: usize = 10;

/// Keep ASCII letters (folded to lowercase) and spaces, drop everything else.
///
/// Dropped characters are removed, not replaced: `"cat,dog"` becomes
/// `"catdog"`, a single term.
pub fn normalize_query(raw: &str) -> String {
    raw.chars()
        .filter_map(|c| match c {
            'a'..='z' | ' ' => Some(c),
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

/// Split a normalized query into non-empty terms.
pub fn extract_terms(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Sum of the weights of every term the entry contains, once per occurrence.
///
/// Summed in `i128` so the result is exact whatever the term order.
pub fn score(entry: &Entry, terms: &[&str]) -> i128 {
    terms
        .iter()
        .filter_map(|term| entry.weight(term))
        .map(i128::from)
        .sum()
}

/// An entry that matched a query, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranked<'a> {
    pub entry: &'a Entry,
    pub score: i128,
}

impl<'a> Ranked<'a> {
    pub fn symbol(&self) -> &'a str {
        self.entry.symbol()
    }
}

/// Rank entries by descending score, keeping at most `limit` of them.
///
/// Entries scoring zero or less are dropped. Equal scores keep database order.
pub fn rank<'a>(database: &'a Database, query: &str, limit: usize) -> Vec<Ranked<'a>> {
    let normalized = normalize_query(query);
    let terms = extract_terms(&normalized);
    if terms.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<Ranked<'a>> = database
        .entries()
        .iter()
        .filter_map(|entry| {
            let score = score(entry, &terms);
            (score > 0).then_some(Ranked { entry, score })
        })
        .collect();

    // Stable sort so ties stay in database order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

/// Search the database for the picker: always exactly [`RESULT_SLOTS`] slots.
pub fn search(database: &Database, query: &str) -> ResultList {
    if query.is_empty() {
        return ResultList::empty();
    }

    ResultList::from_ranked(&rank(database, query, RESULT_SLOTS))
}

/// Fixed-width list of result symbols; unused slots hold an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultList {
    slots: [String; RESULT_SLOTS],
}

#[allow(clippy::len_without_is_empty)]
impl ResultList {
    /// A list with every slot empty.
    pub fn empty() -> Self {
        Self {
            slots: Default::default(),
        }
    }

    /// Pad or truncate ranked matches to exactly [`RESULT_SLOTS`] slots.
    pub fn from_ranked(ranked: &[Ranked<'_>]) -> Self {
        let mut list = Self::empty();
        for (slot, hit) in list.slots.iter_mut().zip(ranked) {
            *slot = hit.symbol().to_string();
        }
        list
    }

    /// Symbol in slot `index`, `""` for an empty slot.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        RESULT_SLOTS
    }

    /// Number of slots holding a symbol.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    /// True when no slot holds a symbol.
    pub fn is_blank(&self) -> bool {
        self.filled() == 0
    }
}

impl Default for ResultList {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> Database {
        Database::from_entries(vec![
            Entry::new("🐱").with_weight("cat", 5).with_weight("kitten", 2),
            Entry::new("🐶").with_weight("dog", 5),
        ])
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("Hello World"), "hello world");
        assert_eq!(normalize_query("cat,dog"), "catdog");
        assert_eq!(normalize_query("r2d2 !?"), "rd ");
        assert_eq!(normalize_query("café"), "caf");
        assert_eq!(normalize_query("\tcat\n"), "cat");
    }

    #[test]
    fn test_extract_terms() {
        assert_eq!(extract_terms("  cat   dog "), vec!["cat", "dog"]);
        assert!(extract_terms("   ").is_empty());
        assert!(extract_terms("").is_empty());
    }

    #[test]
    fn test_score_counts_repeated_terms() {
        let cat = Entry::new("🐱").with_weight("cat", 5);
        assert_eq!(score(&cat, &["cat"]), 5);
        assert_eq!(score(&cat, &["cat", "cat"]), 10);
        assert_eq!(score(&cat, &["dog"]), 0);
    }

    #[test]
    fn test_single_term_match() {
        let results = search(&pets(), "cat");

        assert_eq!(results.len(), RESULT_SLOTS);
        assert_eq!(results.get(0), Some("🐱"));
        assert!(results.iter().skip(1).all(str::is_empty));
    }

    #[test]
    fn test_tie_keeps_database_order() {
        let results = search(&pets(), "cat dog");

        assert_eq!(results.get(0), Some("🐱"));
        assert_eq!(results.get(1), Some("🐶"));
        assert_eq!(results.filled(), 2);
    }

    #[test]
    fn test_empty_query_is_blank() {
        assert!(search(&pets(), "").is_blank());
        assert!(search(&pets(), "123 !!").is_blank());
    }

    #[test]
    fn test_non_positive_scores_excluded() {
        let db = Database::from_entries(vec![
            Entry::new("👎").with_weight("bad", -3),
            Entry::new("😐").with_weight("meh", 0),
            Entry::new("👍").with_weight("good", 1),
        ]);

        let ranked = rank(&db, "bad meh good", 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].symbol(), "👍");
    }

    #[test]
    fn test_negative_weight_offsets_positive() {
        let db = Database::from_entries(vec![Entry::new("🌧")
            .with_weight("rain", 4)
            .with_weight("sunny", -4)]);

        assert!(rank(&db, "rain sunny", 10).is_empty());
        assert_eq!(rank(&db, "rain", 10).len(), 1);
    }

    #[test]
    fn test_extreme_weights_independent_of_term_order() {
        let db = Database::from_entries(vec![Entry::new("⚖")
            .with_weight("a", i64::MAX)
            .with_weight("b", i64::MAX)
            .with_weight("c", -i64::MAX)]);

        let forward = rank(&db, "a b c", 10);
        let shuffled = rank(&db, "c a b", 10);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].score, i128::from(i64::MAX));
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn test_top_ten_of_fifteen() {
        let entries = (1..=15)
            .map(|i| Entry::new(format!("e{}", i)).with_weight("x", i))
            .collect();
        let db = Database::from_entries(entries);

        let results = search(&db, "x");
        let expected: Vec<String> = (6..=15).rev().map(|i| format!("e{}", i)).collect();
        assert_eq!(results.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_rank_beyond_ten() {
        let entries = (1..=15)
            .map(|i| Entry::new(format!("e{}", i)).with_weight("x", 1))
            .collect();
        let db = Database::from_entries(entries);

        assert_eq!(rank(&db, "x", 100).len(), 15);
        assert_eq!(rank(&db, "x", 3).len(), 3);
        assert!(rank(&db, "x", 0).is_empty());
    }

    #[test]
    fn test_punctuation_merges_words() {
        let db = Database::from_entries(vec![
            Entry::new("🐱").with_weight("cat", 5),
            Entry::new("🐈").with_weight("catdog", 1),
        ]);

        let results = search(&db, "cat-dog");
        assert_eq!(results.get(0), Some("🐈"));
        assert_eq!(results.filled(), 1);
    }
}
