use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::sort::sort_by_score_desc;

/// Word -> TF-IDF score.
///
/// Inserting a word that is already present replaces its score; the word
/// keeps its original position. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap {
    scores: IndexMap<String, f64>,
}

impl ScoreMap {
    pub fn new() -> Self {
        Self { scores: IndexMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { scores: IndexMap::with_capacity(capacity) }
    }

    /// Store `score` for `word`, returning the replaced score if any
    #[inline]
    pub fn insert(&mut self, word: impl Into<String>, score: f64) -> Option<f64> {
        self.scores.insert(word.into(), score)
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    #[inline]
    pub fn contains_word(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.scores.iter().map(|(word, &score)| (word.as_str(), score))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.scores.keys().map(|word| word.as_str())
    }

    /// Overwrite every word of `other` into `self` (last write wins)
    pub fn overwrite_with(&mut self, other: ScoreMap) {
        for (word, score) in other.scores {
            self.scores.insert(word, score);
        }
    }

    /// Entries by descending score, ties by word
    pub fn sorted_by_score_desc(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        sort_by_score_desc(&mut entries);
        entries
    }

    /// First `n` entries of [`Self::sorted_by_score_desc`], as an owned map
    pub fn top(&self, n: usize) -> ScoreMap {
        self.sorted_by_score_desc()
            .into_iter()
            .take(n)
            .map(|(word, score)| (word.to_string(), score))
            .collect()
    }
}

impl FromIterator<(String, f64)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self { scores: iter.into_iter().collect() }
    }
}

impl IntoIterator for ScoreMap {
    type Item = (String, f64);
    type IntoIter = indexmap::map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.into_iter()
    }
}

/// One `word<TAB>score` line per entry, highest score first
impl Display for ScoreMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, score) in self.sorted_by_score_desc() {
            writeln!(f, "{}\t{:.6}", word, score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreMap {
        let mut map = ScoreMap::new();
        map.insert("menna", 0.029);
        map.insert("ir", -0.009);
        map.insert("love", 0.029);
        map
    }

    #[test]
    fn insert_replaces_and_keeps_position() {
        let mut map = sample();
        assert_eq!(map.insert("menna", 0.5), Some(0.029));
        assert_eq!(map.get("menna"), Some(0.5));
        assert_eq!(map.words().collect::<Vec<_>>(), vec!["menna", "ir", "love"]);
    }

    #[test]
    fn overwrite_with_is_last_write_wins() {
        let mut map = sample();
        let mut later = ScoreMap::new();
        later.insert("ir", 0.25);
        later.insert("class", 0.1);
        map.overwrite_with(later);
        assert_eq!(map.len(), 4);
        assert_eq!(map.get("ir"), Some(0.25));
        assert_eq!(map.get("class"), Some(0.1));
        assert_eq!(map.get("menna"), Some(0.029));
    }

    #[test]
    fn sorted_by_score_desc_orders_ties_by_word() {
        let map = sample();
        let sorted = map.sorted_by_score_desc();
        assert_eq!(sorted, vec![("love", 0.029), ("menna", 0.029), ("ir", -0.009)]);
    }

    #[test]
    fn top_takes_highest_scores() {
        let top = sample().top(2);
        assert_eq!(top.len(), 2);
        assert!(top.contains_word("love"));
        assert!(top.contains_word("menna"));
        assert!(!top.contains_word("ir"));
        assert_eq!(sample().top(10).len(), 3);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut other = ScoreMap::new();
        other.insert("love", 0.029);
        other.insert("ir", -0.009);
        other.insert("menna", 0.029);
        assert_eq!(sample(), other);
    }

    #[test]
    fn display_renders_sorted_lines() {
        let text = sample().to_string();
        assert_eq!(text, "love\t0.029000\nmenna\t0.029000\nir\t-0.009000\n");
    }

    #[test]
    fn serializes_as_plain_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"menna":0.029,"ir":-0.009,"love":0.029}"#);
        let back: ScoreMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
