//! Frequency table - word counts in first-seen order

use std::collections::HashMap;

use crate::core::error::CoreError;

/// Insertion-ordered word -> count map
///
/// Keys are never removed. Every count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment `word`, inserting it at the end with count 1 if unseen.
    pub fn record_occurrence(&mut self, word: &str) {
        self.add(word, 1);
    }

    fn add(&mut self, word: &str, count: usize) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), count));
            }
        }
    }

    /// Count for `word`; `KeyNotFound` if it was never recorded.
    pub fn value(&self, word: &str) -> Result<usize, CoreError> {
        self.index
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .ok_or_else(|| CoreError::KeyNotFound {
                word: word.to_string(),
            })
    }

    #[allow(dead_code)]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Distinct words in order of first occurrence
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }

    /// `(word, count)` pairs in order of first occurrence
    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Fold `other` into `self`.
    ///
    /// Same result as replaying every occurrence recorded in `other` after
    /// everything recorded in `self`: words new to `self` are appended in
    /// `other`'s first-seen order.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub fn merge(&mut self, other: FrequencyTable) {
        for (word, count) in other.entries {
            self.add(&word, count);
        }
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut table = FrequencyTable::new();
        for word in iter {
            table.record_occurrence(word);
        }
        table
    }
}
