//! Sorter - case-insensitive alphabetical ordering of distinct words
//!
//! Words are compared char by char after lowercasing. Words that are equal
//! ignoring case fall back to plain code point order, so "The" sorts
//! before "the" and the order is total over distinct strings.

use std::cmp::Ordering;

/// Case-insensitive comparison with a code point tie-break.
pub fn compare_words(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}

/// Return `keys` reordered by [`compare_words`].
pub fn sorted_words<'a, I>(keys: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut words: Vec<&str> = keys.into_iter().collect();
    words.sort_by(|a, b| compare_words(a, b));
    words
}
