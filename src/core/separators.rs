//! Separator alphabet
//!
//! A character is either a separator or part of a word. The default
//! alphabet covers ASCII punctuation, symbols, the space character and the
//! ASCII digits, so digit runs never count as words.

use std::collections::HashSet;

/// The default separator characters.
pub const DEFAULT_SEPARATORS: &str = " ,.?/;:\"[]{}!@#$%^&*()_+-=0123456789";

/// Immutable set of separator characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Build a set from any sequence of characters; duplicates collapse.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Return a new set with `extra` added.
    pub fn with_extra(&self, extra: impl IntoIterator<Item = char>) -> Self {
        let mut chars = self.chars.clone();
        chars.extend(extra);
        Self { chars }
    }

    #[inline]
    pub fn is_separator(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS.chars())
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}
