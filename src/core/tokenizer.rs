//! Tokenizer - maximal-run scanning over word and separator characters
//!
//! A line is split into alternating runs of word characters and separator
//! characters. Every run is as long as possible, so the tokens of a line
//! concatenate back to exactly the original line.
//!
//! Usage:
//! ```rust
//! use wordtally::core::separators::SeparatorSet;
//! use wordtally::core::tokenizer::{next_token, TokenKind};
//!
//! let seps = SeparatorSet::default();
//! let token = next_token("The cat", 0, &seps).unwrap();
//! assert_eq!(token.text, "The");
//! assert_eq!(token.kind, TokenKind::Word);
//! ```
//!
//! Offsets are byte offsets into the UTF-8 text and must fall on a char
//! boundary.

use crate::core::error::CoreError;
use crate::core::separators::SeparatorSet;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of same-class characters, borrowed from the input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Length in bytes; the offset of the next token is `position + len()`.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_separator(&self) -> bool {
        self.kind == TokenKind::Separator
    }
}

/// Return the maximal run starting at `position`.
///
/// If the char at `position` is a separator the run is made of separators,
/// otherwise of word characters. Fails with [`CoreError::InvalidOffset`]
/// when `position` is not inside the text or splits a char.
pub fn next_token<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<Token<'a>, CoreError> {
    let invalid = || CoreError::InvalidOffset {
        position,
        len: text.len(),
    };

    if position >= text.len() || !text.is_char_boundary(position) {
        return Err(invalid());
    }

    let rest = &text[position..];
    let first = rest.chars().next().ok_or_else(invalid)?;
    let in_separator_run = separators.is_separator(first);

    let end = rest
        .char_indices()
        .find(|&(_, c)| separators.is_separator(c) != in_separator_run)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    let kind = if in_separator_run {
        TokenKind::Separator
    } else {
        TokenKind::Word
    };

    Ok(Token {
        text: &rest[..end],
        kind,
    })
}

/// Iterator over every token of a line, in order
pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Iterator for Tokens<'a, 's> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        // position always sits on a token boundary, which is a char boundary
        let token = next_token(self.text, self.position, self.separators).ok()?;
        self.position += token.len();
        Some(token)
    }
}

/// Tokenize a whole line. An empty line yields no tokens.
pub fn tokenize<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}

/// Word tokens of a line, in order of appearance
pub fn words<'a, 's>(
    text: &'a str,
    separators: &'s SeparatorSet,
) -> impl Iterator<Item = &'a str> + 's
where
    'a: 's,
{
    tokenize(text, separators)
        .filter(|token| !token.is_separator())
        .map(|token| token.text)
}
