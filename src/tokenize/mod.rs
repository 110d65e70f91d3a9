//! Tokenization for count vectorization.
//!
//! This module provides delimiter-based tokenization: a string is split into
//! maximal runs of non-delimiter characters, using a caller-supplied set of
//! delimiter characters. Contiguous delimiter runs never produce empty tokens.
//!
//! Tokenization is lazy: [`DelimiterTokenizer::tokens`] returns an iterator
//! over `&str` slices of the input, so no allocation happens until a token is
//! actually consumed (and none at all for borrowed use). The [`Tokenizer`]
//! trait offers an eager, owned-token view of the same splitting.
//!
//! Case folding is deliberately NOT applied here. The tokenizer only splits;
//! the vectorizer decides whether to normalize case.
//!
//! # Examples
//!
//! ```
//! use contar::tokenize::DelimiterTokenizer;
//!
//! let tokenizer = DelimiterTokenizer::default();
//! let tokens: Vec<&str> = tokenizer.tokens("Hello world!").collect();
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! ```

use crate::error::{ContarError, Result};
use std::collections::HashSet;

/// Default delimiter characters: space, period, exclamation mark, question
/// mark, newline, tab.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', '.', '!', '?', '\n', '\t'];

/// Trait for tokenizers that split text into owned token strings.
///
/// # Examples
///
/// ```
/// use contar::tokenize::{DelimiterTokenizer, Tokenizer};
///
/// let tokenizer = DelimiterTokenizer::default();
/// let tokens = tokenizer.tokenize("one two three")?;
/// assert_eq!(tokens, vec!["one", "two", "three"]);
/// # Ok::<(), contar::ContarError>(())
/// ```
pub trait Tokenizer {
    /// Split `text` into an ordered list of tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Tokenizer that splits text on a configurable set of delimiter characters.
///
/// Each token is a maximal run of non-delimiter characters. Runs of
/// consecutive delimiters yield no empty tokens; an empty input or an input
/// consisting entirely of delimiters yields no tokens at all.
///
/// # Examples
///
/// ```
/// use contar::tokenize::DelimiterTokenizer;
///
/// // Default delimiters: space, '.', '!', '?', newline, tab
/// let tokenizer = DelimiterTokenizer::default();
/// let tokens: Vec<&str> = tokenizer.tokens("To ensure it works.").collect();
/// assert_eq!(tokens, vec!["To", "ensure", "it", "works"]);
///
/// // Custom delimiters
/// let csv = DelimiterTokenizer::new([',', ';'])?;
/// let tokens: Vec<&str> = csv.tokens("a,b;;c").collect();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// # Ok::<(), contar::ContarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DelimiterTokenizer {
    /// Set of characters that terminate a token.
    delimiters: HashSet<char>,
}

impl DelimiterTokenizer {
    /// Create a tokenizer from a set of delimiter characters.
    ///
    /// # Errors
    ///
    /// Returns [`ContarError::InvalidHyperparameter`] if the delimiter set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::tokenize::DelimiterTokenizer;
    ///
    /// let tokenizer = DelimiterTokenizer::new(['|'])?;
    /// let tokens: Vec<&str> = tokenizer.tokens("a|b|c").collect();
    /// assert_eq!(tokens, vec!["a", "b", "c"]);
    ///
    /// assert!(DelimiterTokenizer::new([]).is_err());
    /// # Ok::<(), contar::ContarError>(())
    /// ```
    pub fn new<I>(delimiters: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let delimiters: HashSet<char> = delimiters.into_iter().collect();
        if delimiters.is_empty() {
            return Err(ContarError::InvalidHyperparameter {
                param: "delimiters".to_string(),
                value: "{}".to_string(),
                constraint: "at least one delimiter character".to_string(),
            });
        }
        Ok(Self { delimiters })
    }

    /// Check whether `c` is one of this tokenizer's delimiters.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::tokenize::DelimiterTokenizer;
    ///
    /// let tokenizer = DelimiterTokenizer::default();
    /// assert!(tokenizer.is_delimiter(' '));
    /// assert!(tokenizer.is_delimiter('?'));
    /// assert!(!tokenizer.is_delimiter('a'));
    /// ```
    #[must_use]
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// Lazily iterate over the tokens of `text`.
    ///
    /// Tokens are borrowed slices of `text`; nothing is allocated. The
    /// iterator is finite and single-pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::tokenize::DelimiterTokenizer;
    ///
    /// let tokenizer = DelimiterTokenizer::default();
    ///
    /// let mut tokens = tokenizer.tokens("hi there");
    /// assert_eq!(tokens.next(), Some("hi"));
    /// assert_eq!(tokens.next(), Some("there"));
    /// assert_eq!(tokens.next(), None);
    ///
    /// // All-delimiter input produces no tokens
    /// assert_eq!(tokenizer.tokens(" .. !\n").count(), 0);
    /// ```
    #[must_use]
    pub fn tokens<'t>(&'t self, text: &'t str) -> Tokens<'t> {
        Tokens {
            text,
            pos: 0,
            delimiters: &self.delimiters,
        }
    }
}

impl Default for DelimiterTokenizer {
    /// Tokenizer over [`DEFAULT_DELIMITERS`].
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.iter().copied().collect(),
        }
    }
}

impl Tokenizer for DelimiterTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.tokens(text).map(ToString::to_string).collect())
    }
}

/// Lazy iterator over the tokens of a string.
///
/// Created by [`DelimiterTokenizer::tokens`]. Yields maximal runs of
/// non-delimiter characters as `&str` slices of the original input.
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    text: &'t str,
    /// Byte offset of the unscanned remainder of `text`.
    pos: usize,
    delimiters: &'t HashSet<char>,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        let tail = &self.text[self.pos..];
        let mut start = None;

        for (i, ch) in tail.char_indices() {
            let is_delim = self.delimiters.contains(&ch);
            match start {
                // Skip leading delimiters
                None if is_delim => {}
                None => start = Some(i),
                Some(s) if is_delim => {
                    self.pos += i + ch.len_utf8();
                    return Some(&tail[s..i]);
                }
                Some(_) => {}
            }
        }

        // Reached end of input: emit the trailing token, if any
        self.pos = self.text.len();
        start.map(|s| &tail[s..])
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
