//! Count vectorization: convert text into fixed-length count vectors.
//!
//! [`CountVectorizer`] learns a vocabulary from a corpus (`fit`), then maps
//! any document, seen or unseen, into a vector of weighted token counts
//! aligned to that vocabulary (`transform`). Vector entries are ordered
//! lexicographically by vocabulary token, so vectors are comparable across
//! calls and across fit/transform invocations.
//!
//! The weighting is a simple length-based salience heuristic: a token of
//! three or more characters counts 2 per occurrence, shorter tokens count 1.
//!
//! # Examples
//!
//! ```
//! use contar::vectorize::CountVectorizer;
//!
//! let corpus = vec![
//!     "This is a test",
//!     "To check out the CountVectorizer",
//!     "To ensure it works.",
//! ];
//!
//! let mut vectorizer = CountVectorizer::new();
//! let vectors = vectorizer.fit_transform(&corpus);
//!
//! // Stop words are excluded; vocabulary is lexicographic
//! assert_eq!(
//!     vectorizer.vocabulary(),
//!     ["check", "countvectorizer", "ensure", "test", "works"]
//! );
//! assert_eq!(vectors.len(), 3);
//!
//! // Unseen text maps onto the same vector space
//! let unseen = vectorizer.transform("Customer response data.");
//! assert_eq!(unseen, vec![0, 0, 0, 0, 0]);
//! ```

use crate::error::Result;
use crate::stopwords::StopWordsFilter;
use crate::tokenize::DelimiterTokenizer;
use std::collections::{BTreeSet, HashMap};

/// Tokens with at least this many characters get the higher weight.
const LONG_TOKEN_CHARS: usize = 3;

/// Weight applied to long tokens; shorter tokens weigh 1.
const LONG_TOKEN_WEIGHT: u32 = 2;

/// Bag-of-words vectorizer with stop-word filtering and length-based
/// term weighting.
///
/// The vocabulary is built by [`CountVectorizer::fit`] and is the only
/// mutable state; [`CountVectorizer::transform`] is a pure read. A second
/// `fit` call replaces the vocabulary entirely (replace-on-fit).
///
/// # Examples
///
/// ```
/// use contar::vectorize::CountVectorizer;
///
/// let mut vectorizer = CountVectorizer::new();
/// vectorizer.fit(&["hello world", "hello rust"]);
///
/// assert_eq!(vectorizer.vocabulary_size(), 3);
/// assert_eq!(vectorizer.transform("hello hello"), vec![4, 0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    /// Splits documents into raw tokens.
    tokenizer: DelimiterTokenizer,
    /// Token -> column index; indices follow lexicographic token order.
    vocabulary: HashMap<String, usize>,
    /// Vocabulary tokens in lexicographic order (the vector column order).
    terms: Vec<String>,
    /// Convert tokens to lowercase before indexing and counting.
    lowercase: bool,
    /// Words excluded from the vocabulary during fitting.
    stop_words: StopWordsFilter,
}

impl CountVectorizer {
    /// Create a new `CountVectorizer` with default settings: case-insensitive,
    /// default delimiters (space, `.`, `!`, `?`, newline, tab), English stop
    /// words, empty vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let vectorizer = CountVectorizer::new();
    /// assert_eq!(vectorizer.vocabulary_size(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: DelimiterTokenizer::default(),
            vocabulary: HashMap::new(),
            terms: Vec::new(),
            lowercase: true,
            stop_words: StopWordsFilter::english(),
        }
    }

    /// Set the tokenizer to use.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    /// use contar::tokenize::DelimiterTokenizer;
    ///
    /// let tokenizer = DelimiterTokenizer::new([','])?;
    /// let vectorizer = CountVectorizer::new().with_tokenizer(tokenizer);
    /// # Ok::<(), contar::ContarError>(())
    /// ```
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: DelimiterTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set the delimiter characters used for tokenization.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ContarError::InvalidHyperparameter`] if the delimiter
    /// set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new().with_delimiters([',', ' '])?;
    /// vectorizer.fit(&["alpha,beta gamma"]);
    /// assert_eq!(vectorizer.vocabulary_size(), 3);
    /// # Ok::<(), contar::ContarError>(())
    /// ```
    pub fn with_delimiters<I>(mut self, delimiters: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        self.tokenizer = DelimiterTokenizer::new(delimiters)?;
        Ok(self)
    }

    /// Set whether tokens are lowercased before indexing and counting.
    ///
    /// Defaults to `true` (case-insensitive). Note that stop-word matching is
    /// case-insensitive either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new().with_lowercase(false);
    /// vectorizer.fit(&["Rust rust"]);
    /// assert_eq!(vectorizer.vocabulary(), ["Rust", "rust"]);
    /// ```
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Use custom stop words instead of the default English list.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new().with_stop_words(["spam"]);
    /// vectorizer.fit(&["spam and eggs"]);
    /// assert_eq!(vectorizer.vocabulary(), ["and", "eggs"]);
    /// ```
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = StopWordsFilter::new(words);
        self
    }

    /// Replace the stop-word set.
    ///
    /// Affects subsequent [`CountVectorizer::fit`] calls only; an
    /// already-built vocabulary is not retroactively altered.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// vectorizer.fit(&["fresh data"]);
    /// let size_before = vectorizer.vocabulary_size();
    ///
    /// vectorizer.set_stop_words(["fresh", "data"]);
    /// assert_eq!(vectorizer.vocabulary_size(), size_before);
    ///
    /// vectorizer.fit(&["fresh data"]);
    /// assert_eq!(vectorizer.vocabulary_size(), 0);
    /// ```
    pub fn set_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words = StopWordsFilter::new(words);
    }

    /// Learn the vocabulary from a corpus of documents.
    ///
    /// Each document is tokenized, tokens are case-normalized (unless
    /// [`CountVectorizer::with_lowercase`] disabled it), stop words are
    /// discarded, and the survivors form the vocabulary. Column indices are
    /// assigned in lexicographic token order.
    ///
    /// Replaces any vocabulary built by a prior `fit` call. An empty corpus
    /// is legal and yields an empty vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// vectorizer.fit(&["the cat sat", "the dog ran"]);
    /// assert_eq!(vectorizer.vocabulary(), ["cat", "dog", "ran", "sat"]);
    /// ```
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let mut seen: BTreeSet<String> = BTreeSet::new();

        for doc in documents {
            for token in self.tokenizer.tokens(doc.as_ref()) {
                let term = self.normalize(token);
                // Stop-word matching is case-insensitive even when the
                // vocabulary itself is case-sensitive
                if self.stop_words.is_stop_word(&term) {
                    continue;
                }
                seen.insert(term);
            }
        }

        // BTreeSet iteration order is lexicographic, which fixes the
        // column order of every vector produced from this vocabulary
        self.terms = seen.into_iter().collect();
        self.vocabulary = self
            .terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
    }

    /// Map one document into a count vector aligned to the current
    /// vocabulary.
    ///
    /// Tokens absent from the vocabulary are ignored; present tokens
    /// increment their slot by 2 if the token has at least 3 characters,
    /// else by 1. The output length always equals
    /// [`CountVectorizer::vocabulary_size`]; with no fitted vocabulary the
    /// result is an empty vector, not an error.
    ///
    /// Never mutates vocabulary state, so it is safe on unseen text at
    /// inference time and yields identical output for identical input.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// vectorizer.fit(&["red green blue"]);
    ///
    /// // "red" weighs 2 (3 chars) and appears twice; "green" weighs 2
    /// assert_eq!(vectorizer.transform("red green red"), vec![0, 2, 4]);
    ///
    /// // Unknown tokens contribute nothing
    /// assert_eq!(vectorizer.transform("purple"), vec![0, 0, 0]);
    /// ```
    #[must_use]
    pub fn transform(&self, document: &str) -> Vec<u32> {
        let mut counts = vec![0_u32; self.terms.len()];

        for token in self.tokenizer.tokens(document) {
            let term = self.normalize(token);
            if let Some(&idx) = self.vocabulary.get(&term) {
                counts[idx] += token_weight(&term);
            }
        }

        counts
    }

    /// Learn the vocabulary from a corpus, then transform every document of
    /// that corpus, order-preserving.
    ///
    /// Equivalent to [`CountVectorizer::fit`] followed by
    /// [`CountVectorizer::transform`] on each document.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// let vectors = vectorizer.fit_transform(&["cat dog", "dog dog"]);
    ///
    /// assert_eq!(vectors, vec![vec![2, 2], vec![0, 4]]);
    /// ```
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<Vec<u32>> {
        self.fit(documents);
        documents
            .iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect()
    }

    /// Number of tokens in the fitted vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// assert_eq!(vectorizer.vocabulary_size(), 0);
    ///
    /// vectorizer.fit(&["cat dog bird"]);
    /// assert_eq!(vectorizer.vocabulary_size(), 3);
    /// ```
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// The fitted vocabulary in lexicographic (vector column) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// vectorizer.fit(&["zebra apple mango"]);
    /// assert_eq!(vectorizer.vocabulary(), ["apple", "mango", "zebra"]);
    /// ```
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.terms
    }

    fn normalize(&self, token: &str) -> String {
        if self.lowercase {
            token.to_lowercase()
        } else {
            token.to_string()
        }
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Length-based salience weight for one token occurrence.
fn token_weight(term: &str) -> u32 {
    if term.chars().count() >= LONG_TOKEN_CHARS {
        LONG_TOKEN_WEIGHT
    } else {
        1
    }
}


#[cfg(test)]
mod vectorize_contract_falsify;
