//! Stop words for vocabulary construction.
//!
//! Stop words are common, low-information words (like "the", "is", "at") that
//! are excluded from the vocabulary during fitting so that count vectors
//! reflect content words only.
//!
//! This module provides:
//! - A default English stop word list (171 common words)
//! - [`StopWordsFilter`] for case-insensitive stop word membership tests
//! - Customizable stop word sets
//!
//! # Examples
//!
//! ```
//! use contar::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//! assert!(filter.is_stop_word("the"));
//! assert!(!filter.is_stop_word("vector"));
//! ```

use std::collections::HashSet;

/// Stop word set with case-insensitive membership testing.
///
/// Words are stored lowercase; [`StopWordsFilter::is_stop_word`] lowercases
/// its probe, so matching is case-insensitive regardless of how the filter
/// was built.
///
/// # Examples
///
/// ```
/// use contar::stopwords::StopWordsFilter;
///
/// // Default English stop words
/// let filter = StopWordsFilter::english();
/// let tokens = vec!["the", "cat", "is", "happy"];
/// assert_eq!(filter.filter(&tokens), vec!["cat", "happy"]);
///
/// // Custom stop words
/// let custom = StopWordsFilter::new(vec!["foo", "bar"]);
/// let tokens = vec!["foo", "test", "bar", "data"];
/// assert_eq!(custom.filter(&tokens), vec!["test", "data"]);
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stop words, stored lowercase.
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words.
    ///
    /// Words are lowercased on construction so matching is case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(vec!["Foo", "BAR"]);
    /// assert!(filter.is_stop_word("foo"));
    /// assert!(filter.is_stop_word("bar"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the default English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert_eq!(filter.len(), 171);
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Check if a word is a stop word (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(filter.is_stop_word("THE"));
    /// assert!(!filter.is_stop_word("tokenizer"));
    /// ```
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Remove stop words from a list of tokens, preserving the original case
    /// of retained tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// let tokens = vec!["The", "Quick", "brown", "fox"];
    /// assert_eq!(filter.filter(&tokens), vec!["Quick", "brown", "fox"]);
    /// ```
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !self.is_stop_word(t))
            .map(ToString::to_string)
            .collect()
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter has no stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use contar::stopwords::StopWordsFilter;
    ///
    /// assert!(StopWordsFilter::new(Vec::<String>::new()).is_empty());
    /// assert!(!StopWordsFilter::english().is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopWordsFilter {
    /// English stop words.
    fn default() -> Self {
        Self::english()
    }
}

/// Default English stop words (171 common words).
///
/// Covers articles, pronouns, question words, prepositions, conjunctions,
/// auxiliary verbs, and other high-frequency function words.
///
/// # Examples
///
/// ```
/// use contar::stopwords::ENGLISH_STOP_WORDS;
///
/// assert!(ENGLISH_STOP_WORDS.contains(&"the"));
/// assert!(ENGLISH_STOP_WORDS.contains(&"and"));
/// assert!(!ENGLISH_STOP_WORDS.contains(&"vectorizer"));
/// ```
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself",
    "they", "them", "their", "theirs", "themselves",
    // question words
    "what", "which", "who", "whom", "whose", "why", "when", "where",
    "how",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around",
    "at", "before", "behind", "below", "beneath", "beside", "between", "beyond",
    "by", "down", "during", "for", "from", "in", "inside", "into",
    "near", "of", "off", "on", "onto", "out", "outside", "over",
    "through", "throughout", "to", "toward", "under", "underneath", "until", "up",
    "upon", "with", "within", "without",
    // conjunctions
    "and", "as", "because", "but", "if", "or", "since", "so",
    "than", "that", "though", "unless", "while",
    // auxiliary and common verbs
    "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing",
    "would", "should", "could", "ought", "can", "may", "might", "must",
    "will", "shall",
    // quantifiers, determiners, adverbs
    "all", "any", "both", "each", "every", "few", "more", "most",
    "much", "neither", "no", "none", "not", "one", "other", "same",
    "several", "some", "such", "very", "too", "only", "own", "then",
    "there", "these", "this", "those", "just", "now", "here",
    // other high-frequency words
    "again", "also", "another", "back", "even", "ever", "get", "give",
    "go", "got", "made", "make", "say", "see", "take", "way",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
