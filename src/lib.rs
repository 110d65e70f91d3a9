//! Contar: count vectorization for text classification in pure Rust.
//!
//! Contar converts collections of raw text into fixed-length numeric count
//! vectors suitable as input to downstream classifiers. A fitting pass builds
//! a deterministic vocabulary from a corpus; any subsequent text, seen or
//! unseen, maps into a vector aligned to that vocabulary, with a lightweight
//! term-length weighting scheme (longer tokens weigh more than very short
//! ones).
//!
//! # Quick Start
//!
//! ```
//! use contar::prelude::*;
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
//! // Stop words removed, vocabulary in lexicographic order
//! assert_eq!(vectorizer.vocabulary_size(), 5);
//! assert_eq!(vectors.len(), 3);
//!
//! // Transform unseen text against the same vocabulary
//! let unseen = vectorizer.transform("Customer response data.");
//! assert_eq!(unseen, vec![0, 0, 0, 0, 0]);
//! ```
//!
//! # Modules
//!
//! - [`tokenize`]: delimiter-based tokenization with a lazy token iterator
//! - [`stopwords`]: stop word sets and the built-in English list
//! - [`vectorize`]: the `CountVectorizer` (fit / transform / `fit_transform`)
//!
//! # Concurrency
//!
//! All operations are synchronous, in-memory computations. The vocabulary is
//! the only mutable state: `fit` takes `&mut self` and `transform` takes
//! `&self`, so the borrow checker enforces the exclusive-writer /
//! shared-reader discipline within a single owner. Wrap the vectorizer in a
//! lock for multi-threaded embedding.

pub mod error;
pub mod prelude;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

pub use error::{ContarError, Result};
pub use vectorize::CountVectorizer;
