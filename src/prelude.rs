//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use contar::prelude::*;
//! ```

pub use crate::error::{ContarError, Result};
pub use crate::stopwords::{StopWordsFilter, ENGLISH_STOP_WORDS};
pub use crate::tokenize::{DelimiterTokenizer, Tokenizer, DEFAULT_DELIMITERS};
pub use crate::vectorize::CountVectorizer;
