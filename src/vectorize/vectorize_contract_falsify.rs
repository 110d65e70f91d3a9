//! Count Vectorization Contract Falsification Tests
//!
//! Popperian falsification of the vectorizer contract:
//!   - transform output length equals vocabulary size, always
//!   - vector entry order is lexicographic on vocabulary tokens
//!   - fit_transform ≡ fit + transform (composition equivalence)
//!   - vocabulary never contains a stop word
//!   - vectorization is deterministic across instances and calls
//!   - token weight is 2 for tokens of ≥ 3 chars, else 1

pub(crate) use super::*;

// ============================================================================
// FALSIFY-VEC-001: Output length contract
// Contract: transform(d).len() == vocabulary_size() for every d
// ============================================================================

#[test]
fn falsify_vec_001_output_length() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["cat dog", "dog bird", "cat bird bird"]);

    for doc in ["cat", "", "entirely unseen words", "the and is"] {
        let vector = vectorizer.transform(doc);
        assert_eq!(
            vector.len(),
            vectorizer.vocabulary_size(),
            "FALSIFIED VEC-001: transform({doc:?}).len() {} != vocab_size {}",
            vector.len(),
            vectorizer.vocabulary_size()
        );
    }
}

#[test]
fn falsify_vec_001_unfitted_yields_empty() {
    let vectorizer = CountVectorizer::new();
    let vector = vectorizer.transform("no vocabulary yet");

    assert!(
        vector.is_empty(),
        "FALSIFIED VEC-001: unfitted transform returned {} entries",
        vector.len()
    );
}

// ============================================================================
// FALSIFY-VEC-002: Lexicographic column order
// Contract: vocabulary() is sorted; vector columns follow that order
// ============================================================================

#[test]
fn falsify_vec_002_vocabulary_sorted() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["zebra mango apple", "quartz banana"]);

    let vocab = vectorizer.vocabulary();
    let mut sorted = vocab.to_vec();
    sorted.sort();
    assert_eq!(
        vocab, &sorted[..],
        "FALSIFIED VEC-002: vocabulary not in lexicographic order"
    );
}

#[test]
fn falsify_vec_002_columns_follow_vocabulary() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["zebra apple"]);

    // vocabulary: ["apple", "zebra"]; both ≥ 3 chars
    assert_eq!(
        vectorizer.transform("zebra"),
        vec![0, 2],
        "FALSIFIED VEC-002: 'zebra' count not in the 'zebra' column"
    );
    assert_eq!(
        vectorizer.transform("apple"),
        vec![2, 0],
        "FALSIFIED VEC-002: 'apple' count not in the 'apple' column"
    );
}

// ============================================================================
// FALSIFY-VEC-003: fit_transform ≡ fit + transform
// Contract: fit_transform(docs) equals fit(docs) then transform of each doc
// ============================================================================

#[test]
fn falsify_vec_003_fit_transform_equivalence() {
    let docs = vec!["hello world", "hello rust", "world programming"];

    let mut v1 = CountVectorizer::new();
    let m1 = v1.fit_transform(&docs);

    let mut v2 = CountVectorizer::new();
    v2.fit(&docs);
    let m2: Vec<Vec<u32>> = docs.iter().map(|d| v2.transform(d)).collect();

    assert_eq!(
        m1, m2,
        "FALSIFIED VEC-003: fit_transform diverges from fit + transform"
    );
}

// ============================================================================
// FALSIFY-VEC-004: Stop word exclusion
// Contract: no vocabulary token is a stop word; stop-word-only corpus
// yields an empty vocabulary and empty vectors
// ============================================================================

#[test]
fn falsify_vec_004_no_stop_words_in_vocabulary() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["the quick brown fox is over the lazy dog"]);

    let filter = crate::stopwords::StopWordsFilter::english();
    for term in vectorizer.vocabulary() {
        assert!(
            !filter.is_stop_word(term),
            "FALSIFIED VEC-004: stop word '{term}' entered the vocabulary"
        );
    }
}

#[test]
fn falsify_vec_004_stop_word_only_corpus() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["the and of", "is a to"]);

    assert_eq!(
        vectorizer.vocabulary_size(),
        0,
        "FALSIFIED VEC-004: stop-word-only corpus produced a vocabulary"
    );
    assert!(
        vectorizer.transform("the and of").is_empty(),
        "FALSIFIED VEC-004: transform over empty vocabulary is non-empty"
    );
}

// ============================================================================
// FALSIFY-VEC-005: Determinism
// Contract: identically configured vectorizers over the same corpus produce
// identical vocabularies and vectors
// ============================================================================

#[test]
fn falsify_vec_005_determinism_across_instances() {
    let docs = vec!["cat dog bird", "rust programming language"];

    let mut v1 = CountVectorizer::new();
    let m1 = v1.fit_transform(&docs);

    let mut v2 = CountVectorizer::new();
    let m2 = v2.fit_transform(&docs);

    assert_eq!(
        v1.vocabulary(),
        v2.vocabulary(),
        "FALSIFIED VEC-005: vocabularies differ across instances"
    );
    assert_eq!(m1, m2, "FALSIFIED VEC-005: vectors differ across instances");
}

#[test]
fn falsify_vec_005_determinism_across_calls() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["repeat after me"]);

    let first = vectorizer.transform("repeat repeat me");
    let second = vectorizer.transform("repeat repeat me");
    assert_eq!(
        first, second,
        "FALSIFIED VEC-005: repeated transform diverged"
    );
}

// ============================================================================
// FALSIFY-VEC-006: Length-based weighting
// Contract: one occurrence contributes 2 for tokens of ≥ 3 chars, else 1
// ============================================================================

#[test]
fn falsify_vec_006_long_token_weighs_two() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["fox"]);

    assert_eq!(
        vectorizer.transform("fox"),
        vec![2],
        "FALSIFIED VEC-006: 3-char token did not weigh 2"
    );
}

#[test]
fn falsify_vec_006_short_token_weighs_one() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&["ox"]);

    assert_eq!(
        vectorizer.transform("ox"),
        vec![1],
        "FALSIFIED VEC-006: 2-char token did not weigh 1"
    );
}
