//! Text normalization for the indexing pipeline.
//!
//! Raw catalog text is reduced to a lowercase, stopword-free token
//! sequence before vectorization. The routine is pure: the same input
//! always yields the same output, which is what makes re-indexing the
//! same catalog reproducible.

use std::collections::HashSet;
use std::sync::OnceLock;

/// English stop words removed during normalization.
///
/// Common NLTK/scikit-learn list: articles, pronouns, prepositions,
/// conjunctions, auxiliary verbs and similar low-signal words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles
    "a", "an", "the",
    // pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself",
    "they", "them", "their", "theirs", "themselves",
    // question words
    "what", "which", "who", "whom", "whose", "why", "when", "where", "how",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among",
    "around", "at", "before", "behind", "below", "beneath", "beside",
    "between", "beyond", "by", "down", "during", "for", "from", "in",
    "inside", "into", "near", "of", "off", "on", "onto", "out", "outside",
    "over", "through", "throughout", "to", "toward", "under", "until",
    "up", "upon", "with", "within", "without",
    // conjunctions
    "and", "as", "because", "but", "if", "or", "since", "so", "than",
    "that", "though", "unless", "while",
    // auxiliary verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have",
    "has", "had", "having", "do", "does", "did", "doing", "would",
    "should", "could", "can", "may", "might", "must", "will", "shall",
    // determiners and common adverbs
    "all", "any", "both", "each", "every", "few", "more", "most", "much",
    "neither", "no", "none", "not", "one", "other", "same", "several",
    "some", "such", "very", "too", "only", "own", "then", "there",
    "these", "this", "those", "just", "now", "here", "again", "also",
    "further", "once", "s", "t", "don",
];

fn stop_word_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

/// Check whether a (lowercase) token is a stop word.
#[inline]
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    stop_word_set().contains(word)
}

/// Normalize raw text into the cleaned form used for vectorization.
///
/// Strips every character outside the ASCII alphabet and whitespace,
/// lowercases, splits on whitespace, drops stop words and rejoins the
/// surviving tokens with single spaces. May return an empty string;
/// such records keep a row in the table but carry a zero-weight vector.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    let tokens: Vec<String> = stripped
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| !is_stop_word(t))
        .collect();

    tokens.join(" ")
}

/// Tokenize an already-normalized string.
///
/// Normalized text is whitespace-joined, so this is a plain split.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
