//! TF-IDF vectorization over the normalized catalog corpus.
//!
//! Raw term counts, smoothed inverse document frequency
//! (`ln((1 + n) / (1 + df)) + 1`) and L2-normalized rows, with the
//! vocabulary capped to the most document-frequent terms to bound
//! memory. Fitting is deterministic for a given corpus.

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::text;

/// Default vocabulary ceiling.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// A sparse, L2-normalized TF-IDF document vector.
///
/// Entries are `(column, weight)` pairs sorted by column. A document
/// whose normalized text is empty has no entries and a zero norm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocVector {
    entries: Vec<(u32, f32)>,
}

impl DocVector {
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product via merge join over the sorted columns.
    ///
    /// Rows are unit length, so this is also the cosine similarity.
    #[must_use]
    pub fn dot(&self, other: &DocVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0f32;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, wa) = self.entries[i];
            let (cb, wb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// TF-IDF vectorizer with a document-frequency-capped vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl TfidfVectorizer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }

    /// Cap the vocabulary to the `max_features` terms with the highest
    /// document frequency (ties broken lexicographically). Terms over
    /// the cap are dropped from the representation, not from the text.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features.max(1);
        self
    }

    /// Fit on normalized documents and return one weighted row per
    /// document, in input order.
    #[must_use]
    pub fn fit_transform(&self, docs: &[&str]) -> Vec<DocVector> {
        let n_docs = docs.len();

        // Document frequency per term.
        let mut dfs: AHashMap<&str, u32> = AHashMap::new();
        for doc in docs {
            let mut seen: AHashSet<&str> = AHashSet::new();
            for token in text::tokenize(doc) {
                if seen.insert(token) {
                    *dfs.entry(token).or_insert(0) += 1;
                }
            }
        }

        // Vocabulary selection: top max_features by df, then stable
        // alphabetical column order.
        let mut terms: Vec<(&str, u32)> = dfs.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(self.max_features);
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let vocab: AHashMap<&str, u32> = terms
            .iter()
            .enumerate()
            .map(|(col, (term, _))| (*term, col as u32))
            .collect();

        let idf: Vec<f32> = terms
            .iter()
            .map(|(_, df)| ((1.0 + n_docs as f64) / (1.0 + f64::from(*df))).ln() as f32 + 1.0)
            .collect();

        docs.iter()
            .map(|doc| self.transform_one(doc, &vocab, &idf))
            .collect()
    }

    fn transform_one(
        &self,
        doc: &str,
        vocab: &AHashMap<&str, u32>,
        idf: &[f32],
    ) -> DocVector {
        let mut counts: AHashMap<u32, u32> = AHashMap::new();
        for token in text::tokenize(doc) {
            if let Some(&col) = vocab.get(token) {
                *counts.entry(col).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(u32, f32)> = counts
            .into_iter()
            .map(|(col, tf)| (col, tf as f32 * idf[col as usize]))
            .collect();
        entries.sort_by_key(|&(col, _)| col);

        let norm: f32 = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }

        DocVector { entries }
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
