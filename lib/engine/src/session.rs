//! Online query session.
//!
//! A [`Session`] holds the artifact pair loaded once at startup and
//! answers every subsequent request against that immutable state. It
//! never reloads or rebuilds on the query path; orchestration such as
//! "index if missing" belongs to the caller. Because the state is
//! read-only, a `Session` is `Send + Sync` and concurrent
//! [`recommend`] calls need no locking. Picking up re-indexed
//! artifacts means loading a fresh `Session` and swapping a shared
//! reference (e.g. an `Arc`), never mutating a live one.
//!
//! [`recommend`]: Session::recommend

use tracing::{debug, info};

use cinematch_core::{RecordTable, Result, SimilarityMatrix};
use cinematch_storage::ArtifactStore;

/// One ranked result: 1-based rank, title and cosine score.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub rank: usize,
    pub title: String,
    pub score: f32,
}

/// Loaded, immutable query state.
pub struct Session {
    records: RecordTable,
    matrix: SimilarityMatrix,
}

impl Session {
    /// Load the artifact pair. Loads-or-fails only: a missing pair is
    /// reported as an error, never rebuilt from here.
    pub fn load(store: &ArtifactStore) -> Result<Self> {
        let (records, matrix) = store.load()?;
        info!(records = records.len(), "session loaded");
        Ok(Self { records, matrix })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique titles in ascending order, for selection UIs.
    #[must_use]
    pub fn selectable_titles(&self) -> Vec<String> {
        self.records.selectable_titles()
    }

    /// Top `top_n` records most similar to `title`.
    ///
    /// Title matching is case-insensitive; with duplicate titles the
    /// first row wins. Returns `None` when the title is not in the
    /// catalog - a normal outcome for user-typed input, not an error.
    /// The queried record itself is always excluded. Results are in
    /// descending score order, ties broken by ascending row index; a
    /// `top_n` larger than the catalog returns all other records.
    #[must_use]
    pub fn recommend(&self, title: &str, top_n: usize) -> Option<Vec<Recommendation>> {
        let query_idx = self.records.find_title(title)?;
        let scores = self.matrix.row(query_idx);

        let mut candidates: Vec<(usize, f32)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|&(idx, _)| idx != query_idx)
            .collect();
        // Stable sort: equal scores keep ascending row order.
        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.truncate(top_n);

        debug!(title, results = candidates.len(), "recommendation served");

        Some(
            candidates
                .into_iter()
                .enumerate()
                .map(|(pos, (idx, score))| Recommendation {
                    rank: pos + 1,
                    title: self.records.get(idx).map(|r| r.title.clone()).unwrap_or_default(),
                    score,
                })
                .collect(),
        )
    }
}
