//! Offline indexing pipeline.
//!
//! Catalog CSV -> cleaned record table -> TF-IDF rows -> dense
//! pairwise cosine matrix -> persisted artifact pair. Run once, or
//! whenever the source catalog changes. The pipeline is deterministic:
//! two runs over the same input produce an identical table and a
//! bit-identical matrix.

use std::path::Path;
use tracing::info;

use cinematch_core::{RecordTable, Result, SimilarityMatrix, TfidfVectorizer, DEFAULT_MAX_FEATURES};
use cinematch_storage::ArtifactStore;

use crate::catalog;

/// Builds the record table and similarity matrix from a raw catalog.
#[derive(Debug, Clone)]
pub struct Indexer {
    max_features: usize,
}

impl Indexer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
        }
    }

    /// Vocabulary ceiling for the TF-IDF representation.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }

    /// Build the matched pair in memory.
    pub fn build<P: AsRef<Path>>(&self, catalog_path: P) -> Result<(RecordTable, SimilarityMatrix)> {
        let catalog = catalog::load_catalog(catalog_path)?;
        let table = RecordTable::new(catalog.records);

        let docs: Vec<&str> = table.iter().map(|r| r.cleaned.as_str()).collect();
        let rows = TfidfVectorizer::new()
            .with_max_features(self.max_features)
            .fit_transform(&docs);
        info!(documents = docs.len(), "corpus vectorized");

        let matrix = SimilarityMatrix::from_doc_vectors(&rows);
        info!(dim = matrix.dim(), "similarity matrix computed");

        Ok((table, matrix))
    }

    /// Build and persist the matched pair.
    ///
    /// On any failure the previously saved artifacts are untouched.
    pub fn run<P: AsRef<Path>>(
        &self,
        catalog_path: P,
        store: &ArtifactStore,
    ) -> Result<(RecordTable, SimilarityMatrix)> {
        let (table, matrix) = self.build(catalog_path)?;
        store.save(&table, &matrix)?;
        Ok((table, matrix))
    }
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new()
    }
}
