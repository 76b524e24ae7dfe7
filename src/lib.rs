//! # cinematch
//!
//! A content-based movie recommender: an offline indexer turns a
//! catalog CSV into a TF-IDF cosine-similarity matrix, an online
//! session answers top-N "more like this" queries against the
//! persisted artifacts.
//!
//! ## Quick Start
//!
//! ```bash
//! cinematch index --catalog movies.csv --data-dir ./data
//! cinematch recommend "Inception" --data-dir ./data --top-n 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use cinematch::prelude::*;
//!
//! let store = ArtifactStore::new("./data");
//! Indexer::new().run("movies.csv", &store)?;
//!
//! let session = Session::load(&store)?;
//! if let Some(results) = session.recommend("Inception", 5) {
//!     for rec in results {
//!         println!("{}. {} ({:.4})", rec.rank, rec.title, rec.score);
//!     }
//! }
//! # Ok::<(), cinematch_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - [`cinematch-core`](cinematch_core) - records, text
//!   normalization, TF-IDF, similarity matrix, error taxonomy
//! - [`cinematch-engine`](cinematch_engine) - indexing pipeline and
//!   query session
//! - [`cinematch-storage`](cinematch_storage) - paired artifact
//!   persistence with atomic writes

pub mod omdb;

// Re-export core types
pub use cinematch_core::{
    CatalogRecord, DocVector, Error, RecordTable, Result, SimilarityMatrix, TfidfVectorizer,
    DEFAULT_MAX_FEATURES,
};

// Re-export the engine
pub use cinematch_engine::{Indexer, Recommendation, Session};

// Re-export storage
pub use cinematch_storage::ArtifactStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArtifactStore, CatalogRecord, Error, Indexer, Recommendation, RecordTable, Result,
        Session, SimilarityMatrix, TfidfVectorizer,
    };
}
