//! # cinematch-core
//!
//! Core data model and algorithms for the cinematch recommender:
//!
//! - [`CatalogRecord`] / [`RecordTable`] - the cleaned, immutable
//!   catalog, with the row index as the join key to the matrix
//! - [`text`] - deterministic text normalization with English
//!   stopword filtering
//! - [`TfidfVectorizer`] - document-frequency-capped TF-IDF over the
//!   normalized corpus
//! - [`SimilarityMatrix`] - dense, symmetric pairwise cosine matrix
//! - [`error`] - the crate-wide error taxonomy and `Result` alias

pub mod error;
pub mod matrix;
pub mod record;
pub mod text;
pub mod tfidf;

pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
pub use record::{CatalogRecord, RecordTable};
pub use tfidf::{DocVector, TfidfVectorizer, DEFAULT_MAX_FEATURES};
