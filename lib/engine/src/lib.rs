//! # cinematch-engine
//!
//! The two halves of the recommender, executed in dependency order:
//!
//! - [`Indexer`] (offline): raw catalog CSV -> cleaned records ->
//!   TF-IDF -> pairwise cosine matrix -> persisted artifact pair.
//! - [`Session`] (online): load the artifact pair once, answer
//!   `recommend(title, top_n)` requests against immutable state.
//!
//! Data flows one way: catalog -> indexer -> artifacts -> session ->
//! ranked results.

pub mod catalog;
pub mod indexer;
pub mod session;

pub use indexer::Indexer;
pub use session::{Recommendation, Session};
