//! # cinematch-storage
//!
//! Persistence layer for the cinematch recommender: the record table
//! and similarity matrix produced by one indexer run are written as a
//! matched pair of bincode files and cross-checked on load.

pub mod artifacts;

pub use artifacts::ArtifactStore;
