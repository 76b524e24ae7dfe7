use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog source error: {0}")]
    DataSource(String),

    #[error("Catalog schema error: {0}")]
    Schema(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Artifact missing: {0} (run the indexer first)")]
    ArtifactMissing(PathBuf),

    #[error("Artifact corrupt: {0}")]
    ArtifactCorrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
