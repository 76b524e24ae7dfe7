//! Paired artifact persistence.
//!
//! One indexer run produces two files in the data directory:
//! `records.bin` (the cleaned record table) and `similarity.bin` (the
//! dense matrix). Two files cannot be replaced in a single rename, so
//! pair consistency is enforced in two layers:
//!
//! - each file is written through a temp-file + atomic rename, so a
//!   crashed run never leaves a partially-written artifact visible;
//! - both halves of a run carry the same `build_id`, and [`load`]
//!   rejects a mismatched pairing as corrupt. The matrix is written
//!   first, so an interrupted save leaves the previous, still
//!   mutually-consistent table in place.
//!
//! bincode round-trips `f32` values exactly, which is what makes the
//! persisted matrix byte-stable across identical indexer runs.
//!
//! [`load`]: ArtifactStore::load

use atomicwrites::{AtomicFile, OverwriteBehavior::AllowOverwrite};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use cinematch_core::{Error, RecordTable, Result, SimilarityMatrix};

const RECORDS_FILE: &str = "records.bin";
const MATRIX_FILE: &str = "similarity.bin";

const MAGIC: [u8; 4] = *b"CNMT";
const FORMAT_VERSION: u32 = 1;

static LAST_BUILD_ID: AtomicU64 = AtomicU64::new(0);

/// Wall-clock nanoseconds, bumped past the previous id so that two
/// saves in the same process never share a build id even on a coarse
/// clock.
fn next_build_id() -> Result<u64> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::Persistence(e.to_string()))?
        .as_nanos() as u64;
    let prev = LAST_BUILD_ID.fetch_max(nanos, Ordering::SeqCst);
    if nanos > prev {
        Ok(nanos)
    } else {
        Ok(LAST_BUILD_ID.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct ArtifactHeader {
    magic: [u8; 4],
    version: u32,
    /// Shared by both artifacts of one indexer run; the pairing guard.
    build_id: u64,
    /// Row count of the table / dimension of the matrix.
    len: u64,
}

impl ArtifactHeader {
    fn new(build_id: u64, len: usize) -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            build_id,
            len: len as u64,
        }
    }

    fn validate(&self, path: &Path, payload_len: usize) -> Result<()> {
        if self.magic != MAGIC {
            return Err(Error::ArtifactCorrupt(format!(
                "{}: bad magic bytes",
                path.display()
            )));
        }
        if self.version != FORMAT_VERSION {
            return Err(Error::ArtifactCorrupt(format!(
                "{}: unsupported format version {} (expected {})",
                path.display(),
                self.version,
                FORMAT_VERSION
            )));
        }
        if self.len != payload_len as u64 {
            return Err(Error::ArtifactCorrupt(format!(
                "{}: header declares {} rows but payload has {}",
                path.display(),
                self.len,
                payload_len
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TableArtifact {
    header: ArtifactHeader,
    records: RecordTable,
}

#[derive(Debug, Serialize, Deserialize)]
struct MatrixArtifact {
    header: ArtifactHeader,
    matrix: SimilarityMatrix,
}

/// Handle to the artifact pair in a data directory.
pub struct ArtifactStore {
    records_path: PathBuf,
    matrix_path: PathBuf,
    data_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            records_path: data_dir.join(RECORDS_FILE),
            matrix_path: data_dir.join(MATRIX_FILE),
            data_dir,
        }
    }

    #[inline]
    #[must_use]
    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    #[inline]
    #[must_use]
    pub fn matrix_path(&self) -> &Path {
        &self.matrix_path
    }

    /// Persist a record table and its similarity matrix as a matched
    /// pair. Any failure leaves previously saved artifacts untouched.
    pub fn save(&self, records: &RecordTable, matrix: &SimilarityMatrix) -> Result<()> {
        if records.len() != matrix.dim() {
            return Err(Error::Persistence(format!(
                "refusing to save mismatched pair: {} records vs {}x{} matrix",
                records.len(),
                matrix.dim(),
                matrix.dim()
            )));
        }

        std::fs::create_dir_all(&self.data_dir)?;

        let build_id = next_build_id()?;

        let matrix_artifact = MatrixArtifact {
            header: ArtifactHeader::new(build_id, matrix.dim()),
            matrix: matrix.clone(),
        };
        let table_artifact = TableArtifact {
            header: ArtifactHeader::new(build_id, records.len()),
            records: records.clone(),
        };

        // Matrix first: if the second write fails, the old pair stays
        // consistent and the new matrix is rejected at load time by
        // the build_id check.
        write_atomic(&self.matrix_path, &encode(&matrix_artifact)?)?;
        write_atomic(&self.records_path, &encode(&table_artifact)?)?;

        info!(
            records = records.len(),
            data_dir = %self.data_dir.display(),
            "artifacts saved"
        );
        Ok(())
    }

    /// Load the artifact pair, enforcing the pairing and dimension
    /// invariants.
    ///
    /// A missing file maps to [`Error::ArtifactMissing`]; anything
    /// that fails to deserialize, carries a stale pairing, or whose
    /// dimensions disagree maps to [`Error::ArtifactCorrupt`].
    pub fn load(&self) -> Result<(RecordTable, SimilarityMatrix)> {
        for path in [&self.records_path, &self.matrix_path] {
            if !path.exists() {
                return Err(Error::ArtifactMissing(path.clone()));
            }
        }

        let table: TableArtifact = decode(&self.records_path)?;
        let matrix: MatrixArtifact = decode(&self.matrix_path)?;

        table.header.validate(&self.records_path, table.records.len())?;
        matrix.header.validate(&self.matrix_path, matrix.matrix.dim())?;

        if table.header.build_id != matrix.header.build_id {
            return Err(Error::ArtifactCorrupt(format!(
                "stale artifact pairing: records build {} vs matrix build {}",
                table.header.build_id, matrix.header.build_id
            )));
        }
        if table.records.len() != matrix.matrix.dim() {
            return Err(Error::ArtifactCorrupt(format!(
                "dimension mismatch: {} records vs {}x{} matrix",
                table.records.len(),
                matrix.matrix.dim(),
                matrix.matrix.dim()
            )));
        }

        Ok((table.records, matrix.matrix))
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| Error::Serialization(e.to_string()))
}

fn decode<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path)?;
    bincode::deserialize(&bytes)
        .map_err(|e| Error::ArtifactCorrupt(format!("{}: {}", path.display(), e)))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    AtomicFile::new(path, AllowOverwrite)
        .write(|f| f.write_all(bytes))
        .map_err(|e| Error::Persistence(format!("{}: {}", path.display(), e)))
}
