//! Raw catalog source.
//!
//! The indexer reads a CSV file with a header row and at least the
//! columns `genres, keywords, overview, title`. Extra columns are
//! ignored. Rows with any required field missing or empty are dropped
//! before indexing; no partial records survive.

use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use cinematch_core::{CatalogRecord, Error, Result};

/// Columns the source must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = ["genres", "keywords", "overview", "title"];

#[derive(Debug, Deserialize)]
struct RawRow {
    title: Option<String>,
    genres: Option<String>,
    keywords: Option<String>,
    overview: Option<String>,
}

impl RawRow {
    /// All four fields present and non-blank, or the row is dropped.
    fn into_record(self) -> Option<CatalogRecord> {
        let title = non_blank(self.title)?;
        let genres = non_blank(self.genres)?;
        let keywords = non_blank(self.keywords)?;
        let overview = non_blank(self.overview)?;
        Some(CatalogRecord::new(title, genres, keywords, overview))
    }
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

/// Result of loading and cleaning the raw catalog.
#[derive(Debug)]
pub struct CleanedCatalog {
    pub records: Vec<CatalogRecord>,
    pub dropped: usize,
}

/// Load the catalog CSV, verify its schema and drop incomplete rows.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CleanedCatalog> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| Error::DataSource(format!("{}: {}", path.display(), e)))?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| Error::DataSource(format!("{}: {}", path.display(), e)))?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::Schema(format!(
                "{}: required column '{}' not found in header",
                path.display(),
                column
            )));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;
    for row in reader.deserialize::<RawRow>() {
        let row = row.map_err(|e| Error::DataSource(format!("{}: {}", path.display(), e)))?;
        match row.into_record() {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(dropped, "dropped incomplete catalog rows");
    }
    info!(rows = records.len(), path = %path.display(), "catalog loaded");

    Ok(CleanedCatalog { records, dropped })
}
