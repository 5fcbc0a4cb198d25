//! Hits-table ingestion.
//!
//! Reads hit records from CSV with the header
//! `evtid,layer,r,phi,z,barcode`. Malformed rows fail ingestion with the
//! offending record position in the error.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::{HitGraphError, Result};
use crate::shared::models::{Hit, HitsTable};

impl HitsTable {
    /// Read a hits table from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Read a hits table from any CSV reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut hits = Vec::new();
        for (row, record) in csv_reader.deserialize::<Hit>().enumerate() {
            let hit = record.map_err(|e| {
                // Header is line 1, first record line 2.
                HitGraphError::ingest(format!("record {}: {e}", row + 2))
            })?;
            hits.push(hit);
        }
        debug!(n_hits = hits.len(), "ingested hits table");
        Ok(Self::from_hits(hits))
    }
}
