//! File-backed persistence for tag snapshots.
//!
//! Snapshots live in one directory as headerless CSV files, one per capture
//! date. Reads are tolerant: missing files, missing directories and
//! malformed rows degrade to "no data" rather than errors, so a half-written
//! tags directory never aborts a comparison run.

pub mod csv;
pub mod cumulative;
pub mod filter;
pub mod snapshots;

use std::path::PathBuf;

use thiserror::Error;

pub use cumulative::{build_cumulative, write_cumulative, CumulativeTable};
pub use filter::{load_allow_list, TagFilter};
pub use snapshots::{list_snapshots, load_table, parse_table, write_snapshot, SnapshotStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
