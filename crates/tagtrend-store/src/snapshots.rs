//! Snapshot repository: enumerate, read and write dated tag snapshots.
//!
//! ## Row format
//!
//! Headerless CSV, one tag per row:
//!
//! ```text
//! tag_name,category_id,post_count,alias_string
//! ```
//!
//! `alias_string` is optional when reading. Rows whose category or count does
//! not parse as an integer are skipped.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tagtrend_core::{Category, SnapshotId, SnapshotRow, TagCountTable};

use crate::csv::{parse_rows, write_row};
use crate::filter::{load_allow_list, TagFilter};
use crate::StoreError;

const SNAPSHOT_EXTENSION: &str = ".csv";

/// A parsed snapshot row borrowed from the raw fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotRecord<'a> {
    pub tag: &'a str,
    pub category: i64,
    pub count: u64,
}

impl<'a> SnapshotRecord<'a> {
    /// Returns `None` when the row is too short or its category/count are not integers.
    #[must_use]
    pub fn from_fields(fields: &'a [String]) -> Option<Self> {
        let tag = fields.first()?.as_str();
        let category = fields.get(1)?.trim().parse::<i64>().ok()?;
        let count = fields.get(2)?.trim().parse::<u64>().ok()?;
        Some(Self {
            tag,
            category,
            count,
        })
    }
}

/// List snapshot identifiers in `dir`, oldest first.
///
/// Only `*.csv` files count. Identifiers are sorted as strings, which is
/// chronological as long as file names embed an ISO-8601 date. A missing or
/// unreadable directory yields an empty list.
#[must_use]
pub fn list_snapshots(dir: &Path) -> Vec<SnapshotId> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "snapshot directory not readable");
            return Vec::new();
        }
    };

    let mut ids: Vec<SnapshotId> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(SNAPSHOT_EXTENSION))
        .map(SnapshotId::new)
        .collect();
    ids.sort();
    ids
}

/// Build the table for snapshot `id` in `dir`, keeping rows accepted by `filter`.
///
/// A missing file is an empty table: the snapshot simply has no data yet.
#[must_use]
pub fn load_table(dir: &Path, id: &SnapshotId, filter: TagFilter<'_>) -> TagCountTable {
    let path = dir.join(id.as_str());
    match std::fs::read_to_string(&path) {
        Ok(text) => parse_table(&text, filter),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "snapshot file missing; using empty table");
            TagCountTable::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "snapshot file not readable; using empty table");
            TagCountTable::new()
        }
    }
}

/// Parse snapshot text into a table, keeping rows accepted by `filter`.
///
/// Rows keep file order. When a tag appears more than once it stays at its
/// first position and the last row's count wins.
#[must_use]
pub fn parse_table(text: &str, filter: TagFilter<'_>) -> TagCountTable {
    let rows = parse_rows(text);
    let mut table = TagCountTable::new();
    for fields in &rows {
        let Some(record) = SnapshotRecord::from_fields(fields) else {
            continue;
        };
        if filter.accepts(&record) {
            table.insert(record.tag.to_owned(), record.count);
        }
    }
    table
}

/// Write `rows` as snapshot `id` inside `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the directory or file cannot be written.
pub fn write_snapshot(
    dir: &Path,
    id: &SnapshotId,
    rows: &[SnapshotRow],
) -> Result<PathBuf, StoreError> {
    std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let path = dir.join(id.as_str());
    let file = File::create(&path).map_err(|e| StoreError::io(&path, e))?;
    let mut writer = BufWriter::new(file);

    for row in rows {
        let fields = [
            row.name.clone(),
            row.category.to_string(),
            row.post_count.to_string(),
            row.aliases.join(","),
        ];
        write_row(&mut writer, &fields).map_err(|e| StoreError::io(&path, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(&path, e))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "snapshot written");
    Ok(path)
}

/// A snapshot directory together with the allow-list used for the
/// allow-listed category.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
    allow_list: HashSet<String>,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>, allow_list: HashSet<String>) -> Self {
        Self {
            dir: dir.into(),
            allow_list,
        }
    }

    /// Open `dir`, reading the allow-list from `allow_list_path` once.
    pub fn open(dir: impl Into<PathBuf>, allow_list_path: &Path) -> Self {
        Self::new(dir, load_allow_list(allow_list_path))
    }

    #[must_use]
    pub fn snapshots(&self) -> Vec<SnapshotId> {
        list_snapshots(&self.dir)
    }

    /// Table for snapshot `id` scoped to `category`.
    #[must_use]
    pub fn table(&self, id: &SnapshotId, category: Category) -> TagCountTable {
        load_table(
            &self.dir,
            id,
            TagFilter::for_category(category, &self.allow_list),
        )
    }
}
