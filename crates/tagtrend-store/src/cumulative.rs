//! Wide tag-by-snapshot table.
//!
//! One row per tag ever seen, one column per snapshot (oldest first). Cells
//! are empty where the tag was absent from that snapshot.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::csv::write_row;
use crate::filter::TagFilter;
use crate::snapshots::{list_snapshots, load_table};
use crate::StoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CumulativeTable {
    /// Snapshot display names, oldest first.
    pub columns: Vec<String>,
    /// Tag name to one count per column.
    pub rows: BTreeMap<String, Vec<Option<u64>>>,
}

/// Build the wide table from every snapshot in `dir`, unfiltered.
#[must_use]
pub fn build_cumulative(dir: &Path) -> CumulativeTable {
    let snapshots = list_snapshots(dir);
    let width = snapshots.len();
    let mut table = CumulativeTable {
        columns: snapshots
            .iter()
            .map(|id| id.display_name().to_owned())
            .collect(),
        rows: BTreeMap::new(),
    };

    for (col, id) in snapshots.iter().enumerate() {
        for (tag, count) in load_table(dir, id, TagFilter::Unfiltered) {
            table.rows.entry(tag).or_insert_with(|| vec![None; width])[col] = Some(count);
        }
    }

    table
}

/// Rebuild the wide table from `dir` and write it to `out`.
///
/// Returns the number of tag rows written.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if `out` cannot be written.
pub fn write_cumulative(dir: &Path, out: &Path) -> Result<usize, StoreError> {
    let table = build_cumulative(dir);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let file = File::create(out).map_err(|e| StoreError::io(out, e))?;
    let mut writer = BufWriter::new(file);

    let mut header = Vec::with_capacity(table.columns.len() + 1);
    header.push("tag".to_owned());
    header.extend(table.columns.iter().cloned());
    write_row(&mut writer, &header).map_err(|e| StoreError::io(out, e))?;

    for (tag, counts) in &table.rows {
        let mut fields = Vec::with_capacity(counts.len() + 1);
        fields.push(tag.clone());
        fields.extend(counts.iter().map(|c| c.map(|n| n.to_string()).unwrap_or_default()));
        write_row(&mut writer, &fields).map_err(|e| StoreError::io(out, e))?;
    }
    writer.flush().map_err(|e| StoreError::io(out, e))?;

    tracing::info!(
        path = %out.display(),
        tags = table.rows.len(),
        snapshots = table.columns.len(),
        "cumulative table written"
    );
    Ok(table.rows.len())
}
