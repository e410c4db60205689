//! Merge fetched tags and aliases into snapshot rows.

use std::collections::HashMap;

use tagtrend_core::SnapshotRow;

use crate::types::{AliasMap, ApiTag};

/// Builds one row per distinct tag name, in fetch order, with its aliases
/// attached.
///
/// Count-ordered paging can return the same tag twice when counts shift
/// between requests; the row stays at its first position and takes the
/// later values.
#[must_use]
pub fn build_snapshot_rows(tags: Vec<ApiTag>, aliases: &AliasMap) -> Vec<SnapshotRow> {
    let mut rows: Vec<SnapshotRow> = Vec::with_capacity(tags.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(tags.len());

    for tag in tags {
        let row = SnapshotRow {
            aliases: aliases.get(&tag.name).cloned().unwrap_or_default(),
            category: tag.category,
            post_count: tag.post_count,
            name: tag.name,
        };
        match index.get(&row.name) {
            Some(&i) => rows[i] = row,
            None => {
                index.insert(row.name.clone(), rows.len());
                rows.push(row);
            }
        }
    }
    rows
}
