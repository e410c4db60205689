//! Comparison of one (old, new) snapshot pair across every category.

use std::collections::BTreeMap;

use tagtrend_core::{
    Category, CategoryStats, ComparisonRecord, GrowthRecord, SnapshotId, TOP_COUNT,
};

use crate::growth::compute_growth;
use crate::ranking::{top_n, SortKey};
use crate::TableSource;

/// Build the comparison record for `old` -> `new`.
///
/// Each category in [`Category::ALL`] gets its own pair of tables, growth
/// list, and percent/diff top lists. The record id is `id_override` when
/// given, otherwise the new snapshot's identifier.
pub fn build_comparison<S: TableSource + ?Sized>(
    source: &S,
    old: &SnapshotId,
    new: &SnapshotId,
    id_override: Option<&str>,
    min_count: u64,
) -> ComparisonRecord {
    let stats: BTreeMap<Category, CategoryStats> = Category::ALL
        .into_iter()
        .map(|category| {
            let growth = category_growth(source, old, new, category, min_count);
            let stats = CategoryStats {
                percent: top_n(&growth, SortKey::Percent, TOP_COUNT),
                diff: top_n(&growth, SortKey::Diff, TOP_COUNT),
            };
            (category, stats)
        })
        .collect();

    ComparisonRecord {
        label: format!("{} to {}", old.display_name(), new.display_name()),
        id: id_override.map_or_else(|| new.as_str().to_owned(), str::to_owned),
        stats,
    }
}

fn category_growth<S: TableSource + ?Sized>(
    source: &S,
    old: &SnapshotId,
    new: &SnapshotId,
    category: Category,
    min_count: u64,
) -> Vec<GrowthRecord> {
    let old_table = source.table(old, category);
    let new_table = source.table(new, category);
    let growth = compute_growth(&old_table, &new_table, min_count);
    tracing::debug!(
        old = %old,
        new = %new,
        category = %category,
        old_tags = old_table.len(),
        new_tags = new_table.len(),
        records = growth.len(),
        "computed category growth"
    );
    growth
}

/// The two most recent snapshots of an ascending list.
#[must_use]
pub fn latest_pair(snapshots: &[SnapshotId]) -> Option<(&SnapshotId, &SnapshotId)> {
    match snapshots {
        [.., old, new] => Some((old, new)),
        _ => None,
    }
}

/// Top risers of the most recent pair for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestReport {
    pub old: SnapshotId,
    pub new: SnapshotId,
    pub category: Category,
    pub key: SortKey,
    pub rows: Vec<GrowthRecord>,
}

/// Rank the latest pair of `snapshots` for `category` by `key`.
///
/// Returns `None` when fewer than two snapshots exist.
pub fn rank_latest<S: TableSource + ?Sized>(
    source: &S,
    snapshots: &[SnapshotId],
    category: Category,
    key: SortKey,
    min_count: u64,
) -> Option<LatestReport> {
    let (old, new) = latest_pair(snapshots)?;
    let growth = category_growth(source, old, new, category, min_count);
    Some(LatestReport {
        old: old.clone(),
        new: new.clone(),
        category,
        key,
        rows: top_n(&growth, key, TOP_COUNT),
    })
}
