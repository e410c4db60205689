//! Records produced by the comparison engine.
//!
//! Field names on the wire follow the JSON consumed by the presentation
//! layer (`old`, `new`, `diff`, `percent`, and `date` for the range label),
//! which is why several fields carry a serde rename.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Category;

/// Tag name to post count for one snapshot under one category filter.
///
/// Iterates in snapshot row order; a repeated tag keeps its first position.
pub type TagCountTable = IndexMap<String, u64>;

/// One tag as persisted in a snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub name: String,
    pub category: i64,
    pub post_count: u64,
    /// Alias names, written comma-joined in the fourth column.
    pub aliases: Vec<String>,
}

/// Growth of a single tag between two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRecord {
    pub tag: String,
    #[serde(rename = "old")]
    pub old_count: u64,
    #[serde(rename = "new")]
    pub new_count: u64,
    /// `new_count - old_count`; negative when the tag shrank.
    #[serde(rename = "diff")]
    pub absolute_diff: i64,
    /// `absolute_diff / old_count * 100`.
    #[serde(rename = "percent")]
    pub percent_diff: f64,
}

/// The two ranked lists kept for one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Top records by `percent_diff`, highest first.
    pub percent: Vec<GrowthRecord>,
    /// Top records by `absolute_diff`, highest first.
    pub diff: Vec<GrowthRecord>,
}

/// Growth summary for one (old, new) snapshot pair across every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// `"{old} to {new}"` using display names.
    #[serde(rename = "date")]
    pub label: String,
    pub id: String,
    pub stats: BTreeMap<Category, CategoryStats>,
}

/// The output artifact: daily and weekly comparisons, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSeries {
    pub daily: Vec<ComparisonRecord>,
    pub weekly: Vec<ComparisonRecord>,
}

impl ComparisonSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty() && self.weekly.is_empty()
    }
}
