//! Category filters applied while building a tag count table.

use std::collections::HashSet;
use std::path::Path;

use tagtrend_core::Category;

use crate::snapshots::SnapshotRecord;

/// Row predicate selecting which tags enter a table. One mode per build.
#[derive(Debug, Clone, Copy)]
pub enum TagFilter<'a> {
    /// Keep every row.
    Unfiltered,
    /// Keep rows whose category column equals the id.
    ByCategoryId(u8),
    /// Keep rows whose tag name is in the set.
    AllowList(&'a HashSet<String>),
}

impl<'a> TagFilter<'a> {
    /// The filter that scopes a table to `category`.
    #[must_use]
    pub fn for_category(category: Category, allow_list: &'a HashSet<String>) -> Self {
        match (category, category.id()) {
            (Category::AllowListed, _) => TagFilter::AllowList(allow_list),
            (_, Some(id)) => TagFilter::ByCategoryId(id),
            (_, None) => TagFilter::Unfiltered,
        }
    }

    #[must_use]
    pub fn accepts(&self, record: &SnapshotRecord<'_>) -> bool {
        match self {
            TagFilter::Unfiltered => true,
            TagFilter::ByCategoryId(id) => record.category == i64::from(*id),
            TagFilter::AllowList(names) => names.contains(record.tag),
        }
    }
}

/// Load the line-delimited allow-list at `path`.
///
/// Lines are trimmed and blank lines ignored. A missing or unreadable file
/// yields an empty set, which makes the allow-listed category empty.
#[must_use]
pub fn load_allow_list(path: &Path) -> HashSet<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_allow_list(&content),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "allow-list not readable; allow-listed category will be empty"
            );
            HashSet::new()
        }
    }
}

fn parse_allow_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
