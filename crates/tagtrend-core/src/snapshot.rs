//! Snapshot identifiers.
//!
//! A snapshot is identified by its file name inside the tags directory, e.g.
//! `danbooru-2024-01-08.csv`. Names embed an ISO-8601 date, so sorting them
//! as strings sorts them chronologically.

use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(String);

impl SnapshotId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Identifier for a snapshot taken on `date`: `{prefix}-{YYYY-MM-DD}.csv`.
    #[must_use]
    pub fn for_date(prefix: &str, date: NaiveDate) -> Self {
        Self(format!("{prefix}-{}.csv", date.format("%Y-%m-%d")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier without any directory or extension.
    #[must_use]
    pub fn display_name(&self) -> &str {
        Path::new(&self.0)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.0)
    }

    /// Calendar date embedded in the identifier.
    ///
    /// Uses the last `YYYY-MM-DD` run in the display name. Returns `None`
    /// when there is none or it is not a real date.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        let name = self.display_name();
        let found = DATE_RE.find_iter(name).last()?;
        NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d").ok()
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SnapshotId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
