//! Growth comparison and ranking engine.
//!
//! Everything here is synchronous and pure apart from reading tables through
//! a [`TableSource`]. The pipeline is:
//!
//! 1. [`growth::compute_growth`] diffs two tag count tables above a count floor.
//! 2. [`ranking::top_n`] keeps the best records by percent or absolute growth.
//! 3. [`compare::build_comparison`] does both for every category of one pair.
//! 4. [`series::build_series`] runs that over consecutive daily and weekly pairs.

pub mod artifact;
pub mod compare;
pub mod error;
pub mod growth;
pub mod ranking;
pub mod series;

use tagtrend_core::{Category, SnapshotId, TagCountTable};
use tagtrend_store::SnapshotStore;

pub use artifact::{read_artifact, write_artifact};
pub use compare::{build_comparison, latest_pair, rank_latest, LatestReport};
pub use error::TrendsError;
pub use growth::compute_growth;
pub use ranking::{top_n, SortKey};
pub use series::{build_series, daily_series, weekly_series};

/// Anything that can produce a category-scoped table for a snapshot.
pub trait TableSource {
    fn table(&self, id: &SnapshotId, category: Category) -> TagCountTable;
}

impl TableSource for SnapshotStore {
    fn table(&self, id: &SnapshotId, category: Category) -> TagCountTable {
        SnapshotStore::table(self, id, category)
    }
}
