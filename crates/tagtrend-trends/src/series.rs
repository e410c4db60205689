//! Daily and weekly comparison series over an ordered snapshot list.

use chrono::{Datelike, Weekday};
use tagtrend_core::{ComparisonRecord, ComparisonSeries, SnapshotId, WEEKLY_ID_PREFIX};

use crate::compare::build_comparison;
use crate::TableSource;

/// One comparison per consecutive pair of `snapshots` (ascending), most recent first.
pub fn daily_series<S: TableSource + ?Sized>(
    source: &S,
    snapshots: &[SnapshotId],
    min_count: u64,
) -> Vec<ComparisonRecord> {
    let mut records: Vec<ComparisonRecord> = snapshots
        .windows(2)
        .map(|pair| build_comparison(source, &pair[0], &pair[1], None, min_count))
        .collect();
    records.reverse();
    records
}

/// One comparison per consecutive pair of Monday snapshots, most recent first.
///
/// Identifiers without a parseable date are left out of this series. Record
/// ids carry the `weekly-` prefix so they never collide with the daily record
/// for the same new snapshot.
pub fn weekly_series<S: TableSource + ?Sized>(
    source: &S,
    snapshots: &[SnapshotId],
    min_count: u64,
) -> Vec<ComparisonRecord> {
    let mondays = mondays(snapshots);
    let mut records: Vec<ComparisonRecord> = mondays
        .windows(2)
        .map(|pair| {
            let (old, new) = (pair[0], pair[1]);
            let id = format!("{WEEKLY_ID_PREFIX}{new}");
            build_comparison(source, old, new, Some(&id), min_count)
        })
        .collect();
    records.reverse();
    records
}

fn mondays(snapshots: &[SnapshotId]) -> Vec<&SnapshotId> {
    snapshots
        .iter()
        .filter(|id| match id.date() {
            Some(date) => date.weekday() == Weekday::Mon,
            None => {
                tracing::debug!(
                    snapshot = %id,
                    "no date in snapshot id; left out of weekly series"
                );
                false
            }
        })
        .collect()
}

/// Build both series for `snapshots` (ascending).
pub fn build_series<S: TableSource + ?Sized>(
    source: &S,
    snapshots: &[SnapshotId],
    min_count: u64,
) -> ComparisonSeries {
    let series = ComparisonSeries {
        daily: daily_series(source, snapshots, min_count),
        weekly: weekly_series(source, snapshots, min_count),
    };
    tracing::info!(
        snapshots = snapshots.len(),
        daily = series.daily.len(),
        weekly = series.weekly.len(),
        "built comparison series"
    );
    series
}
