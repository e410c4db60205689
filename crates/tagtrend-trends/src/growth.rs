//! Per-tag growth between two snapshots.

use tagtrend_core::{GrowthRecord, TagCountTable};

/// Compute growth for every tag of `new` that clears the floor.
///
/// A tag is emitted only when it is present in both tables, its new count is
/// at least `min_count`, and its old count is non-zero (so the percentage is
/// always defined). Output follows the row order of `new`.
#[must_use]
pub fn compute_growth(
    old: &TagCountTable,
    new: &TagCountTable,
    min_count: u64,
) -> Vec<GrowthRecord> {
    new.iter()
        .filter(|(_, &new_count)| new_count >= min_count)
        .filter_map(|(tag, &new_count)| {
            let old_count = *old.get(tag)?;
            if old_count == 0 {
                return None;
            }
            let absolute_diff = signed(new_count) - signed(old_count);
            #[allow(clippy::cast_precision_loss)]
            let percent_diff = absolute_diff as f64 / old_count as f64 * 100.0;
            Some(GrowthRecord {
                tag: tag.clone(),
                old_count,
                new_count,
                absolute_diff,
                percent_diff,
            })
        })
        .collect()
}

fn signed(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::table;

    #[test]
    fn computes_diff_and_percent() {
        let old = table(&[("foo", 100), ("bar", 40)]);
        let new = table(&[("foo", 150), ("bar", 100)]);
        let growth = compute_growth(&old, &new, 50);

        let foo = growth.iter().find(|g| g.tag == "foo").unwrap();
        assert_eq!(foo.absolute_diff, 50);
        assert!((foo.percent_diff - 50.0).abs() < 1e-9);

        let bar = growth.iter().find(|g| g.tag == "bar").unwrap();
        assert_eq!(bar.old_count, 40);
        assert_eq!(bar.new_count, 100);
        assert_eq!(bar.absolute_diff, 60);
        assert!((bar.percent_diff - 150.0).abs() < 1e-9);
    }

    #[test]
    fn skips_tags_below_floor() {
        let old = table(&[("small", 10)]);
        let new = table(&[("small", 49)]);
        assert!(compute_growth(&old, &new, 50).is_empty());
    }

    #[test]
    fn floor_is_inclusive() {
        let old = table(&[("edge", 25)]);
        let new = table(&[("edge", 50)]);
        let growth = compute_growth(&old, &new, 50);
        assert_eq!(growth.len(), 1);
        assert!((growth[0].percent_diff - 100.0).abs() < 1e-9);
    }

    #[test]
    fn skips_tags_missing_from_old() {
        let old = table(&[]);
        let new = table(&[("fresh", 500)]);
        assert!(compute_growth(&old, &new, 50).is_empty());
    }

    #[test]
    fn never_emits_zero_old_count() {
        let old = table(&[("zero", 0), ("one", 1)]);
        let new = table(&[("zero", 1000), ("one", 1000)]);
        let growth = compute_growth(&old, &new, 50);
        assert!(growth.iter().all(|g| g.old_count > 0));
        assert_eq!(growth.len(), 1);
        assert_eq!(growth[0].tag, "one");
    }

    #[test]
    fn output_follows_new_table_order() {
        let old = table(&[("alpha", 100), ("zeta", 100), ("mid", 100)]);
        let new = table(&[("zeta", 110), ("mid", 110), ("alpha", 110)]);
        let tags: Vec<String> = compute_growth(&old, &new, 50)
            .into_iter()
            .map(|g| g.tag)
            .collect();
        assert_eq!(tags, ["zeta", "mid", "alpha"]);
    }

    #[test]
    fn shrinking_tags_get_negative_values() {
        let old = table(&[("fading", 200)]);
        let new = table(&[("fading", 150)]);
        let growth = compute_growth(&old, &new, 50);
        assert_eq!(growth[0].absolute_diff, -50);
        assert!((growth[0].percent_diff + 25.0).abs() < 1e-9);
    }

    #[test]
    fn tags_only_in_old_are_ignored() {
        let old = table(&[("gone", 500), ("kept", 100)]);
        let new = table(&[("kept", 100)]);
        let growth = compute_growth(&old, &new, 50);
        assert_eq!(growth.len(), 1);
        assert_eq!(growth[0].absolute_diff, 0);
    }

    #[test]
    fn diff_matches_counts_for_every_record() {
        let old = table(&[("a", 60), ("b", 70), ("c", 80), ("d", 1)]);
        let new = table(&[("a", 61), ("b", 300), ("c", 50), ("d", 51)]);
        for g in compute_growth(&old, &new, 50) {
            assert_eq!(
                g.absolute_diff,
                i64::try_from(g.new_count).unwrap() - i64::try_from(g.old_count).unwrap()
            );
            #[allow(clippy::cast_precision_loss)]
            let expected =
                (g.new_count as f64 - g.old_count as f64) / g.old_count as f64 * 100.0;
            assert!((g.percent_diff - expected).abs() < 1e-9);
        }
    }
}
