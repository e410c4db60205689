//! Ranking growth records and keeping the top of the list.

use std::cmp::Ordering;

use tagtrend_core::GrowthRecord;

/// Metric used to rank growth records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Percent,
    Diff,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Percent => "percent",
            SortKey::Diff => "diff",
        }
    }

    /// Descending comparison of two records on this key.
    fn compare_desc(self, a: &GrowthRecord, b: &GrowthRecord) -> Ordering {
        match self {
            SortKey::Percent => b.percent_diff.total_cmp(&a.percent_diff),
            SortKey::Diff => b.absolute_diff.cmp(&a.absolute_diff),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort `records` descending by `key` and keep the first `n`.
///
/// The sort is stable: records with equal keys keep their input order.
#[must_use]
pub fn top_n(records: &[GrowthRecord], key: SortKey, n: usize) -> Vec<GrowthRecord> {
    let mut ranked: Vec<&GrowthRecord> = records.iter().collect();
    ranked.sort_by(|a, b| key.compare_desc(a, b));
    ranked.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(tag: &str, old: u64, new: u64) -> GrowthRecord {
        let diff = i64::try_from(new).unwrap() - i64::try_from(old).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let percent = diff as f64 / old as f64 * 100.0;
        GrowthRecord {
            tag: tag.to_owned(),
            old_count: old,
            new_count: new,
            absolute_diff: diff,
            percent_diff: percent,
        }
    }

    #[test]
    fn bar_outranks_foo_on_both_metrics() {
        let records = vec![rec("foo", 100, 150), rec("bar", 40, 100)];

        let by_percent = top_n(&records, SortKey::Percent, 20);
        assert_eq!(by_percent[0].tag, "bar");
        assert_eq!(by_percent[1].tag, "foo");

        let by_diff = top_n(&records, SortKey::Diff, 20);
        assert_eq!(by_diff[0].tag, "bar");
        assert_eq!(by_diff[1].tag, "foo");
    }

    #[test]
    fn truncates_to_n() {
        let records: Vec<GrowthRecord> = (1..=30u64)
            .map(|i| rec(&format!("tag{i}"), 100, 100 + i))
            .collect();
        let top = top_n(&records, SortKey::Diff, 20);
        assert_eq!(top.len(), 20);
        assert_eq!(top[0].tag, "tag30");
        assert_eq!(top[19].tag, "tag11");
    }

    #[test]
    fn shorter_input_is_returned_whole() {
        let records = vec![rec("a", 100, 120)];
        assert_eq!(top_n(&records, SortKey::Percent, 20).len(), 1);
        assert!(top_n(&[], SortKey::Percent, 20).is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        // Same diff (+10), different percentages.
        let records = vec![
            rec("first", 100, 110),
            rec("second", 200, 210),
            rec("third", 50, 60),
        ];
        let by_diff = top_n(&records, SortKey::Diff, 20);
        let tags: Vec<&str> = by_diff.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, ["first", "second", "third"]);

        // Same percent (+10%), different diffs.
        let records = vec![rec("x", 100, 110), rec("y", 1000, 1100), rec("z", 500, 550)];
        let by_percent = top_n(&records, SortKey::Percent, 20);
        let tags: Vec<&str> = by_percent.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, ["x", "y", "z"]);
    }

    #[test]
    fn output_is_sorted_descending_subset() {
        let records = vec![
            rec("a", 100, 90),
            rec("b", 60, 120),
            rec("c", 500, 700),
            rec("d", 80, 81),
        ];
        let top = top_n(&records, SortKey::Percent, 3);
        assert_eq!(top.len(), 3);
        assert!(top
            .windows(2)
            .all(|w| w[0].percent_diff >= w[1].percent_diff));
        assert!(top.iter().all(|r| records.contains(r)));
    }
}
