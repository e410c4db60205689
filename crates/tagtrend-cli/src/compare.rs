//! `compare` command: console ranking of the latest pair, or the JSON artifact.

use std::collections::HashSet;

use anyhow::Context;
use clap::ValueEnum;
use tagtrend_core::{AppConfig, Category, GrowthRecord, TOP_COUNT};
use tagtrend_store::SnapshotStore;
use tagtrend_trends::{build_series, rank_latest, write_artifact, LatestReport, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
    Percent,
    Diff,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Percent => SortKey::Percent,
            SortArg::Diff => SortKey::Diff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryArg {
    General,
    Artist,
    Series,
    Character,
    All,
    /// Tags named in the allow-list file
    #[value(alias = "allow-listed")]
    Touhou,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::General => Category::General,
            CategoryArg::Artist => Category::Artist,
            CategoryArg::Series => Category::Series,
            CategoryArg::Character => Category::Character,
            CategoryArg::All => Category::All,
            CategoryArg::Touhou => Category::AllowListed,
        }
    }
}

/// Print the top risers between the two most recent snapshots.
///
/// A missing tags directory or fewer than two snapshots is reported on stdout
/// and is not an error.
pub(crate) fn run_compare_console(config: &AppConfig, category: Category, key: SortKey) {
    for line in console_lines(config, category, key) {
        println!("{line}");
    }
}

fn console_lines(config: &AppConfig, category: Category, key: SortKey) -> Vec<String> {
    if !config.tags_dir.is_dir() {
        return vec![format!(
            "directory '{}' not found",
            config.tags_dir.display()
        )];
    }

    // Only the allow-listed category reads the allow-list file.
    let store = if category == Category::AllowListed {
        SnapshotStore::open(&config.tags_dir, &config.allow_list_path)
    } else {
        SnapshotStore::new(&config.tags_dir, HashSet::new())
    };
    let snapshots = store.snapshots();

    match rank_latest(&store, &snapshots, category, key, config.min_count) {
        Some(report) => report_lines(&report),
        None => vec![format!(
            "need at least 2 snapshots to compare; found {}",
            snapshots.len()
        )],
    }
}

/// Build the daily and weekly series and write them to `config.output_path`.
///
/// # Errors
///
/// Returns an error if the artifact cannot be serialized or written.
pub(crate) fn run_compare_json(config: &AppConfig) -> anyhow::Result<()> {
    if !config.tags_dir.is_dir() {
        println!("directory '{}' not found", config.tags_dir.display());
        return Ok(());
    }

    let store = SnapshotStore::open(&config.tags_dir, &config.allow_list_path);
    let snapshots = store.snapshots();
    if snapshots.len() < 2 {
        println!(
            "not enough snapshots to generate the artifact; found {}",
            snapshots.len()
        );
        return Ok(());
    }

    let series = build_series(&store, &snapshots, config.min_count);
    write_artifact(&config.output_path, &series).with_context(|| {
        format!(
            "failed to write comparison artifact to {}",
            config.output_path.display()
        )
    })?;

    println!(
        "generated {} with {} daily and {} weekly comparisons",
        config.output_path.display(),
        series.daily.len(),
        series.weekly.len()
    );
    Ok(())
}

fn report_lines(report: &LatestReport) -> Vec<String> {
    let filter_text = if report.category == Category::All {
        String::new()
    } else {
        format!(" ({})", report.category)
    };

    let mut lines = vec![
        format!("Comparing {} -> {}", report.old, report.new),
        format!(
            "--- Top {TOP_COUNT} Risers{filter_text} (Sorted by {}) ---",
            report.key
        ),
        format!(
            "{:<30} | {:<10} | {:<10} | {:<10} | {:<10}",
            "Tag", "Old", "New", "Diff", "%"
        ),
        "-".repeat(80),
    ];
    lines.extend(report.rows.iter().map(format_row));
    lines
}

fn format_row(row: &GrowthRecord) -> String {
    format!(
        "{:<30} | {:<10} | {:<10} | {:<10} | {:.2}%",
        row.tag, row.old_count, row.new_count, row.absolute_diff, row.percent_diff
    )
}
