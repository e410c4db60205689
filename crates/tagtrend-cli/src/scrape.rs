//! `scrape` and `cumulative` commands.

use anyhow::Context;
use chrono::Utc;
use tagtrend_core::{AppConfig, SnapshotId};
use tagtrend_scraper::{build_snapshot_rows, AliasMap, DanbooruClient};
use tagtrend_store::{write_cumulative, write_snapshot};

fn build_client(config: &AppConfig) -> anyhow::Result<DanbooruClient> {
    DanbooruClient::new(
        &config.api_base_url,
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
        config.scraper_max_retries,
        config.scraper_retry_backoff_base_secs,
    )
    .context("failed to build Danbooru client")
}

/// Fetch today's tag counts and aliases, write them as a snapshot, then
/// rebuild the cumulative table.
///
/// A failed alias listing is logged and the snapshot is written without
/// aliases; a failed tag listing aborts before anything is written.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the tag listing fails, or
/// the snapshot or cumulative table cannot be written.
pub(crate) async fn run_scrape(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let id = SnapshotId::for_date(&config.snapshot_prefix, Utc::now().date_naive());
    let target = config.tags_dir.join(id.as_str());

    if dry_run {
        println!(
            "dry-run: would fetch tags with at least {} posts from {} into {}",
            config.min_count,
            config.api_base_url,
            target.display()
        );
        return Ok(());
    }

    let client = build_client(config)?;

    let tags = client
        .fetch_all_tags(
            config.min_count,
            config.scraper_page_limit,
            config.scraper_max_pages,
            config.scraper_inter_request_delay_ms,
        )
        .await
        .context("failed to fetch tag listing")?;

    let aliases = match client
        .fetch_all_aliases(
            config.scraper_page_limit,
            config.scraper_max_pages,
            config.scraper_inter_request_delay_ms,
        )
        .await
    {
        Ok(aliases) => aliases,
        Err(e) => {
            tracing::warn!(error = %e, "alias listing failed; writing snapshot without aliases");
            AliasMap::new()
        }
    };

    let rows = build_snapshot_rows(tags, &aliases);
    let path = write_snapshot(&config.tags_dir, &id, &rows)
        .with_context(|| format!("failed to write snapshot {id}"))?;
    println!("wrote {} tags to {}", rows.len(), path.display());

    run_cumulative(config)
}

/// Rebuild the cumulative table from every snapshot in `config.tags_dir`.
///
/// # Errors
///
/// Returns an error if the table cannot be written.
pub(crate) fn run_cumulative(config: &AppConfig) -> anyhow::Result<()> {
    let tags = write_cumulative(&config.tags_dir, &config.cumulative_path).with_context(|| {
        format!(
            "failed to write cumulative table to {}",
            config.cumulative_path.display()
        )
    })?;
    println!(
        "wrote cumulative table with {tags} tags to {}",
        config.cumulative_path.display()
    );
    Ok(())
}
