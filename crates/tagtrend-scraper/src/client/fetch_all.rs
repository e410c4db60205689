//! Multi-page fetch loops for `DanbooruClient`.

use std::time::Duration;

use crate::error::ScraperError;
use crate::pagination::{collect_alias_page, collect_tag_page, PageControl};
use crate::types::{AliasMap, ApiTag};

use super::{DanbooruClient, ALIASES_ENDPOINT, TAGS_ENDPOINT};

impl DanbooruClient {
    /// Fetches every tag with at least `min_count` posts, highest count first.
    ///
    /// Walks pages from 1 and stops on an empty page or at the first tag under
    /// `min_count`. `inter_request_delay_ms` is slept between pages.
    ///
    /// Any page failure discards what was fetched so far: a truncated tag
    /// list would show up as mass disappearances in the next comparison.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_tags_page`].
    /// Returns [`ScraperError::PaginationLimit`] if more than `max_pages`
    /// pages would be needed.
    pub async fn fetch_all_tags(
        &self,
        min_count: u64,
        limit: u32,
        max_pages: u32,
        inter_request_delay_ms: u64,
    ) -> Result<Vec<ApiTag>, ScraperError> {
        let mut tags: Vec<ApiTag> = Vec::new();

        for page in 1..=max_pages {
            if page > 1 && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            let items = self.fetch_tags_page(page, limit).await?;
            if collect_tag_page(items, min_count, &mut tags) == PageControl::Stop {
                tracing::info!(pages = page, tags = tags.len(), "tag listing complete");
                return Ok(tags);
            }
            tracing::info!(page, tags = tags.len(), "tag page processed");
        }

        Err(ScraperError::PaginationLimit {
            endpoint: TAGS_ENDPOINT.to_owned(),
            max_pages,
        })
    }

    /// Fetches the full alias listing, grouped by the tag each alias resolves to.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_aliases_page`].
    /// Returns [`ScraperError::PaginationLimit`] if more than `max_pages`
    /// pages would be needed.
    pub async fn fetch_all_aliases(
        &self,
        limit: u32,
        max_pages: u32,
        inter_request_delay_ms: u64,
    ) -> Result<AliasMap, ScraperError> {
        let mut aliases = AliasMap::new();

        for page in 1..=max_pages {
            if page > 1 && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            let items = self.fetch_aliases_page(page, limit).await?;
            if collect_alias_page(items, &mut aliases) == PageControl::Stop {
                tracing::info!(pages = page, tags = aliases.len(), "alias listing complete");
                return Ok(aliases);
            }
            tracing::debug!(page, "alias page processed");
        }

        Err(ScraperError::PaginationLimit {
            endpoint: ALIASES_ENDPOINT.to_owned(),
            max_pages,
        })
    }
}
