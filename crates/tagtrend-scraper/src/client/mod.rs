//! HTTP client for Danbooru's public `tags.json` and `tag_aliases.json`
//! listings.

mod fetch_all;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ScraperError;
use crate::rate_limit::retry_with_backoff;
use crate::types::{ApiAlias, ApiTag};

const TAGS_ENDPOINT: &str = "tags.json";
const ALIASES_ENDPOINT: &str = "tag_aliases.json";

/// HTTP client for the Danbooru listing endpoints.
///
/// 429 and 5xx responses and network failures are retried with exponential
/// backoff up to `max_retries` additional attempts; other non-2xx statuses
/// come back as [`ScraperError::UnexpectedStatus`] straight away.
pub struct DanbooruClient {
    pub(super) client: Client,
    /// Origin without a trailing slash, e.g. `https://danbooru.donmai.us`.
    pub(super) base_url: String,
    pub(super) max_retries: u32,
    pub(super) backoff_base_secs: u64,
}

impl DanbooruClient {
    /// Creates a client with the given timeout, `User-Agent` and retry policy.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` is not an absolute URL.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScraperError> {
        let base_url = base_url.trim_end_matches('/');
        reqwest::Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches one page of non-empty, non-deprecated tags ordered by post
    /// count, highest first.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] / 5xx [`ScraperError::UnexpectedStatus`]
    ///   after all retries are exhausted.
    /// - [`ScraperError::UnexpectedStatus`] for any other non-2xx status.
    /// - [`ScraperError::Deserialize`] if the body is not a JSON array of tags.
    pub async fn fetch_tags_page(&self, page: u32, limit: u32) -> Result<Vec<ApiTag>, ScraperError> {
        let url = Self::tags_url(&self.base_url, page, limit)?;
        self.get_page(url, TAGS_ENDPOINT, page).await
    }

    /// Fetches one page of tag aliases ordered by the consequent tag's count.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_tags_page`].
    pub async fn fetch_aliases_page(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<ApiAlias>, ScraperError> {
        let url = Self::aliases_url(&self.base_url, page, limit)?;
        self.get_page(url, ALIASES_ENDPOINT, page).await
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        url: String,
        endpoint: &str,
        page: u32,
    ) -> Result<Vec<T>, ScraperError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ScraperError::RateLimited {
                        url,
                        retry_after_secs,
                    });
                }

                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<Vec<T>>(&body).map_err(|e| ScraperError::Deserialize {
                    context: format!("{endpoint} page {page}"),
                    source: e,
                })
            }
        })
        .await
    }

    fn tags_url(base_url: &str, page: u32, limit: u32) -> Result<String, ScraperError> {
        let limit = limit.to_string();
        let page = page.to_string();
        Self::endpoint_url(
            base_url,
            TAGS_ENDPOINT,
            &[
                ("limit", limit.as_str()),
                ("search[hide_empty]", "yes"),
                ("search[is_deprecated]", "no"),
                ("search[order]", "count"),
                ("page", page.as_str()),
            ],
        )
    }

    fn aliases_url(base_url: &str, page: u32, limit: u32) -> Result<String, ScraperError> {
        let limit = limit.to_string();
        let page = page.to_string();
        Self::endpoint_url(
            base_url,
            ALIASES_ENDPOINT,
            &[
                ("commit", "Search"),
                ("limit", limit.as_str()),
                ("search[order]", "tag_count"),
                ("page", page.as_str()),
            ],
        )
    }

    fn endpoint_url(
        base_url: &str,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ScraperError> {
        let base = format!("{}/{endpoint}", base_url.trim_end_matches('/'));
        let mut url = reqwest::Url::parse(&base).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().extend_pairs(params.iter().copied());
        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
