use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// config pointed at `./tags`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("TAGTREND_ENV", "development"))?;
    let log_level = or_default("TAGTREND_LOG_LEVEL", "info");

    let tags_dir = PathBuf::from(or_default("TAGTREND_TAGS_DIR", "tags"));
    let allow_list_path = PathBuf::from(or_default("TAGTREND_ALLOWLIST_PATH", "touhous.txt"));
    let output_path = PathBuf::from(or_default("TAGTREND_OUTPUT_PATH", "tag_stats.json"));
    let cumulative_path = PathBuf::from(or_default(
        "TAGTREND_CUMULATIVE_PATH",
        "tag_counts_wide.csv",
    ));

    let snapshot_prefix = or_default("TAGTREND_SNAPSHOT_PREFIX", "danbooru");
    if snapshot_prefix.trim().is_empty() || snapshot_prefix.contains(['/', '\\']) {
        return Err(invalid(
            "TAGTREND_SNAPSHOT_PREFIX",
            format!("\"{snapshot_prefix}\" is not usable as a file name prefix"),
        ));
    }

    let min_count = parse_u64("TAGTREND_MIN_COUNT", "50")?;

    let api_base_url = or_default("TAGTREND_API_BASE_URL", "https://danbooru.donmai.us")
        .trim_end_matches('/')
        .to_string();

    let scraper_request_timeout_secs = parse_u64("TAGTREND_SCRAPER_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default("TAGTREND_SCRAPER_USER_AGENT", "tagtrend/0.1 (tag-trends)");

    let scraper_page_limit = parse_u32("TAGTREND_SCRAPER_PAGE_LIMIT", "1000")?;
    if !(1..=1000).contains(&scraper_page_limit) {
        return Err(invalid(
            "TAGTREND_SCRAPER_PAGE_LIMIT",
            format!("{scraper_page_limit} is outside 1..=1000"),
        ));
    }

    let scraper_max_pages = parse_u32("TAGTREND_SCRAPER_MAX_PAGES", "1000")?;
    let scraper_inter_request_delay_ms =
        parse_u64("TAGTREND_SCRAPER_INTER_REQUEST_DELAY_MS", "300")?;
    let scraper_max_retries = parse_u32("TAGTREND_SCRAPER_MAX_RETRIES", "5")?;
    let scraper_retry_backoff_base_secs =
        parse_u64("TAGTREND_SCRAPER_RETRY_BACKOFF_BASE_SECS", "5")?;

    Ok(AppConfig {
        env,
        log_level,
        tags_dir,
        allow_list_path,
        output_path,
        cumulative_path,
        snapshot_prefix,
        min_count,
        api_base_url,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_page_limit,
        scraper_max_pages,
        scraper_inter_request_delay_ms,
        scraper_max_retries,
        scraper_retry_backoff_base_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TAGTREND_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
