use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory holding one CSV file per snapshot.
    pub tags_dir: PathBuf,
    /// Line-delimited tag list backing the allow-listed category.
    pub allow_list_path: PathBuf,
    /// Where `compare --json` writes the comparison artifact.
    pub output_path: PathBuf,
    /// Where the wide tag-by-date table is written.
    pub cumulative_path: PathBuf,
    pub snapshot_prefix: String,
    pub min_count: u64,
    pub api_base_url: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    pub scraper_page_limit: u32,
    pub scraper_max_pages: u32,
    pub scraper_inter_request_delay_ms: u64,
    pub scraper_max_retries: u32,
    pub scraper_retry_backoff_base_secs: u64,
}
