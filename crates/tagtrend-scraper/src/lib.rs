pub mod client;
pub mod error;
pub mod normalize;
pub mod pagination;
pub(crate) mod rate_limit;
pub mod types;

pub use client::DanbooruClient;
pub use error::ScraperError;
pub use normalize::build_snapshot_rows;
pub use types::{AliasMap, ApiAlias, ApiTag};
