//! Wire types for the Danbooru JSON API.
//!
//! Only the fields the snapshot needs are modelled; serde ignores the rest.

use std::collections::HashMap;

use serde::Deserialize;

/// One entry from `tags.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiTag {
    pub name: String,
    pub category: i64,
    pub post_count: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One entry from `tag_aliases.json`.
///
/// `antecedent_name` is the alias; `consequent_name` is the tag it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiAlias {
    pub antecedent_name: String,
    pub consequent_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Consequent tag name to its alias names, in the order they were fetched.
pub type AliasMap = HashMap<String, Vec<String>>;
