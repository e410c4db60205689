//! Tag categories used to scope comparisons.
//!
//! The four Danbooru categories carry the numeric id stored in column 2 of a
//! snapshot row. `All` and `AllowListed` are pseudo-categories: the first
//! keeps every row, the second keeps rows whose tag name appears in the
//! externally supplied allow-list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Artist,
    Series,
    Character,
    All,
    #[serde(rename = "touhou")]
    AllowListed,
}

impl Category {
    /// Every bucket a comparison record carries, in output order.
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Artist,
        Category::Series,
        Category::Character,
        Category::All,
        Category::AllowListed,
    ];

    /// Numeric category id as stored in snapshot rows, `None` for pseudo-categories.
    #[must_use]
    pub const fn id(self) -> Option<u8> {
        match self {
            Category::General => Some(0),
            Category::Artist => Some(1),
            Category::Series => Some(3),
            Category::Character => Some(4),
            Category::All | Category::AllowListed => None,
        }
    }

    #[must_use]
    pub const fn from_id(id: u8) -> Option<Category> {
        match id {
            0 => Some(Category::General),
            1 => Some(Category::Artist),
            3 => Some(Category::Series),
            4 => Some(Category::Character),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Artist => "artist",
            Category::Series => "series",
            Category::Character => "character",
            Category::All => "all",
            Category::AllowListed => "touhou",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category \"{0}\"")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Category::General),
            "artist" => Ok(Category::Artist),
            "series" => Ok(Category::Series),
            "character" => Ok(Category::Character),
            "all" => Ok(Category::All),
            "touhou" | "allow-listed" => Ok(Category::AllowListed),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}
