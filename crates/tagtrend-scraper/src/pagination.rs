//! Page-numbered pagination over count-ordered Danbooru listings.
//!
//! Danbooru has no "next" cursor for these endpoints: the caller walks
//! `page=1, 2, ...` until a page comes back empty. Tag listings are ordered by
//! post count, so the walk can also stop at the first tag under the count
//! floor. Each collector reports the decision as a [`PageControl`] instead of
//! unwinding out of the loop.

use crate::types::{AliasMap, ApiAlias, ApiTag};

/// Whether the fetch loop should request another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Continue,
    Stop,
}

/// Append tags from one page to `out`, stopping at the first tag whose
/// `post_count` is under `min_count`.
///
/// Tags ahead of the cut-off on the same page are kept.
pub fn collect_tag_page(page: Vec<ApiTag>, min_count: u64, out: &mut Vec<ApiTag>) -> PageControl {
    if page.is_empty() {
        return PageControl::Stop;
    }
    for tag in page {
        if tag.post_count < min_count {
            tracing::debug!(
                tag = %tag.name,
                post_count = tag.post_count,
                min_count,
                "reached count floor"
            );
            return PageControl::Stop;
        }
        out.push(tag);
    }
    PageControl::Continue
}

/// Fold one page of aliases into `out`, keyed by consequent tag.
pub fn collect_alias_page(page: Vec<ApiAlias>, out: &mut AliasMap) -> PageControl {
    if page.is_empty() {
        return PageControl::Stop;
    }
    for alias in page {
        out.entry(alias.consequent_name)
            .or_default()
            .push(alias.antecedent_name);
    }
    PageControl::Continue
}
