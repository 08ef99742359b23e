//! Identity-deduplicating merge of a page response into the accumulated feed.
//!
//! The feed invariant lives here: the accumulated list never contains two
//! videos with the same id, regardless of what the catalog returns.

use crate::catalog::types::Video;
use std::collections::HashSet;

/// How a page response combines with the existing feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// The response is the new feed (a filter change landed). Still
    /// self-deduplicated in case the catalog repeats an id within one page.
    Replace,
    /// The response extends the feed (infinite scroll). Items whose identity
    /// is already present are dropped.
    Append,
}

/// Merge `incoming` into `existing` according to `mode`.
///
/// First occurrence wins and relative order is preserved. Runs in
/// O(|existing| + |incoming|) using a set of seen ids.
pub fn merge(existing: Vec<Video>, incoming: Vec<Video>, mode: MergeMode) -> Vec<Video> {
    match mode {
        MergeMode::Replace => dedup_in_order(incoming),
        MergeMode::Append => {
            let mut seen: HashSet<String> =
                existing.iter().map(|v| v.id.clone()).collect();
            let mut result = existing;
            result.extend(incoming.into_iter().filter(|v| seen.insert(v.id.clone())));
            result
        }
    }
}

/// Stable in-order dedup of a single list, first occurrence wins.
fn dedup_in_order(videos: Vec<Video>) -> Vec<Video> {
    let mut seen: HashSet<String> = HashSet::with_capacity(videos.len());
    videos
        .into_iter()
        .filter(|v| seen.insert(v.id.clone()))
        .collect()
}
