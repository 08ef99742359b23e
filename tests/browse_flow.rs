//! End-to-end scenarios for the paginated feed: initial load, infinite
//! scroll to exhaustion, filter reset, fencing, and the merge invariant
//! under arbitrary inputs.
//!
//! These drive the controller directly with synthetic responses, the same
//! way the event loop does, so every interleaving is deterministic.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use reel::browse::{merge, Category, FeedController, FilterState, MergeMode, Phase};
use reel::catalog::{PageResponse, Video};
use std::collections::HashSet;

fn vid(id: &str) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {}", id),
        category: None,
        created_at: None,
        views: 0,
        url: None,
        description: None,
    }
}

fn vids(prefix: &str, count: usize) -> Vec<Video> {
    (0..count).map(|i| vid(&format!("{}{}", prefix, i))).collect()
}

fn page(videos: Vec<Video>, has_next_page: bool) -> PageResponse {
    PageResponse {
        videos,
        has_next_page,
    }
}

fn ids(controller: &FeedController) -> Vec<String> {
    controller.videos().iter().map(|v| v.id.clone()).collect()
}

// ============================================================================
// Initial Load and Infinite Scroll
// ============================================================================

#[test]
fn test_initial_load_then_scroll_to_exhaustion() {
    // Empty search, category All, sort by createdAt, limit 12.
    let mut ctl = FeedController::new(12);
    let d1 = ctl.on_filter_change(FilterState::default());
    assert_eq!(d1.request.page, 1);
    assert_eq!(d1.mode, MergeMode::Replace);

    // First page: 12 items, more available.
    ctl.on_response(d1.generation, page(vids("p1-", 12), true));
    assert_eq!(ctl.videos().len(), 12);
    assert_eq!(ctl.phase(), Phase::Idle);
    assert!(ctl.has_next_page());

    // Scroll to the end: page 2 fetch appends 5 non-overlapping items and
    // reports no further pages.
    let d2 = ctl.on_scrolled_near_end().expect("next-page directive");
    assert_eq!(d2.request.page, 2);
    assert_eq!(d2.mode, MergeMode::Append);
    ctl.on_response(d2.generation, page(vids("p2-", 5), false));

    assert_eq!(ctl.videos().len(), 17);
    assert_eq!(ctl.phase(), Phase::Exhausted);
    assert!(!ctl.has_next_page());

    // All 17 identities unique.
    let unique: HashSet<_> = ids(&ctl).into_iter().collect();
    assert_eq!(unique.len(), 17);

    // Further scroll signals are ignored while exhausted.
    assert_eq!(ctl.on_scrolled_near_end(), None);
}

#[test]
fn test_overlapping_page_dedups_on_append() {
    let mut ctl = FeedController::new(12);
    let d1 = ctl.on_filter_change(FilterState::default());
    ctl.on_response(d1.generation, page(vids("v", 12), true));

    // The catalog shifted under us: page 2 repeats the last two items.
    let d2 = ctl.on_scrolled_near_end().unwrap();
    let mut overlap = vec![vid("v10"), vid("v11")];
    overlap.extend(vids("w", 3));
    ctl.on_response(d2.generation, page(overlap, true));

    assert_eq!(ctl.videos().len(), 15);
    let unique: HashSet<_> = ids(&ctl).into_iter().collect();
    assert_eq!(unique.len(), 15);
}

// ============================================================================
// Filter Reset
// ============================================================================

#[test]
fn test_filter_change_replaces_accumulated_feed() {
    // Build up the 17-item feed from the scroll scenario.
    let mut ctl = FeedController::new(12);
    let d1 = ctl.on_filter_change(FilterState::default());
    ctl.on_response(d1.generation, page(vids("p1-", 12), true));
    let d2 = ctl.on_scrolled_near_end().unwrap();
    ctl.on_response(d2.generation, page(vids("p2-", 5), false));
    assert_eq!(ctl.videos().len(), 17);

    // Switch to category Tech: a page-1 request scoped to Tech goes out
    // immediately, even from the Exhausted phase.
    let tech = FilterState::default().with_category(Category::Tech);
    let d3 = ctl.on_filter_change(tech);
    assert_eq!(d3.request.page, 1);
    assert_eq!(d3.mode, MergeMode::Replace);
    let pairs = d3.request.to_query_pairs();
    assert!(pairs.contains(&("category", "Tech".to_string())));
    assert!(ctl.loading());

    // The response replaces the feed wholesale: none of the prior 17 items
    // survive unless returned again (here, none are).
    ctl.on_response(d3.generation, page(vids("tech-", 4), false));
    assert_eq!(
        ids(&ctl),
        vec!["tech-0", "tech-1", "tech-2", "tech-3"]
    );
}

// ============================================================================
// Fencing
// ============================================================================

#[test]
fn test_slow_page_one_response_cannot_clobber_newer_search() {
    // The classic race: a slow page-1 response for the old search arrives
    // after a newer search already started its own page-1 fetch.
    let mut ctl = FeedController::new(12);
    let stale = ctl.on_filter_change(FilterState::default().with_search_term("old"));

    // User types a new term before the first response lands.
    let fresh = ctl.on_filter_change(FilterState::default().with_search_term("new"));

    // The newer fetch resolves first and is accepted.
    ctl.on_response(fresh.generation, page(vids("new-", 3), true));
    assert_eq!(ids(&ctl), vec!["new-0", "new-1", "new-2"]);

    // The stale response finally arrives and must change nothing.
    ctl.on_response(stale.generation, page(vids("old-", 12), true));
    assert_eq!(ids(&ctl), vec!["new-0", "new-1", "new-2"]);

    // The cursor still belongs to the fresh generation's epoch.
    let next = ctl.on_scrolled_near_end().unwrap();
    assert_eq!(next.generation, fresh.generation);
    assert_eq!(next.request.page, 2);
    assert_eq!(next.request.filter.search_term, "new");
}

#[test]
fn test_out_of_order_stale_arrivals_are_dropped_not_reordered() {
    let mut ctl = FeedController::new(12);
    let g1 = ctl.on_filter_change(FilterState::default().with_search_term("a"));
    let g2 = ctl.on_filter_change(FilterState::default().with_search_term("ab"));
    let g3 = ctl.on_filter_change(FilterState::default().with_search_term("abc"));

    // Responses arrive newest-first; only the current generation merges.
    ctl.on_response(g3.generation, page(vids("abc-", 2), false));
    ctl.on_response(g2.generation, page(vids("ab-", 2), false));
    ctl.on_response(g1.generation, page(vids("a-", 2), false));

    assert_eq!(ids(&ctl), vec!["abc-0", "abc-1"]);
    assert_eq!(ctl.phase(), Phase::Exhausted);
}

// ============================================================================
// Single-Flight
// ============================================================================

#[test]
fn test_scroll_storm_produces_one_fetch() {
    let mut ctl = FeedController::new(12);
    let d1 = ctl.on_filter_change(FilterState::default());
    ctl.on_response(d1.generation, page(vids("v", 12), true));

    let first = ctl.on_scrolled_near_end();
    assert!(first.is_some());
    // A storm of further signals while Fetching yields nothing.
    for _ in 0..50 {
        assert_eq!(ctl.on_scrolled_near_end(), None);
    }

    // After the response the next signal produces page 3, not a backlog.
    ctl.on_response(first.unwrap().generation, page(vids("w", 12), true));
    let next = ctl.on_scrolled_near_end().unwrap();
    assert_eq!(next.request.page, 3);
    assert_eq!(ctl.on_scrolled_near_end(), None);
}

// ============================================================================
// Merge Invariant (property-based)
// ============================================================================

fn id_vec() -> impl Strategy<Value = Vec<String>> {
    // Small alphabet to make collisions common.
    proptest::collection::vec("[a-e][0-9]", 0..20)
}

proptest! {
    #[test]
    fn prop_append_has_unique_ids_in_stable_order(a in id_vec(), b in id_vec()) {
        let existing: Vec<Video> = {
            // Existing feeds are already identity-unique by invariant.
            let mut seen = HashSet::new();
            a.iter()
                .filter(|id| seen.insert(id.clone()))
                .map(|id| vid(id))
                .collect()
        };
        let existing_ids: Vec<String> = existing.iter().map(|v| v.id.clone()).collect();
        let incoming: Vec<Video> = b.iter().map(|id| vid(id)).collect();

        let merged = merge(existing, incoming, MergeMode::Append);
        let merged_ids: Vec<String> = merged.iter().map(|v| v.id.clone()).collect();

        // No repeated identity.
        let unique: HashSet<_> = merged_ids.iter().collect();
        prop_assert_eq!(unique.len(), merged_ids.len());

        // Every identity from either side appears exactly once.
        let expected: HashSet<String> =
            existing_ids.iter().cloned().chain(b.iter().cloned()).collect();
        prop_assert_eq!(unique.len(), expected.len());

        // Existing order is a prefix, followed by new items in b's order.
        prop_assert_eq!(&merged_ids[..existing_ids.len()], &existing_ids[..]);
        let new_tail: Vec<String> = merged_ids[existing_ids.len()..].to_vec();
        let expected_tail: Vec<String> = {
            let known: HashSet<&String> = existing_ids.iter().collect();
            let mut seen = HashSet::new();
            b.iter()
                .filter(|id| !known.contains(id) && seen.insert((*id).clone()))
                .cloned()
                .collect()
        };
        prop_assert_eq!(new_tail, expected_tail);
    }

    #[test]
    fn prop_replace_result_is_self_deduped(b in id_vec()) {
        let incoming: Vec<Video> = b.iter().map(|id| vid(id)).collect();
        let merged = merge(vids("seed", 5), incoming, MergeMode::Replace);
        let merged_ids: Vec<String> = merged.iter().map(|v| v.id.clone()).collect();

        let unique: HashSet<_> = merged_ids.iter().collect();
        prop_assert_eq!(unique.len(), merged_ids.len());
        // Nothing from the previous feed is retained.
        prop_assert!(merged_ids.iter().all(|id| !id.starts_with("seed")));
    }
}
