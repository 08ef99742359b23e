//! The fetch controller: a single explicit state machine owning the feed.
//!
//! Filter changes and scroll events both want to mutate one set of state
//! (accumulated list, page cursor, in-flight flag), and slow responses can
//! arrive after the filter that issued them is gone. Rather than ad hoc
//! shared flags, everything funnels through this machine, processed one
//! event at a time by the event-loop owner:
//!
//! - `on_filter_change` — new filter epoch: bump the generation, reset to
//!   page 1, issue a Replace fetch.
//! - `on_scrolled_near_end` — next-page request: honored only when Idle
//!   with more pages available (single-flight; extra signals drop).
//! - `on_response` / `on_fetch_failed` — tagged with the generation they
//!   were issued under and fenced against the current one. A stale result
//!   is discarded, never merged.
//!
//! There is no cancellation primitive. An in-flight fetch from a superseded
//! filter simply runs to completion and is rejected at acceptance time;
//! correctness relies entirely on the monotonic generation token.

use crate::browse::filter::FilterState;
use crate::browse::merge::{merge, MergeMode};
use crate::catalog::query;
use crate::catalog::types::{PageRequest, PageResponse, Video};

/// Controller phase.
///
/// `Fetching` doubles as the in-flight flag; `Exhausted` ignores further
/// scroll signals until a filter change re-arms the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Exhausted,
}

/// Instruction to the async driver: spawn exactly one fetch for `request`
/// and report back with `generation` attached.
///
/// The merge mode is fixed at issue time: the fetch created by a filter
/// change replaces the feed; a next-page fetch appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchDirective {
    pub generation: u64,
    pub request: PageRequest,
    pub mode: MergeMode,
}

/// The paginated feed state machine.
pub struct FeedController {
    filter: FilterState,
    page_size: u32,
    accumulated: Vec<Video>,
    next_page: u32,
    has_next_page: bool,
    phase: Phase,
    generation: u64,
    /// Merge mode of the in-flight fetch, recorded when the directive was
    /// issued. Only meaningful while `phase == Fetching`.
    pending_mode: MergeMode,
}

impl FeedController {
    pub fn new(page_size: u32) -> Self {
        Self {
            filter: FilterState::default(),
            page_size,
            accumulated: Vec::new(),
            next_page: 1,
            has_next_page: true,
            phase: Phase::Idle,
            generation: 0,
            pending_mode: MergeMode::Replace,
        }
    }

    // -- Read-only surface for the presentation layer --

    pub fn videos(&self) -> &[Video] {
        &self.accumulated
    }

    pub fn loading(&self) -> bool {
        self.phase == Phase::Fetching
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // -- Events --

    /// A new filter snapshot committed (debounced search, category, sort).
    ///
    /// Always starts a fresh epoch, even while a fetch is in flight: the
    /// old fetch's eventual response carries a stale generation and will be
    /// fenced in `on_response`. Returns the page-1 Replace directive.
    pub fn on_filter_change(&mut self, filter: FilterState) -> FetchDirective {
        self.generation = self.generation.wrapping_add(1);
        self.filter = filter;
        self.next_page = 1;
        self.has_next_page = true;
        self.phase = Phase::Fetching;
        self.pending_mode = MergeMode::Replace;
        tracing::debug!(
            generation = self.generation,
            search = %self.filter.search_term,
            category = %self.filter.category,
            "Filter changed, starting new feed epoch"
        );
        self.directive()
    }

    /// The end-of-list sentinel became visible.
    ///
    /// Single-flight: while `Fetching`, additional signals are dropped
    /// silently, never queued. `Exhausted` ignores them until a filter
    /// change re-arms the cycle.
    pub fn on_scrolled_near_end(&mut self) -> Option<FetchDirective> {
        if self.phase != Phase::Idle || !self.has_next_page {
            tracing::trace!(phase = ?self.phase, "Dropping next-page request");
            return None;
        }
        self.phase = Phase::Fetching;
        self.pending_mode = MergeMode::Append;
        tracing::debug!(
            generation = self.generation,
            page = self.next_page,
            "Requesting next page"
        );
        Some(self.directive())
    }

    /// A fetch resolved successfully.
    ///
    /// Fenced: a response tagged with a superseded generation is discarded
    /// without touching any state. An accepted response merges, updates
    /// `has_next_page`, and advances the cursor only when more pages exist.
    pub fn on_response(&mut self, generation: u64, response: PageResponse) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Discarding response from superseded generation"
            );
            return;
        }
        let incoming = response.videos.len();
        self.accumulated = merge(
            std::mem::take(&mut self.accumulated),
            response.videos,
            self.pending_mode,
        );
        self.has_next_page = response.has_next_page;
        if self.has_next_page {
            self.next_page += 1;
            self.phase = Phase::Idle;
        } else {
            self.phase = Phase::Exhausted;
        }
        tracing::debug!(
            generation,
            incoming,
            total = self.accumulated.len(),
            has_next_page = self.has_next_page,
            "Merged page response"
        );
    }

    /// A fetch failed after the client's own retries.
    ///
    /// Fenced like a response. Accepted failures return the machine to
    /// `Idle` with the feed, cursor, and `has_next_page` untouched: the
    /// feed stops advancing until the user scrolls again or changes the
    /// filter.
    pub fn on_fetch_failed(&mut self, generation: u64) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Discarding failure from superseded generation"
            );
            return;
        }
        if self.phase == Phase::Fetching {
            self.phase = Phase::Idle;
        }
        tracing::warn!(generation, page = self.next_page, "Fetch failed, feed paused");
    }

    fn directive(&self) -> FetchDirective {
        FetchDirective {
            generation: self.generation,
            request: query::build(&self.filter, self.next_page, self.page_size),
            mode: self.pending_mode,
        }
    }
}
