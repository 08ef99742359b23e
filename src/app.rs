//! Central application state and the event types produced by background
//! fetch tasks.
//!
//! The controller (`browse::FeedController`) is only ever mutated here, by
//! the event-loop owner, one event at a time. Fetches run as spawned tasks
//! that report back over the `AppEvent` channel tagged with the generation
//! they were issued under; the controller fences stale arrivals.

use crate::browse::{Debouncer, FeedController, FetchDirective, FilterState, LoadMoreTrigger};
use crate::catalog::{CatalogClient, CatalogError, PageResponse};
use crate::config::Config;
use crate::theme::{StyleMap, ThemeVariant};
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// How long a status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Events from background fetch tasks.
#[derive(Debug)]
pub enum AppEvent {
    /// A catalog page fetch finished (successfully or not).
    ///
    /// `generation` is the feed generation the fetch was issued under; the
    /// controller discards results whose generation is no longer current.
    PageLoaded {
        generation: u64,
        page: u32,
        result: Result<PageResponse, CatalogError>,
    },
}

/// Central application state.
pub struct App {
    pub client: Arc<CatalogClient>,
    pub controller: FeedController,

    // Theme
    pub theme_variant: ThemeVariant,
    pub theme: StyleMap,

    // Search input
    /// True while the search line has focus and accepts typing.
    pub search_mode: bool,
    /// Raw text in the search line; committed via the debouncer.
    pub search_input: String,
    pub debouncer: Debouncer,

    // Scroll / selection
    pub selected: usize,
    pub scroll_offset: usize,
    /// Rows available to the video list, set during render.
    pub list_visible_rows: usize,
    load_more: LoadMoreTrigger,

    // Status line
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    // Render bookkeeping
    pub needs_redraw: bool,
    pub spinner_frame: usize,
    pub show_help: bool,
}

impl App {
    pub fn new(client: Arc<CatalogClient>, config: &Config) -> Self {
        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme name, falling back to dark");
            ThemeVariant::Dark
        });
        Self {
            client,
            controller: FeedController::new(config.page_size),
            theme_variant,
            theme: theme_variant.styles(),
            search_mode: false,
            search_input: String::new(),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            selected: 0,
            scroll_offset: 0,
            list_visible_rows: 0,
            load_more: LoadMoreTrigger::new(),
            status_message: None,
            needs_redraw: true,
            spinner_frame: 0,
            show_help: false,
        }
    }

    // ------------------------------------------------------------------
    // Status messages
    // ------------------------------------------------------------------

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    /// Clear an expired status message. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, set_at)) = &self.status_message {
            if set_at.elapsed() >= STATUS_TTL {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    // ------------------------------------------------------------------
    // Filter changes and pagination
    // ------------------------------------------------------------------

    /// Commit a new filter snapshot: reset the view to the top, start a new
    /// feed epoch, and spawn the page-1 fetch.
    pub fn apply_filter_change(&mut self, filter: FilterState, event_tx: &mpsc::Sender<AppEvent>) {
        if filter == *self.controller.filter() && !self.controller.videos().is_empty() {
            // Same snapshot, nothing to refetch.
            return;
        }
        self.selected = 0;
        self.scroll_offset = 0;
        self.load_more.reset();
        let directive = self.controller.on_filter_change(filter);
        self.spawn_fetch(directive, event_tx);
        self.needs_redraw = true;
    }

    /// Re-issue page 1 for the current filter unconditionally (manual
    /// refresh). Starts a new epoch like any filter change, so a response
    /// from the previous one is fenced.
    pub fn force_refresh(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        self.client.invalidate_cache();
        self.selected = 0;
        self.scroll_offset = 0;
        self.load_more.reset();
        let filter = self.controller.filter().clone();
        let directive = self.controller.on_filter_change(filter);
        self.spawn_fetch(directive, event_tx);
        self.needs_redraw = true;
    }

    /// Observe sentinel visibility and, on a rising edge with the controller
    /// Idle and more pages available, spawn the next-page fetch.
    ///
    /// Called from the tick handler and after list navigation; the trigger's
    /// edge detection keeps a user parked at the bottom from re-signalling
    /// every tick while a fetch is already in flight.
    pub fn poll_load_more(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        let visible = self.sentinel_visible();
        if self.load_more.observe(visible) {
            if let Some(directive) = self.controller.on_scrolled_near_end() {
                self.spawn_fetch(directive, event_tx);
                self.needs_redraw = true;
            }
        }
    }

    /// Whether the end-of-list sentinel row (one past the last video) is
    /// inside the current viewport.
    fn sentinel_visible(&self) -> bool {
        if self.list_visible_rows == 0 {
            return false;
        }
        self.scroll_offset + self.list_visible_rows > self.controller.videos().len()
    }

    /// Spawn a single catalog fetch for `directive`, reporting the result
    /// back over the event channel with the directive's generation attached.
    ///
    /// No cancellation: a fetch from a superseded generation runs to
    /// completion and is fenced when its result arrives.
    pub fn spawn_fetch(&self, directive: FetchDirective, event_tx: &mpsc::Sender<AppEvent>) {
        let client = Arc::clone(&self.client);
        let tx = event_tx.clone();
        let FetchDirective {
            generation,
            request,
            mode: _,
        } = directive;
        let page = request.page;

        tracing::debug!(generation, page, "Spawning catalog fetch");

        tokio::spawn(async move {
            let result = client.list_videos(&request).await;
            let event = AppEvent::PageLoaded {
                generation,
                page,
                result,
            };
            if let Err(e) = tx.send(event).await {
                tracing::warn!(error = %e, "Failed to send fetch result (receiver dropped)");
            }
        });
    }

    /// Handle a completed fetch event from the channel.
    pub fn handle_page_loaded(
        &mut self,
        generation: u64,
        page: u32,
        result: Result<PageResponse, CatalogError>,
    ) {
        match result {
            Ok(response) => {
                let was_current = generation == self.controller.generation();
                self.controller.on_response(generation, response);
                if was_current {
                    self.clamp_selection();
                    // The sentinel may still be on screen after a short page;
                    // re-arm so the next observation can fire again.
                    self.load_more.reset();
                }
            }
            Err(e) => {
                let was_current = generation == self.controller.generation();
                self.controller.on_fetch_failed(generation);
                if was_current {
                    self.set_status(format!("Fetch failed: {} (page {})", e, page));
                }
            }
        }
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------
    // List navigation
    // ------------------------------------------------------------------

    pub fn select_next(&mut self) {
        let len = self.controller.videos().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
        self.sync_scroll();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.sync_scroll();
    }

    pub fn select_page_down(&mut self) {
        let len = self.controller.videos().len();
        if len > 0 {
            self.selected = (self.selected + self.list_visible_rows.max(1)).min(len - 1);
        }
        self.sync_scroll();
    }

    pub fn select_page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.list_visible_rows.max(1));
        self.sync_scroll();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.sync_scroll();
    }

    pub fn select_last(&mut self) {
        let len = self.controller.videos().len();
        self.selected = len.saturating_sub(1);
        self.sync_scroll();
    }

    /// Keep the selection inside the viewport window.
    pub fn sync_scroll(&mut self) {
        let rows = self.list_visible_rows.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + rows {
            self.scroll_offset = self.selected + 1 - rows;
        }
        self.needs_redraw = true;
    }

    fn clamp_selection(&mut self) {
        let len = self.controller.videos().len();
        if len == 0 {
            self.selected = 0;
            self.scroll_offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
            self.sync_scroll();
        }
    }

    /// Current filter with the committed search term swapped in, for the
    /// debounce emission path.
    pub fn filter_with_search(&self, term: String) -> FilterState {
        self.controller.filter().with_search_term(term)
    }
}
