//! Trailing-edge debouncer for the search input.
//!
//! Keystrokes arrive at arbitrary frequency; the committed value propagates
//! only after a quiescence window with no further changes. The debouncer
//! never touches feed state itself: the event loop polls it on each tick and
//! forwards an emission as an ordinary filter-change event.

use std::time::Duration;
use tokio::time::Instant;

/// Debounces raw text changes into at most one committed value per
/// quiescence window, emitted on the trailing edge.
pub struct Debouncer {
    window: Duration,
    /// Value awaiting commit, with the time of the last change.
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a raw text change. Restarts the quiescence window.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now));
    }

    /// Poll for a committed value. Returns `Some` exactly once per settled
    /// window: the pending value is consumed when the window has elapsed
    /// with no further input.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, last_change)) if now.duration_since(*last_change) >= self.window => {
                self.pending.take().map(|(text, _)| text)
            }
            _ => None,
        }
    }

    /// Drop any pending value without emitting (e.g. search aborted).
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// True while a value is awaiting its quiescence window.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    // tokio's paused clock makes these deterministic: `advance` moves
    // Instant::now() without real sleeping.

    #[tokio::test(start_paused = true)]
    async fn test_trailing_edge_emits_final_value_once() {
        let mut d = Debouncer::new(WINDOW);

        // "a" at t=0, "ab" at t=100, "abc" at t=200.
        d.input("a", Instant::now());
        assert_eq!(d.poll(Instant::now()), None); // no leading edge

        tokio::time::advance(Duration::from_millis(100)).await;
        d.input("ab", Instant::now());

        tokio::time::advance(Duration::from_millis(100)).await;
        d.input("abc", Instant::now());

        // t=600: only 400ms of quiescence, still silent.
        tokio::time::advance(Duration::from_millis(400)).await;
        assert_eq!(d.poll(Instant::now()), None);

        // t=700: window elapsed, exactly one emission of the final value.
        tokio::time::advance(Duration::from_millis(100)).await;
        assert_eq!(d.poll(Instant::now()), Some("abc".to_string()));

        // Nothing further without new input.
        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(d.poll(Instant::now()), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_emits_even_when_changes_stop_permanently() {
        let mut d = Debouncer::new(WINDOW);
        d.input("final", Instant::now());
        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(d.poll(Instant::now()), Some("final".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_settled_window_emits_independently() {
        let mut d = Debouncer::new(WINDOW);

        d.input("first", Instant::now());
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(d.poll(Instant::now()), Some("first".to_string()));

        d.input("second", Instant::now());
        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(d.poll(Instant::now()), Some("second".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending() {
        let mut d = Debouncer::new(WINDOW);
        d.input("abandoned", Instant::now());
        assert!(d.is_pending());
        d.cancel();
        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(d.poll(Instant::now()), None);
    }
}
