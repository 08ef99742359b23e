//! Edge-triggered load-more trigger.
//!
//! The renderer reports on every frame whether the end-of-list sentinel is
//! inside the viewport. Emitting on the level would re-signal on every frame
//! while the user sits at the bottom during a fetch; instead only the
//! not-visible → visible transition fires. The controller applies its own
//! Idle/has-next-page gate on top, so a rising edge during a fetch is still
//! harmless.

/// Latches sentinel visibility and reports rising edges.
#[derive(Debug, Default)]
pub struct LoadMoreTrigger {
    was_visible: bool,
}

impl LoadMoreTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current visibility; returns true only on a rising edge.
    pub fn observe(&mut self, visible: bool) -> bool {
        let fired = visible && !self.was_visible;
        self.was_visible = visible;
        fired
    }

    /// Re-arm after the feed was rebuilt (filter change scrolls back to the
    /// top, so the sentinel is conceptually fresh).
    pub fn reset(&mut self) {
        self.was_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_rising_edge_only() {
        let mut t = LoadMoreTrigger::new();
        assert!(t.observe(true));
        // Steady visibility does not re-fire.
        assert!(!t.observe(true));
        assert!(!t.observe(true));
        // Scroll away, then back: fires again.
        assert!(!t.observe(false));
        assert!(t.observe(true));
    }

    #[test]
    fn test_starts_hidden() {
        let mut t = LoadMoreTrigger::new();
        assert!(!t.observe(false));
        assert!(t.observe(true));
    }

    #[test]
    fn test_reset_rearms() {
        let mut t = LoadMoreTrigger::new();
        assert!(t.observe(true));
        t.reset();
        assert!(t.observe(true));
    }
}
