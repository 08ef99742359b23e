//! reel — a terminal browser for paged video catalogs.
//!
//! The interesting part lives in [`browse`]: an event-driven state machine
//! that combines free-text search, category filtering, sort selection, and
//! scroll-triggered pagination over a remote paged collection without ever
//! issuing overlapping fetches, duplicating items, or letting a stale
//! response clobber a newer filter state. [`catalog`] talks to the HTTP
//! API, [`ui`] renders the feed with ratatui, and [`app`] wires them
//! together over an event channel.

pub mod app;
pub mod browse;
pub mod catalog;
pub mod config;
pub mod theme;
pub mod ui;
pub mod util;
