//! Keyboard input handling.
//!
//! Two modes: search editing (the search line has focus and captures
//! printable characters into the debouncer) and normal browsing.

use crate::app::{App, AppEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::mpsc;
use tokio::time::Instant;

use super::loop_runner::Action;

pub(super) fn handle_input(
    app: &mut App,
    code: KeyCode,
    modifiers: KeyModifiers,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    // Ctrl+C always quits, regardless of mode.
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(Action::Quit);
    }

    // Help overlay swallows everything except its dismiss keys.
    if app.show_help {
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return Ok(Action::Continue);
    }

    if app.search_mode {
        return handle_search_input(app, code, event_tx);
    }

    match code {
        KeyCode::Char('q') => return Ok(Action::Quit),
        KeyCode::Char('?') => app.show_help = true,

        // -- Search --
        KeyCode::Char('/') => {
            app.search_mode = true;
        }

        // -- Filters --
        KeyCode::Char('c') => {
            let next = app.controller.filter().category.next();
            let filter = app.controller.filter().with_category(next);
            app.apply_filter_change(filter, event_tx);
            app.set_status(format!("Category: {}", next));
        }
        KeyCode::Char('s') => {
            let next = app.controller.filter().sort_by.next();
            let filter = app.controller.filter().with_sort_by(next);
            app.apply_filter_change(filter, event_tx);
            app.set_status(format!("Sort: {}", next.label()));
        }
        KeyCode::Char('r') => {
            let next = app.controller.filter().sort_order.toggle();
            let filter = app.controller.filter().with_sort_order(next);
            app.apply_filter_change(filter, event_tx);
            app.set_status(format!("Order: {}", next.label()));
        }
        KeyCode::Char('R') => {
            app.force_refresh(event_tx);
            app.set_status("Refreshing...");
        }

        // -- Navigation --
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            app.poll_load_more(event_tx);
        }
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::PageDown | KeyCode::Char('f') => {
            app.select_page_down();
            app.poll_load_more(event_tx);
        }
        KeyCode::PageUp | KeyCode::Char('b') => app.select_page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => {
            app.select_last();
            app.poll_load_more(event_tx);
        }

        // -- Actions --
        KeyCode::Char('o') | KeyCode::Enter => open_selected(app)?,
        KeyCode::Char('t') => {
            app.theme_variant = app.theme_variant.next();
            app.theme = app.theme_variant.styles();
            app.set_status(format!("Theme: {}", app.theme_variant.name()));
        }

        _ => {}
    }

    Ok(Action::Continue)
}

/// Keystrokes while the search line has focus.
///
/// Every edit feeds the debouncer; the committed value propagates from the
/// tick handler after the quiescence window. Enter commits immediately,
/// Esc leaves search mode and discards the pending (uncommitted) edit.
fn handle_search_input(
    app: &mut App,
    code: KeyCode,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<Action> {
    match code {
        KeyCode::Esc => {
            app.search_mode = false;
            app.debouncer.cancel();
            // Restore the line to the committed term so the display matches
            // what the feed actually shows.
            app.search_input = app.controller.filter().search_term.clone();
        }
        KeyCode::Enter => {
            app.search_mode = false;
            app.debouncer.cancel();
            let filter = app.filter_with_search(app.search_input.clone());
            app.apply_filter_change(filter, event_tx);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.debouncer.input(app.search_input.clone(), Instant::now());
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.debouncer.input(app.search_input.clone(), Instant::now());
        }
        _ => {}
    }
    Ok(Action::Continue)
}

/// Open the selected video's URL in the system browser.
fn open_selected(app: &mut App) -> Result<()> {
    let Some(video) = app.controller.videos().get(app.selected) else {
        return Ok(());
    };
    match &video.url {
        Some(url) => {
            tracing::info!(video_id = %video.id, url = %url, "Opening video in browser");
            open::that_detached(url)?;
            app.set_status("Opened in browser");
        }
        None => app.set_status("No URL for this video"),
    }
    Ok(())
}
