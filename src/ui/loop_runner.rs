//! Main event loop for the TUI.
//!
//! Multiplexes terminal input, background fetch events, and a periodic tick
//! over `tokio::select!`. The tick drives the pieces that need polling: the
//! search debouncer, the load-more sentinel check, status expiry, and the
//! loading spinner.

use crate::app::{App, AppEvent};
use crate::browse::FilterState;
use anyhow::Result;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use super::input::handle_input;
use super::render::render;

/// Maximum allowed search query length (UI layer validation).
const MAX_SEARCH_LENGTH: usize = 256;

/// Number of frames in the loading spinner animation.
const SPINNER_FRAMES: usize = 10;

/// Result of handling a key press event.
pub enum Action {
    /// Continue the event loop and process more events.
    Continue,
    /// Exit the application and restore the terminal.
    Quit,
}

/// Runs the TUI application event loop.
///
/// Uses `tokio::select!` to multiplex three event sources:
/// - **Terminal input**: key presses from crossterm's async event stream
/// - **Background fetches**: page results via the `AppEvent` channel
/// - **Periodic tick**: 250ms timer for debounce, sentinel polling, status
///   expiry, and the spinner
///
/// Installs a panic hook that restores terminal state before unwinding, so
/// a panic never leaves the terminal in raw mode.
pub async fn run(
    app: &mut App,
    event_tx: mpsc::Sender<AppEvent>,
    mut event_rx: mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // Install panic hook BEFORE setting up terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let mut event_stream = crossterm::event::EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(250));

    // Signal handlers for graceful shutdown (Unix only)
    #[cfg(unix)]
    let mut sigterm = signal(SignalKind::terminate())?;
    #[cfg(unix)]
    let mut sigint = signal(SignalKind::interrupt())?;

    // Initial load: the feed mounts empty and immediately fetches page 1
    // for the default filter.
    app.apply_filter_change(FilterState::default(), &event_tx);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| render(f, app))?;
            app.needs_redraw = false;
        }

        if app.clear_expired_status() {
            app.needs_redraw = true;
        }

        // Drain pending fetch events before waiting on input, so page
        // results are applied promptly even during rapid keystrokes.
        while let Ok(event) = event_rx.try_recv() {
            app.needs_redraw = true;
            handle_app_event(app, event);
        }

        #[cfg(unix)]
        let sigterm_fut = sigterm.recv();
        #[cfg(not(unix))]
        let sigterm_fut = std::future::pending::<Option<()>>();

        #[cfg(unix)]
        let sigint_fut = sigint.recv();
        #[cfg(not(unix))]
        let sigint_fut = std::future::pending::<Option<()>>();

        tokio::select! {
            biased;  // Process in order listed for predictable behavior

            _ = sigterm_fut => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
                break;
            }

            _ = sigint_fut => {
                tracing::info!("Received SIGINT, shutting down gracefully");
                break;
            }

            maybe_event = event_stream.next() => {
                if let Some(Ok(Event::Key(key))) = maybe_event {
                    app.needs_redraw = true;
                    match handle_input(app, key.code, key.modifiers, &event_tx) {
                        Ok(Action::Quit) => break,
                        Ok(Action::Continue) => {}
                        Err(e) => app.set_status(format!("Error: {}", e)),
                    }
                }
            }

            Some(event) = event_rx.recv() => {
                app.needs_redraw = true;
                handle_app_event(app, event);
            }

            _ = tick_interval.tick() => {
                handle_tick(app, &event_tx);
            }
        }
    }

    restore_terminal(terminal)?;
    Ok(())
}

/// Apply a background fetch event to the app state.
fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::PageLoaded {
            generation,
            page,
            result,
        } => app.handle_page_loaded(generation, page, result),
    }
}

/// Periodic tick: spinner, debounced search commit, sentinel polling.
fn handle_tick(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    if app.controller.loading() {
        app.spinner_frame = (app.spinner_frame + 1) % SPINNER_FRAMES;
        app.needs_redraw = true;
    }

    // Trailing-edge search commit. The debouncer emits at most once per
    // settled window; an emission is an ordinary filter-change event.
    if let Some(committed) = app.debouncer.poll(tokio::time::Instant::now()) {
        if committed.len() > MAX_SEARCH_LENGTH {
            app.set_status(format!(
                "Search query too long (max {} chars)",
                MAX_SEARCH_LENGTH
            ));
        } else {
            let filter = app.filter_with_search(committed);
            app.apply_filter_change(filter, event_tx);
        }
    }

    // Sentinel check here as well as after navigation: covers the case
    // where a fetch finished and the sentinel is still in view.
    app.poll_load_more(event_tx);
}

/// Set up the terminal for TUI rendering.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state.
fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
