//! Render dispatch for the browse view.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{help, list, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 40;
pub(super) const MIN_HEIGHT: u16 = 8;

pub(super) fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Guard against zero-size areas to prevent panics.
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Too small")
        } else {
            Paragraph::new(format!(
                "Terminal too small\n\nMinimum: {}x{}\nCurrent: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search line
            Constraint::Length(1), // filter bar
            Constraint::Min(1),    // video list
            Constraint::Length(1), // status line
        ])
        .split(area);

    render_search_line(f, app, chunks[0]);
    render_filter_bar(f, app, chunks[1]);
    list::render(f, app, chunks[2]);
    status::render(f, app, chunks[3]);

    if app.show_help {
        help::render(f, app);
    }
}

fn render_search_line(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let border_style = if app.search_mode {
        app.theme.border_focused
    } else {
        app.theme.border
    };
    let text_style = if app.search_mode {
        app.theme.search_active
    } else {
        app.theme.video_normal
    };

    let display = if app.search_input.is_empty() && !app.search_mode {
        Span::styled("Search videos... (/)", app.theme.filter_label)
    } else if app.search_mode {
        // Trailing block makes the "cursor" position visible.
        Span::styled(format!("{}▏", app.search_input), text_style)
    } else {
        Span::styled(app.search_input.clone(), text_style)
    };

    let para = Paragraph::new(Line::from(display)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search "),
    );
    f.render_widget(para, area);
}

fn render_filter_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let filter = app.controller.filter();
    let line = Line::from(vec![
        Span::styled(" category ", app.theme.filter_label),
        Span::styled(filter.category.label(), app.theme.filter_value),
        Span::styled("  sort ", app.theme.filter_label),
        Span::styled(filter.sort_by.label(), app.theme.filter_value),
        Span::styled("  order ", app.theme.filter_label),
        Span::styled(filter.sort_order.label(), app.theme.filter_value),
        Span::styled("  (c/s/r to change)", app.theme.filter_label),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
