//! Bottom status line: transient messages, loading state, key hints.

use crate::app::App;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some((msg, _)) = &app.status_message {
        let style = if msg.starts_with("Fetch failed") || msg.starts_with("Error") {
            app.theme.status_error
        } else {
            app.theme.status_info
        };
        Line::from(Span::styled(msg.to_string(), style))
    } else if app.controller.loading() {
        Line::from(Span::styled("Loading...", app.theme.loading))
    } else {
        Line::from(vec![
            Span::styled(" / ", app.theme.help_key),
            Span::styled("search ", app.theme.help_text),
            Span::styled("c ", app.theme.help_key),
            Span::styled("category ", app.theme.help_text),
            Span::styled("s ", app.theme.help_key),
            Span::styled("sort ", app.theme.help_text),
            Span::styled("o ", app.theme.help_key),
            Span::styled("open ", app.theme.help_text),
            Span::styled("? ", app.theme.help_key),
            Span::styled("help ", app.theme.help_text),
            Span::styled("q ", app.theme.help_key),
            Span::styled("quit", app.theme.help_text),
        ])
    };

    f.render_widget(Paragraph::new(line), area);
}
