//! Help overlay listing all keybindings.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("/", "Focus search (type, pause to search; Enter commits, Esc cancels)"),
    ("c", "Cycle category filter"),
    ("s", "Cycle sort key (newest / most viewed)"),
    ("r", "Reverse sort order"),
    ("R", "Refresh (refetch page 1)"),
    ("j/k, ↓/↑", "Move selection"),
    ("PgDn/PgUp", "Page down / up"),
    ("g/G", "Jump to top / bottom"),
    ("o, Enter", "Open selected video in browser"),
    ("t", "Toggle theme"),
    ("?", "Toggle this help"),
    ("q, Ctrl+C", "Quit"),
];

pub(super) fn render(f: &mut Frame, app: &App) {
    let area = centered_rect(60, BINDINGS.len() as u16 + 4, f.area());
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, desc) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), app.theme.help_key),
            Span::styled(*desc, app.theme.help_text),
        ]));
    }

    let para = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_focused)
            .title(" Help ")
            .title_alignment(Alignment::Center),
    );
    f.render_widget(para, area);
}

/// Center a `width`% x `height`-row rect inside `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
