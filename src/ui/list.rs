//! The scrolling video list, including the end-of-list sentinel row.
//!
//! The sentinel row rendered after the last video is what the load-more
//! trigger watches: when the viewport window reaches past the final item,
//! the sentinel is "visible" and a next-page fetch may fire.

use crate::app::App;
use crate::browse::Phase;
use crate::util::{display_width, format_views, truncate_to_width};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub(super) fn render(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border)
        .title(format!(" Videos ({}) ", app.controller.videos().len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Publish the viewport height so navigation and the sentinel check see
    // the same window the user sees.
    app.list_visible_rows = inner.height as usize;
    if app.list_visible_rows == 0 {
        return;
    }
    app.sync_scroll();

    let videos = app.controller.videos();
    let rows = app.list_visible_rows;
    let width = inner.width as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(rows);
    let end = (app.scroll_offset + rows).min(videos.len());
    for (idx, video) in videos[app.scroll_offset..end].iter().enumerate() {
        let absolute = app.scroll_offset + idx;
        let style = if absolute == app.selected {
            app.theme.video_selected
        } else {
            app.theme.video_normal
        };

        let date = video
            .created_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let meta = format!(
            " {} · {} views · {}",
            video.category.as_deref().unwrap_or("Uncategorized"),
            format_views(video.views),
            date,
        );
        lines.push(Line::from(vec![
            Span::styled(
                truncate_to_width(&video.title, title_budget(width, &meta)).into_owned(),
                style,
            ),
            Span::styled(meta, app.theme.video_meta),
        ]));
    }

    // Sentinel row: loading indicator, end-of-list marker, or empty-state
    // message, mirroring the feed phase.
    if lines.len() < rows {
        match app.controller.phase() {
            Phase::Fetching => {
                let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
                lines.push(Line::from(Span::styled(
                    format!("{} Loading more videos...", spinner),
                    app.theme.loading,
                )));
            }
            Phase::Exhausted if videos.is_empty() => {
                lines.push(Line::from(Span::styled(
                    "No videos found. Try adjusting your search or filters.",
                    app.theme.end_of_list,
                )));
            }
            Phase::Exhausted => {
                lines.push(Line::from(Span::styled(
                    "You've reached the end!",
                    app.theme.end_of_list,
                )));
            }
            Phase::Idle => {}
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Columns left for the title once the meta suffix and a gap are placed.
///
/// Measured in display columns: the " · " separators are multi-byte but
/// one column wide, so byte length would shortchange the title.
fn title_budget(row_width: usize, meta: &str) -> usize {
    row_width.saturating_sub(display_width(meta) + 1)
}
