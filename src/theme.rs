//! Theme system for the TUI.
//!
//! Semantic style roles mapped to ratatui `Style` values, with Dark and
//! Light palettes selectable from config and cyclable at runtime.

use ratatui::style::{Color, Modifier, Style};

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    pub fn styles(self) -> StyleMap {
        match self {
            Self::Dark => StyleMap::dark(),
            Self::Light => StyleMap::light(),
        }
    }
}

/// Styles for every semantic UI role in the browse view.
#[derive(Debug, Clone)]
pub struct StyleMap {
    // -- Video list --
    pub video_normal: Style,
    pub video_selected: Style,
    pub video_meta: Style,

    // -- Filter bar --
    pub filter_label: Style,
    pub filter_value: Style,
    pub search_active: Style,

    // -- Status / markers --
    pub status_info: Style,
    pub status_error: Style,
    pub loading: Style,
    pub end_of_list: Style,

    // -- Chrome --
    pub border: Style,
    pub border_focused: Style,
    pub help_key: Style,
    pub help_text: Style,
}

impl StyleMap {
    pub fn dark() -> Self {
        Self {
            video_normal: Style::default().fg(Color::White),
            video_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            video_meta: Style::default().fg(Color::DarkGray),
            filter_label: Style::default().fg(Color::DarkGray),
            filter_value: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            search_active: Style::default().fg(Color::Cyan),
            status_info: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            loading: Style::default().fg(Color::Yellow),
            end_of_list: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            help_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            help_text: Style::default().fg(Color::Gray),
        }
    }

    pub fn light() -> Self {
        Self {
            video_normal: Style::default().fg(Color::Black),
            video_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            video_meta: Style::default().fg(Color::Gray),
            filter_label: Style::default().fg(Color::Gray),
            filter_value: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            search_active: Style::default().fg(Color::Blue),
            status_info: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            loading: Style::default().fg(Color::Magenta),
            end_of_list: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            border: Style::default().fg(Color::Gray),
            border_focused: Style::default().fg(Color::Blue),
            help_key: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            help_text: Style::default().fg(Color::DarkGray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!(ThemeVariant::from_str_name("dark"), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::from_str_name("LIGHT"), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::from_str_name("solarized"), None);
    }

    #[test]
    fn test_cycle_round_trips() {
        assert_eq!(ThemeVariant::Dark.next().next(), ThemeVariant::Dark);
    }
}
