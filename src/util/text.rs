use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Displayed width of a string in terminal columns, Unicode-aware (CJK and
/// emoji are 2 columns, combining marks are 0).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Ellipsis string used for truncation
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit within `max_width` terminal columns, appending
/// "..." when anything was cut. Returns `Cow::Borrowed` when the string
/// already fits (no allocation on the common render path).
///
/// For widths of 3 or less there is no room for "char + ellipsis", so as
/// many characters as fit are returned without an ellipsis.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    if max_width <= ELLIPSIS_WIDTH {
        let mut out = String::new();
        let mut used = 0;
        for ch in s.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > max_width {
                break;
            }
            out.push(ch);
            used += w;
        }
        return Cow::Owned(out);
    }

    let budget = max_width - ELLIPSIS_WIDTH;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Format a view count compactly: 999, 1.2K, 3.4M.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_returns_borrowed() {
        let result = truncate_to_width("Short", 10);
        assert_eq!(result, "Short");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("A fairly long title", 10), "A fairl...");
    }

    #[test]
    fn test_cjk_width_respected() {
        // Each CJK char is 2 columns; 4 columns of chars + 3 of ellipsis = 7.
        let result = truncate_to_width("你好世界啊", 7);
        assert_eq!(result, "你好...");
        assert!(display_width(&result) <= 7);
    }

    #[test]
    fn test_narrow_widths_no_ellipsis() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 2), "he");
        assert_eq!(truncate_to_width("hello", 3), "hel");
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(1_200), "1.2K");
        assert_eq!(format_views(3_400_000), "3.4M");
    }
}
