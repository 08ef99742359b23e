//! Small shared utilities.

mod text;

pub use text::{display_width, format_views, truncate_to_width};
