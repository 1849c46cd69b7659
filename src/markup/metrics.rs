//! Display width of marked-up text.

use super::tags::strip_colors;
use unicode_width::UnicodeWidthStr;

/// Terminal columns occupied by `text`, counting tokens as ordinary characters.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Display width of `text` once its style tokens are removed.
///
/// `ignore_colors` skips the strip for text the caller already knows is plain
/// (raw cell values, numeric output).
pub fn len(text: &str, ignore_colors: bool) -> usize {
    if text.is_empty() {
        return 0;
    }
    if ignore_colors {
        return display_width(text);
    }
    display_width(&strip_colors(text))
}
