//! Token-aware truncation, padding and wrapping.

use super::metrics::{display_width, len};
use super::tags::{has_colors, segments, Segment, CLOSE_ALL};

/// A string of `n` spaces.
pub fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Width of one character, measured the way [`display_width`] measures a
/// string. Control characters count as one column.
fn char_width(ch: char) -> usize {
    let mut buf = [0u8; 4];
    display_width(ch.encode_utf8(&mut buf))
}

/// Longest prefix of `text` whose display width fits in `length` columns.
fn plain_prefix(text: &str, length: usize) -> &str {
    if display_width(text) <= length {
        return text;
    }
    let mut end = 0;
    for (idx, ch) in text.char_indices() {
        let next = idx + ch.len_utf8();
        if display_width(&text[..next]) > length {
            break;
        }
        end = next;
    }
    &text[..end]
}

/// Shorten `text` to at most `length` visible columns.
///
/// Plain text (or `ignore_colors`) is cut as a simple prefix. Marked-up text
/// is scanned once: characters inside `{...}` are copied but not counted, and
/// the result always ends with `{/}` so a token cut mid-stream cannot leave a
/// style open.
pub fn trunc(text: &str, length: usize, ignore_colors: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    if ignore_colors || !has_colors(text) {
        return plain_prefix(text, length).to_string();
    }
    if len(text, false) <= length {
        return text.to_string();
    }

    let mut visible = 0;
    let mut in_tag = false;
    let mut output = String::with_capacity(text.len() + CLOSE_ALL.len());
    for ch in text.chars() {
        if visible >= length {
            break;
        }
        if ch == '{' {
            in_tag = true;
        }
        if !in_tag {
            let w = char_width(ch);
            if visible + w > length {
                break;
            }
            visible += w;
        }
        output.push(ch);
        if ch == '}' {
            in_tag = false;
        }
    }

    output.push_str(CLOSE_ALL);
    output
}

/// Pad `text` with trailing spaces to exactly `length` visible columns.
///
/// Text that is already wider is truncated instead.
pub fn pad_end(text: &str, length: usize, ignore_colors: bool) -> String {
    let current = len(text, ignore_colors);
    if current > length {
        return trunc(text, length, ignore_colors);
    }
    let mut padded = String::with_capacity(text.len() + length - current);
    padded.push_str(text);
    padded.push_str(&spaces(length - current));
    padded
}

/// Hard-wrap marked-up `text` into lines of at most `width` visible columns.
///
/// Styles open at a break are closed with `{/}` and reopened on the next
/// line, so each line renders on its own. A glyph wider than `width` still
/// gets a line to itself. A `width` of zero disables wrapping.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || len(text, false) <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut open: Vec<&str> = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for segment in segments(text) {
        match segment {
            Segment::Text(run) => {
                for ch in run.chars() {
                    let w = char_width(ch);
                    if used > 0 && used + w > width {
                        if !open.is_empty() {
                            current.push_str(CLOSE_ALL);
                        }
                        lines.push(std::mem::take(&mut current));
                        for name in &open {
                            current.push('{');
                            current.push_str(name);
                            current.push('}');
                        }
                        used = 0;
                    }
                    current.push(ch);
                    used += w;
                }
            }
            Segment::Open(name) => {
                open.push(name);
                current.push('{');
                current.push_str(name);
                current.push('}');
            }
            Segment::Close(name) => {
                if let Some(pos) = open.iter().rposition(|o| *o == name) {
                    open.remove(pos);
                }
                current.push_str("{/");
                current.push_str(name);
                current.push('}');
            }
            Segment::CloseAll => {
                open.clear();
                current.push_str(CLOSE_ALL);
            }
        }
    }
    lines.push(current);
    lines
}

#[cfg(test)]
#[path = "truncate_tests.rs"]
mod tests;
