//! Turns marked-up text into styled ratatui lines.
//!
//! Known tags:
//! - `<color>-fg` / `<color>-bg` (any name or `#rrggbb` ratatui understands)
//! - `bold`, `underline`, `italic`, `dim`, `blink`, `reverse`/`inverse`
//!
//! Opens push onto a style stack, `{/name}` removes the most recent matching
//! open, `{/}` clears the stack. Unknown opens are shown literally; unmatched
//! closes are dropped.

use crate::markup::{segments, Segment};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Style contributed by a single tag, or `None` if the tag is unknown.
pub fn tag_style(name: &str) -> Option<Style> {
    let modifier = match name {
        "bold" => Some(Modifier::BOLD),
        "underline" => Some(Modifier::UNDERLINED),
        "italic" => Some(Modifier::ITALIC),
        "dim" => Some(Modifier::DIM),
        "blink" => Some(Modifier::SLOW_BLINK),
        "reverse" | "inverse" => Some(Modifier::REVERSED),
        _ => None,
    };
    if let Some(modifier) = modifier {
        return Some(Style::default().add_modifier(modifier));
    }

    if let Some(color) = name.strip_suffix("-fg") {
        return color.parse::<Color>().ok().map(|c| Style::default().fg(c));
    }
    if let Some(color) = name.strip_suffix("-bg") {
        return color.parse::<Color>().ok().map(|c| Style::default().bg(c));
    }
    None
}

fn current_style(stack: &[(&str, Style)]) -> Style {
    stack
        .iter()
        .fold(Style::default(), |style, (_, patch)| style.patch(*patch))
}

/// Render one marked-up line.
pub fn to_line(text: &str) -> Line<'static> {
    let mut stack: Vec<(&str, Style)> = Vec::new();
    let mut spans = Vec::new();

    for segment in segments(text) {
        match segment {
            Segment::Text(run) => spans.push(Span::styled(run.to_string(), current_style(&stack))),
            Segment::Open(name) => match tag_style(name) {
                Some(style) => stack.push((name, style)),
                None => spans.push(Span::styled(format!("{{{}}}", name), current_style(&stack))),
            },
            Segment::Close(name) => {
                if let Some(pos) = stack.iter().rposition(|(open, _)| *open == name) {
                    stack.remove(pos);
                }
            }
            Segment::CloseAll => stack.clear(),
        }
    }

    Line::from(spans)
}

/// Render a block of marked-up lines.
pub fn to_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Line<'static>> {
    lines.iter().map(|line| to_line(line.as_ref())).collect()
}
