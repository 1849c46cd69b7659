//! Inline style token grammar.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Token that closes every open style.
pub const CLOSE_ALL: &str = "{/}";

lazy_static! {
    /// `{name}`, `{/name}` or `{/}`.
    static ref TAG_RE: Regex =
        Regex::new(r"\{/?[\w\-,;!#]+\}|\{/\}").expect("static tag pattern");
}

/// Remove every style token from `text`.
///
/// Returns the input borrowed when it carries no tokens.
pub fn strip_colors(text: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(text, "")
}

/// True iff `text` contains at least one style token.
pub fn has_colors(text: &str) -> bool {
    TAG_RE.is_match(text)
}

/// A piece of marked-up text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Visible text between tokens.
    Text(&'a str),
    /// `{name}`
    Open(&'a str),
    /// `{/name}`
    Close(&'a str),
    /// `{/}`
    CloseAll,
}

/// Split `text` into visible runs and tokens, in order.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for tag in TAG_RE.find_iter(text) {
        if tag.start() > cursor {
            out.push(Segment::Text(&text[cursor..tag.start()]));
        }
        let inner = &tag.as_str()[1..tag.as_str().len() - 1];
        out.push(match inner.strip_prefix('/') {
            Some("") => Segment::CloseAll,
            Some(name) => Segment::Close(name),
            None => Segment::Open(inner),
        });
        cursor = tag.end();
    }
    if cursor < text.len() {
        out.push(Segment::Text(&text[cursor..]));
    }
    out
}
