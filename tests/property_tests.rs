//! Property-based tests for the markup layout primitives.
//!
//! Tests validate:
//! 1. strip_colors is idempotent
//! 2. trunc never exceeds the requested width and closes styles it cut
//! 3. pad_end produces exactly the requested width when the text fits
//! 4. plain text measures the same with and without token stripping
//! 5. wrapped lines fit the width and keep every visible character

use jlv::markup::{display_width, len, pad_end, strip_colors, trunc, wrap, CLOSE_ALL};
use proptest::prelude::*;

// ===== Generators =====

/// Plain words without braces, including wide glyphs and control characters.
fn plain_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9 ]{1,8}",
            Just("日本".to_string()),
            Just("é".to_string()),
            Just("\t".to_string()),
            Just("\u{1b}".to_string()),
        ],
        0..6,
    )
    .prop_map(|parts| parts.concat())
}

/// Well-formed marked-up text: plain runs interleaved with known tokens.
fn marked_up_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z ]{1,6}",
            Just("{red-fg}".to_string()),
            Just("{/red-fg}".to_string()),
            Just("{bold}".to_string()),
            Just("{/bold}".to_string()),
            Just("{/}".to_string()),
            Just("日本".to_string()),
            Just("\t".to_string()),
        ],
        0..10,
    )
    .prop_map(|parts| parts.concat())
}

// ===== Property 1: strip idempotence =====

proptest! {
    #[test]
    fn strip_colors_is_idempotent(text in marked_up_text()) {
        let once = strip_colors(&text).into_owned();
        let twice = strip_colors(&once).into_owned();
        prop_assert_eq!(once, twice);
    }
}

// ===== Property 2: truncation width bound =====

proptest! {
    #[test]
    fn trunc_never_exceeds_width(text in marked_up_text(), width in 0usize..30) {
        let cut = trunc(&text, width, false);
        prop_assert!(len(&cut, false) <= width, "{:?} -> {:?}", text, cut);
    }

    #[test]
    fn trunc_plain_never_exceeds_width(text in plain_text(), width in 0usize..30) {
        let cut = trunc(&text, width, true);
        prop_assert!(display_width(&cut) <= width);
    }

    #[test]
    fn trunc_that_cuts_markup_closes_styles(text in marked_up_text(), width in 0usize..30) {
        let cut = trunc(&text, width, false);
        if text.contains('{') && cut != text {
            prop_assert!(cut.ends_with(CLOSE_ALL));
        }
    }
}

// ===== Property 3: exact padding =====

proptest! {
    #[test]
    fn pad_end_hits_exact_width(text in marked_up_text(), width in 0usize..40) {
        let padded = pad_end(&text, width, false);
        if len(&text, false) <= width {
            prop_assert_eq!(len(&padded, false), width);
        } else {
            prop_assert_eq!(padded, trunc(&text, width, false));
        }
    }

    #[test]
    fn pad_end_plain_hits_exact_width(text in plain_text(), width in 0usize..40) {
        let padded = pad_end(&text, width, true);
        if display_width(&text) <= width {
            prop_assert_eq!(display_width(&padded), width);
        } else {
            prop_assert!(display_width(&padded) <= width);
        }
    }
}

// ===== Property 4: plain length agreement =====

proptest! {
    #[test]
    fn plain_text_len_matches_width(text in plain_text()) {
        prop_assert_eq!(len(&text, false), len(&text, true));
        prop_assert_eq!(len(&text, true), display_width(&text));
    }
}

// ===== Property 5: wrapping =====

proptest! {
    #[test]
    fn wrap_lines_fit_width(text in marked_up_text(), width in 2usize..20) {
        for line in wrap(&text, width) {
            prop_assert!(len(&line, false) <= width, "{:?} -> {:?}", text, line);
        }
    }

    #[test]
    fn wrap_keeps_visible_text(text in marked_up_text(), width in 2usize..20) {
        let joined: String = wrap(&text, width)
            .iter()
            .map(|line| strip_colors(line).into_owned())
            .collect();
        prop_assert_eq!(joined, strip_colors(&text).into_owned());
    }
}
