//! Tests for token-aware truncation and padding.

use super::*;
use crate::markup::{display_width, len, strip_colors};

// ===== trunc =====

#[test]
fn trunc_empty_is_empty() {
    assert_eq!(trunc("", 5, false), "");
    assert_eq!(trunc("", 0, true), "");
}

#[test]
fn trunc_plain_is_prefix_cut() {
    assert_eq!(trunc("abcdef", 3, false), "abc");
    assert_eq!(trunc("abc", 10, false), "abc");
}

#[test]
fn trunc_ignore_colors_cuts_through_tokens() {
    assert_eq!(trunc("{bold}abc{/bold}", 4, true), "{bol");
}

#[test]
fn trunc_short_marked_up_text_is_unchanged() {
    let text = "{red-fg}err{/red-fg}";
    assert_eq!(trunc(text, 3, false), text);
    assert_eq!(trunc(text, 50, false), text);
}

#[test]
fn trunc_marked_up_text_keeps_tokens_and_closes_all() {
    assert_eq!(
        trunc("{red-fg}error{/red-fg}", 3, false),
        "{red-fg}err{/}"
    );
}

#[test]
fn trunc_stops_before_trailing_token() {
    // The close tag after the last visible char is not scanned.
    assert_eq!(trunc("{b}ab{/b}cd", 2, false), "{b}ab{/}");
}

#[test]
fn trunc_to_zero_yields_only_close_all() {
    assert_eq!(trunc("{b}ab{/b}", 0, false), "{/}");
}

#[test]
fn trunc_copies_token_met_before_boundary() {
    assert_eq!(trunc("a{b}bc{/b}", 2, false), "a{b}b{/}");
}

#[test]
fn trunc_never_exceeds_width() {
    let text = "{green-fg}info{/green-fg} {bold}message body{/bold}";
    for n in 0..20 {
        let out = trunc(text, n, false);
        assert!(
            len(&out, false) <= n,
            "width {} exceeds {} for {:?}",
            len(&out, false),
            n,
            out
        );
    }
}

#[test]
fn trunc_does_not_split_wide_glyph() {
    assert_eq!(trunc("日本語", 3, false), "日");
    assert_eq!(trunc("{b}日本語{/b}", 3, false), "{b}日{/}");
}

#[test]
fn trunc_counts_control_characters() {
    let text = "ab\tcd\x1bef";
    let out = trunc(text, 3, true);
    assert_eq!(out, "ab\t");
    assert_eq!(display_width(&out), 3);
    assert_eq!(len(&trunc(text, 3, false), false), 3);
}

// ===== pad_end =====

#[test]
fn pad_end_fills_to_exact_width() {
    assert_eq!(pad_end("ab", 5, true), "ab   ");
    assert_eq!(pad_end("", 2, true), "  ");
}

#[test]
fn pad_end_measures_visible_width_of_marked_up_text() {
    let out = pad_end("{red-fg}ab{/red-fg}", 4, false);
    assert_eq!(out, "{red-fg}ab{/red-fg}  ");
    assert_eq!(strip_colors(&out), "ab  ");
}

#[test]
fn pad_end_truncates_overflow() {
    assert_eq!(pad_end("abcdef", 4, true), "abcd");
    assert_eq!(pad_end("{b}abcdef{/b}", 4, false), "{b}abcd{/}");
}

#[test]
fn pad_end_exact_width_is_unchanged() {
    assert_eq!(pad_end("abc", 3, false), "abc");
}

#[test]
fn pad_end_with_control_characters_hits_exact_width() {
    let out = pad_end("ab\tcd\x1bef", 4, true);
    assert_eq!(out, "ab\tc");
    assert_eq!(display_width(&out), 4);
}

// ===== wrap =====

#[test]
fn wrap_short_text_is_single_line() {
    assert_eq!(wrap("abc", 5), vec!["abc".to_string()]);
    assert_eq!(wrap("", 5), vec![String::new()]);
}

#[test]
fn wrap_zero_width_disables_wrapping() {
    assert_eq!(wrap("abcdef", 0), vec!["abcdef".to_string()]);
}

#[test]
fn wrap_plain_text_into_chunks() {
    assert_eq!(wrap("abcdefg", 3), vec!["abc", "def", "g"]);
}

#[test]
fn wrap_reopens_styles_on_each_line() {
    assert_eq!(
        wrap("{red-fg}abcd{/red-fg}e", 2),
        vec!["{red-fg}ab{/}", "{red-fg}cd{/red-fg}", "e"]
    );
}

#[test]
fn wrap_lines_never_exceed_width() {
    let text = "{blue-fg}{bold}stack:{/bold}{/blue-fg} at frame \t日本語 and more text";
    for width in 1..12 {
        for line in wrap(text, width) {
            assert!(len(&line, false) <= width.max(2), "{:?} wider than {}", line, width);
        }
    }
}

#[test]
fn wrap_keeps_every_visible_character() {
    let text = "{b}hello{/b} world";
    let joined: String = wrap(text, 4).iter().map(|l| strip_colors(l).into_owned()).collect();
    assert_eq!(joined, "hello world");
}

#[test]
fn spaces_builds_run_of_blanks() {
    assert_eq!(spaces(0), "");
    assert_eq!(spaces(3), "   ");
}
