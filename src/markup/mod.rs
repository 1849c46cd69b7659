//! Styled-text metrics for strings carrying inline style tokens.
//!
//! Tokens look like `{name}` (open), `{/name}` (close) and `{/}` (close-all).
//! Everything here is pure: the functions only measure and reshape text.
//! Interpreting tokens as terminal attributes is the job of `view::markup`.

pub mod metrics;
pub mod tags;
pub mod truncate;

pub use metrics::{display_width, len};
pub use tags::{has_colors, segments, strip_colors, Segment, CLOSE_ALL};
pub use truncate::{pad_end, spaces, trunc, wrap};
