//! Detail overlay widget.
//!
//! Draws the lines held by [`DetailView`] in a centered popup over the entry
//! list. Scrolling is owned by the state machine; this module only maps the
//! offset onto a `Paragraph`.

use super::constants::{DETAIL_POPUP_HEIGHT_PERCENT, DETAIL_POPUP_WIDTH_PERCENT};
use super::markup::{to_line, to_lines};
use super::styles::DETAIL_BORDER;
use crate::state::{Clock, DetailView, DisplayMode};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render the overlay if the detail view is open.
pub fn render_detail_overlay<C: Clock>(frame: &mut Frame, detail: &DetailView<C>) {
    if !detail.is_open() {
        return;
    }

    let popup_area = detail_popup_area(frame.area());
    frame.render_widget(Clear, popup_area);

    let hint = match detail.mode() {
        DisplayMode::Formatted => " Tab: raw JSON  q/Esc/Enter: close ",
        DisplayMode::RawJson => " Tab: formatted  q/Esc/Enter: close ",
    };

    let paragraph = Paragraph::new(to_lines(detail.lines()))
        .block(
            Block::default()
                .title(to_line(detail.title()))
                .title_bottom(
                    Line::styled(hint, Style::default().add_modifier(Modifier::DIM))
                        .alignment(Alignment::Center),
                )
                .borders(Borders::ALL)
                .border_style(DETAIL_BORDER),
        )
        .scroll((saturating_u16(detail.scroll_offset()), 0));
    frame.render_widget(paragraph, popup_area);

    if detail.lines().len() > detail.viewport_height() {
        let mut state = ScrollbarState::new(detail.lines().len())
            .viewport_content_length(detail.viewport_height())
            .position(detail.scroll_offset());
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            popup_area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}

/// Area of the overlay for a given screen area.
pub fn detail_popup_area(area: Rect) -> Rect {
    centered_rect(DETAIL_POPUP_WIDTH_PERCENT, DETAIL_POPUP_HEIGHT_PERCENT, area)
}

/// Rows available for content inside the bordered overlay.
pub fn detail_viewport_height(area: Rect) -> usize {
    usize::from(detail_popup_area(area).height.saturating_sub(2))
}

/// Columns available for content inside the bordered overlay.
pub fn detail_viewport_width(area: Rect) -> usize {
    usize::from(detail_popup_area(area).width.saturating_sub(2))
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
