#![forbid(unsafe_code)]

//! Modal alert overlay for the estimation result.
//!
//! Rendered as a centered double-border block over the form; the caller
//! owns visibility and swallows input while it is shown.

use drowse_core::Advice;
use ftui_core::geometry::Rect;
use ftui_layout::{Constraint, Flex};
use ftui_render::frame::Frame;
use ftui_widgets::Widget;
use ftui_widgets::block::{Alignment, Block};
use ftui_widgets::borders::{BorderType, Borders};
use ftui_widgets::paragraph::Paragraph;

use crate::theme;

const MAX_WIDTH: u16 = 56;
const HEIGHT: u16 = 7;

/// Render the advice as a centered modal overlay.
pub fn render(advice: &Advice, frame: &mut Frame, area: Rect) {
    if area.width < 10 || area.height < HEIGHT {
        return;
    }

    let width = MAX_WIDTH.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(HEIGHT)) / 2;
    let overlay = Rect::new(x, y, width, HEIGHT);

    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(&advice.title)
        .title_alignment(Alignment::Center)
        .style(theme::alert_border(advice.is_error));

    let inner = block.inner(overlay);
    block.render(overlay, frame);

    if inner.is_empty() {
        return;
    }

    let rows = Flex::vertical()
        .constraints([
            Constraint::Fixed(1),
            Constraint::Fixed(1),
            Constraint::Fixed(1),
            Constraint::Fixed(1),
            Constraint::Min(0),
        ])
        .split(inner);

    Paragraph::new(&*advice.message)
        .style(theme::body())
        .alignment(Alignment::Center)
        .render(rows[1], frame);

    Paragraph::new("[ OK ]")
        .style(theme::value_focused())
        .alignment(Alignment::Center)
        .render(rows[3], frame);
}
