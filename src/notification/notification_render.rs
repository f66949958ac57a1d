//! Toast rendering
//!
//! Draws the live notifications as stacked banners in the top-right corner.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::Notification;
use crate::widgets::popup;

const MARGIN: u16 = 2;
const TOAST_HEIGHT: u16 = 3; // 1 line content + 2 borders
const MAX_TOAST_WIDTH: u16 = 48;

/// Render the toast stack, newest at the top.
///
/// Call after the main UI so the banners float above other content. Banners that
/// would run past the bottom of the frame are skipped.
pub fn render_toasts(frame: &mut Frame, items: &[Notification]) {
    let frame_area = frame.area();
    let available_width = frame_area.width.saturating_sub(MARGIN * 2);

    let mut y = frame_area.y.saturating_add(MARGIN);
    for notif in items {
        if y.saturating_add(TOAST_HEIGHT) > frame_area.bottom() {
            break;
        }

        let Some(area) = toast_area(frame_area, &notif.message, available_width, y) else {
            return;
        };

        render_toast(frame, notif, area);
        y += TOAST_HEIGHT;
    }
}

fn toast_area(frame_area: Rect, message: &str, available_width: u16, y: u16) -> Option<Rect> {
    // 2 padding + 2 borders
    let content_width = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = content_width
        .saturating_add(4)
        .min(MAX_TOAST_WIDTH)
        .min(available_width);

    if width < 5 {
        return None;
    }

    Some(Rect {
        x: frame_area.right().saturating_sub(width.saturating_add(MARGIN)),
        y,
        width,
        height: TOAST_HEIGHT,
    })
}

fn render_toast(frame: &mut Frame, notif: &Notification, area: Rect) {
    let colors = notif.category.colors();

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
