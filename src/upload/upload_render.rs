use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::UploadState;
use crate::theme;
use crate::widgets::spinner::spinner_span;

/// Input box plus one status line below it
pub const UPLOAD_PANE_HEIGHT: u16 = 4;

pub fn render_pane(
    state: &mut UploadState,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    frame_count: u64,
) {
    let [input_area, status_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let border_color = if state.is_uploading() {
        theme::pane::BORDER_BUSY
    } else if focused {
        theme::pane::BORDER_FOCUSED
    } else {
        theme::pane::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " Upload Document (.pdf, .txt) ",
            Style::default().fg(theme::pane::TITLE),
        ));

    state.textarea.set_block(block);
    state.textarea.set_cursor_style(if focused {
        theme::pane::CURSOR
    } else {
        Style::default()
    });
    frame.render_widget(&state.textarea, input_area);

    frame.render_widget(Paragraph::new(status_line(state, frame_count)), status_area);
}

fn status_line(state: &UploadState, frame_count: u64) -> Line<'static> {
    if state.is_uploading() {
        return Line::from(vec![Span::raw(" "), spinner_span(frame_count, "Uploading...")]);
    }

    match state.response_summary() {
        Some(summary) => Line::from(vec![
            Span::styled(
                " Last upload: ",
                Style::default().fg(theme::upload::RESPONSE_LABEL),
            ),
            Span::styled(summary, Style::default().fg(theme::upload::RESPONSE_TEXT)),
        ]),
        None => Line::from(Span::styled(
            " Type a file path and press Enter to upload",
            Style::default().fg(theme::upload::RESPONSE_TEXT),
        )),
    }
}

#[cfg(test)]
#[path = "upload_render_tests.rs"]
mod upload_render_tests;
