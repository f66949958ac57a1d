use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use tui_textarea::TextArea;

use super::{AskField, AskState};
use crate::api::QueryResponse;
use crate::theme;
use crate::widgets::spinner::spinner_span;

const DOCUMENT_ID_HEIGHT: u16 = 3;
const QUESTION_HEIGHT: u16 = 5;

pub fn render_pane(
    state: &mut AskState,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    frame_count: u64,
) {
    let [id_area, question_area, answer_area] = Layout::vertical([
        Constraint::Length(DOCUMENT_ID_HEIGHT),
        Constraint::Length(QUESTION_HEIGHT),
        Constraint::Min(3),
    ])
    .areas(area);

    let field = state.field;
    let asking = state.is_asking();

    style_input(
        &mut state.document_id,
        " Document ID ",
        focused && field == AskField::DocumentId,
        asking,
    );
    frame.render_widget(&state.document_id, id_area);

    style_input(
        &mut state.question,
        " Question ",
        focused && field == AskField::Question,
        asking,
    );
    frame.render_widget(&state.question, question_area);

    render_answer(state, frame, answer_area, frame_count);
}

fn style_input(textarea: &mut TextArea<'static>, title: &'static str, active: bool, busy: bool) {
    let border_color = if busy {
        theme::pane::BORDER_BUSY
    } else if active {
        theme::pane::BORDER_FOCUSED
    } else {
        theme::pane::BORDER_UNFOCUSED
    };

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(title, Style::default().fg(theme::ask::LABEL))),
    );
    textarea.set_cursor_style(if active {
        theme::pane::CURSOR
    } else {
        Style::default()
    });
}

fn render_answer(state: &AskState, frame: &mut Frame, area: Rect, frame_count: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::pane::BORDER_UNFOCUSED))
        .title(Span::styled(" Answer ", Style::default().fg(theme::pane::TITLE)));

    let lines = if state.is_asking() {
        vec![Line::from(spinner_span(frame_count, "Thinking..."))]
    } else if let Some(error) = &state.error {
        vec![Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme::ask::ERROR),
        ))]
    } else if let Some(response) = &state.response {
        answer_lines(response)
    } else {
        vec![Line::from(Span::styled(
            "Ask a question to see the answer here.",
            Style::default().fg(theme::ask::FOOTER),
        ))]
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Answer text, sources as bullets, then timing and document id
pub fn answer_lines(response: &QueryResponse) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(theme::ask::LABEL)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled("Answer:", label)));
    for text in response.answer.lines() {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(theme::ask::ANSWER),
        )));
    }

    if !response.sources.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Sources:", label)));
        for source in &response.sources {
            lines.push(Line::from(Span::styled(
                format!("\u{2022} {}", source.chunk_text.trim()),
                Style::default().fg(theme::ask::SOURCE),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "\u{23f1} {:.2}s | Doc ID: {}",
            response.processing_time_seconds, response.document_id
        ),
        Style::default().fg(theme::ask::FOOTER),
    )));

    lines
}

#[cfg(test)]
#[path = "ask_render_tests.rs"]
mod ask_render_tests;
