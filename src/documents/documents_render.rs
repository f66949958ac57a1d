use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::{DocumentListState, PendingDelete};
use crate::api::{Document, DocumentStatus};
use crate::theme;
use crate::widgets::popup;
use crate::widgets::spinner::spinner_span;

const POPUP_WIDTH: u16 = 52;
const POPUP_HEIGHT: u16 = 6;

pub fn render_pane(
    state: &DocumentListState,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    frame_count: u64,
) {
    let border_color = if state.is_busy() {
        theme::pane::BORDER_BUSY
    } else if focused {
        theme::pane::BORDER_FOCUSED
    } else {
        theme::pane::BORDER_UNFOCUSED
    };

    let mut title = vec![Span::styled(
        format!(" Documents ({}) ", state.documents.len()),
        Style::default().fg(theme::pane::TITLE),
    )];
    if state.is_loading() {
        title.push(spinner_span(frame_count, "Loading... "));
    } else if state.deleting.is_some() {
        title.push(spinner_span(frame_count, "Deleting... "));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Line::from(title));

    if let Some(delete_error) = &state.delete_error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", delete_error),
            Style::default().fg(theme::documents::ERROR),
        )));
    }

    if let Some(error) = &state.error {
        let text = Paragraph::new(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(theme::documents::ERROR),
        )))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    if state.documents.is_empty() {
        let message = if state.loaded {
            "No documents found."
        } else {
            "Loading documents..."
        };
        let text = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(theme::documents::EMPTY),
        )))
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = state.documents.iter().map(document_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme::documents::SELECTED_BG))
        .highlight_symbol("▌");

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn document_item(doc: &Document) -> ListItem<'static> {
    let meta = Style::default().fg(theme::documents::META);
    let status_color = match doc.status {
        DocumentStatus::Processed => theme::documents::STATUS_PROCESSED,
        DocumentStatus::Processing => theme::documents::STATUS_PROCESSING,
        DocumentStatus::Failed => theme::documents::STATUS_FAILED,
        DocumentStatus::Unknown => theme::documents::STATUS_UNKNOWN,
    };

    ListItem::new(vec![
        Line::from(Span::styled(
            format!(" {}", doc.filename),
            theme::documents::FILENAME,
        )),
        Line::from(Span::styled(format!("   ID: {}", doc.document_id), meta)),
        Line::from(vec![
            Span::styled("   Status: ", meta),
            Span::styled(doc.status.label(), Style::default().fg(status_color)),
            Span::styled(
                format!(
                    " | Chunks: {} | Uploaded: {}",
                    doc.chunk_count,
                    doc.uploaded_at_display()
                ),
                meta,
            ),
        ]),
    ])
}

/// Centered y/n popup for a delete awaiting confirmation
pub fn render_delete_popup(pending: &PendingDelete, frame: &mut Frame) {
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    popup::clear_area(frame, area);

    let text_style = Style::default().fg(theme::popup::TEXT);
    let lines = vec![
        Line::from(Span::styled(
            format!("Delete \"{}\"?", pending.filename),
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("ID: {}", pending.document_id),
            Style::default().fg(theme::documents::META),
        )),
        Line::from(""),
        Line::from(Span::styled("[y/Enter] Delete   [n/Esc] Cancel", text_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::popup::BORDER))
        .style(Style::default().bg(theme::popup::BACKGROUND))
        .title(" Confirm Delete ");

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "documents_render_tests.rs"]
mod documents_render_tests;
