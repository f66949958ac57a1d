use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

pub fn handle_documents_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.documents.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.documents.select_next(),
        KeyCode::Home | KeyCode::Char('g') => app.documents.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.documents.select_last(),
        KeyCode::Char('r') => app.refresh_documents(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Enter => app.select_document_for_ask(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

/// Keys while the delete confirmation popup is open; everything else is swallowed
pub fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_pending_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_pending_delete(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "documents_events_tests.rs"]
mod documents_events_tests;
