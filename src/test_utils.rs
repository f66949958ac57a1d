//! Shared test utilities for docqa
//!
//! Fixtures and helpers used across the app, pane and notification tests.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use crate::api::{ApiRequest, ApiResponse, Document, DocumentStatus};
    use crate::app::App;
    use crate::config::Config;
    use crate::notification::Broadcaster;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// App with default config, its own broadcaster and no worker
    pub fn test_app() -> App {
        App::new(&Config::default(), Broadcaster::new())
    }

    /// App wired to in-memory channels standing in for the API worker
    ///
    /// Returns the receiving end of requests and the sending end of responses.
    pub fn app_with_worker() -> (App, Receiver<ApiRequest>, Sender<ApiResponse>) {
        let mut app = test_app();
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn document(id: &str, filename: &str) -> Document {
        Document {
            document_id: id.to_string(),
            filename: filename.to_string(),
            status: DocumentStatus::Processed,
            chunk_count: 3,
            uploaded_at: None,
        }
    }

    /// Latest notification message, if any
    pub fn latest_message(app: &App) -> Option<String> {
        app.notifications
            .snapshot()
            .first()
            .map(|n| n.message.clone())
    }
}
