use std::path::PathBuf;

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::api::UploadResponse;
use crate::theme;

pub struct UploadState {
    pub textarea: TextArea<'static>,
    /// Request id of the upload currently in flight
    pub in_flight: Option<u64>,
    pub last_response: Option<UploadResponse>,
}

impl Default for UploadState {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::pane::CURSOR);
        textarea.set_placeholder_text("Path to a .pdf or .txt file");
        textarea.set_placeholder_style(theme::pane::PLACEHOLDER);

        Self {
            textarea,
            in_flight: None,
            last_response: None,
        }
    }

    /// Path as typed, surrounding whitespace and quotes removed
    pub fn path(&self) -> PathBuf {
        let raw = self.textarea.lines().first().map(String::as_str).unwrap_or("");
        PathBuf::from(raw.trim().trim_matches(|c| c == '"' || c == '\''))
    }

    pub fn is_uploading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn clear_input(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// One-line summary of the last successful upload
    pub fn response_summary(&self) -> Option<String> {
        self.last_response.as_ref().map(|r| {
            format!(
                "{} uploaded as {} ({}, {} chunks)",
                r.filename, r.document_id, r.status, r.chunks_created
            )
        })
    }
}
