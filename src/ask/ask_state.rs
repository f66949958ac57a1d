use ratatui::style::Style;
use tokio_util::sync::CancellationToken;
use tui_textarea::TextArea;

use crate::api::QueryResponse;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AskField {
    #[default]
    DocumentId,
    Question,
}

impl AskField {
    pub fn toggle(self) -> Self {
        match self {
            AskField::DocumentId => AskField::Question,
            AskField::Question => AskField::DocumentId,
        }
    }
}

pub struct AskState {
    pub document_id: TextArea<'static>,
    pub question: TextArea<'static>,
    pub field: AskField,
    /// Request id and cancel handle of the question in flight
    pub in_flight: Option<(u64, CancellationToken)>,
    pub response: Option<QueryResponse>,
    pub error: Option<String>,
}

impl Default for AskState {
    fn default() -> Self {
        Self::new()
    }
}

impl AskState {
    pub fn new() -> Self {
        Self {
            document_id: input("Paste or select a document ID"),
            question: input("What would you like to know?"),
            field: AskField::DocumentId,
            in_flight: None,
            response: None,
            error: None,
        }
    }

    pub fn document_id_text(&self) -> String {
        self.document_id.lines().join("").trim().to_string()
    }

    pub fn question_text(&self) -> String {
        self.question.lines().join("\n").trim().to_string()
    }

    pub fn active_input(&mut self) -> &mut TextArea<'static> {
        match self.field {
            AskField::DocumentId => &mut self.document_id,
            AskField::Question => &mut self.question,
        }
    }

    pub fn set_document_id(&mut self, id: &str) {
        clear(&mut self.document_id);
        self.document_id.insert_str(id);
    }

    pub fn is_asking(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Cancel the question in flight; returns whether there was one
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some((_, token)) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Clear both inputs and the last answer
    pub fn reset(&mut self) {
        self.cancel();
        clear(&mut self.document_id);
        clear(&mut self.question);
        self.field = AskField::DocumentId;
        self.response = None;
        self.error = None;
    }
}

fn input(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(theme::pane::PLACEHOLDER);
    textarea
}

fn clear(textarea: &mut TextArea<'static>) {
    textarea.select_all();
    textarea.cut();
}

#[cfg(test)]
#[path = "ask_state_tests.rs"]
mod ask_state_tests;
