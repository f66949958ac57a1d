use crate::api::Document;

/// A delete the user still has to confirm, or one already sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub document_id: String,
    pub filename: String,
}

#[derive(Debug, Default)]
pub struct DocumentListState {
    pub documents: Vec<Document>,
    pub selected: usize,
    /// Inline error shown instead of the list
    pub error: Option<String>,
    /// Last failed delete, shown under the list
    pub delete_error: Option<String>,
    /// Request id of the list refresh in flight
    pub loading: Option<u64>,
    /// Awaiting y/n in the confirmation popup
    pub confirming: Option<PendingDelete>,
    /// Request id and target of the delete in flight
    pub deleting: Option<(u64, PendingDelete)>,
    /// Whether a list response has been received at least once
    pub loaded: bool,
}

impl DocumentListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.loading.is_some() || self.deleting.is_some()
    }

    /// Replace the list, keeping the selection on the same document when possible
    pub fn set_documents(&mut self, documents: Vec<Document>) {
        let previous = self.selected_document().map(|d| d.document_id.clone());
        self.documents = documents;
        self.error = None;
        self.delete_error = None;
        self.loaded = true;

        self.selected = previous
            .and_then(|id| self.documents.iter().position(|d| d.document_id == id))
            .unwrap_or(0);
        self.clamp_selection();
    }

    /// Drop a document locally after the backend confirmed its deletion
    pub fn remove(&mut self, document_id: &str) -> bool {
        let before = self.documents.len();
        self.documents.retain(|d| d.document_id != document_id);
        self.clamp_selection();
        self.documents.len() != before
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.documents.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.documents.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.documents.len().saturating_sub(1);
    }

    pub fn pending_for_selected(&self) -> Option<PendingDelete> {
        self.selected_document().map(|d| PendingDelete {
            document_id: d.document_id.clone(),
            filename: d.filename.clone(),
        })
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.documents.len() {
            self.selected = self.documents.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
#[path = "documents_state_tests.rs"]
mod documents_state_tests;
