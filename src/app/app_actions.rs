//! User-triggered operations: each validates input, publishes feedback and
//! hands the request to the API worker.

use tokio_util::sync::CancellationToken;

use super::app_state::{App, Focus};
use crate::api::{ApiError, ApiRequest, validate_upload_path};
use crate::ask::AskField;
use crate::documents::PendingDelete;

pub const UPLOAD_MISSING_FILE: &str = "Please select a file to upload!";
pub const ASK_MISSING_FIELDS: &str = "Please enter both document ID and question.";
pub const QUESTION_CANCELLED: &str = "Question cancelled";
pub const WORKER_UNAVAILABLE: &str = "API worker is not running";

impl App {
    /// Send a request built around a fresh id; publishes an error if no worker is connected
    fn send_request(&mut self, build: impl FnOnce(u64) -> ApiRequest) -> Option<u64> {
        let request_id = self.allocate_request_id();
        let request = build(request_id);

        let sent = match &self.request_tx {
            Some(tx) => tx.send(request).is_ok(),
            None => false,
        };

        if sent {
            log::debug!("Sent request {}", request_id);
            Some(request_id)
        } else {
            log::error!("Request {} dropped: worker unavailable", request_id);
            self.notifications.error(WORKER_UNAVAILABLE);
            None
        }
    }

    pub fn refresh_documents(&mut self) {
        if let Some(request_id) =
            self.send_request(|request_id| ApiRequest::ListDocuments { request_id })
        {
            // A newer refresh supersedes the older one
            self.documents.loading = Some(request_id);
        }
    }

    pub fn submit_upload(&mut self) {
        if self.upload.is_uploading() {
            return;
        }

        let path = self.upload.path();
        match validate_upload_path(&path) {
            Ok(_) => {}
            Err(ApiError::MissingField(_)) => {
                self.notifications.error(UPLOAD_MISSING_FILE);
                return;
            }
            Err(e) => {
                self.notifications.error(e.to_string());
                return;
            }
        }

        if let Some(request_id) =
            self.send_request(|request_id| ApiRequest::Upload { request_id, path })
        {
            self.upload.in_flight = Some(request_id);
        }
    }

    /// Start deleting the selected document, asking first when configured to
    pub fn request_delete(&mut self) {
        if self.documents.deleting.is_some() {
            return;
        }
        let Some(pending) = self.documents.pending_for_selected() else {
            return;
        };

        if self.confirm_delete {
            self.documents.confirming = Some(pending);
        } else {
            self.send_delete(pending);
        }
    }

    pub fn confirm_pending_delete(&mut self) {
        if let Some(pending) = self.documents.confirming.take() {
            self.send_delete(pending);
        }
    }

    pub fn cancel_pending_delete(&mut self) {
        self.documents.confirming = None;
    }

    fn send_delete(&mut self, pending: PendingDelete) {
        let document_id = pending.document_id.clone();
        if let Some(request_id) = self.send_request(|request_id| ApiRequest::Delete {
            request_id,
            document_id,
        }) {
            self.documents.deleting = Some((request_id, pending));
        }
    }

    /// Copy the selected document's id into the ask form and move there
    pub fn select_document_for_ask(&mut self) {
        let Some(document_id) = self
            .documents
            .selected_document()
            .map(|d| d.document_id.clone())
        else {
            return;
        };

        self.ask.set_document_id(&document_id);
        self.ask.field = AskField::Question;
        self.focus = Focus::Ask;
    }

    pub fn submit_question(&mut self) {
        if self.ask.is_asking() {
            return;
        }

        let document_id = self.ask.document_id_text();
        let question = self.ask.question_text();
        if document_id.is_empty() || question.is_empty() {
            self.notifications.error(ASK_MISSING_FIELDS);
            return;
        }

        let token = CancellationToken::new();
        let cancel_token = token.clone();
        if let Some(request_id) = self.send_request(|request_id| ApiRequest::Query {
            request_id,
            document_id,
            question,
            cancel_token,
        }) {
            self.ask.error = None;
            self.ask.response = None;
            self.ask.in_flight = Some((request_id, token));
        }
    }

    pub fn cancel_question(&mut self) {
        if self.ask.cancel() {
            self.notifications.success(QUESTION_CANCELLED);
        }
    }
}

#[cfg(test)]
#[path = "app_actions_tests.rs"]
mod app_actions_tests;
