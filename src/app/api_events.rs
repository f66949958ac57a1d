//! Applying worker responses to app state
//!
//! Every response carries the id of the request it answers. Anything that no
//! longer matches the pane's in-flight id is stale and dropped.

use std::sync::mpsc::TryRecvError;

use super::app_state::App;
use crate::api::{ApiError, ApiOperation, ApiResponse};

pub const UPLOAD_SUCCEEDED: &str = "Document uploaded successfully!";
pub const UPLOAD_FAILED: &str = "Upload failed! Please try again.";
pub const LIST_FAILED: &str = "Failed to load documents";
pub const DELETE_SUCCEEDED: &str = "Document deleted";
pub const DELETE_FAILED: &str = "Failed to delete document";
pub const ANSWER_RECEIVED: &str = "Answer received";
pub const ANSWER_FAILED: &str = "Failed to fetch answer from backend.";
pub const WORKER_DISCONNECTED: &str = "API worker disconnected unexpectedly";

impl App {
    /// Drain every pending worker response; returns whether any arrived
    pub fn poll_api_responses(&mut self) -> bool {
        let mut received = false;

        loop {
            let next = match &self.response_rx {
                Some(rx) => rx.try_recv(),
                None => return received,
            };

            match next {
                Ok(response) => {
                    received = true;
                    self.handle_api_response(response);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.worker_gone(WORKER_DISCONNECTED.to_string());
                    received = true;
                    break;
                }
            }
        }

        if received {
            self.mark_dirty();
        }
        received
    }

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Uploaded {
                request_id,
                response,
            } => {
                if self.upload.in_flight != Some(request_id) {
                    return self.log_stale(request_id);
                }
                self.upload.in_flight = None;
                log::debug!("Uploaded {} as {}", response.filename, response.document_id);
                self.upload.last_response = Some(response);
                self.upload.clear_input();
                self.notifications.success(UPLOAD_SUCCEEDED);
                self.refresh_documents();
            }
            ApiResponse::Documents {
                request_id,
                documents,
            } => {
                if self.documents.loading != Some(request_id) {
                    return self.log_stale(request_id);
                }
                self.documents.loading = None;
                self.documents.set_documents(documents);
            }
            ApiResponse::Deleted {
                request_id,
                response,
            } => {
                let Some((_, pending)) = self
                    .documents
                    .deleting
                    .take_if(|(id, _)| *id == request_id)
                else {
                    return self.log_stale(request_id);
                };
                let removed_id = if response.document_id.is_empty() {
                    pending.document_id
                } else {
                    response.document_id
                };
                self.documents.remove(&removed_id);
                self.documents.delete_error = None;
                self.notifications.success(DELETE_SUCCEEDED);
            }
            ApiResponse::Answered {
                request_id,
                response,
            } => {
                if !self.is_current_question(request_id) {
                    return self.log_stale(request_id);
                }
                self.ask.in_flight = None;
                self.ask.error = None;
                self.ask.response = Some(response);
                self.notifications.success(ANSWER_RECEIVED);
            }
            ApiResponse::Failed {
                request_id,
                operation,
                error,
            } => self.handle_failure(request_id, operation, error),
            ApiResponse::Cancelled { request_id } => {
                // The UI already reported the cancel; only clear a matching in-flight id
                if self.is_current_question(request_id) {
                    self.ask.in_flight = None;
                }
            }
            ApiResponse::WorkerCrashed(message) => self.worker_gone(message),
        }
    }

    fn handle_failure(&mut self, request_id: u64, operation: ApiOperation, error: ApiError) {
        match operation {
            ApiOperation::Upload => {
                if self.upload.in_flight != Some(request_id) {
                    return self.log_stale(request_id);
                }
                self.upload.in_flight = None;
                self.notifications.error(UPLOAD_FAILED);
            }
            ApiOperation::ListDocuments => {
                if self.documents.loading != Some(request_id) {
                    return self.log_stale(request_id);
                }
                self.documents.loading = None;
                let message = error.detail().unwrap_or(LIST_FAILED).to_string();
                self.documents.error = Some(message.clone());
                self.notifications.error(message);
            }
            ApiOperation::Delete => {
                if self
                    .documents
                    .deleting
                    .take_if(|(id, _)| *id == request_id)
                    .is_none()
                {
                    return self.log_stale(request_id);
                }
                let message = error.detail().unwrap_or(DELETE_FAILED).to_string();
                self.documents.delete_error = Some(message.clone());
                self.notifications.error(message);
            }
            ApiOperation::Query => {
                if !self.is_current_question(request_id) {
                    return self.log_stale(request_id);
                }
                self.ask.in_flight = None;
                self.ask.error = Some(error.detail().unwrap_or(ANSWER_FAILED).to_string());
                self.notifications.error(ANSWER_FAILED);
            }
        }
    }

    fn is_current_question(&self, request_id: u64) -> bool {
        self.ask
            .in_flight
            .as_ref()
            .is_some_and(|(id, _)| *id == request_id)
    }

    /// The worker will not answer again: drop channels and clear every in-flight marker
    fn worker_gone(&mut self, message: String) {
        log::error!("API worker unavailable: {}", message);
        self.request_tx = None;
        self.response_rx = None;

        self.upload.in_flight = None;
        self.documents.loading = None;
        self.documents.deleting = None;
        self.ask.cancel();
        self.notifications.error(message);
    }

    fn log_stale(&self, request_id: u64) {
        log::debug!("Ignoring stale response for request {}", request_id);
    }
}

#[cfg(test)]
#[path = "api_events_tests.rs"]
mod api_events_tests;
