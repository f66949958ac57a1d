//! API Worker Thread
//!
//! Handles backend requests in a background thread to avoid blocking the UI.
//! Receives requests via channel, makes HTTP calls through [`ApiClient`], and
//! sends results back to the main thread tagged with the request id.
//!
//! Uses a current-thread tokio runtime. Queries carry a cancellation token so an
//! in-flight question can be abandoned from the UI.

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::ApiError;
use super::api_types::{DeleteResponse, Document, QueryResponse, UploadResponse};
use super::client::ApiClient;
use crate::config::ApiConfig;

/// Request messages sent to the API worker thread
#[derive(Debug)]
pub enum ApiRequest {
    Upload {
        request_id: u64,
        path: PathBuf,
    },
    ListDocuments {
        request_id: u64,
    },
    Delete {
        request_id: u64,
        document_id: String,
    },
    Query {
        request_id: u64,
        document_id: String,
        question: String,
        cancel_token: CancellationToken,
    },
}

impl ApiRequest {
    pub fn request_id(&self) -> u64 {
        match self {
            ApiRequest::Upload { request_id, .. }
            | ApiRequest::ListDocuments { request_id }
            | ApiRequest::Delete { request_id, .. }
            | ApiRequest::Query { request_id, .. } => *request_id,
        }
    }

    pub fn operation(&self) -> ApiOperation {
        match self {
            ApiRequest::Upload { .. } => ApiOperation::Upload,
            ApiRequest::ListDocuments { .. } => ApiOperation::ListDocuments,
            ApiRequest::Delete { .. } => ApiOperation::Delete,
            ApiRequest::Query { .. } => ApiOperation::Query,
        }
    }
}

/// Which kind of request a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    Upload,
    ListDocuments,
    Delete,
    Query,
}

/// Response messages received from the API worker thread
#[derive(Debug)]
pub enum ApiResponse {
    Uploaded {
        request_id: u64,
        response: UploadResponse,
    },
    Documents {
        request_id: u64,
        documents: Vec<Document>,
    },
    Deleted {
        request_id: u64,
        response: DeleteResponse,
    },
    Answered {
        request_id: u64,
        response: QueryResponse,
    },
    Failed {
        request_id: u64,
        operation: ApiOperation,
        error: ApiError,
    },
    /// The query was cancelled before it completed
    Cancelled {
        request_id: u64,
    },
    /// The worker crashed; no further responses will arrive
    WorkerCrashed(String),
}

/// Spawn the API worker thread
///
/// The client is built from `config` up front; if that fails every request is
/// answered with the construction error. Panics inside the worker are caught and
/// reported as [`ApiResponse::WorkerCrashed`] so they cannot corrupt the TUI.
pub fn spawn_worker(
    config: &ApiConfig,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    let client_result = ApiClient::from_config(config);

    std::thread::spawn(move || {
        let response_tx_clone = response_tx.clone();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create tokio runtime: {}", e);
                    let _ = response_tx.send(ApiResponse::WorkerCrashed(format!(
                        "Failed to start API worker: {}",
                        e
                    )));
                    return;
                }
            };

            rt.block_on(worker_loop(client_result, request_rx, response_tx));
        }));

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("API worker thread panicked: {}", panic_msg);
            let _ = response_tx_clone.send(ApiResponse::WorkerCrashed(format!(
                "API worker crashed: {}",
                panic_msg
            )));
        }
    });
}

/// Process requests in arrival order until the channel is closed
///
/// Blocking `recv()` is fine here since this runs in a dedicated thread.
pub(crate) async fn worker_loop(
    client_result: Result<ApiClient, ApiError>,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    let (client, setup_error) = match client_result {
        Ok(client) => (Some(client), None),
        Err(e) => (None, Some(e.to_string())),
    };

    while let Ok(request) = request_rx.recv() {
        let request_id = request.request_id();
        let operation = request.operation();

        let Some(client) = &client else {
            let message = setup_error
                .clone()
                .unwrap_or_else(|| "API client unavailable".to_string());
            let _ = response_tx.send(ApiResponse::Failed {
                request_id,
                operation,
                error: ApiError::Network(message),
            });
            continue;
        };

        let response = handle_request(client, request).await;
        if response_tx.send(response).is_err() {
            // Main thread is gone
            break;
        }
    }
}

async fn handle_request(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    let request_id = request.request_id();
    let operation = request.operation();

    let result = match request {
        ApiRequest::Upload { path, .. } => client
            .upload_document(&path)
            .await
            .map(|response| ApiResponse::Uploaded {
                request_id,
                response,
            }),
        ApiRequest::ListDocuments { .. } => {
            client
                .list_documents()
                .await
                .map(|documents| ApiResponse::Documents {
                    request_id,
                    documents,
                })
        }
        ApiRequest::Delete { document_id, .. } => client
            .delete_document(&document_id)
            .await
            .map(|response| ApiResponse::Deleted {
                request_id,
                response,
            }),
        ApiRequest::Query {
            document_id,
            question,
            cancel_token,
            ..
        } => query_with_cancel(client, &document_id, &question, &cancel_token)
            .await
            .map(|response| ApiResponse::Answered {
                request_id,
                response,
            }),
    };

    match result {
        Ok(response) => response,
        Err(ApiError::Cancelled) => {
            log::debug!("Request {} cancelled", request_id);
            ApiResponse::Cancelled { request_id }
        }
        Err(error) => {
            log::error!("{:?} request {} failed: {}", operation, request_id, error);
            ApiResponse::Failed {
                request_id,
                operation,
                error,
            }
        }
    }
}

/// Race the query against its cancellation token, checking cancellation first
async fn query_with_cancel(
    client: &ApiClient,
    document_id: &str,
    question: &str,
    cancel_token: &CancellationToken,
) -> Result<QueryResponse, ApiError> {
    if cancel_token.is_cancelled() {
        return Err(ApiError::Cancelled);
    }

    tokio::select! {
        biased;

        _ = cancel_token.cancelled() => Err(ApiError::Cancelled),
        result = client.query_document(document_id, question) => result,
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
