//! Async client for the document question-answering backend
//!
//! Uses reqwest for HTTP. Inputs are validated locally before any request is
//! made, and non-success responses are turned into [`ApiError::Api`] carrying the
//! backend's `detail` text.

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url, multipart};
use serde::de::DeserializeOwned;

use super::ApiError;
use super::api_types::{DeleteResponse, Document, ErrorBody, QueryResponse, UploadResponse};
use crate::config::ApiConfig;

/// File extensions the backend accepts for upload
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "txt"];

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:8000/api`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn upload_url(&self) -> String {
        format!("{}/documents/upload", self.base_url)
    }

    pub fn documents_url(&self) -> String {
        format!("{}/documents/", self.base_url)
    }

    /// URL of one document, with the id encoded as a single path segment
    pub fn document_url(&self, document_id: &str) -> Result<Url, ApiError> {
        let invalid = || ApiError::Network(format!("Invalid API URL: {}", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["documents", document_id]);
        Ok(url)
    }

    pub fn query_url(&self) -> String {
        format!("{}/qa/query", self.base_url)
    }

    /// Upload a `.pdf` or `.txt` file as multipart field `file`
    pub async fn upload_document(&self, path: &Path) -> Result<UploadResponse, ApiError> {
        let filename = validate_upload_path(path)?;
        let bytes = std::fs::read(path)?;

        log::debug!("Uploading {} ({} bytes)", filename, bytes.len());

        let part = multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str(mime_for(path))
            .map_err(|e| ApiError::InvalidFile(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        parse_json(response).await
    }

    /// Fetch all uploaded documents. A 404 means the backend has none.
    pub async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        let response = self
            .client
            .get(self.documents_url())
            .header("accept", "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            log::debug!("Document list returned 404, treating as empty");
            return Ok(Vec::new());
        }

        parse_json(response).await
    }

    pub async fn delete_document(&self, document_id: &str) -> Result<DeleteResponse, ApiError> {
        let document_id = require("document ID", document_id)?;

        let response = self
            .client
            .delete(self.document_url(document_id)?)
            .send()
            .await?;

        parse_json(response).await
    }

    /// Ask `question` about one document
    pub async fn query_document(
        &self,
        document_id: &str,
        question: &str,
    ) -> Result<QueryResponse, ApiError> {
        let document_id = require("document ID", document_id)?;
        let question = require("question", question)?;

        let response = self
            .client
            .post(self.query_url())
            .query(&[("document_id", document_id), ("question", question)])
            .send()
            .await?;

        parse_json(response).await
    }
}

/// Check that `path` names an existing file with an accepted extension.
///
/// Returns the file name to send to the backend.
pub fn validate_upload_path(path: &Path) -> Result<String, ApiError> {
    if path.as_os_str().is_empty() {
        return Err(ApiError::MissingField("file"));
    }

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        let shown = if extension.is_empty() {
            "(none)".to_string()
        } else {
            format!(".{}", extension)
        };
        return Err(ApiError::InvalidFile(format!(
            "Unsupported file type: {}",
            shown
        )));
    }

    if !path.is_file() {
        return Err(ApiError::InvalidFile(format!(
            "File not found: {}",
            path.display()
        )));
    }

    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ApiError::InvalidFile(format!("Not a file: {}", path.display())))
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("pdf") => "application/pdf",
        _ => "text/plain",
    }
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// Decode a success body as `T`, or turn an error status into `ApiError::Api`
async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(api_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

pub(crate) fn api_error(status: StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail_text())
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.trim().to_string()
            }
        });

    ApiError::Api {
        status: status.as_u16(),
        detail,
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
