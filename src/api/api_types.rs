//! Request/response records exchanged with the backend
//!
//! Payloads are validated on arrival: timestamps are parsed, statuses are mapped
//! onto [`DocumentStatus`], and the two chunk-count spellings the backend uses
//! are accepted.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Processing status reported for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Processed,
    Processing,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl DocumentStatus {
    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::Processed => "processed",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Failed => "failed",
            DocumentStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the uploaded-document list
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    pub document_id: String,
    pub filename: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default, alias = "chunks_created")]
    pub chunk_count: u32,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Upload time in the local timezone, or "unknown"
    pub fn uploaded_at_display(&self) -> String {
        format_timestamp(self.uploaded_at)
    }
}

/// Returned after a successful upload
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadResponse {
    pub document_id: String,
    pub filename: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default, alias = "chunk_count")]
    pub chunks_created: u32,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl UploadResponse {
    /// The list entry this upload corresponds to
    pub fn to_document(&self) -> Document {
        Document {
            document_id: self.document_id.clone(),
            filename: self.filename.clone(),
            status: self.status,
            chunk_count: self.chunks_created,
            uploaded_at: self.uploaded_at,
        }
    }
}

/// Returned after deleting a document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeleteResponse {
    pub status: String,
    pub document_id: String,
}

/// A source excerpt the answer was grounded on
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QuerySource {
    pub chunk_text: String,
    #[serde(default)]
    pub relevance_score: f64,
}

/// Answer to a question about one document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct QueryResponse {
    pub document_id: String,
    #[serde(default)]
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<QuerySource>,
    #[serde(default)]
    pub processing_time_seconds: f64,
}

/// Error body used by the backend (`{"detail": "..."}`)
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Detail as display text; validation errors arrive as structured JSON
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "unknown".to_string(),
    }
}

/// Parse an ISO-8601 timestamp; timestamps without an offset are taken as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw))),
    }
}

#[cfg(test)]
#[path = "api_types_tests.rs"]
mod api_types_tests;
