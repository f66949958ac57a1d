//! Tests for api_types

use super::*;
use chrono::{Datelike, Timelike};

#[test]
fn test_document_from_list_endpoint() {
    let json = r#"{
        "document_id": "4f1c",
        "filename": "report.pdf",
        "uploaded_at": "2025-03-04T10:20:30.123456",
        "chunk_count": 12,
        "faiss_index_path": "data/faiss/4f1c"
    }"#;

    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.document_id, "4f1c");
    assert_eq!(doc.filename, "report.pdf");
    assert_eq!(doc.chunk_count, 12);
    assert_eq!(doc.status, DocumentStatus::Unknown);

    let ts = doc.uploaded_at.unwrap();
    assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 3, 4));
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (10, 20, 30));
}

#[test]
fn test_document_accepts_chunks_created_and_status() {
    let json = r#"{
        "document_id": "a",
        "filename": "notes.txt",
        "status": "processed",
        "chunks_created": 3,
        "uploaded_at": "2025-03-04T10:20:30Z"
    }"#;

    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.chunk_count, 3);
    assert_eq!(doc.status, DocumentStatus::Processed);
}

#[test]
fn test_document_null_timestamp() {
    let json = r#"{"document_id": "a", "filename": "b.txt", "uploaded_at": null}"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.uploaded_at, None);
    assert_eq!(doc.uploaded_at_display(), "unknown");
}

#[test]
fn test_document_invalid_timestamp_is_rejected() {
    let json = r#"{"document_id": "a", "filename": "b.txt", "uploaded_at": "yesterday"}"#;
    let result: Result<Document, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_document_missing_filename_is_rejected() {
    let json = r#"{"document_id": "a"}"#;
    let result: Result<Document, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_unrecognized_status_maps_to_unknown() {
    let json = r#"{"document_id": "a", "filename": "b.txt", "status": "queued"}"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert_eq!(doc.status, DocumentStatus::Unknown);
}

#[test]
fn test_upload_response_to_document() {
    let json = r#"{
        "document_id": "9",
        "filename": "paper.pdf",
        "status": "processing",
        "chunks_created": 40,
        "uploaded_at": "2025-01-01T00:00:00+02:00"
    }"#;

    let upload: UploadResponse = serde_json::from_str(json).unwrap();
    let doc = upload.to_document();
    assert_eq!(doc.chunk_count, 40);
    assert_eq!(doc.status, DocumentStatus::Processing);
    assert_eq!(doc.uploaded_at.unwrap().hour(), 22);
}

#[test]
fn test_query_response_with_sources() {
    let json = r#"{
        "document_id": "d1",
        "question": "What is the total?",
        "answer": "42",
        "sources": [
            {"chunk_text": "The total is 42.", "relevance_score": 0.91},
            {"chunk_text": "Totals are summed."}
        ],
        "processing_time_seconds": 1.25
    }"#;

    let response: QueryResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.answer, "42");
    assert_eq!(response.sources.len(), 2);
    assert_eq!(response.sources[0].relevance_score, 0.91);
    assert_eq!(response.sources[1].relevance_score, 0.0);
    assert_eq!(response.processing_time_seconds, 1.25);
}

#[test]
fn test_query_response_requires_answer() {
    let json = r#"{"document_id": "d1", "sources": []}"#;
    let result: Result<QueryResponse, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_delete_response() {
    let json = r#"{"status": "deleted", "document_id": "abc"}"#;
    let response: DeleteResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.status, "deleted");
    assert_eq!(response.document_id, "abc");
}

#[test]
fn test_error_body_string_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail": "Document not found."}"#).unwrap();
    assert_eq!(body.detail_text(), "Document not found.");
}

#[test]
fn test_error_body_structured_detail() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail": [{"loc": ["query"], "msg": "field required"}]}"#)
            .unwrap();
    assert!(body.detail_text().contains("field required"));
}

#[test]
fn test_parse_timestamp_space_separator() {
    let ts = parse_timestamp("2024-12-31 23:59:59").unwrap();
    assert_eq!(ts.year(), 2024);
    assert_eq!(ts.second(), 59);
}

#[test]
fn test_status_display() {
    assert_eq!(DocumentStatus::Processed.to_string(), "processed");
    assert_eq!(DocumentStatus::Failed.label(), "failed");
}
