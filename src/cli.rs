//! Command-line arguments and the one-shot (non-interactive) commands

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::{ApiClient, ApiError, DeleteResponse, Document, QueryResponse, UploadResponse};
use crate::app::{
    ANSWER_FAILED, ANSWER_RECEIVED, DELETE_FAILED, DELETE_SUCCEEDED, LIST_FAILED, UPLOAD_FAILED,
    UPLOAD_SUCCEEDED,
};
use crate::config::Config;
use crate::error::DocqaError;
use crate::notification::Broadcaster;

/// Terminal client for a document question-answering service
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal client for a document question-answering service"
)]
pub struct Args {
    /// Backend base URL, overriding the config file
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Print raw JSON instead of formatted text (one-shot commands only)
    #[arg(long, global = true)]
    pub json: bool,

    /// Run a single request instead of starting the interactive UI
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List uploaded documents
    List,
    /// Upload a .pdf or .txt file
    Upload {
        /// File to upload
        file: PathBuf,
    },
    /// Delete a document
    Delete {
        /// Document ID
        document_id: String,
    },
    /// Ask a question about a document
    Ask {
        /// Document ID
        document_id: String,
        /// Question text
        question: String,
    },
}

impl Command {
    fn success_message(&self) -> Option<&'static str> {
        match self {
            Command::List => None,
            Command::Upload { .. } => Some(UPLOAD_SUCCEEDED),
            Command::Delete { .. } => Some(DELETE_SUCCEEDED),
            Command::Ask { .. } => Some(ANSWER_RECEIVED),
        }
    }

    fn failure_message(&self, error: &ApiError) -> String {
        match self {
            Command::List => error.detail().unwrap_or(LIST_FAILED).to_string(),
            Command::Upload { .. } => UPLOAD_FAILED.to_string(),
            Command::Delete { .. } => error.detail().unwrap_or(DELETE_FAILED).to_string(),
            Command::Ask { .. } => ANSWER_FAILED.to_string(),
        }
    }
}

/// Result of a one-shot command, ready to print
#[derive(Debug)]
pub enum Outcome {
    Documents(Vec<Document>),
    Uploaded(UploadResponse),
    Deleted(DeleteResponse),
    Answered(QueryResponse),
}

/// Run one command against the backend and print its outcome to stdout
///
/// Outcome messages are published to `notifications`; failures are also
/// returned so the process exits non-zero.
pub fn run_command(
    notifications: &Broadcaster,
    command: &Command,
    config: &Config,
    json: bool,
) -> Result<(), DocqaError> {
    let client = ApiClient::from_config(&config.api)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| DocqaError::Runtime(e.to_string()))?;

    log::debug!("Running {:?} against {}", command, client.base_url());

    match runtime.block_on(execute(&client, command)) {
        Ok(outcome) => {
            write_outcome(&mut std::io::stdout().lock(), &outcome, json)?;
            if let Some(message) = command.success_message() {
                notifications.success(message);
            }
            Ok(())
        }
        Err(error) => {
            log::error!("{:?} failed: {}", command, error);
            notifications.error(command.failure_message(&error));
            Err(error.into())
        }
    }
}

async fn execute(client: &ApiClient, command: &Command) -> Result<Outcome, ApiError> {
    match command {
        Command::List => client.list_documents().await.map(Outcome::Documents),
        Command::Upload { file } => client.upload_document(file).await.map(Outcome::Uploaded),
        Command::Delete { document_id } => client
            .delete_document(document_id)
            .await
            .map(Outcome::Deleted),
        Command::Ask {
            document_id,
            question,
        } => client
            .query_document(document_id, question)
            .await
            .map(Outcome::Answered),
    }
}

pub fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    json: bool,
) -> Result<(), DocqaError> {
    if json {
        let value = match outcome {
            Outcome::Documents(documents) => serde_json::to_string_pretty(documents)?,
            Outcome::Uploaded(response) => serde_json::to_string_pretty(response)?,
            Outcome::Deleted(response) => serde_json::to_string_pretty(response)?,
            Outcome::Answered(response) => serde_json::to_string_pretty(response)?,
        };
        writeln!(out, "{}", value)?;
        return Ok(());
    }

    match outcome {
        Outcome::Documents(documents) if documents.is_empty() => {
            writeln!(out, "No documents found.")?;
        }
        Outcome::Documents(documents) => {
            for doc in documents {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{} chunks\t{}",
                    doc.document_id,
                    doc.filename,
                    doc.status,
                    doc.chunk_count,
                    doc.uploaded_at_display()
                )?;
            }
        }
        Outcome::Uploaded(response) => {
            writeln!(
                out,
                "{} uploaded as {} ({}, {} chunks)",
                response.filename, response.document_id, response.status, response.chunks_created
            )?;
        }
        Outcome::Deleted(response) => {
            writeln!(out, "Deleted {}", response.document_id)?;
        }
        Outcome::Answered(response) => {
            writeln!(out, "{}", response.answer.trim_end())?;
            if !response.sources.is_empty() {
                writeln!(out)?;
                writeln!(out, "Sources:")?;
                for source in &response.sources {
                    writeln!(out, "\u{2022} {}", source.chunk_text.trim())?;
                }
            }
            writeln!(out)?;
            writeln!(
                out,
                "{:.2}s | Doc ID: {}",
                response.processing_time_seconds, response.document_id
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
