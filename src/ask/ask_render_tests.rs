use super::*;
use crate::api::QuerySource;
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};
use tokio_util::sync::CancellationToken;

fn render_sized(state: &mut AskState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_pane(state, f, f.area(), false, 0))
        .unwrap();
    terminal.backend().to_string()
}

fn render(state: &mut AskState) -> String {
    render_sized(state, 70, 24)
}

fn response() -> QueryResponse {
    QueryResponse {
        document_id: "doc-42".to_string(),
        question: "What is it?".to_string(),
        answer: "It is a test document.".to_string(),
        sources: vec![
            QuerySource {
                chunk_text: "First chunk".to_string(),
                relevance_score: 0.9,
            },
            QuerySource {
                chunk_text: "Second chunk".to_string(),
                relevance_score: 0.4,
            },
        ],
        processing_time_seconds: 1.234,
    }
}

#[test]
fn snapshot_inputs_and_placeholder_answer() {
    let mut state = AskState::new();
    let output = render_sized(&mut state, 50, 14);

    assert_snapshot!(output, @r#"
    "╭ Document ID ───────────────────────────────────╮"
    "│ Paste or select a document ID                  │"
    "╰────────────────────────────────────────────────╯"
    "╭ Question ──────────────────────────────────────╮"
    "│ What would you like to know?                   │"
    "│                                                │"
    "│                                                │"
    "╰────────────────────────────────────────────────╯"
    "╭ Answer ────────────────────────────────────────╮"
    "│Ask a question to see the answer here.          │"
    "│                                                │"
    "│                                                │"
    "│                                                │"
    "╰────────────────────────────────────────────────╯"
    "#);
}

#[test]
fn test_answer_with_sources_and_footer() {
    let mut state = AskState::new();
    state.response = Some(response());
    let text = render(&mut state);

    assert!(text.contains("It is a test document."));
    assert!(text.contains("Sources:"));
    assert!(text.contains("\u{2022} First chunk"));
    assert!(text.contains("\u{2022} Second chunk"));
    assert!(text.contains("1.23s | Doc ID: doc-42"));
}

#[test]
fn test_answer_without_sources_omits_heading() {
    let mut response = response();
    response.sources.clear();
    let lines = answer_lines(&response);
    let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

    assert!(!text.iter().any(|l| l == "Sources:"));
    assert_eq!(text.first().map(String::as_str), Some("Answer:"));
}

#[test]
fn test_error_is_shown_inline() {
    let mut state = AskState::new();
    state.error = Some("Document not found".to_string());

    assert!(render(&mut state).contains("Document not found"));
}

#[test]
fn test_thinking_while_in_flight() {
    let mut state = AskState::new();
    state.in_flight = Some((1, CancellationToken::new()));

    assert!(render(&mut state).contains("Thinking..."));
}
