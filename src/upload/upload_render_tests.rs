use super::*;
use crate::api::{DocumentStatus, UploadResponse};
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

fn render_to_string(state: &mut UploadState, width: u16) -> String {
    let backend = TestBackend::new(width, UPLOAD_PANE_HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| render_pane(state, f, f.area(), true, 0))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn snapshot_idle_pane() {
    let mut state = UploadState::new();
    let output = render_to_string(&mut state, 50);

    assert_snapshot!(output, @r#"
    "╭ Upload Document (.pdf, .txt) ──────────────────╮"
    "│ Path to a .pdf or .txt file                    │"
    "╰────────────────────────────────────────────────╯"
    " Type a file path and press Enter to upload       "
    "#);
}

#[test]
fn snapshot_typed_path() {
    let mut state = UploadState::new();
    state.textarea.insert_str("/tmp/notes.txt");
    let output = render_to_string(&mut state, 50);

    assert_snapshot!(output, @r#"
    "╭ Upload Document (.pdf, .txt) ──────────────────╮"
    "│/tmp/notes.txt                                  │"
    "╰────────────────────────────────────────────────╯"
    " Type a file path and press Enter to upload       "
    "#);
}

#[test]
fn test_uploading_shows_spinner_label() {
    let mut state = UploadState::new();
    state.in_flight = Some(1);
    let text = render_to_string(&mut state, 70);

    assert!(text.contains("Uploading..."));
}

#[test]
fn test_last_response_summary_is_rendered() {
    let mut state = UploadState::new();
    state.last_response = Some(UploadResponse {
        document_id: "doc-9".to_string(),
        filename: "paper.pdf".to_string(),
        status: DocumentStatus::Processing,
        chunks_created: 0,
        uploaded_at: None,
    });
    let text = render_to_string(&mut state, 80);

    assert!(text.contains("Last upload:"));
    assert!(text.contains("paper.pdf uploaded as doc-9"));
}
