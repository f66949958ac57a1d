use super::*;
use crate::api::{ApiResponse, Document};
use crate::notification::NOTIFICATION_LIFETIME;
use crate::test_utils::test_helpers::{app_with_worker, document, key, test_app};
use ratatui::crossterm::event::KeyCode;

#[test]
fn test_poll_timeout_without_notifications() {
    let app = test_app();
    assert_eq!(app.poll_timeout(Instant::now()), EVENT_POLL_TIMEOUT);
}

#[test]
fn test_poll_timeout_shrinks_to_next_deadline() {
    let app = test_app();
    app.notifications.success("saved");
    let deadline = app.notifications.next_deadline().unwrap();

    let almost = deadline - Duration::from_millis(30);
    assert_eq!(app.poll_timeout(almost), Duration::from_millis(30));

    // Far from the deadline the regular timeout applies
    let early = deadline - NOTIFICATION_LIFETIME;
    assert_eq!(app.poll_timeout(early), EVENT_POLL_TIMEOUT);

    // Past the deadline: don't wait at all
    assert_eq!(
        app.poll_timeout(deadline + Duration::from_millis(5)),
        Duration::ZERO
    );
}

#[test]
fn test_tick_expires_notifications() {
    let mut app = test_app();
    app.notifications.error("boom");
    let deadline = app.notifications.next_deadline().unwrap();

    app.tick(deadline - Duration::from_millis(1));
    assert_eq!(app.toasts.items().len(), 1);

    app.tick(deadline);
    assert!(app.toasts.items().is_empty());
    assert!(app.notifications.is_empty());
}

#[test]
fn test_tick_applies_worker_responses() {
    let (mut app, _request_rx, response_tx) = app_with_worker();
    app.documents.loading = Some(1);
    let documents: Vec<Document> = vec![document("d1", "a.pdf")];
    response_tx
        .send(ApiResponse::Documents {
            request_id: 1,
            documents,
        })
        .unwrap();

    app.tick(Instant::now());
    assert_eq!(app.documents.documents.len(), 1);
}

#[test]
fn test_keys_route_to_focused_pane() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    // Upload pane takes 'q' as text
    assert!(!app.should_quit());
    assert_eq!(app.upload.path().to_string_lossy(), "q");

    app.focus = Focus::Documents;
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_popup_swallows_global_keys() {
    let mut app = test_app();
    app.focus = Focus::Documents;
    app.documents.set_documents(vec![document("d1", "a.pdf")]);
    app.handle_key_event(key(KeyCode::Char('d')));
    assert!(app.documents.confirming.is_some());

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Documents);
    assert!(app.documents.confirming.is_some());

    app.handle_key_event(key(KeyCode::Char('n')));
    assert!(app.documents.confirming.is_none());
}

#[test]
fn test_paste_into_upload_strips_newlines() {
    let mut app = test_app();
    app.handle_paste_event("/tmp/a.pdf\n".to_string());
    assert_eq!(app.upload.path().to_string_lossy(), "/tmp/a.pdf");
}

#[test]
fn test_paste_into_question_keeps_lines() {
    let mut app = test_app();
    app.focus = Focus::Ask;
    app.ask.field = AskField::Question;
    app.handle_paste_event("line one\nline two".to_string());

    assert_eq!(app.ask.question_text(), "line one\nline two");
}
