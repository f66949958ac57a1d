use super::*;
use crate::api::ApiRequest;
use crate::app::Focus;
use crate::test_utils::test_helpers::{app_with_worker, document, key, test_app};

fn app_with_documents() -> App {
    let mut app = test_app();
    app.focus = Focus::Documents;
    app.documents.set_documents(vec![
        document("d1", "a.pdf"),
        document("d2", "b.pdf"),
        document("d3", "c.txt"),
    ]);
    app
}

#[test]
fn test_navigation_keys() {
    let mut app = app_with_documents();

    handle_documents_key(&mut app, key(KeyCode::Char('j')));
    handle_documents_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.documents.selected, 2);

    handle_documents_key(&mut app, key(KeyCode::Char('k')));
    assert_eq!(app.documents.selected, 1);

    handle_documents_key(&mut app, key(KeyCode::Char('G')));
    assert_eq!(app.documents.selected, 2);

    handle_documents_key(&mut app, key(KeyCode::Home));
    assert_eq!(app.documents.selected, 0);
}

#[test]
fn test_q_quits() {
    let mut app = app_with_documents();
    handle_documents_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_r_refreshes() {
    let (mut app, request_rx, _response_tx) = app_with_worker();
    handle_documents_key(&mut app, key(KeyCode::Char('r')));
    assert!(matches!(
        request_rx.try_recv().unwrap(),
        ApiRequest::ListDocuments { .. }
    ));
}

#[test]
fn test_enter_moves_selection_to_ask() {
    let mut app = app_with_documents();
    handle_documents_key(&mut app, key(KeyCode::Down));
    handle_documents_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.focus, Focus::Ask);
    assert_eq!(app.ask.document_id_text(), "d2");
}

#[test]
fn test_delete_flow_through_popup() {
    let (mut app, request_rx, _response_tx) = app_with_worker();
    app.documents.set_documents(vec![document("d1", "a.pdf")]);

    handle_documents_key(&mut app, key(KeyCode::Char('d')));
    assert!(app.documents.confirming.is_some());

    handle_confirm_key(&mut app, key(KeyCode::Char('x')));
    assert!(app.documents.confirming.is_some());

    handle_confirm_key(&mut app, key(KeyCode::Char('y')));
    assert!(app.documents.confirming.is_none());
    assert!(matches!(
        request_rx.try_recv().unwrap(),
        ApiRequest::Delete { .. }
    ));
}

#[test]
fn test_esc_cancels_popup() {
    let mut app = app_with_documents();
    handle_documents_key(&mut app, key(KeyCode::Delete));
    handle_confirm_key(&mut app, key(KeyCode::Esc));

    assert!(app.documents.confirming.is_none());
    assert!(app.documents.deleting.is_none());
}
