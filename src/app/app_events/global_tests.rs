use super::*;
use crate::app::Focus;
use crate::test_utils::test_helpers::{app_with_worker, key, key_with_mods, test_app};
use crate::api::ApiRequest;

#[test]
fn test_ctrl_c_quits_from_any_pane() {
    for focus in [Focus::Upload, Focus::Documents, Focus::Ask] {
        let mut app = test_app();
        app.focus = focus;
        assert!(handle_global_keys(
            &mut app,
            key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert!(app.should_quit());
    }
}

#[test]
fn test_tab_and_backtab_cycle_focus() {
    let mut app = test_app();

    handle_global_keys(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Documents);

    handle_global_keys(&mut app, key(KeyCode::BackTab));
    handle_global_keys(&mut app, key(KeyCode::BackTab));
    assert_eq!(app.focus, Focus::Ask);
}

#[test]
fn test_ctrl_r_refreshes_documents() {
    let (mut app, request_rx, _response_tx) = app_with_worker();
    assert!(handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('r'), KeyModifiers::CONTROL)
    ));

    assert!(matches!(
        request_rx.try_recv().unwrap(),
        ApiRequest::ListDocuments { .. }
    ));
}

#[test]
fn test_plain_characters_are_not_consumed() {
    let mut app = test_app();
    assert!(!handle_global_keys(&mut app, key(KeyCode::Char('c'))));
    assert!(!handle_global_keys(&mut app, key(KeyCode::Char('q'))));
    assert!(!app.should_quit());
}
