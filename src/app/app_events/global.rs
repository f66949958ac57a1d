use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

/// Keys that work regardless of the focused pane. Returns true when consumed.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('r') if ctrl => {
            app.refresh_documents();
            true
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            true
        }
        KeyCode::BackTab => {
            app.focus = app.focus.previous();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
