use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

pub fn handle_ask_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.cancel_question();
        app.ask.reset();
        return;
    }

    match key.code {
        KeyCode::Esc => app.cancel_question(),
        KeyCode::Up | KeyCode::Down => app.ask.field = app.ask.field.toggle(),
        KeyCode::Enter => app.submit_question(),
        _ => {
            app.ask.active_input().input(key);
        }
    }
}

#[cfg(test)]
#[path = "ask_events_tests.rs"]
mod ask_events_tests;
