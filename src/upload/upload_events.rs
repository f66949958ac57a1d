use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

pub fn handle_upload_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_upload(),
        KeyCode::Esc => app.upload.clear_input(),
        _ => {
            app.upload.textarea.input(key);
        }
    }
}
