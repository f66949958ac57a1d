//! Loading spinner
//!
//! A braille spinner that advances once per rendered frame while a request is
//! in flight, cycling through the galaxy colors.

use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::theme;

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Character and color for the given frame
pub fn get_spinner(frame_count: u64) -> (char, Color) {
    let colors = theme::spinner::COLORS;
    let char_index = (frame_count % SPINNER_CHARS.len() as u64) as usize;
    let color_index = (frame_count % colors.len() as u64) as usize;
    (SPINNER_CHARS[char_index], colors[color_index])
}

/// Spinner followed by a label, e.g. "⠋ Uploading..."
pub fn spinner_span(frame_count: u64, label: &str) -> Span<'static> {
    let (ch, color) = get_spinner(frame_count);
    Span::styled(format!("{} {}", ch, label), Style::default().fg(color))
}
