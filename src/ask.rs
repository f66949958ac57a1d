//! Ask pane: document id and question inputs, and the latest answer

pub mod ask_events;
pub mod ask_render;
mod ask_state;

pub use ask_state::{AskField, AskState};
