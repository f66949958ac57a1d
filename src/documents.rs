//! Documents pane: the uploaded-document list, selection and deletion

pub mod documents_events;
pub mod documents_render;
mod documents_state;

pub use documents_state::{DocumentListState, PendingDelete};
