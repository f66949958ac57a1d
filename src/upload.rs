//! Upload pane: path input, in-flight tracking and the last upload response

pub mod upload_events;
pub mod upload_render;
mod upload_state;

pub use upload_state::UploadState;
