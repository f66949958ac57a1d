mod api_events;
mod app_actions;
mod app_events;
mod app_render;
mod app_state;

pub use api_events::{
    ANSWER_FAILED, ANSWER_RECEIVED, DELETE_FAILED, DELETE_SUCCEEDED, LIST_FAILED,
    UPLOAD_FAILED, UPLOAD_SUCCEEDED,
};
pub use app_actions::{ASK_MISSING_FIELDS, QUESTION_CANCELLED, UPLOAD_MISSING_FILE};
pub use app_state::{App, Focus};
