//! docqa library - terminal client for a document question-answering service
//!
//! This library exposes the core functionality of docqa for testing purposes.

pub mod api;
pub mod app;
pub mod ask;
pub mod cli;
pub mod config;
pub mod documents;
pub mod error;
pub mod notification;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod upload;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
pub use notification::{Broadcaster, Notification, NotificationCategory};
