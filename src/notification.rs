//! Notification module for docqa
//!
//! Provides a publish/subscribe broadcaster for transient messages. Any component
//! can publish an outcome message; any number of display surfaces subscribe to
//! the live sequence and render it.

mod broadcaster;
mod console_surface;
mod expiry;
mod notification_render;
mod notification_state;
mod toast_stack;

pub use broadcaster::{Broadcaster, Subscription};
pub use console_surface::ConsoleSurface;
pub use expiry::ExpiryQueue;
pub use notification_render::render_toasts;
pub use notification_state::{
    MAX_LIVE_NOTIFICATIONS, NOTIFICATION_LIFETIME, Notification, NotificationCategory,
    NotificationId,
};
pub use toast_stack::ToastStack;
