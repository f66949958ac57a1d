//! Console display surface
//!
//! Prints every newly published notification once, oldest first, with the
//! category symbol as prefix. Removals are not printed.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use super::broadcaster::{Broadcaster, Subscription};
use super::notification_state::NotificationId;

#[derive(Debug)]
pub struct ConsoleSurface {
    subscription: Subscription,
}

impl ConsoleSurface {
    /// Print to stderr
    pub fn attach(broadcaster: &Broadcaster) -> Self {
        Self::attach_to(broadcaster, io::stderr())
    }

    pub fn attach_to<W: Write + 'static>(broadcaster: &Broadcaster, writer: W) -> Self {
        let writer = Rc::new(RefCell::new(writer));
        let mut last_printed: Option<NotificationId> =
            broadcaster.snapshot().first().map(|n| n.id);

        let subscription = broadcaster.subscribe(move |items| {
            let mut out = writer.borrow_mut();
            // Newest first, so walk backwards to print in publish order
            for notification in items.iter().rev() {
                if last_printed.is_some_and(|last| notification.id <= last) {
                    continue;
                }
                if let Err(e) = writeln!(
                    out,
                    "{} {}",
                    notification.category.symbol(),
                    notification.message
                ) {
                    log::error!("Failed to print notification: {}", e);
                }
                last_printed = Some(notification.id);
            }
        });

        Self { subscription }
    }

    pub fn detach(&mut self) {
        self.subscription.unsubscribe();
    }
}
