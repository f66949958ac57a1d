//! Toast display surface
//!
//! Subscribes to a broadcaster while mounted and mirrors the live sequence so the
//! render pass can draw it without touching the broadcaster.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use super::broadcaster::{Broadcaster, Subscription};
use super::notification_state::Notification;

#[derive(Debug)]
pub struct ToastStack {
    items: Rc<RefCell<Vec<Notification>>>,
    subscription: Subscription,
    /// Set whenever a delivery arrives, cleared by the render loop
    changed: Rc<Cell<bool>>,
}

impl ToastStack {
    /// Subscribe once, then pull the current sequence to initialize
    pub fn mount(broadcaster: &Broadcaster) -> Self {
        let items = Rc::new(RefCell::new(Vec::new()));
        let changed = Rc::new(Cell::new(false));

        let sink = Rc::clone(&items);
        let flag = Rc::clone(&changed);
        let subscription = broadcaster.subscribe(move |updated| {
            *sink.borrow_mut() = updated.to_vec();
            flag.set(true);
        });

        *items.borrow_mut() = broadcaster.snapshot();

        Self {
            items,
            subscription,
            changed,
        }
    }

    /// Dispose the subscription. The stack keeps its last known items.
    pub fn unmount(&mut self) {
        self.subscription.unsubscribe();
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn items(&self) -> Ref<'_, Vec<Notification>> {
        self.items.borrow()
    }

    /// Returns true once per batch of deliveries
    pub fn take_changed(&self) -> bool {
        self.changed.replace(false)
    }
}
