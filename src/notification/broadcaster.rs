//! Notification broadcaster
//!
//! Holds the live notification sequence (newest first) and the set of subscriber
//! callbacks. Producers call [`Broadcaster::publish`]; display surfaces call
//! [`Broadcaster::subscribe`] and receive the full sequence on every change.
//!
//! The broadcaster lives on the UI thread. Expiry is cooperative: the event loop
//! calls [`Broadcaster::expire_due`] and due removals are delivered from there.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::time::Instant;

use super::expiry::ExpiryQueue;
use super::notification_state::{
    MAX_LIVE_NOTIFICATIONS, NOTIFICATION_LIFETIME, Notification, NotificationCategory,
    NotificationId,
};

type Callback = Rc<RefCell<dyn FnMut(&[Notification])>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubscriberId(u64);

struct Subscriber {
    id: SubscriberId,
    callback: Callback,
}

/// A queued snapshot and the newest subscriber registered when its event happened
struct PendingDelivery {
    snapshot: Vec<Notification>,
    newest_subscriber: u64,
}

#[derive(Default)]
struct Registry {
    items: Vec<Notification>,
    subscribers: Vec<Subscriber>,
    expiries: ExpiryQueue,
    next_notification_id: u64,
    next_subscriber_id: u64,
    /// Snapshots waiting to be delivered, in the order the events happened
    pending: VecDeque<PendingDelivery>,
    delivering: bool,
}

impl Registry {
    fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.subscribers.iter().any(|s| s.id == id)
    }

    fn remove_item(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}

/// Handle to a shared notification registry. Clones refer to the same registry.
#[derive(Clone, Default)]
pub struct Broadcaster {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.borrow();
        f.debug_struct("Broadcaster")
            .field("items", &registry.items)
            .field("subscribers", &registry.subscribers.len())
            .field("pending_expiries", &registry.expiries.len())
            .finish()
    }
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a message. Empty messages are accepted and displayed as-is.
    ///
    /// Prepends the notification, evicts anything beyond
    /// [`MAX_LIVE_NOTIFICATIONS`], delivers the new sequence to every subscriber
    /// and schedules removal after [`NOTIFICATION_LIFETIME`].
    pub fn publish(
        &self,
        message: impl Into<String>,
        category: NotificationCategory,
    ) -> NotificationId {
        self.publish_at(message.into(), category, Instant::now())
    }

    /// Publish a success notification
    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.publish(message, NotificationCategory::Success)
    }

    /// Publish an error notification
    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.publish(message, NotificationCategory::Error)
    }

    pub(crate) fn publish_at(
        &self,
        message: String,
        category: NotificationCategory,
        now: Instant,
    ) -> NotificationId {
        let id = {
            let mut registry = self.registry.borrow_mut();
            registry.next_notification_id += 1;
            let id = NotificationId(registry.next_notification_id);

            registry
                .items
                .insert(0, Notification::new(id, message, category, now));

            if registry.items.len() > MAX_LIVE_NOTIFICATIONS {
                let evicted: Vec<NotificationId> = registry
                    .items
                    .drain(MAX_LIVE_NOTIFICATIONS..)
                    .map(|n| n.id)
                    .collect();
                for evicted_id in evicted {
                    registry.expiries.cancel(evicted_id);
                    log::debug!("Evicted notification {}", evicted_id);
                }
            }

            registry.expiries.schedule(id, now + NOTIFICATION_LIFETIME);
            id
        };

        self.deliver();
        id
    }

    /// Register a callback for every future change of the live sequence.
    ///
    /// No initial snapshot is pushed; read [`Broadcaster::snapshot`] once after
    /// subscribing. The returned [`Subscription`] unsubscribes when disposed or
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&[Notification]) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        registry.next_subscriber_id += 1;
        let id = SubscriberId(registry.next_subscriber_id);
        registry.subscribers.push(Subscriber {
            id,
            callback: Rc::new(RefCell::new(callback)),
        });

        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
            active: true,
        }
    }

    /// Current live sequence, newest first
    pub fn snapshot(&self) -> Vec<Notification> {
        self.registry.borrow().items.clone()
    }

    /// Remove a live notification early and cancel its pending expiry.
    ///
    /// Returns false (and delivers nothing) if the id is not live.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let removed = {
            let mut registry = self.registry.borrow_mut();
            registry.expiries.cancel(id);
            registry.remove_item(id)
        };

        if removed {
            self.deliver();
        }
        removed
    }

    /// Fire every expiry task due at `now`; each removal is delivered once.
    ///
    /// Returns the number of notifications removed.
    pub fn expire_due(&self, now: Instant) -> usize {
        let due = self.registry.borrow_mut().expiries.pop_due(now);

        let mut removed = 0;
        for id in due {
            let was_live = self.registry.borrow_mut().remove_item(id);
            if was_live {
                removed += 1;
                self.deliver();
            }
        }
        removed
    }

    /// Earliest pending expiry, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.registry.borrow().expiries.next_deadline()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().items.is_empty()
    }

    /// Deliver the current sequence to all subscribers.
    ///
    /// A delivery requested from inside a callback is queued behind the one in
    /// progress, so every subscriber sees every event in order.
    fn deliver(&self) {
        {
            let mut registry = self.registry.borrow_mut();
            let delivery = PendingDelivery {
                snapshot: registry.items.clone(),
                newest_subscriber: registry.next_subscriber_id,
            };
            registry.pending.push_back(delivery);
            if registry.delivering {
                return;
            }
            registry.delivering = true;
        }

        loop {
            let (snapshot, targets) = {
                let mut registry = self.registry.borrow_mut();
                let Some(delivery) = registry.pending.pop_front() else {
                    registry.delivering = false;
                    break;
                };
                // Subscribers added after the event was queued only see later events
                let targets: Vec<(SubscriberId, Callback)> = registry
                    .subscribers
                    .iter()
                    .filter(|s| s.id.0 <= delivery.newest_subscriber)
                    .map(|s| (s.id, Rc::clone(&s.callback)))
                    .collect();
                (delivery.snapshot, targets)
            };

            for (id, callback) in targets {
                // Skip subscribers removed by an earlier callback in this round
                if !self.registry.borrow().is_subscribed(id) {
                    continue;
                }
                (callback.borrow_mut())(&snapshot);
            }
        }
    }
}

/// Disposer returned by [`Broadcaster::subscribe`]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: SubscriberId,
    active: bool,
}

impl Subscription {
    /// Remove the callback. Safe to call repeatedly or after the broadcaster is gone.
    pub fn unsubscribe(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().subscribers.retain(|s| s.id != self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active && self.registry.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
#[path = "broadcaster_tests.rs"]
mod broadcaster_tests;
