//! Pending expiry tasks keyed by notification id
//!
//! Tasks are kept sorted by deadline (ties broken by id) so the event loop can
//! pop everything that is due in the order it became due.

use std::collections::VecDeque;
use std::time::Instant;

use super::notification_state::NotificationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExpiryTask {
    id: NotificationId,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct ExpiryQueue {
    tasks: VecDeque<ExpiryTask>,
}

impl ExpiryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule removal of `id` at `deadline`, replacing any existing task for it
    pub fn schedule(&mut self, id: NotificationId, deadline: Instant) {
        self.cancel(id);
        let index = self
            .tasks
            .partition_point(|task| (task.deadline, task.id) <= (deadline, id));
        self.tasks.insert(index, ExpiryTask { id, deadline });
    }

    /// Cancel the pending task for `id`, returns true if one existed
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Remove and return every task whose deadline is at or before `now`
    pub fn pop_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut due = Vec::new();
        while let Some(task) = self.tasks.front()
            && task.deadline <= now
        {
            due.push(task.id);
            self.tasks.pop_front();
        }
        due
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tasks.front().map(|task| task.deadline)
    }

    pub fn is_scheduled(&self, id: NotificationId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
#[path = "expiry_tests.rs"]
mod expiry_tests;
