//! Notification inbox read-state transitions.
//!
//! The inbox owns the notification collection for the current view and
//! applies the local side of the mark-as-read operations after the
//! corresponding PUT succeeds. Notifications are never removed.

use crate::models::{Notification, NotificationList};

/// Owned notification collection plus the unread counter.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    notifications: Vec<Notification>,
    unread_count: u32,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole inbox with a freshly fetched snapshot.
    pub fn replace(&mut self, list: NotificationList) {
        self.notifications = list.notifications;
        self.unread_count = list.unread_count;
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> u32 {
        self.unread_count
    }

    /// Overwrites the unread counter, used by the lightweight count poll.
    pub fn set_unread_count(&mut self, count: u32) {
        self.unread_count = count;
    }

    /// Flips one notification's read flag and decrements the unread
    /// counter, floored at zero. Returns false when the id is unknown.
    pub fn apply_mark_read(&mut self, notification_id: &str) -> bool {
        let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        else {
            return false;
        };

        if !notification.leido {
            notification.leido = true;
            self.unread_count = self.unread_count.saturating_sub(1);
        }
        true
    }

    /// Flips every notification's read flag and zeroes the counter.
    pub fn apply_mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.leido = true;
        }
        self.unread_count = 0;
    }
}
