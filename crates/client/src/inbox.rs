//! Notifications view.
//!
//! Owns the inbox state for the current user and keeps it in sync with
//! the backend. Mutations follow a PUT-then-apply order: the server is
//! updated first and the local collection only changes once the call
//! succeeded, so the view never shows a read state the backend has not
//! accepted.

use domain::models::Notification;
use domain::services::inbox::Inbox;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::ApiError;

pub struct InboxView {
    api: ApiClient,
    user_id: String,
    inbox: Inbox,
}

impl InboxView {
    pub fn new(api: ApiClient, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            inbox: Inbox::new(),
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        self.inbox.notifications()
    }

    pub fn unread_count(&self) -> u32 {
        self.inbox.unread_count()
    }

    /// Fetches the full notification list and replaces the inbox with
    /// the snapshot.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let list = self.api.list_notifications(&self.user_id).await?;
        info!(
            user_id = %self.user_id,
            count = list.notifications.len(),
            unread = list.unread_count,
            "Refreshed notifications"
        );
        self.inbox.replace(list);
        Ok(())
    }

    /// Polls the lightweight count endpoint. A failed poll keeps the
    /// previous counter; the badge goes stale rather than blank.
    pub async fn refresh_unread_count(&mut self) {
        match self.api.unread_count(&self.user_id).await {
            Ok(count) => self.inbox.set_unread_count(count),
            Err(err) => {
                warn!(error = %err, "Unread count poll failed, keeping previous value");
            }
        }
    }

    /// Marks one notification read on the server, then locally.
    pub async fn mark_read(&mut self, notification_id: &str) -> Result<(), ApiError> {
        self.api
            .mark_notification_read(&self.user_id, notification_id)
            .await?;
        self.inbox.apply_mark_read(notification_id);
        Ok(())
    }

    /// Marks everything read on the server, then locally.
    pub async fn mark_all_read(&mut self) -> Result<(), ApiError> {
        self.api.mark_all_notifications_read(&self.user_id).await?;
        self.inbox.apply_mark_all_read();
        Ok(())
    }
}
