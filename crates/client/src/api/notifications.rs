//! Notification endpoints.

use domain::models::{NotificationList, UnreadCount};
use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /users/{user_id}/notifications/count`. Lightweight check
    /// used by the badge poller.
    pub async fn unread_count(&self, user_id: &str) -> Result<u32, ApiError> {
        let path = format!("/users/{user_id}/notifications/count");
        let result = async {
            let request = self.authorized(self.get(&path))?;
            let response = self.check(request).await?;
            let count: UnreadCount = response.json().await?;
            Ok(count.unread_count)
        }
        .await;

        self.finalize(result)
    }

    /// `GET /users/{user_id}/notifications`. Drives the notifications view.
    pub async fn list_notifications(&self, user_id: &str) -> Result<NotificationList, ApiError> {
        let path = format!("/users/{user_id}/notifications");
        let result = async {
            let request = self.authorized(self.get(&path))?;
            let response = self.check(request).await?;
            Ok(response.json::<NotificationList>().await?)
        }
        .await;

        self.finalize(result)
    }

    /// `PUT /users/{user_id}/notifications/{id}` with `{"leido": true}`.
    pub async fn mark_notification_read(
        &self,
        user_id: &str,
        notification_id: &str,
    ) -> Result<(), ApiError> {
        let path = format!("/users/{user_id}/notifications/{notification_id}");
        let result = async {
            let builder = self.authorized(self.put(&path).json(&json!({ "leido": true })))?;
            self.check(builder).await?;
            Ok(())
        }
        .await;

        self.finalize(result)
    }

    /// `PUT /users/{user_id}/notifications/mark-all-read`.
    pub async fn mark_all_notifications_read(&self, user_id: &str) -> Result<(), ApiError> {
        let path = format!("/users/{user_id}/notifications/mark-all-read");
        let result = async {
            let builder = self.authorized(self.put(&path).json(&json!({})))?;
            self.check(builder).await?;
            Ok(())
        }
        .await;

        self.finalize(result)
    }
}
