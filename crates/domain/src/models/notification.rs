//! Notification domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A notification delivered to the pet owner, typically after a QR scan.
///
/// The read flag travels as `leido` on the wire. Notifications are only
/// ever mutated through the mark-as-read operations; the client never
/// deletes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Read flag, `leido` on the wire.
    #[serde(default)]
    pub leido: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Human-readable place name resolved by the backend, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_info: Option<String>,
    /// Free-text message left by the finder who scanned the QR code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
}

/// Response payload for `GET /users/{user_id}/notifications`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub unread_count: u32,
}

/// Response payload for `GET /users/{user_id}/notifications/count`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnreadCount {
    #[serde(default)]
    pub unread_count: u32,
}
