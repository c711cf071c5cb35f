//! User profile payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Response payload for `GET /users/{user_id}/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request payload for `PUT /users/{user_id}/profile`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Request payload for `PUT /users/{user_id}/password`.
///
/// This endpoint predates the snake_case convention and expects camelCase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
