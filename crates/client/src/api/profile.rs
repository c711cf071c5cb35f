//! Profile endpoints.

use domain::models::{ChangePasswordRequest, Profile, UpdateProfileRequest};
use shared::validation::validate_password_confirmation;
use validator::Validate;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::send_with_retry;

impl ApiClient {
    /// `GET /users/{user_id}/profile`, retried on transient failures.
    pub async fn get_profile(&self, user_id: &str) -> Result<Profile, ApiError> {
        let path = format!("/users/{user_id}/profile");
        let result = send_with_retry(self.retry(), || async {
            let request = self.authorized(self.get(&path))?;
            let response = self.check(request).await?;
            Ok(response.json::<Profile>().await?)
        })
        .await;

        self.finalize(result)
    }

    /// `PUT /users/{user_id}/profile`. A successful update rewrites the
    /// persisted session's email so the header greeting stays current.
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: &UpdateProfileRequest,
    ) -> Result<(), ApiError> {
        request.validate()?;

        let path = format!("/users/{user_id}/profile");
        let result = async {
            let builder = self.authorized(self.put(&path).json(request))?;
            self.check(builder).await?;
            Ok(())
        }
        .await;
        let result = self.finalize(result);

        if result.is_ok() {
            if let Some(mut session) = self.sessions.load() {
                session.email = request.email.clone();
                self.sessions
                    .save(&session)
                    .map_err(|e| ApiError::Network(format!("Failed to persist session: {e}")))?;
            }
        }
        result
    }

    /// `PUT /users/{user_id}/password`. The confirmation mismatch is a
    /// local validation error; no request is made.
    pub async fn change_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), ApiError> {
        validate_password_confirmation(new_password, confirm_password)
            .map_err(|e| ApiError::Validation(e.message.map(|m| m.to_string()).unwrap_or_default()))?;

        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };

        let path = format!("/users/{user_id}/password");
        let result = async {
            let builder = self.authorized(self.put(&path).json(&request))?;
            self.check(builder).await?;
            Ok(())
        }
        .await;

        self.finalize(result)
    }
}
