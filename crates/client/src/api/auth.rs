//! Authentication endpoints.

use domain::models::{LoginRequest, RegisterRequest, Session};
use tracing::info;
use validator::Validate;

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `POST /login`. On success the session is persisted immediately.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        request.validate()?;

        let response = self.check(self.post("/login").json(request)).await?;
        let session: Session = response.json().await?;

        self.sessions
            .save(&session)
            .map_err(|e| ApiError::Network(format!("Failed to persist session: {e}")))?;
        info!(user_id = %session.user_id, "Logged in");
        Ok(session)
    }

    /// `POST /register`. A 201 may carry the same token payload as
    /// login; when it does, the session is persisted so the user lands
    /// directly on the dashboard.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<Session>, ApiError> {
        request.validate()?;

        let response = self.check(self.post("/register").json(request)).await?;
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<Session>(&body) {
            Ok(session) => {
                self.sessions
                    .save(&session)
                    .map_err(|e| ApiError::Network(format!("Failed to persist session: {e}")))?;
                info!(user_id = %session.user_id, "Registered and logged in");
                Ok(Some(session))
            }
            Err(_) => {
                info!("Registered, login required");
                Ok(None)
            }
        }
    }

    /// Destroys the local session. Session expiry is terminal: there is
    /// no token refresh, only re-login.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.sessions
            .clear()
            .map_err(|e| ApiError::Network(format!("Failed to clear session: {e}")))?;
        info!("Logged out");
        Ok(())
    }
}
