//! Scan submission endpoints.

use domain::models::ScanSubmission;
use tracing::info;
use validator::Validate;

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `POST /scan/{pet_id}` without credentials.
    ///
    /// This is the QR-link path: the submitter may be an anonymous
    /// finder with no account, so the pet id in the URL is the only
    /// authentication.
    pub async fn submit_scan(
        &self,
        pet_id: &str,
        submission: &ScanSubmission,
    ) -> Result<(), ApiError> {
        submission.validate()?;

        let path = format!("/scan/{pet_id}");
        self.check(self.post(&path).json(submission)).await?;
        info!(
            pet_id = %pet_id,
            latitude = submission.latitude,
            longitude = submission.longitude,
            "Scan reported"
        );
        Ok(())
    }

    /// `POST /scan/{pet_id}` with the session's bearer token. Used by
    /// the dashboard's click-to-add flow.
    pub async fn submit_scan_authenticated(
        &self,
        pet_id: &str,
        submission: &ScanSubmission,
    ) -> Result<(), ApiError> {
        submission.validate()?;

        let path = format!("/scan/{pet_id}");
        let result = async {
            let builder = self.authorized(self.post(&path).json(submission))?;
            self.check(builder).await?;
            Ok(())
        }
        .await;

        self.finalize(result)
    }
}
