//! Location feed endpoints.

use domain::models::LocationRecord;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::send_with_retry;

impl ApiClient {
    /// `GET /users/{user_id}/locations`, retried on transient failures.
    ///
    /// Returns the full scan history for all of the user's pets; the
    /// dashboard derives per-pet views and the most-recent record from it.
    pub async fn list_locations(&self, user_id: &str) -> Result<Vec<LocationRecord>, ApiError> {
        let path = format!("/users/{user_id}/locations");
        let result = send_with_retry(self.retry(), || async {
            let request = self.authorized(self.get(&path))?;
            let response = self.check(request).await?;
            Ok(response.json::<Vec<LocationRecord>>().await?)
        })
        .await;

        self.finalize(result)
    }
}
