//! Pet registry endpoints.

use domain::models::{NewPetRequest, Pet};
use tracing::debug;
use validator::Validate;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::send_with_retry;

impl ApiClient {
    /// `GET /users/{user_id}/pets`, retried on transient failures.
    pub async fn list_pets(&self, user_id: &str) -> Result<Vec<Pet>, ApiError> {
        let path = format!("/users/{user_id}/pets");
        let result = send_with_retry(self.retry(), || async {
            let request = self.authorized(self.get(&path))?;
            let response = self.check(request).await?;
            Ok(response.json::<Vec<Pet>>().await?)
        })
        .await;

        self.finalize(result)
    }

    /// `POST /users/{user_id}/pets`. The returned pet carries the
    /// backend-assigned id.
    pub async fn add_pet(&self, user_id: &str, request: &NewPetRequest) -> Result<Pet, ApiError> {
        request.validate()?;

        let path = format!("/users/{user_id}/pets");
        let result = async {
            let builder = self.authorized(self.post(&path).json(request))?;
            let response = self.check(builder).await?;
            let pet: Pet = response.json().await?;
            debug!(pet_id = %pet.id, "Pet created");
            Ok(pet)
        }
        .await;

        self.finalize(result)
    }

    /// `GET /pets/{pet_id}`. Public lookup for the scan landing page,
    /// no session required.
    pub async fn get_pet(&self, pet_id: &str) -> Result<Pet, ApiError> {
        let path = format!("/pets/{pet_id}");
        let response = self.check(self.get(&path)).await?;
        Ok(response.json().await?)
    }

    /// The scan-page URL embedded in a pet's QR code. The QR image
    /// itself is rendered elsewhere.
    pub fn scan_url(&self, pet_id: &str) -> String {
        self.url(&format!("/scan/{pet_id}"))
    }
}
