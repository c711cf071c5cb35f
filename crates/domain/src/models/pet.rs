//! Pet domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered pet.
///
/// The id is assigned by the backend on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    /// Data URI or URL of the pet's photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Scan-page URL embedded in the pet's QR code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_content: Option<String>,
}

/// Request payload for `POST /users/{user_id}/pets`.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewPetRequest {
    #[validate(custom(function = "shared::validation::validate_pet_name"))]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}
