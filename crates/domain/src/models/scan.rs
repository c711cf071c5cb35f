//! Scan submission payload.

use serde::Serialize;
use validator::Validate;

/// Request payload for `POST /scan/{pet_id}`.
///
/// Built once per geolocation capture, sent, then discarded. This path
/// carries no bearer token: the submitter may be an anonymous finder who
/// followed the QR link.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ScanSubmission {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(rename = "isAnonymous")]
    pub is_anonymous: bool,
}

impl ScanSubmission {
    /// Builds a submission from captured coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            message: None,
            is_anonymous: false,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }
}
