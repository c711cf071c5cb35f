//! Common validation utilities.

use validator::ValidationError;

/// Maximum length of a pet name.
const MAX_PET_NAME_LENGTH: usize = 50;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates a pet name: non-empty after trimming, bounded length.
pub fn validate_pet_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("pet_name_empty");
        err.message = Some("Pet name is required".into());
        return Err(err);
    }
    if trimmed.len() > MAX_PET_NAME_LENGTH {
        let mut err = ValidationError::new("pet_name_length");
        err.message = Some("Pet name must be 50 characters or fewer".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a new password and its confirmation match.
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if password == confirmation {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_mismatch");
        err.message = Some("Passwords do not match".into());
        Err(err)
    }
}
