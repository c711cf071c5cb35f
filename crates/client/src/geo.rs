//! Device position acquisition.
//!
//! The scan page needs one fix of the device's current position. The
//! source is abstracted behind [`PositionProvider`] so the reporter can
//! run against a real platform integration, a fixed coordinate from the
//! CLI, or a scripted provider in tests.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// How long to wait for a position fix.
pub const CAPTURE_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for a position capture. Defaults match the scan page:
/// high accuracy, 10 second timeout, no cached fix reuse.
#[derive(Debug, Clone, Copy)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum age of a cached fix the provider may return. Zero means
    /// a fresh fix is always required.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: CAPTURE_TIMEOUT,
            maximum_age: Duration::ZERO,
        }
    }
}

/// A captured device position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Device-level position acquisition failures.
///
/// Each cause carries its own user-facing message; anything the
/// platform reports outside the three standard codes maps to `Other`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Location permission was denied. Please allow location access and try again.")]
    PermissionDenied,

    #[error("Your position could not be determined. Move to an open area and try again.")]
    PositionUnavailable,

    #[error("Timed out waiting for your position. Please try again.")]
    Timeout,

    #[error("Could not get your location. Please try again.")]
    Other,
}

/// Source of device position fixes.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn current_position(&self, options: PositionOptions)
        -> Result<Position, GeolocationError>;
}

/// Provider that always returns the same coordinates. Used by the CLI
/// (where coordinates arrive as flags) and by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionProvider {
    position: Position,
}

impl FixedPositionProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Position {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl PositionProvider for FixedPositionProvider {
    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<Position, GeolocationError> {
        Ok(self.position)
    }
}
