//! Geolocation scan reporter.
//!
//! Drives the QR scan page flow: capture the device position, then
//! submit a scan for the pet named in the inbound link. No user session
//! is involved; the submitter may be an anonymous finder.
//!
//! State machine: `Idle → Capturing → Submitting → {Succeeded | Failed}`.

use std::time::Duration;

use domain::models::ScanSubmission;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::geo::{GeolocationError, PositionOptions, PositionProvider};

/// How long the confirmation lingers before the caller navigates away.
pub const SUCCESS_LINGER: Duration = Duration::from_millis(1500);

/// Message shown when the backend rejects the submission.
const SUBMIT_FAILED_MESSAGE: &str = "Could not register the location. Please try again.";

/// Reporter state. `Failed` carries the user-facing message selected
/// from the failure cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterState {
    Idle,
    Capturing,
    Submitting,
    Succeeded,
    Failed { message: String },
}

/// One scan-report flow for a single pet.
pub struct ScanReporter {
    api: ApiClient,
    pet_id: String,
    state: ReporterState,
}

impl ScanReporter {
    pub fn new(api: ApiClient, pet_id: impl Into<String>) -> Self {
        Self {
            api,
            pet_id: pet_id.into(),
            state: ReporterState::Idle,
        }
    }

    pub fn state(&self) -> &ReporterState {
        &self.state
    }

    pub fn succeeded(&self) -> bool {
        self.state == ReporterState::Succeeded
    }

    /// Runs the full capture-and-submit flow. Only starts from `Idle`
    /// or `Failed` (retry); otherwise the current state is returned
    /// untouched.
    pub async fn report(
        &mut self,
        provider: &dyn PositionProvider,
        message: Option<String>,
        anonymous: bool,
    ) -> &ReporterState {
        if !matches!(self.state, ReporterState::Idle | ReporterState::Failed { .. }) {
            return &self.state;
        }

        self.state = ReporterState::Capturing;
        let options = PositionOptions::default();

        // The timeout is enforced here as well, so a provider that never
        // answers still resolves to the timeout message.
        let position = match tokio::time::timeout(options.timeout, provider.current_position(options))
            .await
        {
            Ok(Ok(position)) => position,
            Ok(Err(err)) => {
                warn!(error = %err, "Position capture failed");
                self.state = ReporterState::Failed {
                    message: err.to_string(),
                };
                return &self.state;
            }
            Err(_) => {
                warn!("Position capture timed out");
                self.state = ReporterState::Failed {
                    message: GeolocationError::Timeout.to_string(),
                };
                return &self.state;
            }
        };

        self.state = ReporterState::Submitting;
        let mut submission = ScanSubmission::new(position.latitude, position.longitude);
        if let Some(message) = message {
            submission = submission.with_message(message);
        }
        if anonymous {
            submission = submission.anonymous();
        }

        match self.api.submit_scan(&self.pet_id, &submission).await {
            Ok(()) => {
                info!(pet_id = %self.pet_id, "Scan submitted");
                self.state = ReporterState::Succeeded;
            }
            Err(err) => {
                warn!(pet_id = %self.pet_id, error = %err, "Scan submission failed");
                self.state = ReporterState::Failed {
                    message: SUBMIT_FAILED_MESSAGE.to_string(),
                };
            }
        }

        &self.state
    }

    /// Returns to `Idle` so the user can navigate back to the entry
    /// point. Refused mid-submission; returns whether the reset applied.
    pub fn reset(&mut self) -> bool {
        if self.state == ReporterState::Submitting {
            return false;
        }
        self.state = ReporterState::Idle;
        true
    }
}
