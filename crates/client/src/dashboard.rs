//! Dashboard view state.
//!
//! Owns the pet list and the location feed for the signed-in user, the
//! per-pet filter, and the click-to-add arming flag. Loads degrade to an
//! inline message and an empty collection except for authentication
//! failures, which propagate so the caller can return to login.

use std::time::Duration;

use chrono::Utc;
use domain::models::{LocationRecord, NewPetRequest, Pet, ScanSubmission};
use domain::services::{feed, markers};
use tracing::{info, warn};
use validator::Validate;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::ApiError;

const LOAD_PETS_FAILED: &str = "Could not load your pets. Please try again.";
const LOAD_LOCATIONS_FAILED: &str = "Could not load locations. Please try again.";
const ADD_LOCATION_FAILED: &str = "Could not register the location. Please try again.";
const NO_PET_SELECTED: &str = "Select a pet before adding a location.";

/// Banner text for a failed load. The backend's own message wins when it
/// sent one (404 retrying hints, 5xx error bodies); connection-level
/// failures fall back to the generic text.
fn load_failure_message(err: ApiError, fallback: &str) -> String {
    match err {
        ApiError::NotFound(message) => message,
        ApiError::Server { message, .. } => message,
        _ => fallback.to_string(),
    }
}

pub struct Dashboard {
    api: ApiClient,
    user_id: String,
    pets: Vec<Pet>,
    locations: Vec<LocationRecord>,
    selected_pet: Option<String>,
    adding_location: bool,
    error: Option<String>,
    reconcile_delay: Duration,
}

impl Dashboard {
    pub fn new(api: ApiClient, config: &Config, user_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            pets: Vec::new(),
            locations: Vec::new(),
            selected_pet: None,
            adding_location: false,
            error: None,
            reconcile_delay: config.reconcile_delay(),
        }
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    pub fn selected_pet(&self) -> Option<&str> {
        self.selected_pet.as_deref()
    }

    pub fn adding_location(&self) -> bool {
        self.adding_location
    }

    /// Inline error banner, cleared by the next successful operation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Loads the pet list. The first pet is auto-selected when nothing
    /// is selected yet. Failures other than Unauthorized leave the view
    /// usable: the list goes empty and the banner explains.
    pub async fn load_pets(&mut self) -> Result<(), ApiError> {
        match self.api.list_pets(&self.user_id).await {
            Ok(pets) => {
                if self.selected_pet.is_none() {
                    self.selected_pet = pets.first().map(|p| p.id.clone());
                }
                self.pets = pets;
                self.error = None;
                Ok(())
            }
            Err(err @ ApiError::Unauthorized(_)) => Err(err),
            Err(err) => {
                warn!(error = %err, "Failed to load pets");
                self.pets.clear();
                self.error = Some(load_failure_message(err, LOAD_PETS_FAILED));
                Ok(())
            }
        }
    }

    /// Loads the full location feed, newest data replacing the old.
    pub async fn load_locations(&mut self) -> Result<(), ApiError> {
        match self.api.list_locations(&self.user_id).await {
            Ok(locations) => {
                self.locations = locations;
                self.error = None;
                Ok(())
            }
            Err(err @ ApiError::Unauthorized(_)) => Err(err),
            Err(err) => {
                warn!(error = %err, "Failed to load locations");
                self.locations.clear();
                self.error = Some(load_failure_message(err, LOAD_LOCATIONS_FAILED));
                Ok(())
            }
        }
    }

    /// Registers a new pet. The created pet is appended straight away;
    /// after a short delay the list is refetched so the server snapshot
    /// wins. A failed refetch keeps the optimistic list.
    pub async fn add_pet(
        &mut self,
        name: &str,
        photo: Option<String>,
    ) -> Result<(), ApiError> {
        let request = NewPetRequest {
            name: name.to_string(),
            photo,
        };
        request.validate()?;

        let pet = self.api.add_pet(&self.user_id, &request).await?;
        info!(pet_id = %pet.id, name = %pet.name, "Pet registered");
        if self.selected_pet.is_none() {
            self.selected_pet = Some(pet.id.clone());
        }
        self.pets.push(pet);
        self.error = None;

        tokio::time::sleep(self.reconcile_delay).await;
        match self.api.list_pets(&self.user_id).await {
            Ok(pets) => self.pets = pets,
            Err(err) => {
                warn!(error = %err, "Pet list refetch failed, keeping optimistic list");
            }
        }
        Ok(())
    }

    /// Selects a pet filter, or `None` for all pets. Arming is dropped
    /// when the selection changes.
    pub fn select_pet(&mut self, pet_id: Option<&str>) {
        let next = pet_id.map(str::to_string);
        if next != self.selected_pet {
            self.adding_location = false;
        }
        self.selected_pet = next;
    }

    /// The location records currently rendered: the full feed, or the
    /// selected pet's subsequence.
    pub fn visible_locations(&self) -> Vec<LocationRecord> {
        match &self.selected_pet {
            Some(pet_id) => feed::filter_by_pet(&self.locations, pet_id),
            None => self.locations.clone(),
        }
    }

    /// Map markers over the visible records, most recent highlighted.
    pub fn markers(&self) -> Vec<markers::Marker> {
        markers::build_markers(&self.visible_locations())
    }

    /// Arms click-to-add. Requires a selected pet to attribute the
    /// location to.
    pub fn arm_add_location(&mut self) -> bool {
        if self.selected_pet.is_none() {
            self.error = Some(NO_PET_SELECTED.to_string());
            return false;
        }
        self.adding_location = true;
        true
    }

    pub fn disarm_add_location(&mut self) {
        self.adding_location = false;
    }

    /// Handles a map click while armed: submits a scan for the selected
    /// pet and appends the record locally on success. Disarms in every
    /// outcome. Clicks while disarmed are ignored.
    pub async fn map_click(&mut self, latitude: f64, longitude: f64) -> Result<(), ApiError> {
        if !self.adding_location {
            return Ok(());
        }
        self.adding_location = false;

        let Some(pet_id) = self.selected_pet.clone() else {
            return Ok(());
        };

        let submission = ScanSubmission::new(latitude, longitude);
        match self
            .api
            .submit_scan_authenticated(&pet_id, &submission)
            .await
        {
            Ok(()) => {
                let pet_name = self
                    .pets
                    .iter()
                    .find(|p| p.id == pet_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                self.locations.push(LocationRecord {
                    pet_id,
                    pet_name,
                    latitude,
                    longitude,
                    created_at: Utc::now(),
                });
                self.error = None;
                Ok(())
            }
            Err(err @ ApiError::Unauthorized(_)) => Err(err),
            Err(err) => {
                warn!(error = %err, "Failed to add location");
                self.error = Some(ADD_LOCATION_FAILED.to_string());
                Ok(())
            }
        }
    }
}
