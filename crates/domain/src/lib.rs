//! Domain layer for the PetTrack client.
//!
//! This crate contains:
//! - Data models exchanged with the backend (Session, Pet, LocationRecord, Notification)
//! - Pure business logic services (location feed reduction, inbox read-state, map markers)

pub mod models;
pub mod services;
