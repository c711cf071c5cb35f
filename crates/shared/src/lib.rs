//! Shared utilities and common types for the PetTrack client.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic (coordinates, names, passwords)
//! - Photo file encoding into embeddable data URIs

pub mod photo;
pub mod validation;
