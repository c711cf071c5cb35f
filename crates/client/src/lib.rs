//! HTTP client layer for the PetTrack backend.
//!
//! Wraps every backend route behind [`api::ApiClient`], adds bounded
//! retry for transient failures, and hosts the stateful view flows:
//! the dashboard, the notification inbox and its poller, and the
//! geolocation scan reporter.

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geo;
pub mod http;
pub mod inbox;
pub mod jobs;
pub mod logging;
pub mod reporter;
