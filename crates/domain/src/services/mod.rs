//! Pure domain services.

pub mod feed;
pub mod inbox;
pub mod markers;
