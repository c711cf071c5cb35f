//! Client-side persistence for the PetTrack client.
//!
//! Holds the session store: the authenticated identity and bearer token
//! persisted across program runs.

pub mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
