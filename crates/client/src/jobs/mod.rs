//! Background jobs.

pub mod scheduler;
pub mod unread_count;

pub use scheduler::{Job, JobScheduler};
pub use unread_count::UnreadCountJob;
