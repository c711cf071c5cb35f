//! Domain models.

mod location;
mod notification;
mod pet;
mod profile;
mod scan;
mod session;

pub use location::LocationRecord;
pub use notification::{Notification, NotificationList, UnreadCount};
pub use pet::{NewPetRequest, Pet};
pub use profile::{ChangePasswordRequest, Profile, UpdateProfileRequest};
pub use scan::ScanSubmission;
pub use session::{LoginRequest, RegisterRequest, Session};
