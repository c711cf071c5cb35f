//! Location record domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single scan-location record.
///
/// Records are append-only from the client's perspective; the dashboard
/// rebuilds its collection wholesale on every fetch. The "most recent"
/// record is always derived (max by `created_at`), never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub pet_id: String,
    pub pet_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}
