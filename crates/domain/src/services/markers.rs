//! Map marker selection.
//!
//! One marker per rendered location record. The record whose `created_at`
//! equals the most-recent of the rendered set gets the highlighted icon;
//! everything else gets the normal one. Icon choice is recomputed over
//! whatever subsequence the dashboard is currently showing.

use crate::models::LocationRecord;
use crate::services::feed;

/// Marker icon variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    Normal,
    /// Highlight for the most recently scanned position.
    Last,
}

/// A renderable map marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub record: LocationRecord,
    pub icon: MarkerIcon,
}

/// Builds markers for the given records, highlighting the most recent.
///
/// Icon selection compares timestamps for equality against the derived
/// most-recent record, so records sharing the maximum timestamp are all
/// highlighted.
pub fn build_markers(records: &[LocationRecord]) -> Vec<Marker> {
    let last_created_at = feed::most_recent(records).map(|r| r.created_at);

    records
        .iter()
        .map(|record| Marker {
            record: record.clone(),
            icon: if Some(record.created_at) == last_created_at {
                MarkerIcon::Last
            } else {
                MarkerIcon::Normal
            },
        })
        .collect()
}
