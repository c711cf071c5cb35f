//! Location feed reductions.
//!
//! The dashboard derives everything it renders from the raw record
//! sequence: the most-recent record (max by `created_at`) and per-pet
//! subsequences. Neither derivation is ever stored.

use crate::models::LocationRecord;

/// Returns the record with the maximum `created_at`, or `None` for an
/// empty sequence.
///
/// Ties are broken by the first reduction winning: a later record only
/// replaces the current candidate when its timestamp is strictly greater.
pub fn most_recent(records: &[LocationRecord]) -> Option<&LocationRecord> {
    records.iter().reduce(|latest, record| {
        if record.created_at > latest.created_at {
            record
        } else {
            latest
        }
    })
}

/// Returns the subsequence of records belonging to `pet_id`, preserving
/// order. Filtering an already-filtered single-pet sequence by the same
/// id returns the same sequence.
pub fn filter_by_pet(records: &[LocationRecord], pet_id: &str) -> Vec<LocationRecord> {
    records
        .iter()
        .filter(|record| record.pet_id == pet_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(pet_id: &str, hour: u32) -> LocationRecord {
        LocationRecord {
            pet_id: pet_id.to_string(),
            pet_name: pet_id.to_uppercase(),
            latitude: 0.0,
            longitude: 0.0,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_most_recent_empty() {
        assert!(most_recent(&[]).is_none());
    }

    #[test]
    fn test_most_recent_single() {
        let records = vec![record("a", 10)];
        assert_eq!(most_recent(&records), Some(&records[0]));
    }

    #[test]
    fn test_most_recent_picks_maximum() {
        let records = vec![record("a", 10), record("b", 14), record("a", 12)];
        let latest = most_recent(&records).unwrap();
        assert_eq!(latest.pet_id, "b");
        assert_eq!(latest.created_at, records[1].created_at);
    }

    #[test]
    fn test_most_recent_tie_first_wins() {
        let mut first = record("a", 10);
        first.latitude = 1.0;
        let mut second = record("b", 10);
        second.latitude = 2.0;

        let records = vec![first, second];
        let latest = most_recent(&records).unwrap();
        assert_eq!(latest.pet_id, "a");
        assert_eq!(latest.latitude, 1.0);
    }

    #[test]
    fn test_filter_by_pet() {
        let records = vec![record("a", 10), record("b", 11), record("a", 12)];
        let filtered = filter_by_pet(&records, "a");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.pet_id == "a"));
    }

    #[test]
    fn test_filter_by_pet_idempotent() {
        let records = vec![record("a", 10), record("b", 11), record("a", 12)];
        let once = filter_by_pet(&records, "a");
        let twice = filter_by_pet(&once, "a");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_by_pet_no_matches() {
        let records = vec![record("a", 10)];
        assert!(filter_by_pet(&records, "c").is_empty());
    }

    #[test]
    fn test_most_recent_of_filtered_subsequence() {
        // Pet A holds the globally latest record, but the filtered view
        // for pet B must flag B's only record as most recent.
        let records = vec![record("b", 9), record("a", 10), record("a", 23)];
        let filtered = filter_by_pet(&records, "b");
        let latest = most_recent(&filtered).unwrap();
        assert_eq!(latest.pet_id, "b");
    }
}
