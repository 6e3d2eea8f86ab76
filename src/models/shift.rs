//! Roster shift entries as returned by the venue backend.

use serde::{Deserialize, Serialize};

/// One roster-day assignment.
///
/// `provider_id` should match a [`super::Provider`] id but can be stale or
/// missing; `provider_name` is the fallback resolution key. Times are local
/// wall-clock `"HH:MM:SS"` strings with no date attached: `end <= start`
/// denotes an overnight shift, and `"00:00:00"` as the end of a non-midnight
/// start means 24:00 rather than start-of-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterShift {
    /// The provider this shift belongs to; may not resolve.
    #[serde(default)]
    pub provider_id: i64,
    /// Fallback resolution key when the id lookup misses.
    #[serde(default)]
    pub provider_name: String,
    /// Shift start, local wall-clock `"HH:MM:SS"`.
    #[serde(default)]
    pub start_time: String,
    /// Shift end, local wall-clock `"HH:MM:SS"`.
    #[serde(default)]
    pub end_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_entry() {
        let shift: RosterShift = serde_json::from_value(json!({
            "provider_id": 12,
            "provider_name": "Aiko",
            "start_time": "10:00:00",
            "end_time": "18:00:00"
        }))
        .unwrap();
        assert_eq!(shift.provider_id, 12);
        assert_eq!(shift.start_time, "10:00:00");
    }

    #[test]
    fn test_missing_fields_default() {
        let shift: RosterShift = serde_json::from_value(json!({})).unwrap();
        assert_eq!(shift.provider_id, 0);
        assert!(shift.provider_name.is_empty());
        assert!(shift.start_time.is_empty());
    }
}
