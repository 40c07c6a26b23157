//! Schedule (guild event) record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled event within a guild.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// The unique identifier of the schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The id of the guild the schedule belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<String>,

    /// The event title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Free-form location text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// When the event starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,

    /// When the event ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,

    /// Whether the event spans whole days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_schedule_timestamps_round_trip() {
        let schedule = Schedule {
            id: Some("S1".to_string()),
            guild_id: Some("G1".to_string()),
            title: Some("Sprint review".to_string()),
            starts_at: Some(Utc.with_ymd_and_hms(2024, 9, 1, 10, 0, 0).unwrap()),
            ends_at: Some(Utc.with_ymd_and_hms(2024, 9, 1, 11, 0, 0).unwrap()),
            ..Default::default()
        };

        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["startsAt"], "2024-09-01T10:00:00Z");

        let back: Schedule = serde_json::from_value(json).unwrap();
        assert_eq!(back, schedule);
    }
}
