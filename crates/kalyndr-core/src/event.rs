//! The calendar-event record.

use serde::{Deserialize, Serialize};

/// A single calendar entry.
///
/// An `id` of `0` means "not yet persisted"; the store assigns a real id
/// on insert and it never changes afterwards. Every other field is
/// optional by contract — the core enforces no required fields and no
/// format on the date/time strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Store-assigned identifier. Absent or `0` on the wire means unset.
    #[serde(default)]
    pub id: i64,
    /// Event title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Date string (`eventDate` on the wire). No format is enforced.
    pub event_date: Option<String>,
    /// Time string. No format is enforced.
    pub time: Option<String>,
    /// Arbitrary category label.
    pub category: Option<String>,
    /// Owning user identifier (`userId` on the wire). Advisory only;
    /// nothing prevents cross-user reads or writes.
    pub user_id: Option<String>,
}

impl CalendarEvent {
    /// Returns true when the record has not been assigned an id yet.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names_are_camel_case() {
        let event = CalendarEvent {
            id: 7,
            title: Some("Standup".into()),
            event_date: Some("2024-01-10".into()),
            user_id: Some("u1".into()),
            ..CalendarEvent::default()
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["eventDate"], "2024-01-10");
        assert_eq!(value["userId"], "u1");
        assert!(value["time"].is_null());
    }

    #[test]
    fn test_missing_id_deserializes_as_unset() {
        let event: CalendarEvent =
            serde_json::from_value(json!({ "title": "Standup" })).unwrap();

        assert_eq!(event.id, 0);
        assert!(event.is_new());
        assert_eq!(event.title.as_deref(), Some("Standup"));
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let event = CalendarEvent {
            id: 42,
            title: Some("Review".into()),
            description: Some("quarterly".into()),
            event_date: Some("2024-03-01".into()),
            time: Some("14:30".into()),
            category: Some("work".into()),
            user_id: Some("u2".into()),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: CalendarEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
