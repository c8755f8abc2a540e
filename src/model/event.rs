// File: src/model/event.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// Activity category of a scheduled event.
///
/// The wire format uses the lowercase names; anything the backend sends
/// that we do not recognize lands on `Other` so the display layer always
/// has a color pair to fall back on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Delivery,
    Pickup,
    Return,
    Maintenance,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventCategory::Delivery => write!(f, "delivery"),
            EventCategory::Pickup => write!(f, "pickup"),
            EventCategory::Return => write!(f, "return"),
            EventCategory::Maintenance => write!(f, "maintenance"),
            EventCategory::Other => write!(f, "other"),
        }
    }
}

/// One scheduled activity shown on the calendar.
///
/// The id is assigned by whoever creates the event (backend row id,
/// import batch, ...) and stays stable for the event's lifetime; this
/// crate never generates ids itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(rename = "type", default)]
    pub category: EventCategory,
    pub title: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: bool,
}

impl Event {
    /// End of the event's effective interval. Events without an explicit
    /// end occupy the single instant at `start`.
    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end.unwrap_or(self.start)
    }
}

/// Partial update applied to a live calendar event. Only fields that are
/// `Some` are written; everything else on the live object stays as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: Option<bool>,
    #[serde(rename = "type", default)]
    pub category: Option<EventCategory>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.all_day.is_none()
            && self.category.is_none()
    }
}

/// Range the user highlighted on the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateSelection {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unknown_category_deserializes_to_other() {
        let json = r#"{"id":"e1","type":"inspection","title":"X","start":"2024-01-10T10:00:00Z"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, EventCategory::Other);
    }

    #[test]
    fn missing_category_defaults_to_other() {
        let json = r#"{"id":"e1","title":"X","start":"2024-01-10T10:00:00Z"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, EventCategory::Other);
        assert!(event.end.is_none());
        assert!(!event.all_day);
    }

    #[test]
    fn effective_end_defaults_to_start() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap();
        let event = Event {
            id: "e1".to_string(),
            category: EventCategory::Delivery,
            title: "Morning run".to_string(),
            start,
            end: None,
            all_day: false,
        };
        assert_eq!(event.effective_end(), start);
    }

    #[test]
    fn category_roundtrips_through_wire_name() {
        let json = serde_json::to_string(&EventCategory::Return).unwrap();
        assert_eq!(json, r#""return""#);
        let back: EventCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EventCategory::Return);
    }
}
