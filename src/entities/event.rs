//! Event entity - A booked function at one of the venue's halls.
//!
//! Events are created as [`EventStatus::Upcoming`]; the status only changes
//! when a caller patches it. Deleting an event does not touch decor records
//! that reference it.
use super::Choice;
use crate::core::store::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Hall the event is booked in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hall {
    /// The main hall
    #[serde(rename = "Grand Hall")]
    GrandHall,
    /// Small meeting room
    #[serde(rename = "Conference Room A")]
    ConferenceRoomA,
    /// Outdoor garden
    #[serde(rename = "Garden Venue")]
    GardenVenue,
}

impl Choice for Hall {
    const ALL: &'static [Self] = &[Self::GrandHall, Self::ConferenceRoomA, Self::GardenVenue];

    fn label(self) -> &'static str {
        match self {
            Self::GrandHall => "Grand Hall",
            Self::ConferenceRoomA => "Conference Room A",
            Self::GardenVenue => "Garden Venue",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::GrandHall => "grand",
            Self::ConferenceRoomA => "conference",
            Self::GardenVenue => "garden",
        }
    }
}

/// Time slot of the booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 9 AM to 1 PM
    #[serde(rename = "Morning (9-1 PM)")]
    Morning,
    /// 1 PM to 6 PM
    #[serde(rename = "Afternoon (1-6 PM)")]
    Afternoon,
    /// 6 PM to 11 PM
    #[serde(rename = "Evening (6-11 PM)")]
    Evening,
}

impl Choice for TimeSlot {
    const ALL: &'static [Self] = &[Self::Morning, Self::Afternoon, Self::Evening];

    fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning (9-1 PM)",
            Self::Afternoon => "Afternoon (1-6 PM)",
            Self::Evening => "Evening (6-11 PM)",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

/// Kind of function being held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[allow(missing_docs)]
    Wedding,
    #[allow(missing_docs)]
    Corporate,
    #[allow(missing_docs)]
    Anniversary,
}

impl Choice for EventType {
    const ALL: &'static [Self] = &[Self::Wedding, Self::Corporate, Self::Anniversary];

    fn label(self) -> &'static str {
        match self {
            Self::Wedding => "Wedding",
            Self::Corporate => "Corporate",
            Self::Anniversary => "Anniversary",
        }
    }

    fn short_name(self) -> &'static str {
        self.label()
    }
}

/// Progress of an event. Never advanced automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    #[allow(missing_docs)]
    #[default]
    Upcoming,
    #[allow(missing_docs)]
    InProgress,
    #[allow(missing_docs)]
    Completed,
}

impl Choice for EventStatus {
    const ALL: &'static [Self] = &[Self::Upcoming, Self::InProgress, Self::Completed];

    fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::InProgress => "in progress",
            Self::Completed => "done",
        }
    }
}

display_by_label!(Hall, TimeSlot, EventType, EventStatus);

/// Stored event record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// `EVT###`
    pub id: String,
    /// Name of the booking client
    pub client_name: String,
    /// Booked hall
    pub hall: Hall,
    /// Booked slot
    pub time: TimeSlot,
    /// Kind of function
    pub event_type: EventType,
    /// Expected number of guests
    pub guest_count: u32,
    /// Free-text menu description
    pub menu: String,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Manually maintained progress
    pub status: EventStatus,
}

impl Record for Event {
    const PREFIX: &'static str = "EVT";
    const ENTITY: &'static str = "Event";

    fn id(&self) -> &str {
        &self.id
    }

    fn search_keys(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.id.as_str()),
            Cow::Borrowed(self.client_name.as_str()),
            Cow::Owned(self.date.to_string()),
        ]
    }
}

/// Raw form input for a new event. Text fields are taken as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// Required
    pub client_name: String,
    /// Required, a [`Hall`] label
    pub hall: String,
    /// Required, a [`TimeSlot`] label
    pub time: String,
    /// Required, an [`EventType`] label
    pub event_type: String,
    /// Non-numeric input counts as zero
    pub guest_count: String,
    /// Optional
    pub menu: String,
    /// Required, `YYYY-MM-DD`
    pub date: String,
}

/// Fields to replace on an existing event; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct EventPatch {
    pub client_name: Option<String>,
    pub hall: Option<Hall>,
    pub time: Option<TimeSlot>,
    pub event_type: Option<EventType>,
    pub guest_count: Option<u32>,
    pub menu: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<EventStatus>,
}
