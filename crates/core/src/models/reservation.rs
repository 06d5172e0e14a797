//! Reservation model and status presentation

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{format_date, TimeSlot};

/// Catalog identifier of a reservation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub String);

impl ReservationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reservation lifecycle status
///
/// Values the catalog does not recognise load as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "Confirmada",
            ReservationStatus::Pending => "Pendente",
            ReservationStatus::Cancelled => "Cancelada",
            ReservationStatus::Unknown => "Desconhecido",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A booking of a room for a date and slot range
///
/// Room name and location are copies taken when the reservation was made,
/// not a reference into the room catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_name: String,
    pub room_location: String,
    pub organizer: String,
    #[serde(default)]
    pub email: String,
    pub date: NaiveDate,
    pub start_time: TimeSlot,
    pub end_time: TimeSlot,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub attendees: Option<u32>,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Strictly after `today`; a reservation dated today has already started
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date > today
    }

    /// Only upcoming confirmed reservations can be cancelled
    pub fn is_cancellable(&self, today: NaiveDate) -> bool {
        self.is_upcoming(today) && self.status == ReservationStatus::Confirmed
    }

    /// Whether the cancel action is shown; a caller without a cancel
    /// handler never gets one
    pub fn cancel_action_visible(&self, today: NaiveDate, has_cancel_handler: bool) -> bool {
        has_cancel_handler && self.is_cancellable(today)
    }

    pub fn date_label(&self) -> String {
        format_date(self.date)
    }

    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    pub fn attendees_label(&self) -> Option<String> {
        self.attendees.map(|n| format!("{} participantes", n))
    }
}
