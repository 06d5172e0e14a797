//! Booking time slots and date formatting
//!
//! Reservations are made on a fixed half-hour grid between 08:00 and 18:00.
//! Dates are shown and entered as `dd/MM/yyyy`.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Display and input format for dates
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const FIRST_SLOT: (u32, u32) = (8, 0);
const LAST_SLOT: (u32, u32) = (18, 0);
const SLOT_MINUTES: i64 = 30;

/// A start or end time on the half-hour booking grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Every slot in order, 08:00 through 18:00
    pub fn all() -> Vec<TimeSlot> {
        let (Some(first), Some(last)) = (slot_time(FIRST_SLOT), slot_time(LAST_SLOT)) else {
            return Vec::new();
        };

        let mut slots = Vec::new();
        let mut current = first;
        while current <= last {
            slots.push(TimeSlot(current));
            current += Duration::minutes(SLOT_MINUTES);
        }
        slots
    }

    /// Parse an "HH:MM" string; only times on the grid are accepted
    pub fn parse(s: &str) -> Result<Self> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| Error::InvalidTimeSlot(s.to_string()))?;

        let slot = TimeSlot(time);
        if Self::all().contains(&slot) {
            Ok(slot)
        } else {
            Err(Error::InvalidTimeSlot(s.to_string()))
        }
    }
}

fn slot_time((hour, minute): (u32, u32)) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        TimeSlot::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Render a date as `dd/MM/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `dd/MM/yyyy` date typed by the user
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Only dates after `today` can be picked for a new booking
pub fn is_selectable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}
