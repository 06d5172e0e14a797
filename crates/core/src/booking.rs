//! Booking form validation
//!
//! Only field presence is checked. Email format, slot ordering and overlap
//! with existing reservations are not.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::RoomId;
use crate::schedule::{format_date, TimeSlot};

pub const MISSING_FIELDS_TITLE: &str = "Campos obrigatórios";
pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const CONFIRMED_TITLE: &str = "Reserva confirmada!";

/// Required fields of the booking form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingField {
    Date,
    StartTime,
    EndTime,
    Organizer,
    Email,
}

impl BookingField {
    pub fn key(&self) -> &'static str {
        match self {
            BookingField::Date => "date",
            BookingField::StartTime => "startTime",
            BookingField::EndTime => "endTime",
            BookingField::Organizer => "organizer",
            BookingField::Email => "email",
        }
    }
}

/// Room the booking dialog was opened for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRef {
    pub id: RoomId,
    pub name: String,
}

impl RoomRef {
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Editable booking form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub date: Option<NaiveDate>,
    pub start_time: Option<TimeSlot>,
    pub end_time: Option<TimeSlot>,
    pub organizer: String,
    pub email: String,
    pub purpose: String,
    pub attendees: Option<u32>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field holds its initial value
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Required fields that are absent, in form order
    pub fn missing_fields(&self) -> Vec<BookingField> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push(BookingField::Date);
        }
        if self.start_time.is_none() {
            missing.push(BookingField::StartTime);
        }
        if self.end_time.is_none() {
            missing.push(BookingField::EndTime);
        }
        if self.organizer.is_empty() {
            missing.push(BookingField::Organizer);
        }
        if self.email.is_empty() {
            missing.push(BookingField::Email);
        }
        missing
    }

    /// Check required fields and build the request for `room`
    pub fn validate(&self, room: &RoomRef) -> Result<BookingRequest> {
        let missing = self.missing_fields();
        let (Some(date), Some(start_time), Some(end_time)) = (self.date, self.start_time, self.end_time)
        else {
            return Err(Error::MissingFields(missing));
        };
        if !missing.is_empty() {
            return Err(Error::MissingFields(missing));
        }

        let purpose = self.purpose.trim();
        Ok(BookingRequest {
            confirmation_id: Uuid::new_v4(),
            room: room.clone(),
            date,
            start_time,
            end_time,
            organizer: self.organizer.clone(),
            email: self.email.clone(),
            purpose: (!purpose.is_empty()).then(|| purpose.to_string()),
            attendees: self.attendees,
        })
    }
}

/// Parse the optional attendee count; anything but a positive integer is absent
pub fn parse_attendees(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// An accepted booking; nothing stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub confirmation_id: Uuid,
    pub room: RoomRef,
    pub date: NaiveDate,
    pub start_time: TimeSlot,
    pub end_time: TimeSlot,
    pub organizer: String,
    pub email: String,
    pub purpose: Option<String>,
    pub attendees: Option<u32>,
}

impl BookingRequest {
    pub fn confirmation_message(&self) -> String {
        format!(
            "Sala {} reservada para {} das {} às {}.",
            self.room.name,
            format_date(self.date),
            self.start_time,
            self.end_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> RoomRef {
        RoomRef::new(RoomId::new("1"), "Sala Executiva")
    }

    fn complete_form() -> BookingForm {
        BookingForm {
            date: NaiveDate::from_ymd_opt(2025, 3, 14),
            start_time: Some(TimeSlot::parse("09:00").unwrap()),
            end_time: Some(TimeSlot::parse("10:30").unwrap()),
            organizer: "Ana Costa".to_string(),
            email: "ana@example.com".to_string(),
            purpose: String::new(),
            attendees: None,
        }
    }

    #[test]
    fn test_complete_form_is_accepted() {
        let request = complete_form().validate(&room()).unwrap();
        assert_eq!(request.room.name, "Sala Executiva");
        assert_eq!(request.organizer, "Ana Costa");
        assert!(request.purpose.is_none());
        assert_eq!(
            request.confirmation_message(),
            "Sala Sala Executiva reservada para 14/03/2025 das 09:00 às 10:30."
        );
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        let fields = [
            BookingField::Date,
            BookingField::StartTime,
            BookingField::EndTime,
            BookingField::Organizer,
            BookingField::Email,
        ];

        for field in fields {
            let mut form = complete_form();
            match field {
                BookingField::Date => form.date = None,
                BookingField::StartTime => form.start_time = None,
                BookingField::EndTime => form.end_time = None,
                BookingField::Organizer => form.organizer.clear(),
                BookingField::Email => form.email.clear(),
            }
            match form.validate(&room()) {
                Err(Error::MissingFields(missing)) => assert_eq!(missing, vec![field]),
                other => panic!("expected missing {:?}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_empty_form_lists_all_fields() {
        let form = BookingForm::new();
        assert!(form.is_empty());
        let err = form.validate(&room()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: date, startTime, endTime, organizer, email"
        );
    }

    #[test]
    fn test_whitespace_text_counts_as_present() {
        let mut form = complete_form();
        form.organizer = "   ".to_string();
        form.email = " ".to_string();
        assert!(form.missing_fields().is_empty());

        let request = form.validate(&room()).unwrap();
        assert_eq!(request.organizer, "   ");
        assert_eq!(request.email, " ");
    }

    #[test]
    fn test_optional_fields_do_not_block() {
        let mut form = complete_form();
        form.purpose = "  Planejamento  ".to_string();
        form.attendees = Some(6);
        let request = form.validate(&room()).unwrap();
        assert_eq!(request.purpose.as_deref(), Some("Planejamento"));
        assert_eq!(request.attendees, Some(6));
    }

    #[test]
    fn test_slot_order_is_not_checked() {
        let mut form = complete_form();
        form.start_time = Some(TimeSlot::parse("15:00").unwrap());
        form.end_time = Some(TimeSlot::parse("09:00").unwrap());
        assert!(form.validate(&room()).is_ok());
    }

    #[test]
    fn test_each_acceptance_gets_a_fresh_id() {
        let form = complete_form();
        let a = form.validate(&room()).unwrap();
        let b = form.validate(&room()).unwrap();
        assert_ne!(a.confirmation_id, b.confirmation_id);
    }

    #[test]
    fn test_parse_attendees() {
        assert_eq!(parse_attendees("8"), Some(8));
        assert_eq!(parse_attendees(" 12 "), Some(12));
        assert_eq!(parse_attendees("0"), None);
        assert_eq!(parse_attendees("-3"), None);
        assert_eq!(parse_attendees("oito"), None);
        assert_eq!(parse_attendees(""), None);
    }
}
