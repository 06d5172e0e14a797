//! Booking dialog state
//!
//! Holds the room the dialog was opened for and the form being edited.
//! Nothing here is persisted; a confirmed booking only produces a notice.

use chrono::NaiveDate;
use reserva_core::booking::{CONFIRMED_TITLE, MISSING_FIELDS_MESSAGE, MISSING_FIELDS_TITLE};
use reserva_core::{
    is_selectable_date, parse_attendees, parse_date, BookingField, BookingForm, BookingRequest,
    Error, RoomRef, TimeSlot,
};

use crate::state::Notice;

/// Result of pressing "Confirmar Reserva"
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Form accepted; the form was reset and the dialog closed
    Confirmed {
        request: BookingRequest,
        notice: Notice,
    },
    /// Required fields are missing; the form is left as it was
    Rejected {
        missing: Vec<BookingField>,
        notice: Notice,
    },
    /// Submit arrived while no room was selected
    NotOpen,
}

/// Booking dialog state
#[derive(Debug, Clone, Default)]
pub struct BookingDialog {
    room: Option<RoomRef>,
    form: BookingForm,
    /// Raw text of the date field, echoed back to the UI
    date_text: String,
    /// Raw text of the attendee field
    attendees_text: String,
}

impl BookingDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.room.is_some()
    }

    pub fn room(&self) -> Option<&RoomRef> {
        self.room.as_ref()
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn attendees_text(&self) -> &str {
        &self.attendees_text
    }

    /// Open the dialog for a room, keeping any unsubmitted form fields
    pub fn open(&mut self, room: RoomRef) {
        self.room = Some(room);
    }

    /// Close without submitting; unsaved fields are discarded
    pub fn dismiss(&mut self) {
        self.room = None;
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.form = BookingForm::new();
        self.date_text.clear();
        self.attendees_text.clear();
    }

    /// Dates that do not parse or are not after `today` leave the date unset
    pub fn set_date_text(&mut self, text: &str, today: NaiveDate) {
        self.date_text = text.to_string();
        self.form.date = parse_date(text)
            .ok()
            .filter(|date| is_selectable_date(*date, today));
    }

    pub fn set_start_time(&mut self, text: &str) {
        self.form.start_time = parse_slot(text);
    }

    pub fn set_end_time(&mut self, text: &str) {
        self.form.end_time = parse_slot(text);
    }

    pub fn set_organizer(&mut self, text: &str) {
        self.form.organizer = text.to_string();
    }

    pub fn set_email(&mut self, text: &str) {
        self.form.email = text.to_string();
    }

    pub fn set_purpose(&mut self, text: &str) {
        self.form.purpose = text.to_string();
    }

    pub fn set_attendees_text(&mut self, text: &str) {
        self.attendees_text = text.to_string();
        self.form.attendees = parse_attendees(text);
    }

    /// Validate and, on success, reset the form and close the dialog
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(room) = self.room.clone() else {
            return SubmitOutcome::NotOpen;
        };

        match self.form.validate(&room) {
            Ok(request) => {
                let notice = Notice::info(CONFIRMED_TITLE, request.confirmation_message());
                self.dismiss();
                SubmitOutcome::Confirmed { request, notice }
            }
            Err(Error::MissingFields(missing)) => SubmitOutcome::Rejected {
                missing,
                notice: Notice::error(MISSING_FIELDS_TITLE, MISSING_FIELDS_MESSAGE),
            },
            Err(e) => {
                // validate() only reports missing fields
                tracing::error!("Unexpected booking validation error: {}", e);
                SubmitOutcome::Rejected {
                    missing: self.form.missing_fields(),
                    notice: Notice::error(MISSING_FIELDS_TITLE, MISSING_FIELDS_MESSAGE),
                }
            }
        }
    }
}

fn parse_slot(text: &str) -> Option<TimeSlot> {
    if text.trim().is_empty() {
        return None;
    }
    TimeSlot::parse(text).ok()
}
