//! Booking dialog view model

use std::rc::Rc;
use std::sync::Arc;

use reserva_core::TimeSlot;
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

use crate::booking_dialog::BookingDialog;
use crate::state::AppState;
use crate::MainWindow;

pub fn setup_booking_bindings(window: &MainWindow, state: Arc<AppState>) {
    let slots: Vec<SharedString> = TimeSlot::all()
        .iter()
        .map(|slot| slot.to_string().into())
        .collect();
    window.set_time_slots(ModelRc::from(Rc::new(VecModel::from(slots))));
    sync_booking_dialog(window, &state);

    // Field edits only touch local state; the UI already shows what was typed.
    let state_date = state.clone();
    window.on_booking_date_edited(move |text| {
        let today = state_date.today();
        state_date
            .booking
            .lock()
            .unwrap()
            .set_date_text(text.as_str(), today);
    });

    let state_start = state.clone();
    window.on_booking_start_selected(move |value| {
        state_start.booking.lock().unwrap().set_start_time(value.as_str());
    });

    let state_end = state.clone();
    window.on_booking_end_selected(move |value| {
        state_end.booking.lock().unwrap().set_end_time(value.as_str());
    });

    let state_organizer = state.clone();
    window.on_booking_organizer_edited(move |text| {
        state_organizer.booking.lock().unwrap().set_organizer(text.as_str());
    });

    let state_email = state.clone();
    window.on_booking_email_edited(move |text| {
        state_email.booking.lock().unwrap().set_email(text.as_str());
    });

    let state_attendees = state.clone();
    window.on_booking_attendees_edited(move |text| {
        state_attendees
            .booking
            .lock()
            .unwrap()
            .set_attendees_text(text.as_str());
    });

    let state_purpose = state.clone();
    window.on_booking_purpose_edited(move |text| {
        state_purpose.booking.lock().unwrap().set_purpose(text.as_str());
    });

    // Submit
    let state_submit = state.clone();
    let window_weak = window.as_weak();
    window.on_submit_booking(move || {
        state_submit.submit_booking();
        if let Some(w) = window_weak.upgrade() {
            sync_booking_dialog(&w, &state_submit);
            super::show_latest_notice(&w, &state_submit);
        }
    });

    // Dismiss
    let state_dismiss = state.clone();
    let window_weak = window.as_weak();
    window.on_dismiss_booking(move || {
        state_dismiss.dismiss_booking();
        if let Some(w) = window_weak.upgrade() {
            sync_booking_dialog(&w, &state_dismiss);
        }
    });
}

/// Copy the dialog state into the window
pub(crate) fn sync_booking_dialog(window: &MainWindow, state: &AppState) {
    let dialog = state.booking.lock().unwrap();

    window.set_booking_open(dialog.is_open());
    window.set_booking_room_name(
        dialog
            .room()
            .map(|room| room.name.clone())
            .unwrap_or_default()
            .into(),
    );

    let form = dialog.form();
    window.set_form_date(dialog.date_text().into());
    window.set_form_start_index(slot_index(form.start_time));
    window.set_form_end_index(slot_index(form.end_time));
    window.set_form_organizer(form.organizer.as_str().into());
    window.set_form_email(form.email.as_str().into());
    window.set_form_attendees(dialog.attendees_text().into());
    window.set_form_purpose(form.purpose.as_str().into());

    log_dialog(&dialog);
}

fn log_dialog(dialog: &BookingDialog) {
    tracing::debug!(
        open = dialog.is_open(),
        room = ?dialog.room().map(|r| r.id.as_str()),
        "Booking dialog synced"
    );
}

/// Combo box index of a slot, -1 when unset
fn slot_index(slot: Option<TimeSlot>) -> i32 {
    slot.and_then(|slot| TimeSlot::all().iter().position(|s| *s == slot))
        .and_then(|index| i32::try_from(index).ok())
        .unwrap_or(-1)
}
