//! Reservations view model

use std::rc::Rc;
use std::sync::Arc;

use reserva_core::{Reservation, ReservationId};
use slint::{ComponentHandle, ModelRc, VecModel};

use crate::state::AppState;
use crate::{MainWindow, ReservationItem};

/// Shown when there are no reservations
const NO_RESERVATIONS_MESSAGE: &str = "Nenhuma reserva encontrada.";

pub fn setup_reservation_bindings(window: &MainWindow, state: Arc<AppState>) {
    window.set_empty_reservations_message(NO_RESERVATIONS_MESSAGE.into());
    load_reservations(window, &state);

    let state_cancel = state.clone();
    let window_weak = window.as_weak();
    window.on_cancel_reservation(move |reservation_id| {
        let id = ReservationId::new(reservation_id.as_str());
        if let Err(e) = state_cancel.cancel_reservation(&id) {
            tracing::warn!("Failed to cancel reservation {}: {}", id, e);
            return;
        }
        if let Some(w) = window_weak.upgrade() {
            load_reservations(&w, &state_cancel);
        }
    });
}

fn load_reservations(window: &MainWindow, state: &AppState) {
    let items: Vec<ReservationItem> = state
        .catalog()
        .reservations()
        .iter()
        .map(|r| reservation_item(r, state.can_cancel(r)))
        .collect();

    window.set_reservations(ModelRc::from(Rc::new(VecModel::from(items))));
}

fn reservation_item(reservation: &Reservation, can_cancel: bool) -> ReservationItem {
    ReservationItem {
        id: reservation.id.as_str().into(),
        room_name: reservation.room_name.clone().into(),
        room_location: reservation.room_location.clone().into(),
        date: reservation.date_label().into(),
        time_range: reservation.time_range_label().into(),
        attendees: reservation.attendees_label().unwrap_or_default().into(),
        organizer: reservation.organizer.clone().into(),
        purpose: reservation.purpose.clone().unwrap_or_default().into(),
        status_label: reservation.status.label().into(),
        can_cancel,
    }
}
