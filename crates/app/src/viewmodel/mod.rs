//! View model bindings for Slint UI

mod booking;
mod reservations;
mod rooms;

use std::sync::Arc;

use slint::ComponentHandle;

use crate::state::{AppState, NoticeKind};
use crate::MainWindow;

pub fn setup_bindings(window: &MainWindow, state: Arc<AppState>) {
    rooms::setup_room_bindings(window, state.clone());
    booking::setup_booking_bindings(window, state.clone());
    reservations::setup_reservation_bindings(window, state.clone());
    setup_notice_bindings(window, state);
}

fn setup_notice_bindings(window: &MainWindow, state: Arc<AppState>) {
    let window_weak = window.as_weak();
    window.on_dismiss_notice(move || {
        if let Some(notice) = state.latest_notice() {
            state.dismiss_notice(notice.id);
        }
        if let Some(w) = window_weak.upgrade() {
            show_latest_notice(&w, &state);
        }
    });
}

/// Push the newest notice (if any) to the toast area
pub(crate) fn show_latest_notice(window: &MainWindow, state: &AppState) {
    match state.latest_notice() {
        Some(notice) => {
            window.set_notice_title(notice.title.into());
            window.set_notice_body(notice.description.into());
            window.set_notice_is_error(notice.kind == NoticeKind::Error);
            window.set_notice_visible(true);
        }
        None => window.set_notice_visible(false),
    }
}
