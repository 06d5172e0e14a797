//! Rooms view model

use std::rc::Rc;
use std::sync::Arc;

use reserva_core::filter::{ANY_BUCKET_LABEL, NO_ROOMS_MESSAGE};
use reserva_core::{AvailabilityBucket, CapacityBucket, Room, RoomId};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

use crate::state::AppState;
use crate::{MainWindow, RoomItem, RoomStatsItem};

pub fn setup_room_bindings(window: &MainWindow, state: Arc<AppState>) {
    window.set_capacity_options(string_model(capacity_options()));
    window.set_availability_options(string_model(availability_options()));
    window.set_empty_rooms_message(NO_ROOMS_MESSAGE.into());
    refresh_rooms(window, &state);

    // Search box
    let state_search = state.clone();
    let window_weak = window.as_weak();
    window.on_search_edited(move |text| {
        state_search.set_search(text.as_str());
        if let Some(w) = window_weak.upgrade() {
            refresh_rooms(&w, &state_search);
        }
    });

    // Capacity selector
    let state_capacity = state.clone();
    let window_weak = window.as_weak();
    window.on_capacity_selected(move |index| {
        state_capacity.set_capacity(capacity_at(index));
        if let Some(w) = window_weak.upgrade() {
            refresh_rooms(&w, &state_capacity);
        }
    });

    // Availability selector
    let state_availability = state.clone();
    let window_weak = window.as_weak();
    window.on_availability_selected(move |index| {
        state_availability.set_availability(availability_at(index));
        if let Some(w) = window_weak.upgrade() {
            refresh_rooms(&w, &state_availability);
        }
    });

    // Book room
    let state_book = state.clone();
    let window_weak = window.as_weak();
    window.on_book_room(move |room_id| {
        if !state_book.open_booking(&RoomId::new(room_id.as_str())) {
            return;
        }
        if let Some(w) = window_weak.upgrade() {
            super::booking::sync_booking_dialog(&w, &state_book);
        }
    });
}

/// Recompute the visible rooms and the stats strip
fn refresh_rooms(window: &MainWindow, state: &AppState) {
    let (visible, stats) = state.visible_rooms_with_stats();

    let items: Vec<RoomItem> = visible.iter().map(|room| room_item(room)).collect();
    window.set_rooms(ModelRc::from(Rc::new(VecModel::from(items))));
    window.set_stats(RoomStatsItem {
        total: stats.total as i32,
        available: stats.available as i32,
        occupied: stats.occupied as i32,
        filtered: stats.filtered as i32,
    });
}

fn room_item(room: &Room) -> RoomItem {
    let (amenities, overflow) = room.amenity_preview();

    RoomItem {
        id: room.id.as_str().into(),
        name: room.name.clone().into(),
        location: room.location.clone().into(),
        capacity_label: room.capacity_label().into(),
        availability_label: room.availability_label().into(),
        is_available: room.is_available,
        has_projector: room.has_projector(),
        amenities: string_model(amenities.iter().map(String::as_str)),
        amenities_overflow: overflow.unwrap_or_default().into(),
        next_available: room.next_available_label().unwrap_or_default().into(),
        book_label: room.book_label().into(),
    }
}

fn string_model<'a>(values: impl IntoIterator<Item = &'a str>) -> ModelRc<SharedString> {
    let values: Vec<SharedString> = values.into_iter().map(SharedString::from).collect();
    ModelRc::from(Rc::new(VecModel::from(values)))
}

// Selector index 0 is "Todas"; bucket options follow in order.

fn capacity_options() -> Vec<&'static str> {
    std::iter::once(ANY_BUCKET_LABEL)
        .chain(CapacityBucket::all().iter().map(|b| b.label()))
        .collect()
}

fn availability_options() -> Vec<&'static str> {
    std::iter::once(ANY_BUCKET_LABEL)
        .chain(AvailabilityBucket::all().iter().map(|b| b.label()))
        .collect()
}

fn capacity_at(index: i32) -> Option<CapacityBucket> {
    let index = usize::try_from(index).ok()?.checked_sub(1)?;
    CapacityBucket::all().get(index).copied()
}

fn availability_at(index: i32) -> Option<AvailabilityBucket> {
    let index = usize::try_from(index).ok()?.checked_sub(1)?;
    AvailabilityBucket::all().get(index).copied()
}
