//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{Reservation, Room};

/// Validate that a room loaded from the catalog is internally consistent
pub fn assert_room_invariants(room: &Room) {
    debug_assert!(room.capacity > 0, "Room {} has zero capacity", room.id);

    debug_assert!(
        !room.name.trim().is_empty(),
        "Room {} has empty name",
        room.id
    );
}

/// Validate that a reservation loaded from the catalog is consistent
///
/// Slot ordering (start before end) is not asserted; the catalog never
/// enforced it.
pub fn assert_reservation_invariants(reservation: &Reservation) {
    debug_assert!(
        !reservation.organizer.trim().is_empty(),
        "Reservation {} has no organizer",
        reservation.id
    );

    debug_assert!(
        reservation.attendees != Some(0),
        "Reservation {} has zero attendees",
        reservation.id
    );
}

/// Validate that a filter result is an order-preserving subset of its input
pub fn assert_filter_output_invariants(input: &[Room], output: &[&Room]) {
    debug_assert!(
        output.len() <= input.len(),
        "Filter returned {} rooms from an input of {}",
        output.len(),
        input.len()
    );

    if cfg!(debug_assertions) {
        let mut remaining = input.iter();
        for room in output {
            let found = remaining.any(|candidate| std::ptr::eq(candidate, *room));
            debug_assert!(
                found,
                "Filter output room {} is out of order or not from the input",
                room.id
            );
        }
    }
}
