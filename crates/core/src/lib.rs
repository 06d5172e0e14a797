//! Reserva Core Library
//!
//! Room and reservation models, the static catalog, room filtering and
//! booking form validation for the Reserva meeting-room app.

pub mod booking;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod invariants;
pub mod models;
pub mod schedule;

pub use booking::{parse_attendees, BookingField, BookingForm, BookingRequest, RoomRef};
pub use catalog::{Catalog, CatalogError};
pub use error::{Error, Result};
pub use filter::{AvailabilityBucket, CapacityBucket, RoomFilter, RoomStats};
pub use models::*;
pub use schedule::{format_date, is_selectable_date, parse_date, TimeSlot};
