//! Data models for Reserva

mod reservation;
mod room;

pub use reservation::*;
pub use room::*;
