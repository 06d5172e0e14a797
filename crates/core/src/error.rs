//! Error types for Reserva Core

use thiserror::Error;

use crate::booking::BookingField;
use crate::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing required fields: {}", field_list(.0))]
    MissingFields(Vec<BookingField>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid time slot: {0}")]
    InvalidTimeSlot(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

fn field_list(fields: &[BookingField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
