//! Room and reservation catalog
//!
//! The catalog is static data parsed from TOML. A built-in copy ships with
//! the crate; a replacement can be loaded from disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::invariants::{assert_reservation_invariants, assert_room_invariants};
use crate::models::{Reservation, ReservationId, Room, RoomId};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Error type for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Duplicate room id '{0}'")]
    DuplicateRoomId(RoomId),
    #[error("Duplicate reservation id '{0}'")]
    DuplicateReservationId(ReservationId),
    #[error("Invalid room '{id}': {reason}")]
    InvalidRoom { id: RoomId, reason: String },
    #[error("Invalid reservation '{id}': {reason}")]
    InvalidReservation { id: ReservationId, reason: String },
}

/// Rooms and reservations, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    rooms: Vec<Room>,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

impl Catalog {
    /// The mock catalog bundled with the crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from TOML content
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file from disk
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml(&content)?;

        tracing::info!(
            rooms = catalog.rooms.len(),
            reservations = catalog.reservations.len(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut room_ids = HashSet::new();
        for room in &self.rooms {
            if !room_ids.insert(&room.id) {
                return Err(CatalogError::DuplicateRoomId(room.id.clone()));
            }
            if room.capacity == 0 {
                return Err(CatalogError::InvalidRoom {
                    id: room.id.clone(),
                    reason: "capacity must be positive".to_string(),
                });
            }
            if room.name.trim().is_empty() {
                return Err(CatalogError::InvalidRoom {
                    id: room.id.clone(),
                    reason: "name is empty".to_string(),
                });
            }
            if room.is_available && room.next_available.is_some() {
                tracing::warn!(room = %room.id, "Ignoring next_available on an available room");
            }
            assert_room_invariants(room);
        }

        let mut reservation_ids = HashSet::new();
        for reservation in &self.reservations {
            if !reservation_ids.insert(&reservation.id) {
                return Err(CatalogError::DuplicateReservationId(reservation.id.clone()));
            }
            if reservation.organizer.trim().is_empty() {
                return Err(CatalogError::InvalidReservation {
                    id: reservation.id.clone(),
                    reason: "organizer is empty".to_string(),
                });
            }
            if reservation.attendees == Some(0) {
                return Err(CatalogError::InvalidReservation {
                    id: reservation.id.clone(),
                    reason: "attendee count must be positive".to_string(),
                });
            }
            assert_reservation_invariants(reservation);
        }

        Ok(())
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    pub fn reservation(&self, id: &ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| &r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReservationStatus;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.rooms().len(), 5);
        assert_eq!(catalog.reservations().len(), 2);

        let brainstorm = catalog.room(&RoomId::new("2")).unwrap();
        assert_eq!(brainstorm.name, "Sala de Brainstorm");
        assert!(!brainstorm.is_available);
        assert_eq!(brainstorm.next_available.as_deref(), Some("14:00"));

        let first = catalog.reservation(&ReservationId::new("1")).unwrap();
        assert_eq!(first.organizer, "João Silva");
        assert_eq!(first.status, ReservationStatus::Confirmed);
        assert_eq!(first.time_range_label(), "10:00 - 11:30");
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.room(&RoomId::new("99")).is_none());
        assert!(catalog.reservation(&ReservationId::new("99")).is_none());
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let toml = r#"
[[rooms]]
id = "1"
name = "A"
capacity = 4
location = "x"
is_available = true

[[rooms]]
id = "1"
name = "B"
capacity = 6
location = "y"
is_available = true
"#;
        let result = Catalog::from_toml(toml);
        assert!(matches!(result, Err(CatalogError::DuplicateRoomId(_))));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let toml = r#"
[[rooms]]
id = "1"
name = "Closet"
capacity = 0
location = "x"
is_available = true
"#;
        let result = Catalog::from_toml(toml);
        assert!(matches!(result, Err(CatalogError::InvalidRoom { .. })));
    }

    #[test]
    fn test_off_grid_reservation_time_rejected() {
        let toml = r#"
[[reservations]]
id = "1"
room_name = "Sala"
room_location = "x"
organizer = "Ana"
date = "2025-01-10"
start_time = "10:15"
end_time = "11:00"
status = "pending"
"#;
        assert!(matches!(Catalog::from_toml(toml), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_blank_organizer_rejected() {
        let toml = r#"
[[reservations]]
id = "1"
room_name = "Sala"
room_location = "x"
organizer = " "
date = "2025-01-10"
start_time = "10:00"
end_time = "11:00"
status = "confirmed"
"#;
        assert!(matches!(
            Catalog::from_toml(toml),
            Err(CatalogError::InvalidReservation { .. })
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_toml("").unwrap();
        assert!(catalog.rooms().is_empty());
        assert!(catalog.reservations().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[rooms]]
id = "x"
name = "Sala X"
capacity = 10
location = "3º Andar"
is_available = true
"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.rooms().len(), 1);
        assert_eq!(catalog.rooms()[0].name, "Sala X");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
