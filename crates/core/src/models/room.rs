//! Room model - a bookable meeting space

use std::fmt;

use serde::{Deserialize, Serialize};

/// Amenities shown on the room card before the overflow chip
pub const AMENITY_PREVIEW_LIMIT: usize = 3;

/// Amenity that gets its own highlight on the room card
pub const PROJECTOR_AMENITY: &str = "Projetor";

/// Catalog identifier of a room
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A meeting room from the catalog
///
/// Rooms are immutable once loaded; booking never flips availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub location: String,
    /// Ordered amenity tags as shown on the card
    #[serde(default)]
    pub amenities: Vec<String>,
    pub is_available: bool,
    /// Only meaningful while the room is occupied
    #[serde(default)]
    pub next_available: Option<String>,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32, location: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(id),
            name: name.into(),
            capacity,
            location: location.into(),
            amenities: Vec::new(),
            is_available: true,
            next_available: None,
        }
    }

    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the room as occupied until the given time label
    pub fn occupied_until(mut self, next_available: Option<&str>) -> Self {
        self.is_available = false;
        self.next_available = next_available.map(str::to_string);
        self
    }

    /// Booking is only offered for free rooms
    pub fn can_book(&self) -> bool {
        self.is_available
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    pub fn has_projector(&self) -> bool {
        self.has_amenity(PROJECTOR_AMENITY)
    }

    /// Next free time, hidden while the room is available
    pub fn next_available_label(&self) -> Option<String> {
        if self.is_available {
            return None;
        }
        self.next_available
            .as_deref()
            .map(|time| format!("Próximo horário: {}", time))
    }

    pub fn capacity_label(&self) -> String {
        format!("{} pessoas", self.capacity)
    }

    pub fn availability_label(&self) -> &'static str {
        if self.is_available {
            "Disponível"
        } else {
            "Ocupada"
        }
    }

    pub fn book_label(&self) -> &'static str {
        if self.is_available {
            "Reservar Sala"
        } else {
            "Indisponível"
        }
    }

    /// First amenities plus an overflow label ("+N mais") when some are hidden
    pub fn amenity_preview(&self) -> (&[String], Option<String>) {
        let shown = self.amenities.len().min(AMENITY_PREVIEW_LIMIT);
        let hidden = self.amenities.len() - shown;
        let overflow = (hidden > 0).then(|| format!("+{} mais", hidden));
        (&self.amenities[..shown], overflow)
    }
}
