//! Room filtering
//!
//! Computes the visible subset of rooms from the search box and the two
//! bucket selectors. All predicates are ANDed; unset criteria match everything.

use serde::{Deserialize, Serialize};

use crate::invariants::assert_filter_output_invariants;
use crate::models::Room;

/// Coarse capacity grouping used by the capacity selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityBucket {
    /// Up to 6 people
    Small,
    /// 7 to 15 people
    Medium,
    /// 16 people or more
    Large,
}

impl CapacityBucket {
    pub fn contains(&self, capacity: u32) -> bool {
        match self {
            CapacityBucket::Small => capacity <= 6,
            CapacityBucket::Medium => (7..=15).contains(&capacity),
            CapacityBucket::Large => capacity >= 16,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CapacityBucket::Small => "Até 6 pessoas",
            CapacityBucket::Medium => "7-15 pessoas",
            CapacityBucket::Large => "16+ pessoas",
        }
    }

    pub fn all() -> &'static [CapacityBucket] {
        &[
            CapacityBucket::Small,
            CapacityBucket::Medium,
            CapacityBucket::Large,
        ]
    }
}

/// Filter on the room's current free/occupied flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityBucket {
    Available,
    Unavailable,
}

impl AvailabilityBucket {
    pub fn matches(&self, is_available: bool) -> bool {
        match self {
            AvailabilityBucket::Available => is_available,
            AvailabilityBucket::Unavailable => !is_available,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityBucket::Available => "Disponíveis",
            AvailabilityBucket::Unavailable => "Ocupadas",
        }
    }

    pub fn all() -> &'static [AvailabilityBucket] {
        &[AvailabilityBucket::Available, AvailabilityBucket::Unavailable]
    }
}

/// Label of the "no constraint" option in both selectors
pub const ANY_BUCKET_LABEL: &str = "Todas";

/// Shown when the filters leave no rooms
pub const NO_ROOMS_MESSAGE: &str = "Nenhuma sala encontrada com os filtros aplicados.";

/// Transient filter criteria of the rooms view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomFilter {
    pub search: String,
    pub capacity: Option<CapacityBucket>,
    pub availability: Option<AvailabilityBucket>,
}

impl RoomFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_capacity(mut self, capacity: CapacityBucket) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_availability(mut self, availability: AvailabilityBucket) -> Self {
        self.availability = Some(availability);
        self
    }

    /// True when no criterion constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.capacity.is_none() && self.availability.is_none()
    }

    /// Case-insensitive substring match on name or location
    fn matches_search(&self, room: &Room) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        room.name.to_lowercase().contains(&needle) || room.location.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, room: &Room) -> bool {
        self.matches_search(room)
            && self.capacity.map_or(true, |b| b.contains(room.capacity))
            && self
                .availability
                .map_or(true, |b| b.matches(room.is_available))
    }

    /// Visible rooms, in catalog order
    pub fn apply<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        let visible: Vec<&Room> = rooms.iter().filter(|r| self.matches(r)).collect();
        assert_filter_output_invariants(rooms, &visible);
        visible
    }
}

/// Counters shown above the room grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub filtered: usize,
}

impl RoomStats {
    pub fn compute(rooms: &[Room], visible: &[&Room]) -> Self {
        let available = rooms.iter().filter(|r| r.is_available).count();
        Self {
            total: rooms.len(),
            available,
            occupied: rooms.len() - available,
            filtered: visible.len(),
        }
    }
}
