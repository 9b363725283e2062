// Room filtering and grouping for the hostel detail view.

use serde::{Deserialize, Serialize};

use crate::catalog::{Room, RoomKind};

// Price split used by the price-range filter, in whole currency units.
// A room priced exactly at the threshold counts as "above".
pub const PRICE_THRESHOLD: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Availability {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "occupied")]
    Occupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PriceRange {
    #[serde(rename = "below_100k")]
    Below100k,
    #[serde(rename = "above_100k")]
    Above100k,
}

impl PriceRange {
    pub fn contains(&self, price: u32) -> bool {
        match self {
            PriceRange::Below100k => price < PRICE_THRESHOLD,
            PriceRange::Above100k => price >= PRICE_THRESHOLD,
        }
    }
}

// Filter criteria for the room list. `None` on a dimension means "all";
// the four predicates are ANDed.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub room_kind: Option<RoomKind>,
    pub availability: Option<Availability>,
    pub price_range: Option<PriceRange>,
    pub floor: Option<String>,
}

// Extract the rooms matching the given criteria, preserving source order.
pub fn filter_rooms<'a>(rooms: &'a [Room], filter: &RoomFilter) -> Vec<&'a Room> {
    let mut filtered = Vec::new();

    for room in rooms {
        if !filter.room_kind.map_or(true, |kind| room.kind == kind) {
            continue;
        }

        if !filter.availability.map_or(true, |availability| match availability {
            Availability::Available => room.available,
            Availability::Occupied => !room.available,
        }) {
            continue;
        }

        if !filter
            .price_range
            .map_or(true, |range| range.contains(room.price))
        {
            continue;
        }

        if !filter
            .floor
            .as_ref()
            .map_or(true, |floor| &room.floor == floor)
        {
            continue;
        }

        filtered.push(room);
    }

    filtered
}

// Partition rooms by kind for the grouped listing. Keys appear in
// first-seen order; rooms keep their source order within each group.
pub fn group_by_kind<'a>(rooms: &[&'a Room]) -> Vec<(RoomKind, Vec<&'a Room>)> {
    let mut groups: Vec<(RoomKind, Vec<&'a Room>)> = Vec::new();

    for &room in rooms {
        match groups.iter_mut().find(|(kind, _)| *kind == room.kind) {
            Some((_, members)) => members.push(room),
            None => groups.push((room.kind, vec![room])),
        }
    }

    groups
}

// Count shown in the "N Available" badge.
pub fn available_count(rooms: &[&Room]) -> usize {
    rooms.iter().filter(|r| r.available).count()
}
