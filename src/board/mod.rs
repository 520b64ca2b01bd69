//! Static campus board: room names, adjacency, and display coordinates.
//!
//! The board is fixed data consumed by movement logic outside the engine.
//! The engine itself only stores each player's `position` and validates
//! room indices when a card effect moves someone.

use serde::{Deserialize, Serialize};

/// Room identifier, an index into the static room tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u8);

impl RoomId {
    /// Create a new room ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw room index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Room({})", self.0)
    }
}

/// Number of rooms on the board.
pub const ROOM_COUNT: usize = 21;

/// Where every player starts: ECS 308.
pub const START_ROOM: RoomId = RoomId(17);

static ROOM_NAMES: [&str; ROOM_COUNT] = [
    "George Allen Field",
    "Japanese Garden",
    "Student Parking",
    "The Pyramid",
    "West Walkway",
    "Rec Center",
    "Forbidden Parking",
    "Library",
    "LA 5",
    "Bratwurst Hall",
    "East Walkway",
    "Computer Lab",
    "North Hall",
    "Room of Retirement",
    "ECS 302",
    "South Hall",
    "Elevators",
    "ECS 308",
    "EAT Club",
    "CECS Conference Room",
    "Lactation Lounge",
];

static ROOM_NEIGHBORS: [&[u8]; ROOM_COUNT] = [
    &[1, 3, 4, 5],
    &[0, 2, 3],
    &[1, 3, 5, 6],
    &[0, 1, 2, 5],
    &[0, 5, 7, 12],
    &[0, 2, 3, 4, 6],
    &[2, 5, 10],
    &[4, 8],
    &[7, 9, 16],
    &[8, 10],
    &[6, 9, 15],
    &[12],
    &[4, 11, 13, 14, 15, 16],
    &[12],
    &[12, 15],
    &[10, 12, 14, 17, 18, 19, 20],
    &[8, 12],
    &[15],
    &[15],
    &[15],
    &[15],
];

static ROOM_COORDINATES: [(i32, i32); ROOM_COUNT] = [
    (38, 97),
    (465, 54),
    (964, 66),
    (434, 288),
    (27, 696),
    (534, 572),
    (1282, 512),
    (71, 1726),
    (570, 1766),
    (1132, 1636),
    (1463, 975),
    (216, 893),
    (191, 1167),
    (298, 1369),
    (600, 892),
    (1000, 1160),
    (594, 1406),
    (816, 1347),
    (1021, 891),
    (1249, 887),
    (1209, 1401),
];

/// Check whether a room index is on the board.
#[must_use]
pub fn is_valid(room: RoomId) -> bool {
    room.index() < ROOM_COUNT
}

/// Display name of a room.
///
/// Panics on an off-board index; room IDs come from the static tables or
/// validated card effects.
#[must_use]
pub fn room_name(room: RoomId) -> &'static str {
    ROOM_NAMES[room.index()]
}

/// Rooms reachable from the given room in one move.
pub fn neighbors(room: RoomId) -> impl Iterator<Item = RoomId> {
    ROOM_NEIGHBORS[room.index()].iter().map(|&i| RoomId(i))
}

/// Display coordinates of a room.
#[must_use]
pub fn coordinates(room: RoomId) -> (i32, i32) {
    ROOM_COORDINATES[room.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_room() {
        assert!(is_valid(START_ROOM));
        assert_eq!(room_name(START_ROOM), "ECS 308");
    }

    #[test]
    fn test_room_validity() {
        assert!(is_valid(RoomId::new(0)));
        assert!(is_valid(RoomId::new(20)));
        assert!(!is_valid(RoomId::new(21)));
    }

    #[test]
    fn test_neighbors_on_board() {
        for i in 0..ROOM_COUNT as u8 {
            let room = RoomId::new(i);
            for neighbor in neighbors(room) {
                assert!(is_valid(neighbor), "{} has off-board neighbor", room);
                assert_ne!(neighbor, room, "{} lists itself as a neighbor", room);
            }
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for i in 0..ROOM_COUNT as u8 {
            let room = RoomId::new(i);
            for neighbor in neighbors(room) {
                assert!(
                    neighbors(neighbor).any(|back| back == room),
                    "{} -> {} is one-way",
                    room,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn test_coordinates_present() {
        for i in 0..ROOM_COUNT as u8 {
            let (x, y) = coordinates(RoomId::new(i));
            assert!(x >= 0 && y >= 0);
        }
    }
}
