use crate::extent::{extent_from_corners, extent_num_cells, extent_size, OccupancyMask};

use ilattice3::{Extent, Point};
use serde::{Deserialize, Serialize};

const ENCLOSURE_BONUS: i64 = 10_000;
const GREENHOUSE_BONUS: i64 = 1_000;

/// What the room detector concluded about a room as a whole.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoomContext {
    pub exit_count: u32,
    pub skylight_count: u32,
    pub non_skylight_count: u32,
    pub is_small_room: bool,
}

impl RoomContext {
    pub fn is_enclosed(&self) -> bool {
        self.exit_count == 0
    }

    pub fn is_greenhouse(&self) -> bool {
        self.skylight_count > self.non_skylight_count
    }
}

/// A room as reported by the room detector: its bounding extent, which cells of that extent are
/// inside the room, and the room-level context.
#[derive(Clone, Debug)]
pub struct Room {
    pub location: Extent,
    pub occupancy: OccupancyMask,
    pub context: RoomContext,
}

impl Room {
    pub fn new(location: Extent, occupancy: OccupancyMask, context: RoomContext) -> Self {
        Room {
            location,
            occupancy,
            context,
        }
    }

    /// A room occupying every cell between the inclusive corners `min` and `max`.
    pub fn filled(min: Point, max: Point, context: RoomContext) -> Self {
        let location = extent_from_corners(min, max);
        let occupancy = OccupancyMask::full(extent_num_cells(&location));

        Room::new(location, occupancy, context)
    }

    pub fn size(&self) -> [i32; 3] {
        extent_size(&self.location)
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.location.contains_world(p)
    }

    /// Degenerate single-cell rooms are detector noise.
    pub fn is_valid(&self) -> bool {
        let [sx, sy, sz] = self.size();

        sx > 0 && sy > 0 && sz > 0 && !(sx == 1 && sy == 1 && sz == 1)
    }

    /// Preference when several rooms are candidates for the same spot: enclosed beats open,
    /// greenhouses beat other rooms, then bigger beats smaller.
    pub fn score(&self) -> i64 {
        let enclosure_bonus = if self.context.is_enclosed() {
            ENCLOSURE_BONUS
        } else {
            0
        };
        let greenhouse_bonus = if self.context.is_greenhouse() {
            GREENHOUSE_BONUS
        } else {
            0
        };

        enclosure_bonus + greenhouse_bonus + extent_num_cells(&self.location) as i64
    }

    pub fn summary_line(&self, index: usize) -> String {
        let [sx, sy, sz] = self.size();
        let kind = if self.context.is_small_room {
            "Cellar"
        } else {
            "Room"
        };
        let exits = if self.context.is_enclosed() {
            "enclosed OK".to_string()
        } else {
            format!("open ({} exits) X", self.context.exit_count)
        };

        format!("[{}] {}x{}x{} {}, {}", index, sx, sy, sz, kind, exits)
    }
}

/// The highest scoring valid room. Ties go to the earliest candidate.
pub fn choose_best_room<'a>(candidates: impl IntoIterator<Item = &'a Room>) -> Option<&'a Room> {
    let mut best: Option<(&Room, i64)> = None;
    for room in candidates.into_iter().filter(|r| r.is_valid()) {
        let score = room.score();
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((room, score));
        }
    }

    best.map(|(room, _)| room)
}

pub fn describe_rooms(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return "No rooms found in this chunk.".to_string();
    }

    let mut out = format!("Found {} rooms in this chunk:\n", rooms.len());
    for (i, room) in rooms.iter().enumerate() {
        out.push_str(&room.summary_line(i));
        out.push('\n');
    }

    out
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
