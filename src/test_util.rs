use crate::{
    cell::{BlockFacts, BlockMaterial, CellFacts},
    room::RoomContext,
    CellFactsSource,
};

use fnv::FnvHashMap;
use ilattice3::Point;

/// A collidable, sturdy block.
pub fn block(path: &str, material: BlockMaterial, side_solid: [bool; 6]) -> BlockFacts {
    BlockFacts {
        path: path.to_string(),
        material,
        is_liquid: false,
        has_collision: true,
        side_solid,
        replaceable: 100,
    }
}

/// `b` in the default layer only.
pub fn cell(b: BlockFacts) -> CellFacts {
    CellFacts {
        default: Some(b),
        fluid: None,
        solid: None,
    }
}

/// `b` in both the default and solid layers.
pub fn solid_cell(b: BlockFacts) -> CellFacts {
    CellFacts {
        default: Some(b.clone()),
        fluid: None,
        solid: Some(b),
    }
}

pub fn stone_wall() -> CellFacts {
    solid_cell(block("rock-granite", BlockMaterial::Stone, [true; 6]))
}

pub fn enclosed_room() -> RoomContext {
    RoomContext {
        exit_count: 0,
        skylight_count: 0,
        non_skylight_count: 4,
        is_small_room: false,
    }
}

pub fn open_room() -> RoomContext {
    RoomContext {
        exit_count: 1,
        skylight_count: 0,
        non_skylight_count: 4,
        is_small_room: false,
    }
}

#[derive(Default)]
pub struct MapFacts {
    cells: FnvHashMap<Point, CellFacts>,
}

impl MapFacts {
    pub fn insert(&mut self, p: [i32; 3], facts: CellFacts) {
        self.cells.insert(p.into(), facts);
    }

    pub fn remove(&mut self, p: [i32; 3]) {
        self.cells.remove(&Point::from(p));
    }
}

impl CellFactsSource for MapFacts {
    fn cell_facts(&self, p: &Point) -> Option<CellFacts> {
        self.cells.get(p).cloned()
    }
}
