use crate::color::Rgba;

use fnv::{FnvHashMap, FnvHasher};
use ilattice3::Point;
use std::hash::{Hash, Hasher};

/// Remembers the color last emitted for each world position so a repeated scan only reports
/// cells whose color changed.
///
/// Entries are never evicted; the map is only emptied by a rescan. Positions are world
/// coordinates, so entries left over from one room would suppress emissions for another room
/// covering the same cells.
#[derive(Default)]
pub struct DiffCache {
    map: FnvHashMap<Point, u64>,
}

impl DiffCache {
    pub fn new() -> Self {
        DiffCache {
            map: FnvHashMap::default(),
        }
    }

    fn signature(color: Rgba) -> u64 {
        let mut hasher = FnvHasher::default();
        color.to_packed().hash(&mut hasher);

        hasher.finish()
    }

    pub(crate) fn reset(&mut self) {
        self.map.clear();
    }

    /// Returns true and records `color` if it differs from what was last recorded for `p`.
    pub fn should_emit(&mut self, p: Point, color: Rgba) -> bool {
        let sig = Self::signature(color);
        if self.map.get(&p) == Some(&sig) {
            return false;
        }
        self.map.insert(p, sig);

        true
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
