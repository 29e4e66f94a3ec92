pub mod cell;
pub mod color;
pub mod config;
pub mod diff_cache;
pub mod extent;
pub mod highlight;
pub mod refresh;
pub mod room;

#[cfg(test)]
mod test_util;

pub use cell::{BlockFacts, BlockMaterial, CellCategory, CellFacts};
pub use color::Rgba;
pub use config::{ClassifierConfig, HighlightConfig, HighlightPalette};
pub use diff_cache::DiffCache;
pub use highlight::{compute_highlights, Emission, HighlightResult, OverlayMessage, ScanMode};
pub use room::{choose_best_room, describe_rooms, Room, RoomContext};

use ilattice3::Point;

/// Implement this to let the highlighter read the blocks of your voxel world.
pub trait CellFactsSource {
    /// `None` if nothing is known about `point`, e.g. because it isn't loaded. Such cells are
    /// treated as open air.
    fn cell_facts(&self, point: &Point) -> Option<CellFacts>;
}
