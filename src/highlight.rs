use crate::{
    cell::classify_cell,
    color::Rgba,
    config::HighlightConfig,
    diff_cache::DiffCache,
    extent::{extent_size, for_each_cell, local_index},
    room::Room,
    CellFactsSource,
};

use ilattice3::Point;
use serde::{Deserialize, Serialize};

/// How a scan treats what the cache remembers from earlier scans.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScanMode {
    /// Forget all previous emissions first, so every occupied cell is emitted.
    Rescan,
    /// Only emit cells whose color differs from what this cache last recorded.
    Continue,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Emission {
    pub position: Point,
    pub color: Rgba,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HighlightResult {
    pub emissions: Vec<Emission>,
    /// The overlay should drop every highlight it is showing.
    pub clear_all: bool,
}

impl HighlightResult {
    /// The result for hiding the overlay.
    pub fn clear() -> Self {
        HighlightResult {
            emissions: Vec::new(),
            clear_all: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty() && !self.clear_all
    }

    pub fn to_overlay_message(&self) -> OverlayMessage {
        OverlayMessage {
            positions: self
                .emissions
                .iter()
                .map(|e| [e.position.x, e.position.y, e.position.z])
                .collect(),
            colors: self.emissions.iter().map(|e| e.color.to_packed()).collect(),
            clear: self.clear_all,
        }
    }
}

/// The payload handed to whatever transports highlights to the overlay. `colors[i]` is the packed
/// color for `positions[i]`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OverlayMessage {
    pub positions: Vec<[i32; 3]>,
    pub colors: Vec<i32>,
    pub clear: bool,
}

impl OverlayMessage {
    pub fn hide() -> Self {
        HighlightResult::clear().to_overlay_message()
    }
}

impl HighlightConfig {
    /// Classifies every occupied cell of `room` and returns those whose color is new to `cache`,
    /// in X-major iteration order.
    pub fn compute_highlights(
        &self,
        room: &Room,
        facts: &impl CellFactsSource,
        cache: &mut DiffCache,
        mode: ScanMode,
    ) -> HighlightResult {
        log::debug!(
            "Highlighting room at {:?} size {:?}: exits = {}, skylights = {}, non-skylights = {}",
            room.location.get_minimum(),
            room.size(),
            room.context.exit_count,
            room.context.skylight_count,
            room.context.non_skylight_count,
        );
        log::debug!("Greenhouse = {}", room.context.is_greenhouse());

        if mode == ScanMode::Rescan {
            cache.reset();
        }

        let size = extent_size(&room.location);
        let mut emissions = Vec::new();
        let mut num_occupied = 0;
        for_each_cell(&room.location, |[dx, dy, dz], p| {
            if !room.occupancy.get(local_index(size, dx, dy, dz)) {
                return;
            }
            num_occupied += 1;

            let cell = facts.cell_facts(&p);
            let (category, color) = classify_cell(
                cell.as_ref(),
                &room.context,
                &self.classifier,
                &self.palette,
            );
            if !cache.should_emit(p, color) {
                return;
            }
            if category.is_problem() {
                let path = cell
                    .as_ref()
                    .and_then(|c| c.default.as_ref())
                    .map(|b| b.path.as_str());
                log::debug!("{:?} cell at {:?}: {:?}", category, p, path);
            }
            emissions.push(Emission { position: p, color });
        });
        log::debug!(
            "Emitting {} of {} occupied cells",
            emissions.len(),
            num_occupied
        );

        HighlightResult {
            emissions,
            clear_all: false,
        }
    }
}

/// `HighlightConfig::compute_highlights` with the default thresholds and palette. This builds a
/// fresh default config on every call; callers scanning repeatedly should hold a `HighlightConfig`
/// and call its method instead.
pub fn compute_highlights(
    room: &Room,
    facts: &impl CellFactsSource,
    cache: &mut DiffCache,
    mode: ScanMode,
) -> HighlightResult {
    HighlightConfig::default().compute_highlights(room, facts, cache, mode)
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
