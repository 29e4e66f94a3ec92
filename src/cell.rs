use crate::{
    color::Rgba,
    config::{ClassifierConfig, HighlightPalette},
    room::RoomContext,
};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BlockMaterial {
    Air,
    Soil,
    Gravel,
    Sand,
    Wood,
    Leaves,
    Plant,
    Liquid,
    Snow,
    Ice,
    Metal,
    Mantle,
    Ore,
    Stone,
    Glass,
    Ceramic,
    Cloth,
    Lava,
    Brick,
    Other,
}

/// What the world reports about one block in one layer at some position.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BlockFacts {
    /// The path part of the block's code, e.g. "glass-plain" or "cobblestoneslab-down".
    pub path: String,
    pub material: BlockMaterial,
    pub is_liquid: bool,
    pub has_collision: bool,
    /// Indexed by face: north, east, south, west, up, down.
    pub side_solid: [bool; 6],
    pub replaceable: i32,
}

impl BlockFacts {
    pub fn air() -> Self {
        BlockFacts {
            path: "air".to_string(),
            material: BlockMaterial::Air,
            is_liquid: false,
            has_collision: false,
            side_solid: [false; 6],
            replaceable: 9999,
        }
    }

    pub fn path_contains_any(&self, tags: &[String]) -> bool {
        tags.iter().any(|t| self.path.contains(t.as_str()))
    }

    pub fn any_side_solid(&self) -> bool {
        self.side_solid.iter().any(|s| *s)
    }
}

/// A read-only snapshot of the three block layers at one position.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CellFacts {
    pub default: Option<BlockFacts>,
    /// Not used for classification. Carried so world adapters can report a full snapshot.
    pub fluid: Option<BlockFacts>,
    pub solid: Option<BlockFacts>,
}

/// The visual category of a cell. Variants are declared in the order they are tested for
/// rooms with exits; `Fill` is what every cell of an enclosed room becomes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellCategory {
    Seal,
    Hole,
    Partial,
    Fill,
}

impl CellCategory {
    pub fn is_problem(self) -> bool {
        matches!(self, CellCategory::Hole | CellCategory::Partial)
    }
}

/// True if `solid` would keep a room closed at this position.
pub fn is_likely_room_seal(solid: Option<&BlockFacts>, config: &ClassifierConfig) -> bool {
    let block = match solid {
        Some(b) => b,
        None => return false,
    };

    block.replaceable < config.seal_replaceable_threshold
        && !block.is_liquid
        && block.material != BlockMaterial::Air
        && (block.any_side_solid() || block.path_contains_any(&config.seal_path_tags))
}

/// True if the default-layer block leaves a gap. A missing block counts as open air.
pub fn is_likely_hole(default: Option<&BlockFacts>, config: &ClassifierConfig) -> bool {
    match default {
        None => true,
        Some(b) => {
            !b.has_collision
                || b.path_contains_any(&config.hole_path_tags)
                || b.material == BlockMaterial::Plant
                || b.is_liquid
        }
    }
}

/// Structural category of a cell, ignoring the room it is in. Never returns `Fill`.
pub fn classify_structure(facts: Option<&CellFacts>, config: &ClassifierConfig) -> CellCategory {
    let (default, solid) = match facts {
        Some(f) => (f.default.as_ref(), f.solid.as_ref()),
        None => (None, None),
    };

    if is_likely_room_seal(solid, config) {
        CellCategory::Seal
    } else if is_likely_hole(default, config) {
        CellCategory::Hole
    } else {
        CellCategory::Partial
    }
}

/// Category and color for one occupied cell of a room.
pub fn classify_cell(
    facts: Option<&CellFacts>,
    room: &RoomContext,
    config: &ClassifierConfig,
    palette: &HighlightPalette,
) -> (CellCategory, Rgba) {
    if room.is_enclosed() {
        let color = if room.is_greenhouse() {
            palette.greenhouse
        } else if room.is_small_room {
            palette.cellar
        } else {
            palette.room
        };

        return (CellCategory::Fill, color);
    }

    let category = classify_structure(facts, config);
    let color = match category {
        CellCategory::Seal => palette.seal,
        CellCategory::Hole => {
            let soft = facts
                .and_then(|f| f.default.as_ref())
                .map_or(false, |b| b.path_contains_any(&config.soft_breach_path_tags));
            if soft {
                palette.soft_breach
            } else {
                palette.breach
            }
        }
        CellCategory::Partial => palette.partial,
        CellCategory::Fill => unreachable!("structural classification never yields Fill"),
    };

    (category, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEAL_REPLACEABLE_THRESHOLD;
    use crate::test_util::{block, cell, open_room, solid_cell};

    fn classify_open(facts: Option<&CellFacts>) -> (CellCategory, Rgba) {
        classify_cell(
            facts,
            &open_room(),
            &ClassifierConfig::default(),
            &HighlightPalette::default(),
        )
    }

    #[test]
    fn test_glass_without_solid_sides_is_seal() {
        let glass = block("glass-plain", BlockMaterial::Glass, [false; 6]);

        assert!(is_likely_room_seal(Some(&glass), &ClassifierConfig::default()));
        assert_eq!(
            classify_open(Some(&solid_cell(glass))),
            (CellCategory::Seal, Rgba::TRANSPARENT)
        );
    }

    #[test]
    fn test_every_allow_listed_path_seals_without_solid_sides() {
        let config = ClassifierConfig::default();
        let paths = [
            ("glass-plain", BlockMaterial::Glass),
            ("trapdoor-wood-closed", BlockMaterial::Wood),
            ("ironbars-north", BlockMaterial::Metal),
            ("drain-grate", BlockMaterial::Metal),
        ];
        for (path, material) in paths.iter() {
            let b = block(path, *material, [false; 6]);

            assert!(is_likely_room_seal(Some(&b), &config), "{} should seal", path);
            assert_eq!(classify_open(Some(&solid_cell(b))).0, CellCategory::Seal);
        }
    }

    #[test]
    fn test_fence_without_solid_sides_is_not_seal() {
        let fence = block("woodenfence-oak", BlockMaterial::Wood, [false; 6]);

        assert!(!is_likely_room_seal(Some(&fence), &ClassifierConfig::default()));
        assert_ne!(classify_open(Some(&solid_cell(fence))).0, CellCategory::Seal);
    }

    #[test]
    fn test_stone_with_one_solid_side_is_seal() {
        let mut sides = [false; 6];
        sides[4] = true;
        let stone = block("rock-granite", BlockMaterial::Stone, sides);

        assert!(is_likely_room_seal(Some(&stone), &ClassifierConfig::default()));
    }

    #[test]
    fn test_stone_without_solid_sides_is_not_seal() {
        let stone = block("rock-granite", BlockMaterial::Stone, [false; 6]);

        assert!(!is_likely_room_seal(Some(&stone), &ClassifierConfig::default()));
    }

    #[test]
    fn test_seal_rejects_flimsy_liquid_and_air() {
        let config = ClassifierConfig::default();

        let mut flimsy = block("rock-granite", BlockMaterial::Stone, [true; 6]);
        flimsy.replaceable = SEAL_REPLACEABLE_THRESHOLD;
        assert!(!is_likely_room_seal(Some(&flimsy), &config));

        let mut water = block("water-still-7", BlockMaterial::Liquid, [true; 6]);
        water.is_liquid = true;
        assert!(!is_likely_room_seal(Some(&water), &config));

        let air = block("glass-plain", BlockMaterial::Air, [true; 6]);
        assert!(!is_likely_room_seal(Some(&air), &config));

        assert!(!is_likely_room_seal(None, &config));
    }

    #[test]
    fn test_seal_takes_priority_over_plant_hole() {
        let mut sides = [false; 6];
        sides[0] = true;
        let plant = block("tallgrass-tall", BlockMaterial::Plant, sides);
        let facts = CellFacts {
            default: Some(plant.clone()),
            fluid: None,
            solid: Some(plant),
        };

        assert_eq!(classify_open(Some(&facts)).0, CellCategory::Seal);
    }

    #[test]
    fn test_missing_facts_are_a_red_hole() {
        let palette = HighlightPalette::default();

        assert_eq!(classify_open(None), (CellCategory::Hole, palette.breach));
        assert_eq!(
            classify_open(Some(&CellFacts::default())),
            (CellCategory::Hole, palette.breach)
        );
    }

    #[test]
    fn test_hole_signals() {
        let palette = HighlightPalette::default();

        assert_eq!(
            classify_open(Some(&cell(BlockFacts::air()))),
            (CellCategory::Hole, palette.breach)
        );

        let mut no_collision = block("rock-granite", BlockMaterial::Stone, [false; 6]);
        no_collision.has_collision = false;
        assert_eq!(classify_open(Some(&cell(no_collision))).0, CellCategory::Hole);

        let slab = block("cobblestoneslab-down", BlockMaterial::Stone, [false; 6]);
        assert_eq!(
            classify_open(Some(&cell(slab))),
            (CellCategory::Hole, palette.breach)
        );

        let plant = block("flower-catmint", BlockMaterial::Plant, [false; 6]);
        assert_eq!(classify_open(Some(&cell(plant))).0, CellCategory::Hole);

        let mut lava = block("lava-still-7", BlockMaterial::Lava, [false; 6]);
        lava.is_liquid = true;
        assert_eq!(classify_open(Some(&cell(lava))).0, CellCategory::Hole);
    }

    #[test]
    fn test_glass_and_trapdoor_holes_are_orange() {
        let palette = HighlightPalette::default();

        let mut pane = block("glasspane-plain", BlockMaterial::Glass, [false; 6]);
        pane.has_collision = false;
        assert_eq!(
            classify_open(Some(&cell(pane))),
            (CellCategory::Hole, palette.soft_breach)
        );

        let mut trapdoor = block("trapdoor-wood-opened", BlockMaterial::Wood, [false; 6]);
        trapdoor.has_collision = false;
        assert_eq!(
            classify_open(Some(&cell(trapdoor))),
            (CellCategory::Hole, palette.soft_breach)
        );
    }

    #[test]
    fn test_collidable_non_sealing_block_is_gray_partial() {
        let fence = block("woodenfence-oak", BlockMaterial::Wood, [false; 6]);

        assert_eq!(
            classify_open(Some(&cell(fence))),
            (CellCategory::Partial, HighlightPalette::default().partial)
        );
    }

    #[test]
    fn test_enclosed_rooms_fill_by_character() {
        let config = ClassifierConfig::default();
        let palette = HighlightPalette::default();
        let classify = |room: &RoomContext| classify_cell(None, room, &config, &palette);

        let mut room = RoomContext {
            exit_count: 0,
            skylight_count: 3,
            non_skylight_count: 1,
            is_small_room: true,
        };
        assert_eq!(classify(&room), (CellCategory::Fill, palette.greenhouse));

        room.skylight_count = 1;
        assert_eq!(classify(&room), (CellCategory::Fill, palette.cellar));

        room.is_small_room = false;
        assert_eq!(classify(&room), (CellCategory::Fill, palette.room));
    }
}
