use crate::color::Rgba;

use serde::{Deserialize, Serialize};

/// Blocks at or above this "replaceable" value are too flimsy to seal a room.
pub const SEAL_REPLACEABLE_THRESHOLD: i32 = 6000;

/// Thresholds and path tags used to sort a cell into a category.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub seal_replaceable_threshold: i32,
    /// Path fragments of blocks that seal a room even with no solid side.
    pub seal_path_tags: Vec<String>,
    /// Path fragments that mark the default-layer block as a hole.
    pub hole_path_tags: Vec<String>,
    /// Path fragments of holes that get the softer breach color.
    pub soft_breach_path_tags: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            seal_replaceable_threshold: SEAL_REPLACEABLE_THRESHOLD,
            seal_path_tags: tags(&["glass", "trapdoor", "bars", "grate"]),
            hole_path_tags: tags(&["slab"]),
            soft_breach_path_tags: tags(&["glass", "trapdoor"]),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HighlightPalette {
    /// Holes made of glass or trapdoors.
    pub soft_breach: Rgba,
    pub breach: Rgba,
    pub partial: Rgba,
    pub seal: Rgba,
    pub greenhouse: Rgba,
    pub cellar: Rgba,
    pub room: Rgba,
}

impl Default for HighlightPalette {
    fn default() -> Self {
        Self {
            soft_breach: Rgba::new(255, 180, 0, 120),
            breach: Rgba::new(255, 0, 0, 180),
            partial: Rgba::new(180, 180, 180, 120),
            seal: Rgba::TRANSPARENT,
            greenhouse: Rgba::new(50, 255, 100, 120),
            cellar: Rgba::new(0, 180, 255, 120),
            room: Rgba::new(255, 200, 0, 120),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub classifier: ClassifierConfig,
    pub palette: HighlightPalette,
}

impl HighlightConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ron::Error> {
        ron::de::from_str(s)
    }

    pub fn read_file(path: &str) -> Result<Self, ron::Error> {
        let reader = std::fs::File::open(path)?;

        ron::de::from_reader(reader)
    }
}

fn tags(t: &[&str]) -> Vec<String> {
    t.iter().map(|s| s.to_string()).collect()
}
