use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel color with alpha.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Packs into the overlay's integer encoding, `0xAABBGGRR`.
    pub fn to_packed(self) -> i32 {
        ((self.a as u32) << 24 | (self.b as u32) << 16 | (self.g as u32) << 8 | self.r as u32)
            as i32
    }

    pub fn from_packed(packed: i32) -> Self {
        let p = packed as u32;

        Rgba {
            r: p as u8,
            g: (p >> 8) as u8,
            b: (p >> 16) as u8,
            a: (p >> 24) as u8,
        }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba { r, g, b, a }
    }
}
