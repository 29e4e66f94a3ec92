use ilattice3::{Extent, Point};

/// The extent spanning the inclusive corners `min` and `max`. If `max` is below `min` on some
/// axis, the extent has a non-positive size there and contains no cells.
pub fn extent_from_corners(min: Point, max: Point) -> Extent {
    let sup: Point = [
        span(min.x, max.x),
        span(min.y, max.y),
        span(min.z, max.z),
    ]
    .into();

    Extent::from_min_and_local_supremum(min, sup)
}

/// Cells from `min` to `max` inclusive, clamped to the `i32` range.
fn span(min: i32, max: i32) -> i32 {
    let s = max as i64 - min as i64 + 1;

    s.max(i32::MIN as i64).min(i32::MAX as i64) as i32
}

pub fn extent_size(extent: &Extent) -> [i32; 3] {
    let sup = *extent.get_local_supremum();

    [sup.x, sup.y, sup.z]
}

/// Number of cells in the extent, or 0 if any axis is non-positive.
pub fn extent_num_cells(extent: &Extent) -> usize {
    let [sx, sy, sz] = extent_size(extent);
    if sx <= 0 || sy <= 0 || sz <= 0 {
        return 0;
    }

    (sx as usize)
        .saturating_mul(sy as usize)
        .saturating_mul(sz as usize)
}

/// Flattened index of the local offset `(dx, dy, dz)` in an extent of size `[sx, _, sz]`. Y is
/// the slowest axis and X the fastest.
pub fn local_index(size: [i32; 3], dx: i32, dy: i32, dz: i32) -> usize {
    let [sx, _, sz] = size;
    let (sx, sz) = (sx as usize, sz as usize);

    dy as usize * sx * sz + dz as usize * sx + dx as usize
}

/// Calls `f` with the local offset and world point of every cell in `extent`, in X-major order:
/// X is the outer loop and Z the inner one.
pub fn for_each_cell(extent: &Extent, mut f: impl FnMut([i32; 3], Point)) {
    let [sx, sy, sz] = extent_size(extent);
    let min = extent.get_minimum();
    let (x1, y1, z1) = (min.x, min.y, min.z);
    for dx in 0..sx {
        for dy in 0..sy {
            for dz in 0..sz {
                f([dx, dy, dz], [x1 + dx, y1 + dy, z1 + dz].into());
            }
        }
    }
}

/// Which cells of an extent belong to a room, one bit per cell in `local_index` order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OccupancyMask {
    bytes: Vec<u8>,
}

impl OccupancyMask {
    pub fn new(bytes: Vec<u8>) -> Self {
        OccupancyMask { bytes }
    }

    pub fn empty(num_cells: usize) -> Self {
        OccupancyMask {
            bytes: vec![0; (num_cells + 7) / 8],
        }
    }

    pub fn full(num_cells: usize) -> Self {
        let mut mask = Self::empty(num_cells);
        for i in 0..num_cells {
            mask.set(i, true);
        }

        mask
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bits past the end of the mask read as unoccupied.
    pub fn get(&self, index: usize) -> bool {
        self.bytes
            .get(index / 8)
            .map_or(false, |b| b & (1 << (index % 8)) != 0)
    }

    /// Grows the mask as needed.
    pub fn set(&mut self, index: usize, occupied: bool) {
        let byte = index / 8;
        if byte >= self.bytes.len() {
            self.bytes.resize(byte + 1, 0);
        }
        let bit = 1 << (index % 8);
        if occupied {
            self.bytes[byte] |= bit;
        } else {
            self.bytes[byte] &= !bit;
        }
    }

    pub fn count_occupied(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }
}
