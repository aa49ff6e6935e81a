//! Discrete chunk coordinates.

use std::fmt;

/// Coordinate of one chunk on the horizontal plane.
///
/// Chunks partition the x/z plane; the vertical axis is not chunked. Derived
/// from a [`Point`](crate::Point) via [`ChunkLayout`](crate::ChunkLayout).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Pack into a single i64 for compact map keys or wire transfer.
    #[must_use]
    pub const fn to_bits(self) -> i64 {
        ((self.x as i64) << 32) | (self.z as u32 as i64)
    }

    /// Unpack from [`ChunkCoord::to_bits`].
    #[must_use]
    pub const fn from_bits(bits: i64) -> Self {
        Self {
            x: (bits >> 32) as i32,
            z: bits as i32,
        }
    }

    /// Chebyshev distance to another chunk, in chunk units.
    ///
    /// This is the metric range queries use: a chunk is "within range r" of
    /// another iff both axis offsets are at most r.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dz = (self.z - other.z).unsigned_abs();
        if dx > dz { dx } else { dz }
    }

    /// All chunk coordinates in the square neighborhood of `self` with edge
    /// length `2 * range + 1`, i.e. every chunk whose offsets satisfy
    /// `|dx| <= range` and `|dz| <= range`. Range 0 yields only `self`.
    pub fn square_range(self, range: u32) -> impl Iterator<Item = Self> {
        let r = range as i32;
        (-r..=r).flat_map(move |dx| (-r..=r).map(move |dz| Self::new(self.x + dx, self.z + dz)))
    }
}

impl fmt::Debug for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({}, {})", self.x, self.z)
    }
}

impl fmt::Display for ChunkCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
