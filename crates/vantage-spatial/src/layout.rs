//! World-to-chunk mapping.

use thiserror::Error;

use crate::{ChunkCoord, Point};

/// Error constructing a [`ChunkLayout`].
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Chunk size must be a positive, finite number of world units.
    #[error("chunk size must be positive and finite, got {0}")]
    InvalidChunkSize(f64),
}

/// The pure mapping from world positions to chunk coordinates.
///
/// Chunks are fixed-size squares on the horizontal plane. Floor semantics:
/// a point exactly on a chunk boundary belongs to the chunk on its
/// lower-coordinate side, so two points map to the same [`ChunkCoord`] iff
/// they lie in the same cell. This mapping owns that tie-break; nothing
/// downstream re-decides it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkLayout {
    chunk_size: f64,
}

impl ChunkLayout {
    /// Edge length of a chunk in world units, used by [`ChunkLayout::default`].
    pub const DEFAULT_CHUNK_SIZE: f64 = 16.0;

    /// Create a layout with the given chunk edge length.
    pub fn new(chunk_size: f64) -> Result<Self, LayoutError> {
        if !chunk_size.is_finite() || chunk_size <= 0.0 {
            return Err(LayoutError::InvalidChunkSize(chunk_size));
        }
        Ok(Self { chunk_size })
    }

    /// The chunk edge length in world units.
    #[must_use]
    pub const fn chunk_size(self) -> f64 {
        self.chunk_size
    }

    /// The chunk containing the given point.
    #[must_use]
    pub fn chunk_at(self, point: Point) -> ChunkCoord {
        debug_assert!(point.is_finite(), "non-finite point {point}");
        ChunkCoord::new(
            (point.x / self.chunk_size).floor() as i32,
            (point.z / self.chunk_size).floor() as i32,
        )
    }

    /// Smallest chunk range whose square neighborhood around a point's chunk
    /// is guaranteed to contain every position within Euclidean `radius` of
    /// that point.
    ///
    /// # Panics
    /// A negative or non-finite radius is a caller defect.
    #[must_use]
    pub fn range_for_radius(self, radius: f64) -> u32 {
        assert!(
            radius.is_finite() && radius >= 0.0,
            "radius must be finite and non-negative, got {radius}"
        );
        (radius / self.chunk_size).ceil() as u32
    }
}

impl Default for ChunkLayout {
    fn default() -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
        }
    }
}
