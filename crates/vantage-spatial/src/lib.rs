//! Vantage Spatial Primitives
//!
//! Divides the world's horizontal plane into fixed-size square chunks and
//! provides the pure mapping from continuous positions to chunk coordinates.
//! The tracking engine builds on these types; it never does coordinate
//! arithmetic of its own.

pub mod chunk;
pub mod layout;
pub mod point;

pub use chunk::ChunkCoord;
pub use layout::{ChunkLayout, LayoutError};
pub use point::Point;
