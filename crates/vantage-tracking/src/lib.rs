//! Vantage Entity Tracking
//!
//! Maintains, per chunk cell, the set of live entities occupying that cell,
//! and answers the range queries observers use to decide what they currently
//! see. Mutation (every position update) and reads (every visibility
//! refresh) both run every tick; the [`Synchronized`] decorator makes the
//! two safe to interleave across threads.
//!
//! # Overview
//!
//! - [`ChunkIndex`] — chunk coordinate → entity set. Leaf storage.
//! - [`ChunkTracking`] — the plain in-memory tracker: registration,
//!   relocation, square-neighborhood and Euclidean range queries, and
//!   visibility deltas.
//! - [`EntityTracking`] — the contract both the plain tracker and any future
//!   sharded or tree-backed strategy implement.
//! - [`ViewDelta`] — the minimal addition/removal sets produced by one
//!   position transition; observers apply it incrementally instead of
//!   rebuilding their visible set.
//! - [`Synchronized`] — mutex decorator serializing every operation, so a
//!   concurrent reader never observes a half-applied move.
//!
//! # Example
//!
//! ```
//! use vantage_spatial::{ChunkCoord, ChunkLayout, Point};
//! use vantage_tracking::{ChunkTracking, EntityTracking, TrackedEntity};
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! struct Marker(u32);
//!
//! impl TrackedEntity for Marker {
//!     // A real handle reports its live position; markers never move.
//!     fn position(&self) -> Point {
//!         Point::default()
//!     }
//! }
//!
//! let mut tracking = ChunkTracking::new(ChunkLayout::default(), 2);
//! tracking.register(Marker(1), Point::new(8.0, 64.0, 8.0));
//!
//! let seen = tracking.chunk_range_entities(ChunkCoord::new(0, 0), 1);
//! assert_eq!(seen, vec![Marker(1)]);
//! ```

pub mod delta;
pub mod index;
pub mod sync;
pub mod tracking;

pub use delta::ViewDelta;
pub use index::ChunkIndex;
pub use sync::Synchronized;
pub use tracking::{ChunkTracking, EntityTracking, TrackedEntity};
