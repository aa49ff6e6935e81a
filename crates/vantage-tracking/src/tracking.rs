//! The tracking contract and its plain in-memory implementation.

use std::hash::Hash;

use tracing::trace;
use vantage_spatial::{ChunkCoord, ChunkLayout, Point};

use crate::delta::ViewDelta;
use crate::index::{ChunkIndex, EntitySet};
use crate::sync::Synchronized;

/// A handle to a mobile object the tracker follows.
///
/// Handles are opaque: cheap to clone, compared by identity, and able to
/// report their current position. The owning simulation is the source of
/// truth for position at call time; the tracker never caches positions and
/// only holds handles through cell membership.
pub trait TrackedEntity: Clone + Eq + Hash {
    /// The entity's current world position.
    fn position(&self) -> Point;
}

/// The tracking contract: per-chunk registration plus the range queries
/// observers use to decide what they see.
///
/// Implementations are not required to be thread-safe. Wrap one in
/// [`Synchronized`] via [`EntityTracking::synchronized`] before sharing it
/// across threads.
///
/// # Contract
///
/// Per entity the lifecycle is register → any number of moves → unregister.
/// Moving or unregistering an entity that is not registered where the
/// supplied points claim is a caller defect: it is checked by debug
/// assertions, not tolerated as a safe no-op, because silently proceeding
/// would leave the index claiming membership the world no longer has.
pub trait EntityTracking {
    /// The entity handle type being tracked.
    type Entity: TrackedEntity;

    /// Register an entity at its spawn point.
    fn register(&mut self, entity: Self::Entity, point: Point);

    /// Register, then return the entities within `range` chunks of the spawn
    /// chunk, all under one call (one critical section under
    /// [`Synchronized`]). The returned view includes the new entity itself.
    fn register_and_view(&mut self, entity: Self::Entity, point: Point, range: u32)
    -> Vec<Self::Entity>;

    /// Remove an entity. `point` only has to map to the entity's current
    /// chunk; any point in that chunk is accepted.
    fn unregister(&mut self, entity: &Self::Entity, point: Point);

    /// Relocate an entity. When both points map to the same chunk this is a
    /// pure no-op; otherwise the entity atomically leaves the old cell and
    /// enters the new one.
    fn move_entity(&mut self, entity: &Self::Entity, old_point: Point, new_point: Point);

    /// Relocate as [`EntityTracking::move_entity`], then return the moved
    /// entity's own viewer delta between the two positions at the configured
    /// view range. The entity itself appears on neither side.
    fn move_and_view(
        &mut self,
        entity: &Self::Entity,
        old_point: Point,
        new_point: Point,
    ) -> ViewDelta<Self::Entity>;

    /// Entities registered in exactly the given chunk.
    fn chunk_entities(&self, chunk: ChunkCoord) -> Vec<Self::Entity>;

    /// Entities in the square neighborhood of `chunk` with edge length
    /// `2 * range + 1`. No ordering is guaranteed.
    fn chunk_range_entities(&self, chunk: ChunkCoord, range: u32) -> Vec<Self::Entity>;

    /// Entities within Euclidean `radius` of `point`.
    ///
    /// Coarse-then-exact: candidate chunks are enumerated through the
    /// covering chunk range, then candidates are filtered by their actual
    /// distance from `point`.
    fn nearby_entities(&self, point: Point, radius: f64) -> Vec<Self::Entity>;

    /// The visibility delta an observer at the configured view range sees
    /// when moving from `p1` to `p2`. A pure query; neither point's entity
    /// sets are modified, and the observer itself need not be registered.
    fn difference(&self, p1: Point, p2: Point) -> ViewDelta<Self::Entity>;

    /// Number of registered entities.
    fn entity_count(&self) -> usize;

    /// True when no entity is registered.
    fn is_empty(&self) -> bool {
        self.entity_count() == 0
    }

    /// Wrap this tracker for shared multi-thread use.
    ///
    /// Applied once at construction. [`Synchronized`] does not implement
    /// this trait, so wrapping twice is rejected at compile time; that is
    /// the static form of an idempotent `synchronize` factory.
    fn synchronized(self) -> Synchronized<Self>
    where
        Self: Sized,
    {
        Synchronized::new(self)
    }
}

/// Plain in-memory tracker. One per world instance, exclusively owning its
/// [`ChunkIndex`]; not thread-safe on its own.
pub struct ChunkTracking<E> {
    index: ChunkIndex<E>,
    layout: ChunkLayout,
    view_range: u32,
}

impl<E: TrackedEntity> ChunkTracking<E> {
    /// Create a tracker.
    ///
    /// `view_range` is the fixed observer range, in chunks, that
    /// [`EntityTracking::difference`] and [`EntityTracking::move_and_view`]
    /// compute deltas at.
    #[must_use]
    pub fn new(layout: ChunkLayout, view_range: u32) -> Self {
        Self {
            index: ChunkIndex::new(),
            layout,
            view_range,
        }
    }

    /// The world-to-chunk mapping this tracker was built with.
    #[must_use]
    pub fn layout(&self) -> ChunkLayout {
        self.layout
    }

    /// The fixed observer view range, in chunks.
    #[must_use]
    pub fn view_range(&self) -> u32 {
        self.view_range
    }

    /// Union of the cells in the square neighborhood of `chunk`.
    fn range_snapshot(&self, chunk: ChunkCoord, range: u32) -> EntitySet<E> {
        let mut snapshot = EntitySet::default();
        for coord in chunk.square_range(range) {
            if let Some(cell) = self.index.cell(coord) {
                snapshot.extend(cell.iter().cloned());
            }
        }
        snapshot
    }
}

impl<E: TrackedEntity> EntityTracking for ChunkTracking<E> {
    type Entity = E;

    fn register(&mut self, entity: E, point: Point) {
        let chunk = self.layout.chunk_at(point);
        trace!(%chunk, "register entity");
        self.index.insert(chunk, entity);
    }

    fn register_and_view(&mut self, entity: E, point: Point, range: u32) -> Vec<E> {
        let chunk = self.layout.chunk_at(point);
        trace!(%chunk, range, "register entity with view");
        self.index.insert(chunk, entity);
        self.chunk_range_entities(chunk, range)
    }

    fn unregister(&mut self, entity: &E, point: Point) {
        let chunk = self.layout.chunk_at(point);
        trace!(%chunk, "unregister entity");
        let removed = self.index.remove(chunk, entity);
        debug_assert!(removed, "unregistered entity was not present in {chunk:?}");
    }

    fn move_entity(&mut self, entity: &E, old_point: Point, new_point: Point) {
        let from = self.layout.chunk_at(old_point);
        let to = self.layout.chunk_at(new_point);
        if from == to {
            return;
        }
        let removed = self.index.remove(from, entity);
        debug_assert!(removed, "moved entity was not present in {from:?}");
        self.index.insert(to, entity.clone());
        trace!(%from, %to, "entity crossed chunks");
    }

    fn move_and_view(&mut self, entity: &E, old_point: Point, new_point: Point) -> ViewDelta<E> {
        let from = self.layout.chunk_at(old_point);
        let to = self.layout.chunk_at(new_point);
        if from == to {
            return ViewDelta::new(EntitySet::default(), EntitySet::default());
        }
        self.move_entity(entity, old_point, new_point);

        let mut before = self.range_snapshot(from, self.view_range);
        let mut after = self.range_snapshot(to, self.view_range);
        // The mover's own membership is not part of its view of others.
        before.remove(entity);
        after.remove(entity);
        ViewDelta::new(before, after)
    }

    fn chunk_entities(&self, chunk: ChunkCoord) -> Vec<E> {
        self.index.entities_at(chunk).cloned().collect()
    }

    fn chunk_range_entities(&self, chunk: ChunkCoord, range: u32) -> Vec<E> {
        chunk
            .square_range(range)
            .flat_map(|coord| self.index.entities_at(coord))
            .cloned()
            .collect()
    }

    fn nearby_entities(&self, point: Point, radius: f64) -> Vec<E> {
        let range = self.layout.range_for_radius(radius);
        let origin = self.layout.chunk_at(point);
        let radius_squared = radius * radius;
        origin
            .square_range(range)
            .flat_map(|coord| self.index.entities_at(coord))
            .filter(|entity| entity.position().distance_squared(point) <= radius_squared)
            .cloned()
            .collect()
    }

    fn difference(&self, p1: Point, p2: Point) -> ViewDelta<E> {
        let before = self.range_snapshot(self.layout.chunk_at(p1), self.view_range);
        let after = self.range_snapshot(self.layout.chunk_at(p2), self.view_range);
        ViewDelta::new(before, after)
    }

    fn entity_count(&self) -> usize {
        self.index.entity_count()
    }
}
