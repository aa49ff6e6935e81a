//! Thread-safe tracking decorator.

use parking_lot::Mutex;
use vantage_spatial::{ChunkCoord, Point};

use crate::delta::ViewDelta;
use crate::tracking::EntityTracking;

/// Serializes every tracking operation behind one mutex.
///
/// Each operation is a single critical section, so a concurrent reader never
/// observes a half-applied move: an entity crossing chunks is in exactly one
/// cell from every reader's point of view. All operations take `&self`;
/// share the instance (typically in an `Arc`) across threads.
///
/// Built once at construction via [`EntityTracking::synchronized`].
/// `Synchronized` does not implement [`EntityTracking`] itself — its whole
/// purpose is the `&self` surface — which also makes nested wrapping a type
/// error instead of a runtime check.
pub struct Synchronized<T> {
    inner: Mutex<T>,
}

impl<T> Synchronized<T> {
    pub(crate) fn new(inner: T) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Unwrap the decorated tracker.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T: EntityTracking> Synchronized<T> {
    /// See [`EntityTracking::register`].
    pub fn register(&self, entity: T::Entity, point: Point) {
        self.inner.lock().register(entity, point);
    }

    /// See [`EntityTracking::register_and_view`]. Registration and the view
    /// query share one critical section.
    pub fn register_and_view(&self, entity: T::Entity, point: Point, range: u32) -> Vec<T::Entity> {
        self.inner.lock().register_and_view(entity, point, range)
    }

    /// See [`EntityTracking::unregister`].
    pub fn unregister(&self, entity: &T::Entity, point: Point) {
        self.inner.lock().unregister(entity, point);
    }

    /// See [`EntityTracking::move_entity`].
    pub fn move_entity(&self, entity: &T::Entity, old_point: Point, new_point: Point) {
        self.inner.lock().move_entity(entity, old_point, new_point);
    }

    /// See [`EntityTracking::move_and_view`].
    pub fn move_and_view(
        &self,
        entity: &T::Entity,
        old_point: Point,
        new_point: Point,
    ) -> ViewDelta<T::Entity> {
        self.inner.lock().move_and_view(entity, old_point, new_point)
    }

    /// See [`EntityTracking::chunk_entities`].
    #[must_use]
    pub fn chunk_entities(&self, chunk: ChunkCoord) -> Vec<T::Entity> {
        self.inner.lock().chunk_entities(chunk)
    }

    /// See [`EntityTracking::chunk_range_entities`].
    #[must_use]
    pub fn chunk_range_entities(&self, chunk: ChunkCoord, range: u32) -> Vec<T::Entity> {
        self.inner.lock().chunk_range_entities(chunk, range)
    }

    /// See [`EntityTracking::nearby_entities`].
    #[must_use]
    pub fn nearby_entities(&self, point: Point, radius: f64) -> Vec<T::Entity> {
        self.inner.lock().nearby_entities(point, radius)
    }

    /// See [`EntityTracking::difference`].
    #[must_use]
    pub fn difference(&self, p1: Point, p2: Point) -> ViewDelta<T::Entity> {
        self.inner.lock().difference(p1, p2)
    }

    /// See [`EntityTracking::entity_count`].
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.inner.lock().entity_count()
    }

    /// See [`EntityTracking::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
