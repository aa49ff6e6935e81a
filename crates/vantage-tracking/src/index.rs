//! Chunk cell storage.

use std::hash::Hash;

use hashbrown::{HashMap, HashSet};
use rustc_hash::FxBuildHasher;
use vantage_spatial::ChunkCoord;

/// Entity set of one chunk cell. Fx hashing: keys are small and hashed on
/// every mutation and query.
pub type EntitySet<E> = HashSet<E, FxBuildHasher>;

/// Maps chunk coordinates to the set of entities registered in that cell.
///
/// Cells are created on first insert and dropped when their last entity
/// leaves, so the map only ever holds populated coordinates. One index is
/// exclusively owned by one tracker instance; the index itself is not
/// thread-safe.
#[derive(Debug)]
pub struct ChunkIndex<E> {
    cells: HashMap<ChunkCoord, EntitySet<E>, FxBuildHasher>,
    entity_count: usize,
}

impl<E: Eq + Hash> ChunkIndex<E> {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: HashMap::default(),
            entity_count: 0,
        }
    }

    /// Add an entity to the cell at `coord`.
    ///
    /// Callers must not add an entity that is already present in any cell;
    /// membership is unique across the whole index and the index cannot
    /// check other cells cheaply. Double-adding within one cell trips a
    /// debug assertion.
    pub fn insert(&mut self, coord: ChunkCoord, entity: E) {
        let newly_added = self.cells.entry(coord).or_default().insert(entity);
        debug_assert!(newly_added, "entity double-added to {coord:?}");
        if newly_added {
            self.entity_count += 1;
        }
    }

    /// Remove an entity from the cell at `coord`. Removing a non-member is a
    /// no-op; returns whether the entity was present.
    pub fn remove(&mut self, coord: ChunkCoord, entity: &E) -> bool {
        let Some(cell) = self.cells.get_mut(&coord) else {
            return false;
        };
        let removed = cell.remove(entity);
        if removed {
            self.entity_count -= 1;
            if cell.is_empty() {
                self.cells.remove(&coord);
            }
        }
        removed
    }

    /// The cell at `coord`, if populated.
    #[must_use]
    pub fn cell(&self, coord: ChunkCoord) -> Option<&EntitySet<E>> {
        self.cells.get(&coord)
    }

    /// Entities registered at `coord`; empty for unpopulated coordinates.
    pub fn entities_at(&self, coord: ChunkCoord) -> impl Iterator<Item = &E> {
        self.cells.get(&coord).into_iter().flatten()
    }

    /// Total number of registered entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    /// Number of populated cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// True when no entity is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entity_count == 0
    }

    /// Drop every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.entity_count = 0;
    }
}

impl<E: Eq + Hash> Default for ChunkIndex<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: ChunkCoord = ChunkCoord::new(0, 0);

    #[test]
    fn test_insert_and_read() {
        let mut index = ChunkIndex::new();
        index.insert(ORIGIN, 1u32);
        index.insert(ORIGIN, 2u32);
        index.insert(ChunkCoord::new(1, 0), 3u32);

        let mut here: Vec<_> = index.entities_at(ORIGIN).copied().collect();
        here.sort_unstable();
        assert_eq!(here, vec![1, 2]);
        assert_eq!(index.entity_count(), 3);
        assert_eq!(index.cell_count(), 2);
    }

    #[test]
    fn test_unpopulated_cell_is_empty() {
        let index = ChunkIndex::<u32>::new();
        assert_eq!(index.entities_at(ChunkCoord::new(9, -9)).count(), 0);
        assert!(index.cell(ChunkCoord::new(9, -9)).is_none());
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let mut index = ChunkIndex::new();
        index.insert(ORIGIN, 1u32);

        assert!(!index.remove(ORIGIN, &2));
        assert!(!index.remove(ChunkCoord::new(5, 5), &1));
        assert_eq!(index.entity_count(), 1);
    }

    #[test]
    fn test_empty_cell_is_dropped() {
        let mut index = ChunkIndex::new();
        index.insert(ORIGIN, 7u32);
        assert_eq!(index.cell_count(), 1);

        assert!(index.remove(ORIGIN, &7));
        assert_eq!(index.cell_count(), 0);
        assert!(index.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut index = ChunkIndex::new();
        index.insert(ORIGIN, 1u32);
        index.insert(ChunkCoord::new(3, 3), 2u32);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.cell_count(), 0);
    }
}
