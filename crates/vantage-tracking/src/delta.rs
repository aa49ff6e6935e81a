//! Visibility deltas between two observer positions.

use std::hash::Hash;

use crate::index::EntitySet;

/// The minimal visibility change produced by one position transition.
///
/// Holds the entity sets in range of the departure and destination
/// positions; additions and removals are computed lazily as set differences,
/// so a caller that only walks one side never materializes the other. Both
/// iterators are restartable. Entities in range of both positions appear on
/// neither side, and the two sides are disjoint by construction.
#[derive(Debug)]
pub struct ViewDelta<E> {
    before: EntitySet<E>,
    after: EntitySet<E>,
}

impl<E: Eq + Hash> ViewDelta<E> {
    pub(crate) fn new(before: EntitySet<E>, after: EntitySet<E>) -> Self {
        Self { before, after }
    }

    /// Entities newly in range at the destination.
    pub fn additions(&self) -> impl Iterator<Item = &E> {
        self.after.difference(&self.before)
    }

    /// Entities newly out of range at the destination.
    pub fn removals(&self) -> impl Iterator<Item = &E> {
        self.before.difference(&self.after)
    }

    /// True when the transition changed nothing for the observer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additions().next().is_none() && self.removals().next().is_none()
    }
}

impl<E: Clone + Eq + Hash> ViewDelta<E> {
    /// Materialize both sides as `(additions, removals)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<E>, Vec<E>) {
        let additions = self.additions().cloned().collect();
        let removals = self.removals().cloned().collect();
        (additions, removals)
    }
}
