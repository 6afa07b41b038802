//! Ordered sparse storage for cells.
//!
//! A `CellStore` maps coordinates to values, but only ever holds values that
//! differ from its default. Writing the default value to a coordinate removes
//! that coordinate's entry. Entries are kept in ascending lexicographic
//! coordinate order.

use log::trace;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::coord::Coord;
use crate::dim::Dim;

/// Sparse map from `D`-dimensional coordinates to values of type `T`.
pub struct CellStore<T, D: Dim> {
    cells: BTreeMap<Coord<D>, T>,
    default: T,
}

impl<T: fmt::Debug, D: Dim> fmt::Debug for CellStore<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellStore")
            .field("default", &self.default)
            .field("cells", &self.cells)
            .finish()
    }
}

impl<T: Clone, D: Dim> Clone for CellStore<T, D> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            default: self.default.clone(),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.cells.clone_from(&source.cells);
        self.default.clone_from(&source.default);
    }
}

/// Two stores are equal if they contain exactly the same explicit cells.
impl<T: PartialEq, D: Dim> PartialEq for CellStore<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}
impl<T: Eq, D: Dim> Eq for CellStore<T, D> {}

impl<T, D: Dim> CellStore<T, D> {
    /// Creates an empty store where every cell has the value `default`.
    #[inline]
    pub fn new(default: T) -> Self {
        Self {
            cells: BTreeMap::new(),
            default,
        }
    }

    /// Returns the value of cells that have not been explicitly set.
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns the value at `coord`, or the default value if it is not
    /// explicitly stored.
    #[inline]
    pub fn get(&self, coord: &Coord<D>) -> &T {
        self.cells.get(coord).unwrap_or(&self.default)
    }

    /// Returns true if `coord` holds an explicit (non-default) value.
    #[inline]
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        self.cells.contains_key(coord)
    }

    /// Removes the explicit value at `coord`, if there is one, and returns it.
    #[inline]
    pub fn remove(&mut self, coord: &Coord<D>) -> Option<T> {
        self.cells.remove(coord)
    }

    /// Returns the number of explicit (non-default) cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if there are no explicit cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Removes all explicit cells.
    pub fn clear(&mut self) {
        trace!("Clearing {} cells from {}D store", self.len(), D::NDIM);
        self.cells.clear();
    }

    /// Returns an iterator over explicit cells in ascending coordinate order.
    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, Coord<D>, T> {
        self.cells.iter()
    }

    /// Returns an iterator over explicit cells in ascending coordinate order
    /// that allows modifying their values.
    ///
    /// Writes made through this iterator are not checked against the default
    /// value; call `sweep()` afterward to restore that invariant.
    #[inline]
    pub(crate) fn iter_mut(&mut self) -> btree_map::IterMut<'_, Coord<D>, T> {
        self.cells.iter_mut()
    }
}

impl<T: PartialEq, D: Dim> CellStore<T, D> {
    /// Sets the value at `coord`. If `value` is the default value, then this
    /// removes any explicit entry at `coord` instead of storing it.
    pub fn set(&mut self, coord: Coord<D>, value: T) {
        if value == self.default {
            self.cells.remove(&coord);
        } else {
            self.cells.insert(coord, value);
        }
    }

    /// Removes every explicit entry that has been overwritten with the default
    /// value, and returns how many were removed.
    pub(crate) fn sweep(&mut self) -> usize {
        let before = self.cells.len();
        let default = &self.default;
        self.cells.retain(|_, value| value != default);
        let removed = before - self.cells.len();
        if removed > 0 {
            trace!("Swept {} default-valued cells", removed);
        }
        removed
    }
}

impl<T: Clone, D: Dim> CellStore<T, D> {
    /// Moves all explicit cells out into a new store, leaving this one empty.
    pub fn take(&mut self) -> Self {
        trace!("Moving {} cells out of {}D store", self.len(), D::NDIM);
        Self {
            cells: std::mem::take(&mut self.cells),
            default: self.default.clone(),
        }
    }
}

#[cfg(test)]
mod tests;
