//! Iterators over the explicit cells of a matrix.
//!
//! Cells are yielded as flat tuples: the `D::NDIM` coordinate components
//! followed by the value, e.g. `(usize, usize, &T)` for a 2D matrix. Only
//! explicit cells are visited, in ascending lexicographic coordinate order.

use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::coord::Coord;
use crate::dim::Dim;
use crate::store::CellStore;

/// Iterator over the explicit cells of a matrix.
#[derive(Debug)]
pub struct Iter<'a, T, D: Dim> {
    inner: btree_map::Iter<'a, Coord<D>, T>,
}
impl<'a, T, D: Dim> Clone for Iter<'a, T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
impl<'a, T, D: Dim> From<&'a CellStore<T, D>> for Iter<'a, T, D> {
    #[inline]
    fn from(store: &'a CellStore<T, D>) -> Self {
        Self { inner: store.iter() }
    }
}
impl<'a, T, D: Dim> Iterator for Iter<'a, T, D> {
    type Item = D::Flat<&'a T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(coord, value)| coord.flatten(value))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<'a, T, D: Dim> DoubleEndedIterator for Iter<'a, T, D> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(coord, value)| coord.flatten(value))
    }
}
impl<'a, T, D: Dim> ExactSizeIterator for Iter<'a, T, D> {}
impl<'a, T, D: Dim> FusedIterator for Iter<'a, T, D> {}

/// Iterator over the explicit cells of a matrix that allows modifying their
/// values.
///
/// This iterator is only reachable through a [`CellsMut`] guard, which
/// removes any cell overwritten with the default value once the guard is
/// dropped.
#[derive(Debug)]
pub struct IterMut<'a, T, D: Dim> {
    inner: btree_map::IterMut<'a, Coord<D>, T>,
}
impl<'a, T, D: Dim> Iterator for IterMut<'a, T, D> {
    type Item = D::Flat<&'a mut T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(coord, value)| coord.flatten(value))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<'a, T, D: Dim> DoubleEndedIterator for IterMut<'a, T, D> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(coord, value)| coord.flatten(value))
    }
}
impl<'a, T, D: Dim> ExactSizeIterator for IterMut<'a, T, D> {}
impl<'a, T, D: Dim> FusedIterator for IterMut<'a, T, D> {}

/// Exclusive borrow of a matrix for in-place modification of its explicit
/// cells.
///
/// Iterating over `&mut CellsMut` yields each explicit cell with a mutable
/// reference to its value. When the guard is dropped, every cell whose value
/// is now equal to the default is removed, exactly as if it had been assigned
/// through `Cell::write()`.
///
/// Removal only happens in `Drop`. If the guard is leaked (e.g. with
/// `std::mem::forget`), cells set to the default stay stored and are counted
/// by `len()` and visited by `iter()` until some later `CellsMut` guard is
/// dropped, which sweeps the whole matrix.
///
/// ```
/// # use ndsparse_core::prelude::*;
/// let mut m = Matrix2D::new(0);
/// m.at(1).at(2).write(5);
/// m.at(3).at(4).write(6);
/// for (_, y, value) in &mut m.cells_mut() {
///     if y == 2 {
///         *value = 0;
///     }
/// }
/// assert_eq!(1, m.len());
/// ```
#[derive(Debug)]
pub struct CellsMut<'a, T: PartialEq, D: Dim> {
    store: &'a mut CellStore<T, D>,
}
impl<'a, T: PartialEq, D: Dim> CellsMut<'a, T, D> {
    pub(crate) fn new(store: &'a mut CellStore<T, D>) -> Self {
        Self { store }
    }

    /// Returns an iterator over the explicit cells that allows modifying
    /// their values.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, D> {
        IterMut {
            inner: self.store.iter_mut(),
        }
    }
    /// Returns a read-only iterator over the cells, including any that have
    /// been set to the default value but not yet removed.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, D> {
        Iter::from(&*self.store)
    }
    /// Returns the value that causes a cell to be removed.
    #[inline]
    pub fn default_value(&self) -> &T {
        self.store.default_value()
    }
}
impl<'a, 'b, T: PartialEq, D: Dim> IntoIterator for &'b mut CellsMut<'a, T, D> {
    type Item = D::Flat<&'b mut T>;
    type IntoIter = IterMut<'b, T, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<'a, T: PartialEq, D: Dim> Drop for CellsMut<'a, T, D> {
    fn drop(&mut self) {
        self.store.sweep();
    }
}
