//! Sparse N-dimensional matrices.

use log::trace;
use std::fmt;
use std::ops::Index;

use crate::coord::Coord;
use crate::dim::{Dim, Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};
use crate::error::CoordResult;
use crate::index::{IndexProxy, IndexView};
use crate::iter::{CellsMut, Iter};
use crate::store::CellStore;

/// `D`-dimensional sparse array of values of type `T`.
///
/// Every coordinate has a value, but only values that differ from the
/// matrix's default value are stored. There is no upper bound on any
/// coordinate component.
///
/// Cells are addressed either with a full [`Coord`] or by chaining one
/// `at()` per dimension:
///
/// ```
/// # use ndsparse_core::prelude::*;
/// let mut m = Matrix2D::new(0);
/// m.at(3).at(4).write(12);
/// assert_eq!(&12, m.at(3).at(4).read());
/// assert_eq!(&0, m.view(4).at(3).read());
/// assert_eq!(1, m.len());
/// ```
pub struct Matrix<T, D: Dim> {
    store: CellStore<T, D>,
}

impl<T: fmt::Debug, D: Dim> fmt::Debug for Matrix<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("ndim", &D::NDIM)
            .field("store", &self.store)
            .finish()
    }
}

impl<T: Clone, D: Dim> Clone for Matrix<T, D> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.store.clone_from(&source.store);
    }
}

/// Two matrices are equal if they contain exactly the same explicit cells.
impl<T: PartialEq, D: Dim> PartialEq for Matrix<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}
impl<T: Eq, D: Dim> Eq for Matrix<T, D> {}

impl<T: Default, D: Dim> Default for Matrix<T, D> {
    /// Creates an empty matrix whose default value is `T::default()`.
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, D: Dim> Index<Coord<D>> for Matrix<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, coord: Coord<D>) -> &T {
        self.store.get(&coord)
    }
}
impl<T, D: Dim> Index<&Coord<D>> for Matrix<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, coord: &Coord<D>) -> &T {
        self.store.get(coord)
    }
}

impl<'a, T, D: Dim> IntoIterator for &'a Matrix<T, D> {
    type Item = D::Flat<&'a T>;
    type IntoIter = Iter<'a, T, D>;

    /// Returns an iterator over the explicit cells of the matrix.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq, D: Dim> Extend<(Coord<D>, T)> for Matrix<T, D> {
    fn extend<I: IntoIterator<Item = (Coord<D>, T)>>(&mut self, cells: I) {
        for (coord, value) in cells {
            self.set(coord, value);
        }
    }
}

impl<T, D: Dim> Matrix<T, D> {
    /// Creates an empty matrix where every cell has the value `default`.
    #[inline]
    pub fn new(default: T) -> Self {
        Self {
            store: CellStore::new(default),
        }
    }

    /// Returns the value of cells that have not been explicitly set.
    #[inline]
    pub fn default_value(&self) -> &T {
        self.store.default_value()
    }

    /// Begins a chained mutable access by binding the first component.
    ///
    /// Exactly `D::NDIM` calls to `at()` in total produce a [`Cell`] that can
    /// be read or written.
    ///
    /// [`Cell`]: crate::index::Cell
    #[inline]
    pub fn at(&mut self, index: usize) -> IndexProxy<'_, T, D, D::Tail> {
        IndexProxy::first(&mut self.store, index)
    }
    /// Begins a chained read-only access by binding the first component.
    #[inline]
    pub fn view(&self, index: usize) -> IndexView<'_, T, D, D::Tail> {
        IndexView::first(&self.store, index)
    }

    /// Returns the value at `coord`, or the default value if it is not
    /// explicitly stored.
    #[inline]
    pub fn get(&self, coord: &Coord<D>) -> &T {
        self.store.get(coord)
    }
    /// Returns the value at a coordinate given as a runtime slice.
    ///
    /// Returns an error if the slice does not have exactly `D::NDIM`
    /// components.
    pub fn try_get(&self, components: &[usize]) -> CoordResult<&T> {
        let coord = Coord::try_from(components)?;
        Ok(self.store.get(&coord))
    }
    /// Returns true if `coord` holds an explicit (non-default) value.
    #[inline]
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        self.store.contains(coord)
    }
    /// Removes the explicit value at `coord`, if there is one, and returns it.
    #[inline]
    pub fn remove(&mut self, coord: &Coord<D>) -> Option<T> {
        self.store.remove(coord)
    }

    /// Returns the number of explicit (non-default) cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }
    /// Returns true if there are no explicit cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
    /// Removes all explicit cells, resetting every cell to the default value.
    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Returns an iterator over the explicit cells of the matrix, in
    /// ascending lexicographic coordinate order. Each item is a flat tuple of
    /// coordinate components followed by a reference to the value.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, D> {
        Iter::from(&self.store)
    }
    /// Returns an iterator over the coordinates of the explicit cells, in
    /// ascending order.
    #[inline]
    pub fn coords<'a>(&'a self) -> impl 'a + Iterator<Item = Coord<D>> {
        self.store.iter().map(|(coord, _)| *coord)
    }
    /// Returns an iterator over the explicit cells of the matrix, enumerated
    /// by their coordinates.
    #[inline]
    pub fn entries<'a>(&'a self) -> impl 'a + Iterator<Item = (Coord<D>, &'a T)> {
        self.store.iter().map(|(coord, value)| (*coord, value))
    }
}

impl<T: PartialEq, D: Dim> Matrix<T, D> {
    /// Sets the value at `coord`. Writing the default value removes the cell
    /// from storage.
    #[inline]
    pub fn set(&mut self, coord: Coord<D>, value: T) {
        self.store.set(coord, value);
    }
    /// Sets the value at a coordinate given as a runtime slice.
    ///
    /// Returns an error if the slice does not have exactly `D::NDIM`
    /// components, in which case the matrix is not modified.
    pub fn try_set(&mut self, components: &[usize], value: T) -> CoordResult<()> {
        let coord = Coord::try_from(components)?;
        self.store.set(coord, value);
        Ok(())
    }

    /// Borrows the matrix for in-place modification of its explicit cells.
    /// See [`CellsMut`].
    #[inline]
    pub fn cells_mut(&mut self) -> CellsMut<'_, T, D> {
        CellsMut::new(&mut self.store)
    }
}

impl<T: Clone, D: Dim> Matrix<T, D> {
    /// Moves all explicit cells out into a new matrix, leaving this one empty
    /// with the same default value.
    pub fn take(&mut self) -> Self {
        trace!("Taking {}D matrix with {} cells", D::NDIM, self.len());
        Self {
            store: self.store.take(),
        }
    }
}

/// 1D sparse matrix of values of type `T`.
pub type Matrix1D<T> = Matrix<T, Dim1D>;
/// 2D sparse matrix of values of type `T`.
pub type Matrix2D<T> = Matrix<T, Dim2D>;
/// 3D sparse matrix of values of type `T`.
pub type Matrix3D<T> = Matrix<T, Dim3D>;
/// 4D sparse matrix of values of type `T`.
pub type Matrix4D<T> = Matrix<T, Dim4D>;
/// 5D sparse matrix of values of type `T`.
pub type Matrix5D<T> = Matrix<T, Dim5D>;
/// 6D sparse matrix of values of type `T`.
pub type Matrix6D<T> = Matrix<T, Dim6D>;
