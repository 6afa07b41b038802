//! Chained indexing, one dimension at a time.
//!
//! `matrix.at(i).at(j).at(k)` builds a coordinate one component per call.
//! Each call returns a new lightweight view that borrows the matrix's store
//! and carries the components bound so far. The view's [`Rank`] parameter
//! counts the components still missing; `at()` is only available while some
//! are missing, and `read()`/`write()` are only available once none are. A
//! chain of the wrong length therefore fails to compile.
//!
//! [`IndexProxy`] borrows the store mutably and its terminal form ([`Cell`])
//! can write. [`IndexView`] borrows it immutably and can only read.
//!
//! ```
//! # use ndsparse_core::prelude::*;
//! let mut m = Matrix2D::new(0);
//! m.at(1).at(2).write(3);
//! assert_eq!(&3, m.view(1).at(2).read());
//! ```
//!
//! Stopping short of the last component leaves nothing to read or write:
//!
//! ```compile_fail
//! # use ndsparse_core::prelude::*;
//! let mut m = Matrix2D::new(0);
//! m.at(1).read();
//! ```
//!
//! ```compile_fail
//! # use ndsparse_core::prelude::*;
//! let m = Matrix3D::new(0);
//! m.view(1).at(2).read();
//! ```
//!
//! and binding more components than there are dimensions is rejected too:
//!
//! ```compile_fail
//! # use ndsparse_core::prelude::*;
//! let mut m = Matrix2D::new(0);
//! m.at(1).at(2).at(3).write(4);
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::coord::Coord;
use crate::dim::{Bound, Dim, Rank, Unbound};
use crate::store::CellStore;

/// Partially-bound mutable index into a `CellStore`, with `R` components
/// left to bind.
pub struct IndexProxy<'a, T, D: Dim, R: Rank> {
    store: &'a mut CellStore<T, D>,
    coord: Coord<D>,
    _rank: PhantomData<R>,
}

/// Fully-bound mutable handle to a single cell.
pub type Cell<'a, T, D> = IndexProxy<'a, T, D, Bound>;

impl<'a, T: fmt::Debug, D: Dim, R: Rank> fmt::Debug for IndexProxy<'a, T, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexProxy")
            .field("bound", &self.bound())
            .field("remaining", &R::REMAINING)
            .finish()
    }
}

impl<'a, T, D: Dim, R: Rank> IndexProxy<'a, T, D, R> {
    /// Creates a proxy with the first component of `coord` bound.
    pub(crate) fn first(store: &'a mut CellStore<T, D>, index: usize) -> Self {
        let mut coord = Coord::origin();
        coord[0] = index;
        Self {
            store,
            coord,
            _rank: PhantomData,
        }
    }

    /// Returns the components bound so far.
    #[inline]
    pub fn bound(&self) -> &[usize] {
        &self.coord.as_slice()[..D::NDIM - R::REMAINING]
    }
    /// Returns the number of components still unbound.
    #[inline]
    pub fn remaining(&self) -> usize {
        R::REMAINING
    }
}

impl<'a, T, D: Dim, R: Rank> IndexProxy<'a, T, D, Unbound<R>> {
    /// Binds the next component.
    #[inline]
    pub fn at(self, index: usize) -> IndexProxy<'a, T, D, R> {
        let mut coord = self.coord;
        coord[D::NDIM - Unbound::<R>::REMAINING] = index;
        IndexProxy {
            store: self.store,
            coord,
            _rank: PhantomData,
        }
    }
}

impl<'a, T, D: Dim> Cell<'a, T, D> {
    /// Returns the coordinate of the cell.
    #[inline]
    pub fn coord(&self) -> Coord<D> {
        self.coord
    }
    /// Returns the value of the cell, or the default value if it is not
    /// explicitly stored.
    #[inline]
    pub fn read(&self) -> &T {
        self.store.get(&self.coord)
    }
    /// Returns true if the cell holds an explicit (non-default) value.
    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.store.contains(&self.coord)
    }
}

impl<'a, T: PartialEq, D: Dim> Cell<'a, T, D> {
    /// Sets the value of the cell. Writing the default value removes the cell
    /// from storage.
    #[inline]
    pub fn write(&mut self, value: T) -> &mut Self {
        self.store.set(self.coord, value);
        self
    }
    /// Replaces the value of the cell with the result of `f`, which is given
    /// the current value.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> &mut Self {
        let new_value = f(self.read());
        self.write(new_value)
    }
}

impl<'a, T: PartialEq + Clone, D: Dim> Cell<'a, T, D> {
    /// Resets the cell to the default value, removing it from storage.
    #[inline]
    pub fn reset(&mut self) -> &mut Self {
        let default = self.store.default_value().clone();
        self.write(default)
    }
}

/// Partially-bound read-only index into a `CellStore`, with `R` components
/// left to bind.
pub struct IndexView<'a, T, D: Dim, R: Rank> {
    store: &'a CellStore<T, D>,
    coord: Coord<D>,
    _rank: PhantomData<R>,
}

/// Fully-bound read-only handle to a single cell.
pub type CellView<'a, T, D> = IndexView<'a, T, D, Bound>;

impl<'a, T, D: Dim, R: Rank> Copy for IndexView<'a, T, D, R> {}
impl<'a, T, D: Dim, R: Rank> Clone for IndexView<'a, T, D, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: fmt::Debug, D: Dim, R: Rank> fmt::Debug for IndexView<'a, T, D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexView")
            .field("bound", &self.bound())
            .field("remaining", &R::REMAINING)
            .finish()
    }
}

impl<'a, T, D: Dim, R: Rank> IndexView<'a, T, D, R> {
    /// Creates a view with the first component of `coord` bound.
    pub(crate) fn first(store: &'a CellStore<T, D>, index: usize) -> Self {
        let mut coord = Coord::origin();
        coord[0] = index;
        Self {
            store,
            coord,
            _rank: PhantomData,
        }
    }

    /// Returns the components bound so far.
    #[inline]
    pub fn bound(&self) -> &[usize] {
        &self.coord.as_slice()[..D::NDIM - R::REMAINING]
    }
    /// Returns the number of components still unbound.
    #[inline]
    pub fn remaining(&self) -> usize {
        R::REMAINING
    }
}

impl<'a, T, D: Dim, R: Rank> IndexView<'a, T, D, Unbound<R>> {
    /// Binds the next component.
    #[inline]
    pub fn at(self, index: usize) -> IndexView<'a, T, D, R> {
        let mut coord = self.coord;
        coord[D::NDIM - Unbound::<R>::REMAINING] = index;
        IndexView {
            store: self.store,
            coord,
            _rank: PhantomData,
        }
    }
}

impl<'a, T, D: Dim> CellView<'a, T, D> {
    /// Returns the coordinate of the cell.
    #[inline]
    pub fn coord(&self) -> Coord<D> {
        self.coord
    }
    /// Returns the value of the cell, or the default value if it is not
    /// explicitly stored.
    ///
    /// The returned reference borrows the matrix, not the view, so it may
    /// outlive the chain that produced it.
    #[inline]
    pub fn read(&self) -> &'a T {
        self.store.get(&self.coord)
    }
    /// Returns true if the cell holds an explicit (non-default) value.
    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.store.contains(&self.coord)
    }
}

impl<'a, T, D: Dim> From<Cell<'a, T, D>> for CellView<'a, T, D> {
    fn from(cell: Cell<'a, T, D>) -> Self {
        Self {
            store: cell.store,
            coord: cell.coord,
            _rank: PhantomData,
        }
    }
}
