//! N-dimensional coordinates.
//!
//! A `Coord<D>` is a fixed-length list of `D::NDIM` unsigned components.
//! Coordinates are ordered lexicographically: the first differing component
//! decides. This is the order in which a matrix enumerates its cells.

use itertools::Itertools;
use std::fmt;
use std::ops::{Index, IndexMut};

mod convert;

use crate::dim::{Dim, Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};

/// `D`-dimensional cell coordinate.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord<D: Dim>(pub D::Array);

impl<D: Dim> fmt::Display for Coord<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.as_slice().iter().join(", "))
    }
}

// Implement indexing by component number.
impl<D: Dim> Index<usize> for Coord<D> {
    type Output = usize;
    #[inline]
    fn index(&self, component: usize) -> &usize {
        &self.0.as_ref()[component]
    }
}
impl<D: Dim> IndexMut<usize> for Coord<D> {
    #[inline]
    fn index_mut(&mut self, component: usize) -> &mut usize {
        &mut self.0.as_mut()[component]
    }
}

impl<D: Dim> Coord<D> {
    /// Number of components in the coordinate.
    pub const NDIM: usize = D::NDIM;

    /// Creates a coordinate consisting of all zeros.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }
    /// Creates a coordinate by evaluating `generator` for each component.
    pub fn from_fn(mut generator: impl FnMut(usize) -> usize) -> Self {
        let mut ret = Self::default();
        for (i, component) in ret.0.as_mut().iter_mut().enumerate() {
            *component = generator(i);
        }
        ret
    }
    /// Creates a coordinate using `value` for all components.
    pub fn repeat(value: usize) -> Self {
        Self::from_fn(|_| value)
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_ref()
    }
    /// Returns the underlying array.
    #[inline]
    pub fn into_array(self) -> D::Array {
        self.0
    }

    /// Flattens the coordinate followed by `value` into one tuple.
    #[inline]
    pub fn flatten<V>(self, value: V) -> D::Flat<V> {
        D::flatten(self.0, value)
    }
}

/// 1D coordinate.
pub type Coord1D = Coord<Dim1D>;
/// 2D coordinate.
pub type Coord2D = Coord<Dim2D>;
/// 3D coordinate.
pub type Coord3D = Coord<Dim3D>;
/// 4D coordinate.
pub type Coord4D = Coord<Dim4D>;
/// 5D coordinate.
pub type Coord5D = Coord<Dim5D>;
/// 6D coordinate.
pub type Coord6D = Coord<Dim6D>;
