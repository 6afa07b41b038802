//! N-dimensional sparse matrices that only store non-default cells.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod coord;
pub mod dim;
pub mod error;
pub mod index;
pub mod iter;
pub mod matrix;
pub mod store;

pub mod traits {
    //! Traits needed to write code generic over dimensionality.
    pub use crate::dim::{Dim, Rank};
}

pub mod prelude {
    //! Commonly used types and traits.
    pub use crate::traits::*;

    pub use crate::coord::{Coord, Coord1D, Coord2D, Coord3D, Coord4D, Coord5D, Coord6D};
    pub use crate::dim::{Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D, Dim7D, Dim8D};
    pub use crate::error::{CoordError, CoordResult};
    pub use crate::index::{Cell, CellView, IndexProxy, IndexView};
    pub use crate::iter::CellsMut;
    pub use crate::matrix::{Matrix, Matrix1D, Matrix2D, Matrix3D, Matrix4D, Matrix5D, Matrix6D};
}

#[cfg(test)]
mod tests;
