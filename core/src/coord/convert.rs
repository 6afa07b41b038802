//! Conversions into and out of `Coord`s.

use super::Coord;
use crate::dim::{Dim, Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D, Dim7D, Dim8D};
use crate::error::CoordError;

macro_rules! impl_array_conversions {
    ($($dim:ty = $ndim:literal;)+) => {
        $(
            impl From<[usize; $ndim]> for Coord<$dim> {
                #[inline]
                fn from(array: [usize; $ndim]) -> Self {
                    Self(array)
                }
            }
            impl From<Coord<$dim>> for [usize; $ndim] {
                #[inline]
                fn from(coord: Coord<$dim>) -> Self {
                    coord.0
                }
            }
        )+
    };
}

impl_array_conversions! {
    Dim1D = 1;
    Dim2D = 2;
    Dim3D = 3;
    Dim4D = 4;
    Dim5D = 5;
    Dim6D = 6;
    Dim7D = 7;
    Dim8D = 8;
}

impl<D: Dim> TryFrom<&[usize]> for Coord<D> {
    type Error = CoordError;

    /// Builds a coordinate from a runtime slice, which must have exactly
    /// `D::NDIM` components.
    fn try_from(components: &[usize]) -> Result<Self, CoordError> {
        if components.len() != D::NDIM {
            return Err(CoordError::WrongLength {
                expected: D::NDIM,
                got: components.len(),
            });
        }
        let mut ret = Self::default();
        ret.0.as_mut().copy_from_slice(components);
        Ok(ret)
    }
}

impl<D: Dim> From<Coord<D>> for Vec<usize> {
    fn from(coord: Coord<D>) -> Self {
        coord.as_slice().to_vec()
    }
}
