//! Dimensionality traits, which provide a number of dimensions.
//!
//! Every dimensionality is a zero-sized marker type (`Dim1D`, `Dim2D`, ...)
//! generated by the `dims!` macro below. Each one carries three things at the
//! type level:
//!
//! - the coordinate array type (`[usize; N]`),
//! - the [`Rank`] remaining after the first index of a chain has been bound,
//!   which drives the chained-index proxies in `crate::index`, and
//! - the flattened tuple type produced when iterating over cells.
//!
//! There is no zero-dimensional marker, so a zero-dimensional matrix cannot be
//! named.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Dimensionality of a coordinate space.
///
/// This trait is sealed and only implemented for the marker structs `Dim1D`
/// through `Dim8D`. In particular, there is no way to define a
/// zero-dimensional space:
///
/// ```compile_fail
/// use ndsparse_core::dim::{Bound, Dim};
///
/// #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// struct Dim0D;
///
/// impl Dim for Dim0D {
///     const NDIM: usize = 0;
///     type Array = [usize; 0];
///     type Tail = Bound;
///     type Flat<V> = (V,);
///     fn flatten<V>(_: [usize; 0], value: V) -> (V,) {
///         (value,)
///     }
/// }
/// ```
pub trait Dim:
    'static + fmt::Debug + Default + Copy + Eq + Ord + Hash + Send + Sync + private::Sealed
{
    /// Number of dimensions.
    const NDIM: usize;

    /// Array type used for coordinates.
    type Array: fmt::Debug
        + Default
        + Copy
        + Eq
        + Ord
        + Hash
        + Send
        + Sync
        + AsRef<[usize]>
        + AsMut<[usize]>;

    /// Number of indices still unbound once the first index of a chain is
    /// bound (i.e. `NDIM - 1`, as a type).
    type Tail: Rank;

    /// Flat tuple of `NDIM` coordinate components followed by a value.
    type Flat<V>;

    /// Flattens a coordinate array and a value into a single tuple.
    fn flatten<V>(array: Self::Array, value: V) -> Self::Flat<V>;
}

/// Type-level count of the indices that a chained access has yet to bind.
pub trait Rank: 'static + fmt::Debug + Default + Copy + Send + Sync + private::Sealed {
    /// Number of indices still unbound.
    const REMAINING: usize;
}

/// No indices remaining; the coordinate is complete.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bound;

/// One more index remaining than `R`.
#[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Unbound<R: Rank>(PhantomData<R>);

impl Rank for Bound {
    const REMAINING: usize = 0;
}
impl<R: Rank> Rank for Unbound<R> {
    const REMAINING: usize = R::REMAINING + 1;
}

/// Expands to `usize`, once per identifier it is given.
macro_rules! usize_for {
    ($_component:ident) => {
        usize
    };
}

/// Expands to the rank left after binding the first of the given components.
macro_rules! tail_rank {
    ($_first:ident) => {
        Bound
    };
    ($_first:ident $($rest:ident)+) => {
        Unbound<tail_rank!($($rest)+)>
    };
}

macro_rules! dims {
    ($($(#[$attr:meta])* $name:ident = $ndim:literal [$($component:ident)+];)+) => {
        $(
            $(#[$attr])*
            #[derive(fmt::Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name;

            impl Dim for $name {
                const NDIM: usize = $ndim;

                type Array = [usize; $ndim];
                type Tail = tail_rank!($($component)+);
                type Flat<V> = ($(usize_for!($component),)+ V);

                #[inline]
                fn flatten<V>(array: Self::Array, value: V) -> Self::Flat<V> {
                    let [$($component),+] = array;
                    ($($component,)+ value)
                }
            }

            impl private::Sealed for $name {}
        )+
    };
}

dims! {
    /// 1 dimension.
    Dim1D = 1 [x];
    /// 2 dimensions.
    Dim2D = 2 [x y];
    /// 3 dimensions.
    Dim3D = 3 [x y z];
    /// 4 dimensions.
    Dim4D = 4 [x y z w];
    /// 5 dimensions.
    Dim5D = 5 [x y z w u];
    /// 6 dimensions.
    Dim6D = 6 [x y z w u v];
    /// 7 dimensions.
    Dim7D = 7 [x y z w u v s];
    /// 8 dimensions.
    Dim8D = 8 [x y z w u v s t];
}

// Make `Dim` and `Rank` "sealed traits."
// https://rust-lang.github.io/api-guidelines/future-proofing.html#c-sealed
mod private {
    use super::*;

    pub trait Sealed {}
    impl Sealed for Bound {}
    impl<R: Rank> Sealed for Unbound<R> {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tail<D: Dim>() {
        assert_eq!(D::NDIM - 1, D::Tail::REMAINING);
        assert_eq!(D::NDIM, D::Array::default().as_ref().len());
    }

    #[test]
    fn test_tail_rank_matches_ndim() {
        assert_tail::<Dim1D>();
        assert_tail::<Dim2D>();
        assert_tail::<Dim3D>();
        assert_tail::<Dim4D>();
        assert_tail::<Dim5D>();
        assert_tail::<Dim6D>();
        assert_tail::<Dim7D>();
        assert_tail::<Dim8D>();
    }

    #[test]
    fn test_flatten() {
        assert_eq!((7, 'a'), Dim1D::flatten([7], 'a'));
        assert_eq!((1, 2, 3, "v"), Dim3D::flatten([1, 2, 3], "v"));
        let value = 10;
        let (a, b, r) = Dim2D::flatten([4, 5], &value);
        assert_eq!((4, 5, 10), (a, b, *r));
    }
}
