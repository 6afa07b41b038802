//! Errors for runtime-checked coordinate access.
//!
//! Everything reachable through `Coord<D>` and the chained-index proxies is
//! checked at compile time. Only coordinates built from runtime slices can be
//! malformed.

use thiserror::Error;

/// Result type returned by fallible coordinate routines.
pub type CoordResult<T> = Result<T, CoordError>;

/// Error encountered converting runtime data into a coordinate.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CoordError {
    /// The slice had the wrong number of components.
    #[error("coordinate has {got} components, expected {expected}")]
    WrongLength {
        /// Number of dimensions of the target coordinate.
        expected: usize,
        /// Number of components supplied.
        got: usize,
    },
}
