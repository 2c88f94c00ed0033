//! Named error kinds returned by fallible constructors and operations.
//!
//! Every fallible operation in this crate fails fast with one of these kinds
//! rather than panicking, with the exception of direct indexing operations
//! that are documented as panicking on programmer error. Degenerate-dual
//! contributions are not represented here: they are not a failure, just a
//! skipped, logged term (see [`crate::dual`]).

use thiserror::Error;

/// A [`crate::Signature`] or [`crate::Algebra`] could not be constructed as
/// requested.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Requested axis count exceeds [`crate::MAX_AXES`].
    #[error("axis count {requested} exceeds maximum of {max}")]
    TooManyAxes {
        /// Axis count that was requested.
        requested: u32,
        /// Maximum supported axis count.
        max: u8,
    },
    /// The positive/negative/null axis masks supplied to
    /// [`crate::Signature::from_masks`] overlap.
    #[error("signature axis masks overlap")]
    OverlappingAxisMasks,
}

/// Two multivectors (or a multivector and a versor/linear map) that do not
/// share the same [`crate::Algebra`] were used together in a binary
/// operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("operands belong to different algebras")]
pub struct AlgebraError;

/// An inversion or normalization could not proceed because the relevant
/// scalar norm was within the algebra's epsilon of zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingularOperandError {
    /// `Versor::inverse` or `Rotor::normalize` found a near-zero scalar norm.
    #[error("operand has near-zero norm and cannot be inverted or normalized")]
    NearZeroNorm,
    /// `Rotor::from_plane_angle` was given two vectors whose wedge has
    /// near-zero magnitude under the algebra's metric.
    #[error("plane spanned by the given vectors is degenerate under this metric")]
    DegeneratePlane,
}

/// A [`crate::LinearMap`] row or column index was out of range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of range for {dimensions}-dimensional linear map")]
pub struct OutOfRangeError {
    /// The index that was out of range.
    pub index: u8,
    /// The dimensionality of the linear map that was indexed.
    pub dimensions: u8,
}
