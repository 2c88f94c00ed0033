//! Real Clifford (geometric) algebra primitives over low-dimensional vector spaces.
//!
//! An [`Algebra`] fixes a [`Signature`] (counts of axes squaring to +1, -1, and
//! 0) and dimension; [`Multivector`]s are dense coefficient vectors indexed by
//! [`BladeMask`] bound to one particular algebra. Every product in this crate —
//! geometric, wedge, the two Hestenes products, involutions, dual, outermorphism,
//! and the versor/rotor sandwich — is built on top of [`product::product`], the
//! single grade-filtered bilinear kernel.

#![warn(rust_2018_idioms, missing_docs, clippy::unwrap_used)]

/// Floating-point type used throughout this crate.
pub type Float = f64;

/// Default tolerance used by approximate-zero and approximate-equality checks
/// when an [`Algebra`] does not specify its own.
pub const EPSILON: Float = 0.000001;

/// Maximum number of axes an [`Algebra`] may have. The dense per-multivector
/// storage is `2^n` coefficients, which is why this is capped small.
pub const MAX_AXES: u8 = 8;

/// Asserts that two approx-comparable values are equal within [`EPSILON`].
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::EPSILON)
    };
}

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

#[macro_use]
mod impl_macros;

pub mod approx_cmp;
pub mod error;
pub mod sign;
pub mod signature;

pub mod blade;
pub mod permutations;

pub mod algebra;
pub mod multivector;
pub mod product;

pub mod derived;
pub mod dual;
pub mod involutions;

pub mod linear_map;
pub mod rotor;
pub mod versor;

pub use approx;

pub use crate::algebra::Algebra;
pub use crate::blade::{Blade, BladeMask};
pub use crate::error::{AlgebraError, ConfigError, OutOfRangeError, SingularOperandError};
pub use crate::linear_map::LinearMap;
pub use crate::multivector::Multivector;
pub use crate::rotor::Rotor;
pub use crate::sign::Sign;
pub use crate::signature::Signature;
pub use crate::versor::Versor;

/// Structs, traits, and constants re-exported for convenient glob import.
pub mod prelude {
    pub use crate::algebra::Algebra;
    pub use crate::approx_cmp::*;
    pub use crate::blade::{Blade, BladeMask};
    pub use crate::error::*;
    pub use crate::linear_map::LinearMap;
    pub use crate::multivector::Multivector;
    pub use crate::permutations::{self, Parity};
    pub use crate::rotor::Rotor;
    pub use crate::sign::Sign;
    pub use crate::signature::Signature;
    pub use crate::versor::Versor;
    pub use crate::{EPSILON, Float, MAX_AXES};
}
