//! Approximate comparison helpers parameterized by an explicit epsilon.
//!
//! Unlike a single crate-wide tolerance, each [`crate::Algebra`] carries its
//! own epsilon (see [`crate::algebra::Algebra::epsilon`]), so these functions
//! take it as an argument rather than reaching for a global constant.

pub use approx::AbsDiffEq;
use num_traits::Zero;

use crate::Float;

/// Compares two numbers, but considers them equal if they are separated by
/// less than `epsilon`.
///
/// Handles infinity specially via native float equality.
pub fn approx_eq<T: AbsDiffEq<Epsilon = Float>>(a: &T, b: &T, epsilon: Float) -> bool {
    a == b || approx::abs_diff_eq!(a, b, epsilon = epsilon)
}

/// Compares two numbers, treating them as equal if within `epsilon`.
pub fn approx_cmp<T: AbsDiffEq<Epsilon = Float> + PartialOrd>(
    a: &T,
    b: &T,
    epsilon: Float,
) -> std::cmp::Ordering {
    if approx_eq(a, b, epsilon) {
        std::cmp::Ordering::Equal
    } else if a < b {
        std::cmp::Ordering::Less
    } else {
        std::cmp::Ordering::Greater
    }
}

/// Returns whether `x` has an absolute value greater than `epsilon`.
pub fn is_approx_nonzero<T: AbsDiffEq<Epsilon = Float> + Zero>(x: &T, epsilon: Float) -> bool {
    !approx_eq(x, &T::zero(), epsilon)
}

/// Returns whether `x` is less than `-epsilon`.
pub fn is_approx_negative<T: AbsDiffEq<Epsilon = Float> + PartialOrd + Zero>(
    x: &T,
    epsilon: Float,
) -> bool {
    x < &T::zero() && !approx_eq(x, &T::zero(), epsilon)
}

/// Returns whether `x` is greater than `epsilon`.
pub fn is_approx_positive<T: AbsDiffEq<Epsilon = Float> + PartialOrd + Zero>(
    x: &T,
    epsilon: Float,
) -> bool {
    x > &T::zero() && !approx_eq(x, &T::zero(), epsilon)
}

/// Divides `lhs` by `rhs` if `rhs` is non-negligible under `epsilon`;
/// otherwise returns `None`.
pub fn try_div(lhs: Float, rhs: Float, epsilon: Float) -> Option<Float> {
    is_approx_nonzero(&rhs, epsilon).then(|| lhs / rhs)
}

/// Returns the reciprocal of `x` if it is non-negligible under `epsilon`.
pub fn try_recip(x: Float, epsilon: Float) -> Option<Float> {
    is_approx_nonzero(&x, epsilon).then(|| x.recip())
}

/// Returns the square root of `n` if the result is finite.
pub fn try_sqrt(n: Float) -> Option<Float> {
    let ret = n.sqrt();
    ret.is_finite().then_some(ret)
}
