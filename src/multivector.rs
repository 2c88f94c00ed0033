//! Dense multivectors bound to a shared [`Algebra`].

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::algebra::{same_algebra, Algebra, AlgebraHandle};
use crate::blade::BladeMask;
use crate::error::AlgebraError;
use crate::sign::Sign;
use crate::Float;

/// A real linear combination of basis blades, stored densely indexed by
/// [`BladeMask`], bound to one particular [`Algebra`].
///
/// Every binary operation between two multivectors requires them to
/// reference the *same* algebra instance (see
/// [`crate::algebra::same_algebra`]); mismatches are reported as
/// [`AlgebraError`] rather than silently mixing signatures.
#[derive(Debug, Clone)]
pub struct Multivector {
    algebra: AlgebraHandle,
    coeffs: Box<[Float]>,
}

impl Multivector {
    /// Constructs a zero multivector in `algebra`.
    pub fn zero(algebra: &AlgebraHandle) -> Self {
        Self {
            algebra: algebra.clone(),
            coeffs: vec![0.0; algebra.coefficient_count()].into_boxed_slice(),
        }
    }

    /// Constructs a scalar multivector with value `x`.
    pub fn scalar(algebra: &AlgebraHandle, x: Float) -> Self {
        let mut mv = Self::zero(algebra);
        mv.coeffs[0] = x;
        mv
    }

    /// Constructs the unit basis vector `e_i` in `algebra`.
    pub fn basis_vector(algebra: &AlgebraHandle, i: u8) -> Self {
        let mut mv = Self::zero(algebra);
        mv.set(BladeMask::axis(i), 1.0);
        mv
    }

    /// Constructs a multivector from `(mask, coefficient)` pairs, summing
    /// repeated masks.
    pub fn from_terms(algebra: &AlgebraHandle, terms: impl IntoIterator<Item = (BladeMask, Float)>) -> Self {
        let mut mv = Self::zero(algebra);
        for (mask, coeff) in terms {
            let existing = mv.get(mask);
            mv.set(mask, existing + coeff);
        }
        mv
    }

    /// Returns the algebra this multivector is bound to.
    pub fn algebra(&self) -> &AlgebraHandle {
        &self.algebra
    }

    /// Returns the coefficient at `mask`.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is not representable in this algebra's dimension
    /// (i.e. it sets an axis bit `>= algebra.dimensions()`).
    pub fn get(&self, mask: BladeMask) -> Float {
        self.coeffs[mask.0 as usize]
    }

    /// Sets the coefficient at `mask`.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is not representable in this algebra's dimension.
    pub fn set(&mut self, mask: BladeMask, value: Float) {
        self.coeffs[mask.0 as usize] = value;
    }

    /// Returns an iterator over the nonzero `(mask, coefficient)` pairs,
    /// filtered through the algebra's epsilon.
    pub fn terms(&self) -> impl Iterator<Item = (BladeMask, Float)> + '_ {
        let epsilon = self.algebra.epsilon();
        self.coeffs
            .iter()
            .enumerate()
            .filter(move |(_, &c)| crate::approx_cmp::is_approx_nonzero(&c, epsilon))
            .map(|(mask, &c)| (BladeMask(mask as u8), c))
    }

    /// Returns the raw dense coefficient array, indexed by blade mask. Paired
    /// with [`Multivector::from_coefficients`], this lets a caller persist a
    /// multivector (by also persisting its algebra's [`crate::Signature`]
    /// separately) without this crate needing an opinion on a wire format.
    pub fn coefficients(&self) -> &[Float] {
        &self.coeffs
    }

    /// Reconstructs a multivector in `algebra` from a raw dense coefficient
    /// slice, as previously returned by [`Multivector::coefficients`].
    ///
    /// # Panics
    ///
    /// Panics if `coeffs.len() != algebra.coefficient_count()`.
    pub fn from_coefficients(algebra: &AlgebraHandle, coeffs: &[Float]) -> Self {
        assert_eq!(coeffs.len(), algebra.coefficient_count());
        Self {
            algebra: algebra.clone(),
            coeffs: coeffs.into(),
        }
    }

    /// Returns whether every coefficient is approximately zero.
    pub fn is_zero(&self) -> bool {
        self.terms().next().is_none()
    }

    /// Returns the scalar (grade-0) component.
    pub fn scalar_part(&self) -> Float {
        self.get(BladeMask::SCALAR)
    }

    /// Returns a new multivector containing only the components of grade
    /// `grade`.
    pub fn grade_part(&self, grade: u8) -> Self {
        let mut result = Self::zero(&self.algebra);
        for (mask, c) in self.terms() {
            if mask.grade() == grade {
                result.set(mask, c);
            }
        }
        result
    }

    fn check_same_algebra(&self, other: &Self) -> Result<(), AlgebraError> {
        if same_algebra(&self.algebra, &other.algebra) {
            Ok(())
        } else {
            Err(AlgebraError)
        }
    }

    fn zip_map(&self, other: &Self, f: impl Fn(Float, Float) -> Float) -> Result<Self, AlgebraError> {
        self.check_same_algebra(other)?;
        let coeffs = self
            .coeffs
            .iter()
            .zip(other.coeffs.iter())
            .map(|(&a, &b)| f(a, b))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Self {
            algebra: self.algebra.clone(),
            coeffs,
        })
    }

    /// Adds two multivectors component-wise.
    pub fn try_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Subtracts two multivectors component-wise.
    pub fn try_sub(&self, other: &Self) -> Result<Self, AlgebraError> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Returns this multivector scaled by `s`.
    #[must_use]
    pub fn scale(&self, s: Float) -> Self {
        Self {
            algebra: self.algebra.clone(),
            coeffs: self.coeffs.iter().map(|&c| c * s).collect(),
        }
    }

    /// Returns this multivector negated.
    #[must_use]
    pub fn negated(&self) -> Self {
        self.scale(-1.0)
    }
}

impl PartialEq for Multivector {
    fn eq(&self, other: &Self) -> bool {
        same_algebra(&self.algebra, &other.algebra) && self.coeffs == other.coeffs
    }
}

impl approx::AbsDiffEq for Multivector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        same_algebra(&self.algebra, &other.algebra)
            && self
                .coeffs
                .iter()
                .zip(other.coeffs.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (mask, coeff) in self.terms() {
            if first {
                write!(f, "{coeff}")?;
            } else if coeff.is_sign_negative() {
                write!(f, " - {}", -coeff)?;
            } else {
                write!(f, " + {coeff}")?;
            }
            if mask != BladeMask::SCALAR {
                write!(f, "{mask}")?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl_mul_sign!(impl Mul<Sign> for Multivector);

impl Add for &Multivector {
    type Output = Multivector;
    fn add(self, rhs: Self) -> Multivector {
        self.try_add(rhs)
            .unwrap_or_else(|_| debug_panic_mismatch())
    }
}
impl Sub for &Multivector {
    type Output = Multivector;
    fn sub(self, rhs: Self) -> Multivector {
        self.try_sub(rhs)
            .unwrap_or_else(|_| debug_panic_mismatch())
    }
}
impl Neg for &Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.negated()
    }
}
impl Neg for Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.negated()
    }
}
impl AddAssign<&Multivector> for Multivector {
    fn add_assign(&mut self, rhs: &Multivector) {
        *self = &*self + rhs;
    }
}
impl SubAssign<&Multivector> for Multivector {
    fn sub_assign(&mut self, rhs: &Multivector) {
        *self = &*self - rhs;
    }
}
impl Mul<Float> for &Multivector {
    type Output = Multivector;
    fn mul(self, rhs: Float) -> Multivector {
        self.scale(rhs)
    }
}
impl Div<Float> for &Multivector {
    type Output = Multivector;
    fn div(self, rhs: Float) -> Multivector {
        self.scale(1.0 / rhs)
    }
}

impl_forward_bin_ops_to_ref! {
    impl Add for Multivector { fn add() }
    impl Sub for Multivector { fn sub() }
}

pub(crate) fn debug_panic_mismatch() -> ! {
    debug_panic!("attempted to combine multivectors from different algebras");
    #[allow(unreachable_code)]
    {
        unreachable!()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Algebra;
    use crate::signature::Handedness;

    #[test]
    fn test_scalar_and_basis_vector() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let s = Multivector::scalar(&alg, 2.0);
        assert_eq!(s.scalar_part(), 2.0);
        let e1 = Multivector::basis_vector(&alg, 0);
        assert_eq!(e1.get(BladeMask::axis(0)), 1.0);
    }

    #[test]
    fn test_add_sub() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = Multivector::scalar(&alg, 1.0);
        let b = Multivector::scalar(&alg, 2.0);
        assert_eq!((&a + &b).scalar_part(), 3.0);
        assert_eq!((&a - &b).scalar_part(), -1.0);
    }

    #[test]
    fn test_algebra_mismatch() {
        let alg1 = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let alg2 = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = Multivector::scalar(&alg1, 1.0);
        let b = Multivector::scalar(&alg2, 1.0);
        assert!(a.try_add(&b).is_err());
    }

    #[test]
    fn test_terms_and_display() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let mv = Multivector::from_terms(
            &alg,
            [(BladeMask::SCALAR, 1.0), (BladeMask::axis(0), 2.0)],
        );
        assert_eq!(mv.terms().count(), 2);
        assert_eq!(mv.to_string(), "1 + 2e1");
    }
}
