//! Invertible multivectors acting on the algebra by sandwich product.

use crate::algebra::same_algebra;
use crate::error::{AlgebraError, SingularOperandError};
use crate::involutions::reverse;
use crate::multivector::Multivector;
use crate::product::geometric_product;

/// An invertible element of an algebra, acting on other multivectors by the
/// sandwich product `V X V^-1`.
#[derive(Debug, Clone)]
pub struct Versor(Multivector);

impl Versor {
    /// Wraps `mv` as a versor. Does not check invertibility eagerly; that is
    /// discovered by [`Versor::inverse`] or [`Versor::apply`].
    pub fn new(mv: Multivector) -> Self {
        Self(mv)
    }

    /// Returns the wrapped multivector.
    pub fn as_multivector(&self) -> &Multivector {
        &self.0
    }

    /// Returns `~V / scalar(V * ~V)`, failing if that scalar norm is within
    /// the algebra's epsilon of zero.
    pub fn inverse(&self) -> Result<Multivector, SingularOperandError> {
        let rev = reverse(&self.0);
        let norm = geometric_product(&self.0, &rev).expect("self and its reverse share an algebra");
        let scalar = norm.scalar_part();
        let epsilon = self.0.algebra().epsilon();
        if !crate::approx_cmp::is_approx_nonzero(&scalar, epsilon) {
            return Err(SingularOperandError::NearZeroNorm);
        }
        Ok(rev.scale(1.0 / scalar))
    }

    /// Returns `V * X * V^-1`.
    pub fn apply(&self, x: &Multivector) -> Result<Multivector, VersorApplyError> {
        if !same_algebra(self.0.algebra(), x.algebra()) {
            return Err(VersorApplyError::AlgebraMismatch(AlgebraError));
        }
        let inv = self.inverse()?;
        let vx = geometric_product(&self.0, x).expect("checked same algebra above");
        let result = geometric_product(&vx, &inv).expect("checked same algebra above");
        Ok(result)
    }
}

/// Failure modes for [`Versor::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VersorApplyError {
    /// The versor and the operand do not share an algebra.
    #[error(transparent)]
    AlgebraMismatch(#[from] AlgebraError),
    /// The versor could not be inverted.
    #[error(transparent)]
    Singular(#[from] SingularOperandError),
}
