//! Rotors: even-grade unit versors acting by `R X ~R`, with no inverse
//! division required.

use crate::algebra::same_algebra;
use crate::derived::hestenes_inner;
use crate::error::AlgebraError;
use crate::error::SingularOperandError;
use crate::involutions::reverse;
use crate::multivector::Multivector;
use crate::product::geometric_product;
use crate::Float;

/// An even-grade unit versor: `R * ~R == 1`. This precondition is
/// documented, not structurally enforced — callers are responsible for only
/// constructing rotors via [`Rotor::from_bivector_angle`],
/// [`Rotor::from_plane_angle`], or other even-grade unit elements.
#[derive(Debug, Clone)]
pub struct Rotor(Multivector);

impl Rotor {
    /// Wraps `mv` as a rotor without checking the even-grade/unit-norm
    /// precondition.
    pub fn new(mv: Multivector) -> Self {
        Self(mv)
    }

    /// Returns the wrapped multivector.
    pub fn as_multivector(&self) -> &Multivector {
        &self.0
    }

    /// Returns a copy of this rotor scaled so that `R * ~R` has scalar part
    /// 1, failing if that scalar is within the algebra's epsilon of zero.
    pub fn normalize(&self) -> Result<Rotor, SingularOperandError> {
        let rev = reverse(&self.0);
        let norm = geometric_product(&self.0, &rev).expect("self and its reverse share an algebra");
        let scalar = norm.scalar_part();
        let epsilon = self.0.algebra().epsilon();
        if !crate::approx_cmp::is_approx_nonzero(&scalar, epsilon) {
            return Err(SingularOperandError::NearZeroNorm);
        }
        let Some(scale) = crate::approx_cmp::try_sqrt(scalar.abs()) else {
            return Err(SingularOperandError::NearZeroNorm);
        };
        Ok(Rotor(self.0.scale(1.0 / scale)))
    }

    /// Returns `R * X * ~R`.
    pub fn apply(&self, x: &Multivector) -> Result<Multivector, AlgebraError> {
        if !same_algebra(self.0.algebra(), x.algebra()) {
            return Err(AlgebraError);
        }
        let rev = reverse(&self.0);
        let rx = geometric_product(&self.0, x).expect("checked same algebra above");
        Ok(geometric_product(&rx, &rev).expect("checked same algebra above"))
    }

    /// Builds a rotor from a bivector `b` and angle `theta`: scalar part
    /// `cos(theta/2)`, bivector part `-sin(theta/2) * b`, then normalized.
    pub fn from_bivector_angle(b: &Multivector, theta: Float) -> Result<Rotor, SingularOperandError> {
        let half = theta / 2.0;
        let scalar = Multivector::scalar(b.algebra(), half.cos());
        let bivector_part = b.scale(-half.sin());
        let raw = &scalar + &bivector_part;
        Rotor::new(raw).normalize()
    }

    /// Builds a rotor that rotates in the plane spanned by `a` and `b` by
    /// angle `theta`. The plane's bivector is normalized using the Hestenes
    /// inner product `b . b` (not a bare coefficient sum), so this is
    /// correct under any metric, not just Euclidean ones.
    ///
    /// Fails with [`SingularOperandError::DegeneratePlane`] if `a ^ b` has
    /// near-zero squared magnitude under the algebra's metric.
    pub fn from_plane_angle(a: &Multivector, b: &Multivector, theta: Float) -> Result<Rotor, SingularOperandError> {
        let plane = crate::derived::wedge(a, b).expect("a and b must share an algebra");
        let epsilon = plane.algebra().epsilon();
        let squared_magnitude = hestenes_inner(&plane, &plane)
            .expect("plane shares its own algebra")
            .scalar_part();
        if !crate::approx_cmp::is_approx_nonzero(&squared_magnitude, epsilon) {
            return Err(SingularOperandError::DegeneratePlane);
        }
        let Some(scale) = crate::approx_cmp::try_sqrt(squared_magnitude.abs()) else {
            return Err(SingularOperandError::DegeneratePlane);
        };
        let unit_plane = plane.scale(1.0 / scale);
        Rotor::from_bivector_angle(&unit_plane, theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Algebra;
    use crate::blade::BladeMask;
    use crate::signature::Handedness;
    use approx::AbsDiffEq;

    #[test]
    fn test_rotor_normalization() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let e1 = Multivector::basis_vector(&alg, 0);
        let e2 = Multivector::basis_vector(&alg, 1);
        let bivector = crate::derived::wedge(&e1, &e2).unwrap().scale(3.0);
        let raw = &Multivector::scalar(&alg, 2.0) + &bivector;
        let rotor = Rotor::new(raw).normalize().unwrap();
        let rev = reverse(rotor.as_multivector());
        let check = geometric_product(rotor.as_multivector(), &rev).unwrap();
        assert_approx_eq!(check.scalar_part(), 1.0);
        for (mask, coeff) in check.terms() {
            if mask != BladeMask::SCALAR {
                assert!(coeff.abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_e3_rotor_90_degrees() {
        // Scenario: Signature (3,0,0). R = rotorFromPlaneAngle(e1, e2, pi/2).
        // R * e1 * ~R has only the e2 component, equal to 1.
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let e1 = Multivector::basis_vector(&alg, 0);
        let e2 = Multivector::basis_vector(&alg, 1);
        let rotor = Rotor::from_plane_angle(&e1, &e2, std::f64::consts::FRAC_PI_2).unwrap();
        let rotated = rotor.apply(&e1).unwrap();
        assert_approx_eq!(rotated.get(BladeMask::axis(1)), 1.0);
        assert_approx_eq!(rotated.get(BladeMask::axis(0)), 0.0);
        assert_approx_eq!(rotated.get(BladeMask::axis(2)), 0.0);
    }

    #[test]
    fn test_degenerate_plane_fails() {
        let alg = Algebra::new(crate::signature::Signature::projectivized(2).unwrap());
        let e2 = Multivector::basis_vector(&alg, 2); // null axis
        let e0 = Multivector::basis_vector(&alg, 0);
        assert!(matches!(
            Rotor::from_plane_angle(&e0, &e2, 1.0),
            Err(SingularOperandError::DegeneratePlane)
        ));
    }
}
