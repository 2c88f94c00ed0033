//! The grade-filtered bilinear product kernel that every other product in
//! this crate (wedge, the Hestenes products, contractions) is a thin filter
//! over.

use std::ops::Mul;

use crate::algebra::same_algebra;
use crate::blade::{Blade, BladeMask};
use crate::error::AlgebraError;
use crate::multivector::Multivector;

/// A grade filter: given the grades of the two operand blades and the
/// resulting blade, decides whether to keep that contribution.
pub trait GradeFilter {
    /// Returns whether a contribution of grade `grade_result`, arising from
    /// operand grades `grade_a` and `grade_b`, should be kept.
    fn keep(&self, grade_a: u8, grade_b: u8, grade_result: u8) -> bool;
}

impl<F: Fn(u8, u8, u8) -> bool> GradeFilter for F {
    fn keep(&self, grade_a: u8, grade_b: u8, grade_result: u8) -> bool {
        self(grade_a, grade_b, grade_result)
    }
}

/// Bilinear product of `a` and `b` in their shared algebra, keeping only
/// contributions for which `keep` (if given) returns `true`.
///
/// Without a filter this is the full geometric product. Every term of `a`
/// is multiplied against every term of `b` via the single-blade
/// [`Blade::geometric_product`]; zero results (from null-axis annihilation)
/// are skipped, and when a filter is present, contributions whose
/// `(grade_a, grade_b, grade_result)` triple it rejects are skipped too.
pub fn product(
    a: &Multivector,
    b: &Multivector,
    keep: Option<&dyn GradeFilter>,
) -> Result<Multivector, AlgebraError> {
    if !same_algebra(a.algebra(), b.algebra()) {
        return Err(AlgebraError);
    }
    let algebra = a.algebra().clone();
    let signature = algebra.signature();
    let mut result = Multivector::zero(&algebra);

    for (mask_a, coeff_a) in a.terms() {
        let blade_a = Blade::new(mask_a, crate::Sign::Pos);
        for (mask_b, coeff_b) in b.terms() {
            let blade_b = Blade::new(mask_b, crate::Sign::Pos);
            let bp = blade_a.geometric_product(blade_b, signature);
            let Some(sign) = bp.sign else { continue };
            if let Some(filter) = keep {
                let grade_a = mask_a.grade();
                let grade_b = mask_b.grade();
                let grade_r = bp.mask.grade();
                if !filter.keep(grade_a, grade_b, grade_r) {
                    continue;
                }
            }
            let contribution = coeff_a * coeff_b * sign.to_num::<crate::Float>();
            let accumulated = result.get(bp.mask) + contribution;
            result.set(bp.mask, accumulated);
        }
    }

    Ok(result)
}

/// Convenience wrapper for the unfiltered geometric product.
pub fn geometric_product(a: &Multivector, b: &Multivector) -> Result<Multivector, AlgebraError> {
    product(a, b, None)
}

impl Mul for &Multivector {
    type Output = Multivector;

    /// The geometric product, as a thin call to [`geometric_product`].
    ///
    /// # Panics
    ///
    /// Panics (in debug builds) if `self` and `rhs` do not share an algebra,
    /// matching the panic-on-mismatch convention of the `Add`/`Sub` operator
    /// impls on [`Multivector`].
    fn mul(self, rhs: Self) -> Multivector {
        geometric_product(self, rhs).unwrap_or_else(|_| crate::multivector::debug_panic_mismatch())
    }
}

impl_forward_bin_ops_to_ref! {
    impl Mul for Multivector { fn mul() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::AbsDiffEq;
    use crate::algebra::Algebra;
    use crate::signature::Handedness;

    #[test]
    fn test_geometric_square_e3() {
        // Scenario: Signature (3,0,0). A = 1 + e1 + 2e2. A*A: scalar=6, e1=2, e2=4.
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = Multivector::from_terms(
            &alg,
            [
                (BladeMask::SCALAR, 1.0),
                (BladeMask::axis(0), 1.0),
                (BladeMask::axis(1), 2.0),
            ],
        );
        let result = geometric_product(&a, &a).unwrap();
        assert_approx_eq!(result.get(BladeMask::SCALAR), 6.0);
        assert_approx_eq!(result.get(BladeMask::axis(0)), 2.0);
        assert_approx_eq!(result.get(BladeMask::axis(1)), 4.0);
    }

    #[test]
    fn test_scalar_identity() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = Multivector::from_terms(&alg, [(BladeMask::axis(0), 3.0), (BladeMask::axis(1), 1.0)]);
        let one = Multivector::scalar(&alg, 1.0);
        let left = geometric_product(&one, &a).unwrap();
        let right = geometric_product(&a, &one).unwrap();
        assert!(left.abs_diff_eq(&a, crate::EPSILON));
        assert!(right.abs_diff_eq(&a, crate::EPSILON));
    }

    #[test]
    fn test_bilinearity() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = Multivector::from_terms(&alg, [(BladeMask::axis(0), 2.0)]);
        let b = Multivector::from_terms(&alg, [(BladeMask::axis(1), 3.0)]);
        let c = Multivector::from_terms(&alg, [(BladeMask::axis(2), -1.0)]);
        let lhs = geometric_product(&(&a.scale(2.0) + &b.scale(5.0)), &c).unwrap();
        let rhs = &geometric_product(&a, &c).unwrap().scale(2.0)
            + &geometric_product(&b, &c).unwrap().scale(5.0);
        assert!(lhs.abs_diff_eq(&rhs, 1e-9));
    }

    #[test]
    fn test_associativity() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = Multivector::from_terms(
            &alg,
            [(BladeMask::SCALAR, 1.0), (BladeMask::axis(0), 2.0)],
        );
        let b = Multivector::from_terms(
            &alg,
            [(BladeMask::axis(1), 1.5), (BladeMask(0b011), -0.5)],
        );
        let c = Multivector::from_terms(
            &alg,
            [(BladeMask::axis(2), 0.75), (BladeMask(0b111), 2.0)],
        );
        let left = &(&a * &b) * &c;
        let right = &a * &(&b * &c);
        assert!(left.abs_diff_eq(&right, 1e-9));
    }

    #[test]
    fn test_mul_operator_matches_geometric_product() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = Multivector::from_terms(&alg, [(BladeMask::axis(0), 1.0)]);
        let b = Multivector::from_terms(&alg, [(BladeMask::axis(1), 1.0)]);
        let via_operator = &a * &b;
        let via_function = geometric_product(&a, &b).unwrap();
        assert!(via_operator.abs_diff_eq(&via_function, crate::EPSILON));
    }
}
