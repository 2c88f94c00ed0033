//! Derived products, each a thin grade filter over [`crate::product::product`].

use crate::error::AlgebraError;
use crate::multivector::Multivector;
use crate::product::product;

/// Exterior (wedge) product: keeps only contributions of grade `gA + gB`.
pub fn wedge(a: &Multivector, b: &Multivector) -> Result<Multivector, AlgebraError> {
    product(a, b, Some(&|ga: u8, gb: u8, gr: u8| gr == ga + gb))
}

/// Hestenes inner product: keeps only contributions of grade `|gA - gB|`.
pub fn hestenes_inner(a: &Multivector, b: &Multivector) -> Result<Multivector, AlgebraError> {
    product(
        a,
        b,
        Some(&|ga: u8, gb: u8, gr: u8| gr == ga.abs_diff(gb)),
    )
}

/// Left contraction `a ⌋ b`: keeps contributions with `gA <= gB` and grade
/// `gB - gA`.
pub fn left_contraction(a: &Multivector, b: &Multivector) -> Result<Multivector, AlgebraError> {
    product(
        a,
        b,
        Some(&|ga: u8, gb: u8, gr: u8| ga <= gb && gr == gb - ga),
    )
}

/// Right contraction `a ⌊ b`: keeps contributions with `gA >= gB` and grade
/// `gA - gB`.
pub fn right_contraction(a: &Multivector, b: &Multivector) -> Result<Multivector, AlgebraError> {
    product(
        a,
        b,
        Some(&|ga: u8, gb: u8, gr: u8| ga >= gb && gr == ga - gb),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Algebra;
    use crate::blade::BladeMask;
    use crate::signature::Handedness;

    #[test]
    fn test_wedge_anticommutativity() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let e1 = Multivector::basis_vector(&alg, 0);
        let e2 = Multivector::basis_vector(&alg, 1);
        let e12 = wedge(&e1, &e2).unwrap();
        let e21 = wedge(&e2, &e1).unwrap();
        assert_approx_eq!(e12.get(BladeMask(0b011)), 1.0);
        assert_approx_eq!(e21.get(BladeMask(0b011)), -1.0);

        let e11 = wedge(&e1, &e1).unwrap();
        assert!(e11.is_zero());
    }

    #[test]
    fn test_e3_contractions_with_bivector() {
        // Scenario: Signature (3,0,0). B = e1 ^ e2.
        // e1 _| B = e2; e2 _| B = -e1; e3 _| B = 0.
        // B |_ e2 = e1; B |_ e1 = -e2; B |_ e3 = 0.
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let e1 = Multivector::basis_vector(&alg, 0);
        let e2 = Multivector::basis_vector(&alg, 1);
        let e3 = Multivector::basis_vector(&alg, 2);
        let b = wedge(&e1, &e2).unwrap();

        assert_approx_eq!(left_contraction(&e1, &b).unwrap().get(BladeMask::axis(1)), 1.0);
        assert_approx_eq!(left_contraction(&e2, &b).unwrap().get(BladeMask::axis(0)), -1.0);
        assert!(left_contraction(&e3, &b).unwrap().is_zero());

        assert_approx_eq!(right_contraction(&b, &e2).unwrap().get(BladeMask::axis(0)), 1.0);
        assert_approx_eq!(right_contraction(&b, &e1).unwrap().get(BladeMask::axis(1)), -1.0);
        assert!(right_contraction(&b, &e3).unwrap().is_zero());
    }
}
