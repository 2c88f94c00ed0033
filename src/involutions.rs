//! Per-grade sign-flip involutions: reverse, grade involution, and Clifford
//! conjugation. All three are metric-independent.

use crate::multivector::Multivector;

fn grade_sign(grade: u8, exponent: impl Fn(u32) -> u32) -> f64 {
    if exponent(grade as u32) % 2 == 0 { 1.0 } else { -1.0 }
}

fn apply_per_grade(mv: &Multivector, sign_for_grade: impl Fn(u8) -> f64) -> Multivector {
    let mut result = Multivector::zero(mv.algebra());
    for (mask, coeff) in mv.terms() {
        result.set(mask, coeff * sign_for_grade(mask.grade()));
    }
    result
}

/// Reverse `~A`: flips the sign of grade-`r` components by `(-1)^(r(r-1)/2)`.
#[must_use]
pub fn reverse(mv: &Multivector) -> Multivector {
    apply_per_grade(mv, |r| grade_sign(r, |r| r * (r.saturating_sub(1)) / 2))
}

/// Grade involution: flips the sign of grade-`r` components by `(-1)^r`.
#[must_use]
pub fn grade_involution(mv: &Multivector) -> Multivector {
    apply_per_grade(mv, |r| grade_sign(r, |r| r))
}

/// Clifford conjugation: flips the sign of grade-`r` components by
/// `(-1)^(r(r+1)/2)`. Equal to `reverse(grade_involution(A))` and
/// `grade_involution(reverse(A))`.
#[must_use]
pub fn clifford_conjugation(mv: &Multivector) -> Multivector {
    apply_per_grade(mv, |r| grade_sign(r, |r| r * (r + 1) / 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Algebra;
    use crate::blade::BladeMask;
    use crate::signature::Handedness;
    use approx::AbsDiffEq;

    fn sample(alg: &crate::algebra::AlgebraHandle) -> Multivector {
        Multivector::from_terms(
            alg,
            [
                (BladeMask::SCALAR, 1.0),
                (BladeMask::axis(0), 2.0),
                (BladeMask(0b011), 3.0),
                (BladeMask(0b111), 4.0),
            ],
        )
    }

    #[test]
    fn test_involution_idempotence() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = sample(&alg);
        assert!(reverse(&reverse(&a)).abs_diff_eq(&a, crate::EPSILON));
        assert!(grade_involution(&grade_involution(&a)).abs_diff_eq(&a, crate::EPSILON));
        assert!(clifford_conjugation(&clifford_conjugation(&a)).abs_diff_eq(&a, crate::EPSILON));
    }

    #[test]
    fn test_composition_identity() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let a = sample(&alg);
        let via_rev_then_gi = reverse(&grade_involution(&a));
        let via_gi_then_rev = grade_involution(&reverse(&a));
        assert!(clifford_conjugation(&a).abs_diff_eq(&via_rev_then_gi, crate::EPSILON));
        assert!(clifford_conjugation(&a).abs_diff_eq(&via_gi_then_rev, crate::EPSILON));
    }

    #[test]
    fn test_metric_independence() {
        let euclidean = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let sta = Algebra::new(crate::signature::Signature::minkowski(3).unwrap());
        let a = sample(&euclidean);
        let b = sample(&sta);
        assert_eq!(reverse(&a).get(BladeMask(0b111)), reverse(&b).get(BladeMask(0b111)));
    }
}
