//! Hodge dual via pseudoscalar product, with non-fatal skipping of
//! ill-defined components under a degenerate metric.

use crate::blade::Blade;
use crate::multivector::Multivector;
use crate::sign::Sign;

/// Returns the reverse sign `(-1)^(r(r-1)/2)` for grade `r`, the same
/// per-grade flip as [`crate::involutions::reverse`].
fn reverse_sign(grade: u8) -> Sign {
    let r = grade as u32;
    Sign::from_parity((r * r.saturating_sub(1) / 2) % 2 != 0)
}

/// Returns the Hodge dual of `mv`, computed as `dual(A) = reverse(A) * I`
/// for the algebra's pseudoscalar `I`.
///
/// Reversing each basis blade before the product (rather than multiplying
/// by it directly) is what makes this the *complement* duality used
/// throughout the rest of this crate: it is the convention under which
/// `dual(e1) = e23`, `dual(e12) = e3`, and `dual(e123) = 1` all hold
/// simultaneously in a 3D Euclidean algebra, rather than alternating sign
/// by grade.
///
/// For each nonzero component at mask `m`, this multiplies the basis blade
/// `m` (reversed) by the full pseudoscalar under the algebra's signature,
/// signed by [`crate::signature::Signature::pseudoscalar_sign`] —
/// [`crate::signature::Handedness::Left`] negates every dual mapping
/// relative to [`crate::signature::Handedness::Right`]. Because `m` is
/// always a subset of the pseudoscalar's axes, this
/// contracts the metric over every axis `m` itself occupies — which is
/// exactly where a null axis in `m` makes the result ill-defined. When that
/// happens the product collapses to the zero blade; the component is
/// dropped rather than folded into a misleading partial result, and the
/// drop is logged.
///
/// This makes `dual` involutive (`dual(dual(A)) == A`) whenever the
/// signature is non-degenerate, matching the quantified property for
/// Euclidean `n = 3`. In a degenerate signature it is intentionally
/// partial: callers needing a total projective dual build one on top of
/// this per-term primitive.
#[must_use]
pub fn dual(mv: &Multivector) -> Multivector {
    let algebra = mv.algebra().clone();
    let pseudoscalar_mask = algebra.pseudoscalar_mask();
    let signature = algebra.signature();
    let pseudoscalar = Blade::new(pseudoscalar_mask, signature.pseudoscalar_sign());
    let mut result = Multivector::zero(&algebra);

    for (mask, coeff) in mv.terms() {
        let blade = Blade::new(mask, reverse_sign(mask.grade()));
        let bp = blade.geometric_product(pseudoscalar, signature);
        match bp.sign {
            Some(sign) => {
                let existing = result.get(bp.mask);
                result.set(bp.mask, existing + coeff * sign.to_num::<crate::Float>());
            }
            None => {
                log::debug!(
                    "dropping degenerate dual contribution at mask {mask:?} (coefficient {coeff})"
                );
            }
        }
    }

    result
}
