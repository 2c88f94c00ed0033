//! Shared algebra context: a signature plus derived dimension and numeric
//! policy, referenced by identity from every multivector, versor, rotor, and
//! linear map built on it.

use std::rc::Rc;

use crate::blade::BladeMask;
use crate::error::ConfigError;
use crate::signature::Signature;
use crate::{EPSILON, Float};

/// A [`Signature`] bound to a dimension count and a numeric tolerance,
/// shared by every [`crate::Multivector`] built from it.
///
/// Algebras are compared by identity, not by structural equality of their
/// signatures: two algebras with the same `(p, q, r)` are still considered
/// different contexts unless they are literally the same handle. Wrap an
/// `Algebra` in [`AlgebraHandle`] (an `Rc<Algebra>`) to get this comparison
/// for free via `Rc::ptr_eq`.
#[derive(Debug, Clone, PartialEq)]
pub struct Algebra {
    signature: Signature,
    epsilon: Float,
}

/// A shared, reference-counted handle to an [`Algebra`]. Cloning is cheap
/// (it clones the `Rc`, not the algebra), and two handles compare equal by
/// [`AlgebraHandle::same_as`] only when they point at the same allocation —
/// this is the "pointer/identity compared" context reference the rest of the
/// crate relies on.
pub type AlgebraHandle = Rc<Algebra>;

/// Returns whether two algebra handles refer to the same algebra instance.
pub fn same_algebra(a: &AlgebraHandle, b: &AlgebraHandle) -> bool {
    Rc::ptr_eq(a, b)
}

impl Algebra {
    /// Constructs a new algebra handle from a signature, using the default
    /// [`EPSILON`] tolerance.
    pub fn new(signature: Signature) -> AlgebraHandle {
        Rc::new(Self {
            signature,
            epsilon: EPSILON,
        })
    }

    /// Constructs a new algebra handle from a signature with a custom
    /// tolerance for inversion/normalization guards.
    pub fn with_epsilon(signature: Signature, epsilon: Float) -> AlgebraHandle {
        Rc::new(Self { signature, epsilon })
    }

    /// Constructs an algebra directly from `(p, q, r)` counts.
    pub fn from_counts(
        p: u8,
        q: u8,
        r: u8,
        handedness: crate::signature::Handedness,
    ) -> Result<AlgebraHandle, ConfigError> {
        Ok(Self::new(Signature::from_counts(p, q, r, handedness)?))
    }

    /// Returns this algebra's signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Returns the number of axes (dimensions) of this algebra.
    pub fn dimensions(&self) -> u8 {
        self.signature.dimensions()
    }

    /// Returns the number of dense coefficient slots (`2^dimensions`) a
    /// multivector in this algebra holds.
    pub fn coefficient_count(&self) -> usize {
        1usize << self.dimensions()
    }

    /// Returns the algebra's approximate-zero/approximate-equal tolerance.
    pub fn epsilon(&self) -> Float {
        self.epsilon
    }

    /// Returns the pseudoscalar mask `e_0 e_1 ... e_{n-1}` for this algebra.
    pub fn pseudoscalar_mask(&self) -> BladeMask {
        BladeMask::pseudoscalar(self.dimensions())
    }
}
