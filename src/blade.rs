//! Basis blade encoding: a bitmask of axes plus an orientation sign, and the
//! canonical geometric product of two basis blades under a [`Signature`].

use std::fmt;

use crate::permutations::sort_with_parity;
use crate::signature::Signature;
use crate::sign::Sign;

/// Bitmask selecting a set of basis axes. Bit `i` set means axis `e_i` is
/// present. The grade of a mask is its population count.
///
/// Unlike the teacher crate's `bitflags!`-based `Axes` type, this is a plain
/// newtype: our axis count is a runtime parameter of the [`Signature`]
/// (0..=[`crate::MAX_AXES`]), not a fixed set of named constants, so there is
/// nothing for `bitflags!` to name ahead of time.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BladeMask(pub u8);

impl BladeMask {
    /// The scalar (empty) mask.
    pub const SCALAR: Self = Self(0);

    /// Returns the mask with exactly axis `i` set.
    pub const fn axis(i: u8) -> Self {
        Self(1 << i)
    }

    /// Returns the pseudoscalar mask for `dimensions` axes: all bits
    /// `0..dimensions` set.
    pub const fn pseudoscalar(dimensions: u8) -> Self {
        Self(((1u16 << dimensions) - 1) as u8)
    }

    /// Returns the grade (number of axes) encoded by this mask.
    pub const fn grade(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Returns whether this mask contains axis `i`.
    pub const fn contains_axis(self, i: u8) -> bool {
        self.0 & (1 << i) != 0
    }

    /// Returns an iterator over the axis indices set in this mask, ascending.
    pub fn axes(self) -> impl Iterator<Item = u8> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let i = bits.trailing_zeros() as u8;
                bits &= bits - 1;
                Some(i)
            }
        })
    }
}

impl std::ops::BitXor for BladeMask {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}
impl std::ops::BitAnd for BladeMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for BladeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "1");
        }
        write!(f, "e")?;
        for i in self.axes() {
            write!(f, "{}", i + 1)?;
        }
        Ok(())
    }
}

/// A basis blade: a [`BladeMask`] together with an orientation sign.
///
/// `sign = None` denotes the zero blade, which absorbs every product. This is
/// distinct from `mask = BladeMask::SCALAR`, which (with a sign) denotes the
/// unit scalar basis element.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Blade {
    /// Basis axes present in this blade.
    pub mask: BladeMask,
    /// Orientation, or `None` for the zero blade.
    pub sign: Option<Sign>,
}

impl fmt::Display for Blade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sign {
            None => write!(f, "0"),
            Some(sign) => write!(f, "{sign}{}", self.mask),
        }
    }
}

impl Blade {
    /// The zero blade.
    pub const ZERO: Self = Self {
        mask: BladeMask::SCALAR,
        sign: None,
    };
    /// The unit scalar basis element.
    pub const SCALAR: Self = Self {
        mask: BladeMask::SCALAR,
        sign: Some(Sign::Pos),
    };

    /// Constructs a blade directly from a mask and sign.
    pub const fn new(mask: BladeMask, sign: Sign) -> Self {
        Self {
            mask,
            sign: Some(sign),
        }
    }

    /// Constructs the basis blade `e_{axes[0]} ^ e_{axes[1]} ^ ...` from a
    /// list of axis indices, in the order given.
    ///
    /// If any axis repeats, the wedge is zero (`e_i ^ e_i = 0`) and the zero
    /// blade is returned. Otherwise the axes are sorted ascending and the
    /// parity of that sort determines the sign.
    pub fn from_axes(axes: &[u8]) -> Self {
        let mut sorted = axes.to_vec();
        for i in 0..sorted.len() {
            for j in (i + 1)..sorted.len() {
                if sorted[i] == sorted[j] {
                    return Self::ZERO;
                }
            }
        }
        let parity = sort_with_parity(&mut sorted);
        let mut mask = 0u8;
        for &i in &sorted {
            mask |= 1 << i;
        }
        Self::new(BladeMask(mask), Sign::from_parity(parity.is_odd()))
    }

    /// Returns the grade of this blade (0 if it is the zero blade, matching
    /// its mask's grade since the zero blade carries `BladeMask::SCALAR`).
    pub fn grade(self) -> u8 {
        self.mask.grade()
    }

    /// Returns whether this is the zero blade.
    pub fn is_zero(self) -> bool {
        self.sign.is_none()
    }

    /// Returns this blade negated, or the zero blade unchanged.
    #[must_use]
    pub fn negate(self) -> Self {
        Self {
            mask: self.mask,
            sign: self.sign.map(|s| -s),
        }
    }

    /// Metric-free exterior combination of two blades: `e_a_mask ^ e_b_mask`.
    /// Zero if either operand is zero or the masks overlap; otherwise the
    /// mask is the symmetric difference and the sign accounts for both
    /// operand signs and the parity of axes that must cross.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        let (Some(sa), Some(sb)) = (self.sign, other.sign) else {
            return Self::ZERO;
        };
        if self.mask & other.mask != BladeMask::SCALAR {
            return Self::ZERO;
        }
        let swaps = swap_count(self.mask, other.mask);
        Self::new(self.mask ^ other.mask, sa * sb * Sign::from_parity(swaps % 2 != 0))
    }

    /// Geometric product of two basis blades under `signature`.
    ///
    /// The sign is built from two independent factors: the permutation
    /// parity needed to interleave the two axis lists into canonical order
    /// (the same swap count used by [`Blade::combine`]), and the metric
    /// contraction `g(i)` for every axis shared between the two operands. A
    /// null shared axis (`g(i) == 0`) collapses the whole product to the
    /// zero blade, regardless of the resulting mask.
    #[must_use]
    pub fn geometric_product(self, other: Self, signature: &Signature) -> Self {
        let (Some(sa), Some(sb)) = (self.sign, other.sign) else {
            return Self::ZERO;
        };
        let swaps = swap_count(self.mask, other.mask);
        let mut sign = sa * sb * Sign::from_parity(swaps % 2 != 0);

        let mut metric_scale = 1.0;
        for i in (self.mask & other.mask).axes() {
            let g = signature.g(i);
            if g == 0.0 {
                return Self::ZERO;
            }
            metric_scale *= g;
        }
        if metric_scale < 0.0 {
            sign = -sign;
        }

        Self::new(self.mask ^ other.mask, sign)
    }
}

/// Counts, modulo 2, the number of axis-pairs `(i, j)` with `i` from `a` and
/// `j` from `b` that are out of canonical order — i.e. `i` appears in `a`
/// and some `j < i` appears in `b`. This is the bit-trick formulation of
/// "how many transpositions does merging these two sorted axis lists take".
fn swap_count(a: BladeMask, b: BladeMask) -> u32 {
    let mut swaps = 0u32;
    for i in a.axes() {
        // axes of b strictly below i
        let below_mask = ((1u16 << i) - 1) as u8;
        swaps += (b.0 & below_mask).count_ones();
    }
    swaps
}
