//! Metric signature declaration: which axes square to +1, -1, or 0.

use crate::error::ConfigError;
use crate::sign::Sign;
use crate::{Float, MAX_AXES};

/// Sign of an axis's square under a diagonal metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricSign {
    /// Squares to +1.
    Positive,
    /// Squares to -1.
    Negative,
    /// Squares to 0 (a null/degenerate axis).
    Null,
}

impl MetricSign {
    /// Returns the metric value (+1, -1, or 0) as a [`Float`].
    pub fn value(self) -> Float {
        match self {
            MetricSign::Positive => 1.0,
            MetricSign::Negative => -1.0,
            MetricSign::Null => 0.0,
        }
    }
}

/// Orientation convention for the pseudoscalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handedness {
    /// Right-handed (the default, standard ordering of basis axes).
    #[default]
    Right,
    /// Left-handed: the pseudoscalar's sign is negated relative to
    /// right-handed convention.
    Left,
}

/// A diagonal metric signature: counts of axes squaring to +1, -1, and 0,
/// plus an orientation convention for the pseudoscalar.
///
/// Axes are numbered `0..dimensions()`. Building from counts assigns the
/// first `p` axes positive, the next `q` negative, and the last `r` null.
/// Building from masks lets a caller place the null/negative axes at
/// arbitrary positions (for example, a time axis placed last).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    metrics: [MetricSign; MAX_AXES as usize],
    dimensions: u8,
    handedness: Handedness,
}

impl Signature {
    /// Constructs a signature from counts of positive, negative, and null
    /// axes, assigned in that order.
    pub fn from_counts(p: u8, q: u8, r: u8, handedness: Handedness) -> Result<Self, ConfigError> {
        let dimensions = p as u32 + q as u32 + r as u32;
        if dimensions > MAX_AXES as u32 {
            return Err(ConfigError::TooManyAxes {
                requested: dimensions,
                max: MAX_AXES,
            });
        }
        let mut metrics = [MetricSign::Positive; MAX_AXES as usize];
        for (i, m) in metrics.iter_mut().enumerate() {
            *m = if (i as u8) < p {
                MetricSign::Positive
            } else if (i as u8) < p + q {
                MetricSign::Negative
            } else {
                MetricSign::Null
            };
        }
        Ok(Self {
            metrics,
            dimensions: dimensions as u8,
            handedness,
        })
    }

    /// Constructs a signature from three pairwise-disjoint bitmasks selecting
    /// the positive, negative, and null axes. `dimensions` is the number of
    /// axes that participate (axes at or above it are ignored even if set in
    /// a mask).
    pub fn from_masks(
        positive_mask: u32,
        negative_mask: u32,
        null_mask: u32,
        dimensions: u8,
        handedness: Handedness,
    ) -> Result<Self, ConfigError> {
        if dimensions > MAX_AXES {
            return Err(ConfigError::TooManyAxes {
                requested: dimensions as u32,
                max: MAX_AXES,
            });
        }
        if positive_mask & negative_mask != 0
            || positive_mask & null_mask != 0
            || negative_mask & null_mask != 0
        {
            return Err(ConfigError::OverlappingAxisMasks);
        }
        let mut metrics = [MetricSign::Positive; MAX_AXES as usize];
        for (i, m) in metrics.iter_mut().enumerate().take(dimensions as usize) {
            let bit = 1u32 << i;
            *m = if negative_mask & bit != 0 {
                MetricSign::Negative
            } else if null_mask & bit != 0 {
                MetricSign::Null
            } else {
                MetricSign::Positive
            };
        }
        Ok(Self {
            metrics,
            dimensions,
            handedness,
        })
    }

    /// Constructs a signature from an explicit per-axis metric list.
    pub fn from_metric(
        metrics_list: &[MetricSign],
        handedness: Handedness,
    ) -> Result<Self, ConfigError> {
        if metrics_list.len() > MAX_AXES as usize {
            return Err(ConfigError::TooManyAxes {
                requested: metrics_list.len() as u32,
                max: MAX_AXES,
            });
        }
        let mut metrics = [MetricSign::Positive; MAX_AXES as usize];
        metrics[..metrics_list.len()].copy_from_slice(metrics_list);
        Ok(Self {
            metrics,
            dimensions: metrics_list.len() as u8,
            handedness,
        })
    }

    /// Convenience constructor for an `n`-dimensional Euclidean signature
    /// `(n, 0, 0)`.
    pub fn euclidean(n: u8) -> Result<Self, ConfigError> {
        Self::from_counts(n, 0, 0, Handedness::Right)
    }

    /// Convenience constructor for an `n`-dimensional Minkowski (spacetime)
    /// signature `(1, n-1, 0)`, one positive time axis followed by `n-1`
    /// negative spatial axes.
    pub fn minkowski(n: u8) -> Result<Self, ConfigError> {
        Self::from_counts(1, n.saturating_sub(1), 0, Handedness::Right)
    }

    /// Convenience constructor for an `n`-dimensional projectivized
    /// signature `(n, 0, 1)`, as used by projective geometric algebra: `n`
    /// positive axes plus one trailing null axis.
    pub fn projectivized(n: u8) -> Result<Self, ConfigError> {
        Self::from_counts(n, 0, 1, Handedness::Right)
    }

    /// Returns the number of axes in this signature.
    pub fn dimensions(&self) -> u8 {
        self.dimensions
    }

    /// Returns the orientation convention for the pseudoscalar.
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    /// Returns the metric sign of axis `i`, for `i < dimensions()`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dimensions()`; every caller in this crate only ever
    /// iterates axes bounded by `dimensions()`.
    pub fn metric_sign(&self, i: u8) -> MetricSign {
        assert!(i < self.dimensions, "axis {i} out of range");
        self.metrics[i as usize]
    }

    /// Returns `g(i)`, the metric value (+1, -1, or 0) of axis `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dimensions()`.
    pub fn g(&self, i: u8) -> Float {
        self.metric_sign(i).value()
    }

    /// Returns whether any axis is null, i.e. the metric is degenerate.
    pub fn is_degenerate(&self) -> bool {
        (0..self.dimensions).any(|i| self.metric_sign(i) == MetricSign::Null)
    }

    /// Returns the orientation sign applied to the pseudoscalar: `+1` for
    /// [`Handedness::Right`], `-1` for [`Handedness::Left`]. [`dual`](crate::dual::dual)
    /// is the consumer of this: it multiplies by the signed pseudoscalar
    /// rather than the bare `e_0 e_1 ... e_{n-1}` blade, so swapping
    /// handedness negates every dual mapping in this algebra.
    pub fn pseudoscalar_sign(&self) -> Sign {
        match self.handedness {
            Handedness::Right => Sign::Pos,
            Handedness::Left => Sign::Neg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts() {
        let sig = Signature::from_counts(3, 0, 0, Handedness::Right).unwrap();
        assert_eq!(sig.dimensions(), 3);
        assert!(!sig.is_degenerate());
        for i in 0..3 {
            assert_eq!(sig.g(i), 1.0);
        }
    }

    #[test]
    fn test_minkowski() {
        let sig = Signature::minkowski(4).unwrap();
        assert_eq!(sig.g(0), 1.0);
        assert_eq!(sig.g(1), -1.0);
        assert_eq!(sig.g(2), -1.0);
        assert_eq!(sig.g(3), -1.0);
    }

    #[test]
    fn test_projectivized_null_axis() {
        let sig = Signature::projectivized(3).unwrap();
        assert_eq!(sig.dimensions(), 4);
        assert_eq!(sig.g(3), 0.0);
        assert!(sig.is_degenerate());
    }

    #[test]
    fn test_too_many_axes() {
        assert!(matches!(
            Signature::from_counts(5, 5, 0, Handedness::Right),
            Err(ConfigError::TooManyAxes { .. })
        ));
    }

    #[test]
    fn test_overlapping_masks() {
        assert!(matches!(
            Signature::from_masks(0b011, 0b010, 0, 3, Handedness::Right),
            Err(ConfigError::OverlappingAxisMasks)
        ));
    }

    #[test]
    fn test_pseudoscalar_sign() {
        let right = Signature::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let left = Signature::from_counts(3, 0, 0, Handedness::Left).unwrap();
        assert_eq!(right.pseudoscalar_sign(), Sign::Pos);
        assert_eq!(left.pseudoscalar_sign(), Sign::Neg);
    }
}
