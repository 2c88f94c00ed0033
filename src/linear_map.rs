//! Dense n-by-n linear maps on the vector subspace, extended to the whole
//! algebra by outermorphism.

use crate::algebra::{same_algebra, AlgebraHandle};
use crate::blade::BladeMask;
use crate::derived::wedge;
use crate::error::{AlgebraError, OutOfRangeError};
use crate::multivector::Multivector;
use crate::Float;

/// A dense `n x n` real matrix bound to an [`crate::Algebra`], interpreted
/// as `L(e_col) = sum_row m[row][col] * e_row`.
#[derive(Debug, Clone)]
pub struct LinearMap {
    algebra: AlgebraHandle,
    /// Column-major `n*n` elements, matching the teacher matrix's storage
    /// convention.
    elems: Box<[Float]>,
}

impl LinearMap {
    fn dims(&self) -> u8 {
        self.algebra.dimensions()
    }

    /// Constructs the identity map.
    pub fn identity(algebra: &AlgebraHandle) -> Self {
        let n = algebra.dimensions() as usize;
        let mut elems = vec![0.0; n * n];
        for i in 0..n {
            elems[i * n + i] = 1.0;
        }
        Self {
            algebra: algebra.clone(),
            elems: elems.into_boxed_slice(),
        }
    }

    /// Constructs the zero map.
    pub fn zero(algebra: &AlgebraHandle) -> Self {
        let n = algebra.dimensions() as usize;
        Self {
            algebra: algebra.clone(),
            elems: vec![0.0; n * n].into_boxed_slice(),
        }
    }

    /// Constructs a map from a function of `(row, col)`.
    pub fn from_fn(algebra: &AlgebraHandle, f: impl Fn(u8, u8) -> Float) -> Self {
        let n = algebra.dimensions();
        let mut elems = vec![0.0; n as usize * n as usize];
        for col in 0..n {
            for row in 0..n {
                elems[col as usize * n as usize + row as usize] = f(row, col);
            }
        }
        Self {
            algebra: algebra.clone(),
            elems: elems.into_boxed_slice(),
        }
    }

    /// Returns the element at `(row, col)`, or `Err` if either index is out
    /// of range.
    pub fn get(&self, row: u8, col: u8) -> Result<Float, OutOfRangeError> {
        let n = self.dims();
        if row >= n {
            return Err(OutOfRangeError { index: row, dimensions: n });
        }
        if col >= n {
            return Err(OutOfRangeError { index: col, dimensions: n });
        }
        Ok(self.elems[col as usize * n as usize + row as usize])
    }

    /// Sets the element at `(row, col)`.
    pub fn set(&mut self, row: u8, col: u8, value: Float) -> Result<(), OutOfRangeError> {
        let n = self.dims();
        if row >= n {
            return Err(OutOfRangeError { index: row, dimensions: n });
        }
        if col >= n {
            return Err(OutOfRangeError { index: col, dimensions: n });
        }
        self.elems[col as usize * n as usize + row as usize] = value;
        Ok(())
    }

    /// Applies this map to the vector-grade part of `v`, producing a pure
    /// vector. Non-vector grades of `v` are ignored.
    pub fn apply_to_vector(&self, v: &Multivector) -> Result<Multivector, AlgebraError> {
        if !same_algebra(&self.algebra, v.algebra()) {
            return Err(AlgebraError);
        }
        let n = self.dims();
        let mut result = Multivector::zero(&self.algebra);
        for row in 0..n {
            let mut acc = 0.0;
            for col in 0..n {
                acc += self.get(row, col).expect("row, col in range") * v.get(BladeMask::axis(col));
            }
            result.set(BladeMask::axis(row), acc);
        }
        Ok(result)
    }

    /// Extends this map to the full multivector by outermorphism: the
    /// unique grade-preserving, wedge-multiplicative extension of this
    /// linear map to the exterior algebra.
    ///
    /// Implementation: precompute the image of each basis vector, then
    /// build up the image of each basis blade bottom-up by increasing grade,
    /// using `L(E_mask) = L(e_j) ^ L(E_{mask \ j})` for the lowest set axis
    /// `j` of `mask` — well-founded because the recursive mask has strictly
    /// lower popcount.
    pub fn apply(&self, mv: &Multivector) -> Result<Multivector, AlgebraError> {
        if !same_algebra(&self.algebra, mv.algebra()) {
            return Err(AlgebraError);
        }
        let n = self.dims();
        let vector_images: Vec<Multivector> = (0..n)
            .map(|j| self.apply_to_vector(&Multivector::basis_vector(&self.algebra, j)))
            .collect::<Result<_, _>>()?;

        let coeff_count = self.algebra.coefficient_count();
        let mut blade_images: Vec<Option<Multivector>> = vec![None; coeff_count];
        blade_images[0] = Some(Multivector::scalar(&self.algebra, 1.0));

        let mut masks_by_popcount: Vec<u8> = (0..coeff_count as u32).map(|m| m as u8).collect();
        masks_by_popcount.sort_by_key(|&m| m.count_ones());

        for mask in masks_by_popcount {
            if blade_images[mask as usize].is_some() {
                continue;
            }
            let lowest_axis = mask.trailing_zeros() as u8;
            let rest_mask = mask & !(1 << lowest_axis);
            let rest_image = blade_images[rest_mask as usize]
                .clone()
                .expect("lower-popcount mask computed first");
            let image = wedge(&vector_images[lowest_axis as usize], &rest_image)
                .expect("vector image and rest image share this algebra");
            blade_images[mask as usize] = Some(image);
        }

        let mut result = Multivector::zero(&self.algebra);
        for (mask, coeff) in mv.terms() {
            let image = blade_images[mask.0 as usize]
                .as_ref()
                .expect("every mask has a precomputed image");
            result += &image.scale(coeff);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Algebra;
    use crate::signature::Handedness;
    use approx::AbsDiffEq;

    #[test]
    fn test_identity_apply_to_vector() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let id = LinearMap::identity(&alg);
        let v = Multivector::basis_vector(&alg, 1);
        let result = id.apply_to_vector(&v).unwrap();
        assert!(result.abs_diff_eq(&v, crate::EPSILON));
    }

    #[test]
    fn test_swap_outermorphism_preserves_scalar_and_flips_bivector() {
        // L swaps e1 and e2: L(e12) should be e21 = -e12.
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let mut l = LinearMap::zero(&alg);
        l.set(1, 0, 1.0).unwrap();
        l.set(0, 1, 1.0).unwrap();
        l.set(2, 2, 1.0).unwrap();

        let one = Multivector::scalar(&alg, 1.0);
        assert!(l.apply(&one).unwrap().abs_diff_eq(&one, crate::EPSILON));

        let e12 = crate::derived::wedge(
            &Multivector::basis_vector(&alg, 0),
            &Multivector::basis_vector(&alg, 1),
        )
        .unwrap();
        let mapped = l.apply(&e12).unwrap();
        assert!(mapped.abs_diff_eq(&e12.negated(), crate::EPSILON));
    }

    #[test]
    fn test_out_of_range() {
        let alg = Algebra::from_counts(3, 0, 0, Handedness::Right).unwrap();
        let l = LinearMap::identity(&alg);
        assert!(l.get(5, 0).is_err());
    }
}
