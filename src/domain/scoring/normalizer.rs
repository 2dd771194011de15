//! Vector Normalizer - rescales each criterion column to unit Euclidean norm.

use super::{CriteriaVector, Criterion};

/// Guard added under the square root so all-zero columns divide safely.
pub const NORM_EPSILON: f64 = 1e-8;

/// Column-wise vector normalization.
pub struct VectorNormalizer;

impl VectorNormalizer {
    /// Returns `sqrt(Σ_r x[r,c]² + δ)` for every column.
    pub fn column_norms(matrix: &[CriteriaVector]) -> CriteriaVector {
        let (scales, roots) = Self::scaled_norms(matrix);
        CriteriaVector::from_fn(|c| scales[c] * roots[c])
    }

    /// Normalizes a matrix: `x[r,c] / sqrt(Σ_r x[r,c]² + δ)`.
    ///
    /// Whole-batch: each column needs every row. An empty matrix yields an
    /// empty matrix.
    pub fn normalize(matrix: &[CriteriaVector]) -> Vec<CriteriaVector> {
        let (scales, roots) = Self::scaled_norms(matrix);
        matrix
            .iter()
            .map(|row| CriteriaVector::from_fn(|c: Criterion| row[c] / scales[c] / roots[c]))
            .collect()
    }

    /// Column norms factored as `scale * root`.
    ///
    /// The scale is 1 unless the squares overflow, in which case it is the
    /// column's largest magnitude and δ is negligible.
    fn scaled_norms(matrix: &[CriteriaVector]) -> (CriteriaVector, CriteriaVector) {
        let sums: CriteriaVector =
            CriteriaVector::from_fn(|c| matrix.iter().map(|row| row[c].powi(2)).sum());

        let scales = CriteriaVector::from_fn(|c| {
            if sums[c].is_finite() {
                1.0
            } else {
                matrix.iter().map(|row| row[c].abs()).fold(0.0, f64::max)
            }
        });
        let roots = CriteriaVector::from_fn(|c| {
            if sums[c].is_finite() {
                (sums[c] + NORM_EPSILON).sqrt()
            } else {
                let scaled: f64 = matrix.iter().map(|row| (row[c] / scales[c]).powi(2)).sum();
                scaled.sqrt()
            }
        });

        (scales, roots)
    }
}
