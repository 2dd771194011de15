//! Weighting Stage - scales normalized values by the fixed criterion weights.

use super::CriteriaVector;

pub struct WeightingStage;

impl WeightingStage {
    /// `weighted[r,c] = norm[r,c] × weight[c]`.
    pub fn apply(normalized: &[CriteriaVector]) -> Vec<CriteriaVector> {
        normalized
            .iter()
            .map(|row| CriteriaVector::from_fn(|c| row[c] * c.weight()))
            .collect()
    }
}
