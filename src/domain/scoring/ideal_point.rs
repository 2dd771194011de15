//! Ideal-Point Calculator - positive and negative ideal solutions.

use serde::Serialize;

use super::{CriteriaVector, Criterion, Polarity};

/// The positive-ideal (best) and negative-ideal (worst) vectors of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealPoint {
    pub positive: CriteriaVector,
    pub negative: CriteriaVector,
}

/// One criterion's row of the ideal-solution table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealSolutionRow {
    pub criterion: Criterion,
    pub polarity: Polarity,
    pub positive: f64,
    pub negative: f64,
}

impl IdealPoint {
    /// Per-criterion view with each criterion's classification.
    pub fn rows(&self) -> Vec<IdealSolutionRow> {
        Criterion::ALL
            .iter()
            .map(|c| IdealSolutionRow {
                criterion: *c,
                polarity: c.polarity(),
                positive: self.positive[*c],
                negative: self.negative[*c],
            })
            .collect()
    }
}

pub struct IdealPointCalculator;

impl IdealPointCalculator {
    /// Computes the ideal points of a weighted matrix.
    ///
    /// Benefit criteria take the column max as positive ideal and the min as
    /// negative ideal; cost criteria the reverse.
    ///
    /// # Edge Cases
    /// - Empty matrix: Returns None (no extremes exist)
    pub fn compute(weighted: &[CriteriaVector]) -> Option<IdealPoint> {
        if weighted.is_empty() {
            return None;
        }

        let column_min = CriteriaVector::from_fn(|c| {
            weighted.iter().map(|row| row[c]).fold(f64::INFINITY, f64::min)
        });
        let column_max = CriteriaVector::from_fn(|c| {
            weighted.iter().map(|row| row[c]).fold(f64::NEG_INFINITY, f64::max)
        });

        let positive = CriteriaVector::from_fn(|c| match c.polarity() {
            Polarity::Benefit => column_max[c],
            Polarity::Cost => column_min[c],
        });
        let negative = CriteriaVector::from_fn(|c| match c.polarity() {
            Polarity::Benefit => column_min[c],
            Polarity::Cost => column_max[c],
        });

        Some(IdealPoint { positive, negative })
    }
}
