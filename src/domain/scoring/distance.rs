//! Distance & Score Calculator - separation from both ideals and closeness.

use serde::Serialize;

use super::{CriteriaVector, IdealPoint};

/// Guard added to the closeness denominator.
pub const CLOSENESS_EPSILON: f64 = 1e-8;

/// Separation of one weighted row from the ideal points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Separation {
    /// D+: distance to the positive ideal.
    pub to_positive: f64,
    /// D−: distance to the negative ideal.
    pub to_negative: f64,
    /// Ci = D− / (D+ + D− + ε).
    pub closeness: f64,
}

pub struct DistanceCalculator;

impl DistanceCalculator {
    /// Computes D+, D− and Ci for one weighted row.
    pub fn separation(row: &CriteriaVector, ideal: &IdealPoint) -> Separation {
        let to_positive = row.distance_to(&ideal.positive);
        let to_negative = row.distance_to(&ideal.negative);
        Separation {
            to_positive,
            to_negative,
            closeness: to_negative / (to_positive + to_negative + CLOSENESS_EPSILON),
        }
    }

    /// Computes separations for every row. Rows are independent given the
    /// shared ideal point.
    pub fn compute_all(weighted: &[CriteriaVector], ideal: &IdealPoint) -> Vec<Separation> {
        weighted.iter().map(|row| Self::separation(row, ideal)).collect()
    }
}
