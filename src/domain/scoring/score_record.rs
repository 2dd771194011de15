//! Score record - everything computed for one alternative in a run.

use serde::Serialize;

use super::{CriteriaVector, MetricValues, PriorityBand};
use crate::domain::foundation::AlternativeId;

/// The scored view of one alternative. Immutable once the run completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRecord {
    pub id: AlternativeId,
    pub raw: MetricValues,
    pub criteria: CriteriaVector,
    pub normalized: CriteriaVector,
    pub weighted: CriteriaVector,
    /// D+
    pub distance_to_positive: f64,
    /// D−
    pub distance_to_negative: f64,
    /// Ci
    pub closeness: f64,
    /// 1 = most prioritized.
    pub rank: u32,
}

impl ScoreRecord {
    /// Priority band of this record's closeness.
    pub fn priority(&self) -> PriorityBand {
        PriorityBand::from_closeness(self.closeness)
    }
}
