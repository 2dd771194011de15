//! Scoring run - one immutable result batch and its read-only views.

use serde::Serialize;

use super::{IdealPoint, IdealSolutionRow, PriorityBand, Ranker, ScoreRecord};
use crate::domain::foundation::{AlternativeId, RunId, Timestamp};

/// Recoveries applied to the input during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunDiagnostics {
    /// Cells that were missing or non-numeric and scored as 0.
    pub coerced_values: usize,
    /// Records whose mood level fell outside 0..=10 and was clamped.
    pub clamped_moods: usize,
}

/// Counts of records per priority band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Run-level aggregates for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub run_id: RunId,
    pub computed_at: Timestamp,
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// None for an empty run.
    pub max_closeness: Option<f64>,
    /// Empty for an empty run.
    pub ideal_solution: Vec<IdealSolutionRow>,
    pub coerced_values: usize,
    pub clamped_moods: usize,
}

/// The result of one pipeline run.
///
/// Records are stored once, in input order. The ranked view is derived on
/// demand so the two orderings cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringRun {
    run_id: RunId,
    computed_at: Timestamp,
    records: Vec<ScoreRecord>,
    ideal_point: Option<IdealPoint>,
    diagnostics: RunDiagnostics,
}

impl ScoringRun {
    pub(crate) fn new(
        run_id: RunId,
        records: Vec<ScoreRecord>,
        ideal_point: Option<IdealPoint>,
        diagnostics: RunDiagnostics,
    ) -> Self {
        Self {
            run_id,
            computed_at: Timestamp::now(),
            records,
            ideal_point,
            diagnostics,
        }
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn computed_at(&self) -> Timestamp {
        self.computed_at
    }

    /// Records in original input order (U1..UN).
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Records sorted by closeness descending; exact ties keep input order.
    pub fn ranked(&self) -> Vec<&ScoreRecord> {
        let closeness: Vec<f64> = self.records.iter().map(|r| r.closeness).collect();
        Ranker::descending_order(&closeness)
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: AlternativeId) -> Option<&ScoreRecord> {
        self.records.get(id.row_index()).filter(|r| r.id == id)
    }

    /// Ideal points; None for an empty run.
    pub fn ideal_point(&self) -> Option<&IdealPoint> {
        self.ideal_point.as_ref()
    }

    /// Ideal-solution table with benefit/cost classification.
    pub fn ideal_solution(&self) -> Vec<IdealSolutionRow> {
        self.ideal_point.map(|p| p.rows()).unwrap_or_default()
    }

    pub fn diagnostics(&self) -> RunDiagnostics {
        self.diagnostics
    }

    /// Number of records per priority band.
    pub fn band_counts(&self) -> BandCounts {
        self.records
            .iter()
            .fold(BandCounts::default(), |mut counts, r| {
                match r.priority() {
                    PriorityBand::High => counts.high += 1,
                    PriorityBand::Medium => counts.medium += 1,
                    PriorityBand::Low => counts.low += 1,
                }
                counts
            })
    }

    /// Highest closeness; None for an empty run.
    pub fn max_closeness(&self) -> Option<f64> {
        self.records.iter().map(|r| r.closeness).reduce(f64::max)
    }

    /// Run-level aggregates.
    pub fn summary(&self) -> RunSummary {
        let bands = self.band_counts();
        RunSummary {
            run_id: self.run_id,
            computed_at: self.computed_at,
            total: self.records.len(),
            high: bands.high,
            medium: bands.medium,
            low: bands.low,
            max_closeness: self.max_closeness(),
            ideal_solution: self.ideal_solution(),
            coerced_values: self.diagnostics.coerced_values,
            clamped_moods: self.diagnostics.clamped_moods,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{CriteriaVector, MetricValues};

    fn record(index: usize, closeness: f64, rank: u32) -> ScoreRecord {
        ScoreRecord {
            id: AlternativeId::from_row_index(index),
            raw: MetricValues::default(),
            criteria: CriteriaVector::ZERO,
            normalized: CriteriaVector::ZERO,
            weighted: CriteriaVector::ZERO,
            distance_to_positive: 0.0,
            distance_to_negative: 0.0,
            closeness,
            rank,
        }
    }

    fn run() -> ScoringRun {
        ScoringRun::new(
            RunId::new(),
            vec![
                record(0, 0.85, 2),
                record(1, 0.97, 1),
                record(2, 0.40, 4),
                record(3, 0.85, 2),
            ],
            Some(IdealPoint {
                positive: CriteriaVector::new([0.0, 0.0, 1.0, 1.0, 0.0]),
                negative: CriteriaVector::new([1.0, 1.0, 0.0, 0.0, 1.0]),
            }),
            RunDiagnostics {
                coerced_values: 3,
                clamped_moods: 1,
            },
        )
    }

    #[test]
    fn records_keep_input_order() {
        let run = run();
        let ids: Vec<String> = run.records().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["U1", "U2", "U3", "U4"]);
    }

    #[test]
    fn ranked_view_sorts_descending_and_keeps_ties_stable() {
        let run = run();
        let ids: Vec<String> = run.ranked().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["U2", "U1", "U4", "U3"]);
    }

    #[test]
    fn get_finds_record_by_id() {
        let run = run();
        let id: AlternativeId = "U3".parse().unwrap();
        assert_eq!(run.get(id).map(|r| r.rank), Some(4));
        assert!(run.get("U9".parse().unwrap()).is_none());
    }

    #[test]
    fn summary_counts_bands() {
        let summary = run().summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.medium, 2);
        assert_eq!(summary.low, 1);
        assert_eq!(summary.max_closeness, Some(0.97));
        assert_eq!(summary.ideal_solution.len(), 5);
        assert_eq!(summary.coerced_values, 3);
        assert_eq!(summary.clamped_moods, 1);
    }

    #[test]
    fn empty_run_summary() {
        let run = ScoringRun::new(RunId::new(), vec![], None, RunDiagnostics::default());
        let summary = run.summary();
        assert!(run.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.max_closeness, None);
        assert!(summary.ideal_solution.is_empty());
        assert!(run.ranked().is_empty());
    }
}
