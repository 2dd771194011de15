//! TOPSIS pipeline - runs the six scoring stages over one dataset.

use tracing::{debug, info, warn};

use super::{
    CriteriaAggregator, DistanceCalculator, IdealPointCalculator, Ranker, RecordBatch,
    RunDiagnostics, ScoreRecord, ScoringError, ScoringRun, VectorNormalizer, WeightingStage,
};
use crate::domain::dataset::Dataset;
use crate::domain::foundation::RunId;

/// The scoring engine.
///
/// Stages run strictly forward, each producing a new matrix from the
/// previous one:
///
/// 1. schema check and numeric coercion ([`RecordBatch`])
/// 2. criteria aggregation
/// 3. vector normalization
/// 4. weighting
/// 5. ideal points
/// 6. distances, closeness and ranking
///
/// Runs are independent; the pipeline holds no state.
pub struct TopsisPipeline;

impl TopsisPipeline {
    /// Scores a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::MissingColumns`] before any computation when
    /// required metric columns are absent.
    ///
    /// # Edge Cases
    /// - Zero rows: Returns an empty run; no ideal points or distances exist
    pub fn run(dataset: &Dataset) -> Result<ScoringRun, ScoringError> {
        let run_id = RunId::new();

        let batch = RecordBatch::from_dataset(dataset).map_err(|e| {
            warn!(run_id = %run_id, error = %e, "Dataset rejected");
            e
        })?;

        if batch.coerced_values > 0 {
            debug!(
                run_id = %run_id,
                coerced = batch.coerced_values,
                "Non-numeric or missing metric values scored as 0"
            );
        }

        let (criteria, clamped_moods) = CriteriaAggregator::aggregate_all(&batch.records);
        let diagnostics = RunDiagnostics {
            coerced_values: batch.coerced_values,
            clamped_moods,
        };
        if clamped_moods > 0 {
            warn!(
                run_id = %run_id,
                records = clamped_moods,
                "mood_level outside 0..=10 clamped before inversion"
            );
        }

        let normalized = VectorNormalizer::normalize(&criteria);
        let weighted = WeightingStage::apply(&normalized);

        // Ideal points exist exactly when there is at least one row.
        let Some(ideal) = IdealPointCalculator::compute(&weighted) else {
            debug_assert!(batch.is_empty());
            info!(run_id = %run_id, "Dataset has no rows, returning empty run");
            return Ok(ScoringRun::new(run_id, Vec::new(), None, diagnostics));
        };
        debug!(run_id = %run_id, ?ideal, "Ideal points computed");

        let separations = DistanceCalculator::compute_all(&weighted, &ideal);
        let closeness: Vec<f64> = separations.iter().map(|s| s.closeness).collect();
        let ranks = Ranker::competition_ranks(&closeness);

        let records: Vec<ScoreRecord> = batch
            .records
            .iter()
            .enumerate()
            .map(|(i, raw)| ScoreRecord {
                id: raw.id,
                raw: raw.metrics,
                criteria: criteria[i],
                normalized: normalized[i],
                weighted: weighted[i],
                distance_to_positive: separations[i].to_positive,
                distance_to_negative: separations[i].to_negative,
                closeness: separations[i].closeness,
                rank: ranks[i],
            })
            .collect();

        let run = ScoringRun::new(run_id, records, Some(ideal), diagnostics);

        info!(
            run_id = %run_id,
            rows = run.len(),
            max_closeness = run.max_closeness().unwrap_or_default(),
            "Scoring run complete"
        );

        Ok(run)
    }
}
