//! Criteria Aggregator - derives the five criteria from the nine raw metrics.

use super::{CriteriaVector, RawRecord};

/// Guard added to the interaction total so C2 is defined with no interactions.
pub const NEGATIVITY_EPSILON: f64 = 1e-6;

/// Upper end of the mood scale; C5 inverts mood as `MOOD_SCALE_MAX - mood`.
pub const MOOD_SCALE_MAX: f64 = 10.0;

/// Criteria of one record, and whether its mood had to be clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregated {
    pub criteria: CriteriaVector,
    pub mood_clamped: bool,
}

/// Arithmetic mean that stays finite for finite inputs near `f64::MAX`.
fn mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

/// Aggregation of raw metrics into criteria.
pub struct CriteriaAggregator;

impl CriteriaAggregator {
    /// Derives C1..C5 for one record.
    ///
    /// - C1 = mean(daily screen time, social media time)
    /// - C2 = negative / (negative + positive + ε)
    /// - C3 = sleep hours
    /// - C4 = physical activity minutes
    /// - C5 = mean(anxiety, stress, 10 - mood), mood clamped to [0, 10]
    pub fn aggregate(record: &RawRecord) -> Aggregated {
        let m = &record.metrics;

        let mood = m.mood_level.clamp(0.0, MOOD_SCALE_MAX);
        let mood_clamped = mood != m.mood_level;

        // Halving is exact, so C2 equals n / (n + p + ε) without overflowing.
        let negative = m.negative_interactions_count / 2.0;
        let positive = m.positive_interactions_count / 2.0;

        let criteria = CriteriaVector::new([
            mean(&[m.daily_screen_time_min, m.social_media_time_min]),
            negative / (negative + positive + NEGATIVITY_EPSILON / 2.0),
            m.sleep_hours,
            m.physical_activity_min,
            mean(&[m.anxiety_level, m.stress_level, MOOD_SCALE_MAX - mood]),
        ]);

        Aggregated {
            criteria,
            mood_clamped,
        }
    }

    /// Derives the criteria matrix for a batch, in record order.
    ///
    /// Returns the matrix and the number of records whose mood was clamped.
    pub fn aggregate_all(records: &[RawRecord]) -> (Vec<CriteriaVector>, usize) {
        let mut clamped = 0;
        let matrix = records
            .iter()
            .map(|r| {
                let aggregated = Self::aggregate(r);
                if aggregated.mood_clamped {
                    clamped += 1;
                }
                aggregated.criteria
            })
            .collect();
        (matrix, clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AlternativeId;
    use crate::domain::scoring::{Criterion, MetricValues};

    fn record(values: [f64; 9]) -> RawRecord {
        RawRecord {
            id: AlternativeId::from_row_index(0),
            metrics: MetricValues::from_array(values),
        }
    }

    #[test]
    fn reference_row_aggregates_as_documented() {
        let r = record([120.0, 180.0, 2.0, 8.0, 7.0, 30.0, 4.0, 3.0, 7.0]);
        let a = CriteriaAggregator::aggregate(&r);

        assert_eq!(a.criteria[Criterion::C1], 150.0);
        assert!((a.criteria[Criterion::C2] - 0.2).abs() < 1e-6);
        assert_eq!(a.criteria[Criterion::C3], 7.0);
        assert_eq!(a.criteria[Criterion::C4], 30.0);
        assert!((a.criteria[Criterion::C5] - 10.0 / 3.0).abs() < 1e-12);
        assert!(!a.mood_clamped);
    }

    #[test]
    fn negativity_ratio_is_zero_without_interactions() {
        let r = record([0.0; 9]);
        let a = CriteriaAggregator::aggregate(&r);
        assert_eq!(a.criteria[Criterion::C2], 0.0);
    }

    #[test]
    fn negativity_ratio_approaches_one_when_all_negative() {
        let r = record([0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let a = CriteriaAggregator::aggregate(&r);
        assert!(a.criteria[Criterion::C2] < 1.0);
        assert!(a.criteria[Criterion::C2] > 0.999_999);
    }

    #[test]
    fn mood_above_scale_is_clamped() {
        let r = record([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 3.0, 3.0, 14.0]);
        let a = CriteriaAggregator::aggregate(&r);
        assert!(a.mood_clamped);
        assert_eq!(a.criteria[Criterion::C5], 2.0);
    }

    #[test]
    fn negative_mood_is_clamped_to_zero() {
        let r = record([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -5.0]);
        let a = CriteriaAggregator::aggregate(&r);
        assert!(a.mood_clamped);
        assert!((a.criteria[Criterion::C5] - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn aggregate_all_counts_clamped_moods() {
        let records = vec![
            record([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.0]),
            record([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 11.0]),
        ];
        let (matrix, clamped) = CriteriaAggregator::aggregate_all(&records);
        assert_eq!(matrix.len(), 2);
        assert_eq!(clamped, 1);
    }

    #[test]
    fn extreme_magnitudes_stay_finite() {
        let huge = f64::MAX;
        let r = record([huge, huge, huge, huge, 0.0, 0.0, huge, huge, 0.0]);
        let a = CriteriaAggregator::aggregate(&r);

        assert_eq!(a.criteria[Criterion::C1], huge);
        assert!((a.criteria[Criterion::C2] - 0.5).abs() < 1e-12);
        assert!(a.criteria[Criterion::C5].is_finite());
        assert!(a.criteria[Criterion::C5] > huge / 2.0);
    }

    #[test]
    fn aggregate_all_handles_empty_batch() {
        let (matrix, clamped) = CriteriaAggregator::aggregate_all(&[]);
        assert!(matrix.is_empty());
        assert_eq!(clamped, 0);
    }
}
