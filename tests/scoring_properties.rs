//! Property tests for the scoring pipeline.
//!
//! Metrics are generated in realistic non-negative ranges. Indices below
//! follow the canonical metric column order.

use proptest::prelude::*;

use wellbeing_priority::domain::dataset::{Dataset, Metric};
use wellbeing_priority::domain::scoring::{Criterion, ScoringError, ScoringRun, TopsisPipeline};

/// Metrics whose increase moves a record towards higher need (cost side).
const COST_METRICS: [usize; 5] = [0, 1, 2, 6, 7];

/// Metrics whose increase moves a record towards lower need (benefit side).
const BENEFIT_METRICS: [usize; 4] = [3, 4, 5, 8];

fn metric_row() -> impl Strategy<Value = [f64; 9]> {
    (
        0.0f64..600.0,
        0.0f64..400.0,
        0.0f64..20.0,
        0.0f64..20.0,
        0.0f64..12.0,
        0.0f64..120.0,
        0.0f64..10.0,
        0.0f64..10.0,
        0.0f64..10.0,
    )
        .prop_map(|(a, b, c, d, e, f, g, h, i)| [a, b, c, d, e, f, g, h, i])
}

fn rows(min: usize, max: usize) -> impl Strategy<Value = Vec<[f64; 9]>> {
    prop::collection::vec(metric_row(), min..max)
}

fn dataset(rows: &[[f64; 9]]) -> Dataset {
    rows.iter()
        .fold(Dataset::builder().metric_columns(), |b, r| b.row(r.to_vec()))
        .build()
        .unwrap()
}

fn score(rows: &[[f64; 9]]) -> ScoringRun {
    TopsisPipeline::run(&dataset(rows)).unwrap()
}

proptest! {
    #[test]
    fn closeness_stays_in_unit_interval(rows in rows(1, 12)) {
        let run = score(&rows);
        for r in run.records() {
            prop_assert!(r.closeness.is_finite());
            prop_assert!((0.0..=1.0).contains(&r.closeness), "Ci = {}", r.closeness);
        }
    }

    #[test]
    fn normalized_columns_have_unit_norm(rows in rows(1, 12)) {
        let run = score(&rows);
        for c in Criterion::ALL {
            let raw_sq: f64 = run.records().iter().map(|r| r.criteria[c].powi(2)).sum();
            if raw_sq < 1e-2 {
                continue;
            }
            let norm_sq: f64 = run.records().iter().map(|r| r.normalized[c].powi(2)).sum();
            prop_assert!((norm_sq - 1.0).abs() < 1e-5, "{} norm^2 = {}", c, norm_sq);
        }
    }

    #[test]
    fn rerunning_is_idempotent(rows in rows(1, 12)) {
        let first = score(&rows);
        let second = score(&rows);
        for (a, b) in first.records().iter().zip(second.records()) {
            prop_assert_eq!(a.closeness, b.closeness);
            prop_assert_eq!(a.rank, b.rank);
        }
    }

    #[test]
    fn identical_rows_score_identically(mut rows in rows(1, 10), pick in any::<prop::sample::Index>()) {
        let copy = rows[pick.index(rows.len())];
        rows.push(copy);
        let run = score(&rows);

        let original = &run.records()[pick.index(rows.len() - 1)];
        let duplicate = &run.records()[rows.len() - 1];
        prop_assert_eq!(original.closeness, duplicate.closeness);
        prop_assert_eq!(original.rank, duplicate.rank);
    }

    #[test]
    fn raising_a_cost_metric_never_raises_closeness(
        rows in rows(2, 10),
        pick in any::<prop::sample::Index>(),
        metric in prop::sample::select(COST_METRICS.to_vec()),
        delta in 0.1f64..100.0,
    ) {
        let row = pick.index(rows.len());
        let before = score(&rows).records()[row].closeness;

        let mut raised = rows.clone();
        raised[row][metric] += delta;
        let after = score(&raised).records()[row].closeness;

        prop_assert!(after <= before + 1e-9, "{} -> {}", before, after);
    }

    #[test]
    fn raising_a_benefit_metric_never_lowers_closeness(
        rows in rows(2, 10),
        pick in any::<prop::sample::Index>(),
        metric in prop::sample::select(BENEFIT_METRICS.to_vec()),
        delta in 0.1f64..100.0,
    ) {
        let row = pick.index(rows.len());
        let before = score(&rows).records()[row].closeness;

        let mut raised = rows.clone();
        raised[row][metric] += delta;
        let after = score(&raised).records()[row].closeness;

        prop_assert!(after + 1e-9 >= before, "{} -> {}", before, after);
    }

    #[test]
    fn dominating_row_never_ranks_below(
        base in metric_row(),
        shrink in 0.0f64..1.0,
        grow in 0.0f64..5.0,
    ) {
        let mut better = base;
        for i in COST_METRICS {
            better[i] *= shrink;
        }
        for i in BENEFIT_METRICS {
            better[i] += grow;
        }

        let run = score(&[base, better]);
        let records = run.records();
        prop_assert!(records[1].rank <= records[0].rank);
        prop_assert!(records[1].closeness >= records[0].closeness);
    }

    #[test]
    fn ranks_are_competition_ranks(rows in rows(1, 12)) {
        let run = score(&rows);
        for r in run.records() {
            let better = run.records().iter().filter(|o| o.closeness > r.closeness).count();
            prop_assert_eq!(r.rank as usize, better + 1);
        }
    }
}

#[test]
fn missing_sleep_hours_is_named_exactly() {
    let columns: Vec<&str> = Metric::ALL
        .iter()
        .filter(|m| **m != Metric::SleepHours)
        .map(|m| m.column_name())
        .collect();
    let ds = Dataset::builder().columns(columns).build().unwrap();

    match TopsisPipeline::run(&ds) {
        Err(ScoringError::MissingColumns { missing }) => {
            assert_eq!(missing, vec!["sleep_hours".to_string()])
        }
        other => panic!("expected missing columns, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn weights_sum_to_one() {
    let total: f64 = Criterion::ALL.iter().map(|c| c.weight()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}
