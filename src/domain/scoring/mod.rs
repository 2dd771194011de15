//! Scoring Module - TOPSIS ranking with fixed AHP weights.
//!
//! Turns a validated dataset of raw wellbeing metrics into a ranked batch
//! of score records.
//!
//! # Components
//!
//! - `RecordBatch` - Schema check and numeric coercion of the raw metrics
//! - `CriteriaAggregator` - Nine metrics folded into five criteria (C1..C5)
//! - `VectorNormalizer` - Column-wise Euclidean normalization
//! - `WeightingStage` - Fixed AHP weights applied per criterion
//! - `IdealPointCalculator` - Positive and negative ideal solutions
//! - `DistanceCalculator` - D+, D- and the closeness coefficient
//! - `Ranker` - Competition ranking and priority bands
//! - `TopsisPipeline` - Runs the stages in order and yields a `ScoringRun`
//!
//! # Design Philosophy
//!
//! Every stage is a pure function over the previous stage's matrix. No
//! ports are involved; ingestion and rendering live outside this module.

mod aggregator;
mod criterion;
mod distance;
mod errors;
mod ideal_point;
mod normalizer;
mod pipeline;
mod ranker;
mod raw_record;
mod run;
mod score_record;
mod weighting;

pub use aggregator::{Aggregated, CriteriaAggregator, MOOD_SCALE_MAX, NEGATIVITY_EPSILON};
pub use criterion::{CriteriaVector, Criterion, Polarity, CRITERIA_COUNT, CRITERIA_WEIGHTS};
pub use distance::{DistanceCalculator, Separation, CLOSENESS_EPSILON};
pub use errors::ScoringError;
pub use ideal_point::{IdealPoint, IdealPointCalculator, IdealSolutionRow};
pub use normalizer::{VectorNormalizer, NORM_EPSILON};
pub use pipeline::TopsisPipeline;
pub use ranker::{PriorityBand, Ranker, HIGH_PRIORITY_THRESHOLD, MEDIUM_PRIORITY_THRESHOLD};
pub use raw_record::{MetricValues, RawRecord, RecordBatch};
pub use run::{BandCounts, RunDiagnostics, RunSummary, ScoringRun};
pub use score_record::ScoreRecord;
pub use weighting::WeightingStage;
