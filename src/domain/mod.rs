//! Domain layer containing scoring logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `dataset` - Tabular input model and the required metric columns
//! - `scoring` - TOPSIS pipeline, criteria, ranking and run results

pub mod dataset;
pub mod foundation;
pub mod scoring;
