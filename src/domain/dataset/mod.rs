//! Dataset Module - The tabular input contract of the scoring engine.
//!
//! Ingestion adapters produce a [`Dataset`]; nothing here interprets cell
//! values beyond the numeric coercion the scoring stage asks for.

mod cell;
mod metric;
mod table;

pub use cell::{CellValue, Coerced};
pub use metric::Metric;
pub use table::{Dataset, DatasetBuilder};
