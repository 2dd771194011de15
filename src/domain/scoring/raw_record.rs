//! Raw records - one row of coerced metric values per alternative.

use serde::Serialize;

use super::ScoringError;
use crate::domain::dataset::{Dataset, Metric};
use crate::domain::foundation::AlternativeId;

/// The nine raw metrics of one row after numeric coercion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricValues {
    pub daily_screen_time_min: f64,
    pub social_media_time_min: f64,
    pub negative_interactions_count: f64,
    pub positive_interactions_count: f64,
    pub sleep_hours: f64,
    pub physical_activity_min: f64,
    pub anxiety_level: f64,
    pub stress_level: f64,
    pub mood_level: f64,
}

impl MetricValues {
    /// Returns the value of a metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::DailyScreenTimeMin => self.daily_screen_time_min,
            Metric::SocialMediaTimeMin => self.social_media_time_min,
            Metric::NegativeInteractionsCount => self.negative_interactions_count,
            Metric::PositiveInteractionsCount => self.positive_interactions_count,
            Metric::SleepHours => self.sleep_hours,
            Metric::PhysicalActivityMin => self.physical_activity_min,
            Metric::AnxietyLevel => self.anxiety_level,
            Metric::StressLevel => self.stress_level,
            Metric::MoodLevel => self.mood_level,
        }
    }

    /// Sets the value of a metric.
    pub fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::DailyScreenTimeMin => &mut self.daily_screen_time_min,
            Metric::SocialMediaTimeMin => &mut self.social_media_time_min,
            Metric::NegativeInteractionsCount => &mut self.negative_interactions_count,
            Metric::PositiveInteractionsCount => &mut self.positive_interactions_count,
            Metric::SleepHours => &mut self.sleep_hours,
            Metric::PhysicalActivityMin => &mut self.physical_activity_min,
            Metric::AnxietyLevel => &mut self.anxiety_level,
            Metric::StressLevel => &mut self.stress_level,
            Metric::MoodLevel => &mut self.mood_level,
        };
        *slot = value;
    }

    /// Builds values from an array in [`Metric::ALL`] order.
    pub fn from_array(values: [f64; 9]) -> Self {
        let mut out = Self::default();
        for metric in Metric::ALL {
            out.set(metric, values[metric.index()]);
        }
        out
    }
}

/// One alternative's input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RawRecord {
    pub id: AlternativeId,
    pub metrics: MetricValues,
}

/// All raw records of a dataset, plus how many cells needed the 0 fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBatch {
    pub records: Vec<RawRecord>,
    pub coerced_values: usize,
}

impl RecordBatch {
    /// Extracts the raw records of a dataset.
    ///
    /// The schema is checked first: if any required metric column is
    /// missing, no record is produced and the error names every missing
    /// column. Extra columns are ignored.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self, ScoringError> {
        let mut positions = [0usize; 9];
        let mut missing = Vec::new();
        for metric in Metric::ALL {
            match dataset.column_index(metric.column_name()) {
                Some(col) => positions[metric.index()] = col,
                None => missing.push(metric),
            }
        }
        if !missing.is_empty() {
            return Err(ScoringError::missing_columns(&missing));
        }

        let mut coerced_values = 0;
        let records = dataset
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut metrics = MetricValues::default();
                for metric in Metric::ALL {
                    let coerced = row[positions[metric.index()]].coerce();
                    if coerced.recovered {
                        coerced_values += 1;
                    }
                    metrics.set(metric, coerced.value);
                }
                RawRecord {
                    id: AlternativeId::from_row_index(i),
                    metrics,
                }
            })
            .collect();

        Ok(Self {
            records,
            coerced_values,
        })
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::CellValue;

    fn metric_row(values: [f64; 9]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::Number(*v)).collect()
    }

    #[test]
    fn extracts_records_in_input_order() {
        let ds = Dataset::builder()
            .metric_columns()
            .row(metric_row([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]))
            .row(metric_row([9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]))
            .build()
            .unwrap();

        let batch = RecordBatch::from_dataset(&ds).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.records[0].id.to_string(), "U1");
        assert_eq!(batch.records[1].id.to_string(), "U2");
        assert_eq!(batch.records[0].metrics.mood_level, 9.0);
        assert_eq!(batch.records[1].metrics.daily_screen_time_min, 9.0);
        assert_eq!(batch.coerced_values, 0);
    }

    #[test]
    fn columns_are_matched_by_name_not_position() {
        let mut columns: Vec<&str> = Metric::ALL.iter().rev().map(|m| m.column_name()).collect();
        columns.insert(0, "participant_name");
        let mut row: Vec<CellValue> = (1..=9).rev().map(|v| CellValue::Number(v as f64)).collect();
        row.insert(0, CellValue::from("Ana"));

        let ds = Dataset::builder().columns(columns).row(row).build().unwrap();
        let batch = RecordBatch::from_dataset(&ds).unwrap();

        let metrics = batch.records[0].metrics;
        assert_eq!(metrics.daily_screen_time_min, 1.0);
        assert_eq!(metrics.mood_level, 9.0);
    }

    #[test]
    fn non_numeric_cells_become_zero_and_are_counted() {
        let mut row = metric_row([1.0; 9]);
        row[Metric::SleepHours.index()] = CellValue::from("seven");
        row[Metric::MoodLevel.index()] = CellValue::Missing;
        let ds = Dataset::builder().metric_columns().row(row).build().unwrap();

        let batch = RecordBatch::from_dataset(&ds).unwrap();
        assert_eq!(batch.records[0].metrics.sleep_hours, 0.0);
        assert_eq!(batch.records[0].metrics.mood_level, 0.0);
        assert_eq!(batch.coerced_values, 2);
    }

    #[test]
    fn missing_sleep_hours_is_named_exactly() {
        let columns: Vec<&str> = Metric::ALL
            .iter()
            .filter(|m| **m != Metric::SleepHours)
            .map(|m| m.column_name())
            .collect();
        let ds = Dataset::builder().columns(columns).build().unwrap();

        let err = RecordBatch::from_dataset(&ds).unwrap_err();
        assert_eq!(err.missing(), &["sleep_hours".to_string()]);
    }

    #[test]
    fn every_missing_column_is_reported() {
        let ds = Dataset::builder().columns(vec!["unrelated"]).build().unwrap();
        let err = RecordBatch::from_dataset(&ds).unwrap_err();
        assert_eq!(err.missing().len(), 9);
        assert_eq!(err.missing()[0], "daily_screen_time_min");
        assert_eq!(err.missing()[8], "mood_level");
    }

    #[test]
    fn empty_dataset_with_schema_yields_empty_batch() {
        let ds = Dataset::builder().metric_columns().build().unwrap();
        let batch = RecordBatch::from_dataset(&ds).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn metric_values_get_set_roundtrip() {
        let values = MetricValues::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        for metric in Metric::ALL {
            assert_eq!(values.get(metric), (metric.index() + 1) as f64);
        }
    }
}
