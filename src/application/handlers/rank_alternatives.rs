//! RankAlternativesHandler - Command handler for scoring a dataset.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::scoring::{ScoringRun, TopsisPipeline};
use crate::ports::DatasetSource;

/// Command to rank every alternative in the configured dataset.
#[derive(Debug, Clone, Default)]
pub struct RankAlternativesCommand {
    /// Caller-supplied id carried into the run's log lines.
    pub correlation_id: Option<String>,
}

impl RankAlternativesCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub run: ScoringRun,
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    source: Arc<dyn DatasetSource>,
}

impl RankAlternativesHandler {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    pub async fn handle(
        &self,
        cmd: RankAlternativesCommand,
    ) -> Result<RankAlternativesResult, DomainError> {
        let correlation_id = cmd.correlation_id.as_deref().unwrap_or("-");

        // 1. Load dataset
        let dataset = self.source.load().await.map_err(|e| {
            warn!(correlation_id, source = %self.source.describe(), error = %e, "Dataset load failed");
            DomainError::from(e)
        })?;

        info!(
            correlation_id,
            source = %self.source.describe(),
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "Dataset loaded"
        );

        // 2. Score
        let run = TopsisPipeline::run(&dataset)?;

        let summary = run.summary();
        info!(
            correlation_id,
            run_id = %run.run_id(),
            total = summary.total,
            high = summary.high,
            medium = summary.medium,
            low = summary.low,
            "Alternatives ranked"
        );

        Ok(RankAlternativesResult { run })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Dataset;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::IngestError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockDatasetSource {
        result: Result<Dataset, IngestError>,
        loads: Mutex<usize>,
    }

    impl MockDatasetSource {
        fn with_dataset(dataset: Dataset) -> Self {
            Self {
                result: Ok(dataset),
                loads: Mutex::new(0),
            }
        }

        fn failing(err: IngestError) -> Self {
            Self {
                result: Err(err),
                loads: Mutex::new(0),
            }
        }

        fn load_count(&self) -> usize {
            *self.loads.lock().unwrap()
        }
    }

    #[async_trait]
    impl DatasetSource for MockDatasetSource {
        async fn load(&self) -> Result<Dataset, IngestError> {
            *self.loads.lock().unwrap() += 1;
            self.result.clone()
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    fn metrics_dataset() -> Dataset {
        Dataset::builder()
            .metric_columns()
            .row(vec![120.0, 180.0, 2.0, 8.0, 7.0, 30.0, 4.0, 3.0, 7.0])
            .row(vec![300.0, 240.0, 8.0, 2.0, 5.0, 5.0, 8.0, 9.0, 2.0])
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn ranks_loaded_dataset() {
        let source = Arc::new(MockDatasetSource::with_dataset(metrics_dataset()));
        let handler = RankAlternativesHandler::new(source.clone());

        let result = handler
            .handle(RankAlternativesCommand::new().with_correlation_id("req-1"))
            .await
            .unwrap();

        assert_eq!(result.run.len(), 2);
        assert_eq!(result.run.ranked()[0].id.to_string(), "U1");
        assert_eq!(source.load_count(), 1);
    }

    #[tokio::test]
    async fn ingest_failure_surfaces_as_domain_error() {
        let source = Arc::new(MockDatasetSource::failing(IngestError::NotFound(
            "data.json".to_string(),
        )));
        let handler = RankAlternativesHandler::new(source);

        let err = handler.handle(RankAlternativesCommand::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatasetNotFound);
    }

    #[tokio::test]
    async fn missing_columns_surface_as_schema_mismatch() {
        let dataset = Dataset::builder()
            .columns(vec!["sleep_hours"])
            .row(vec![7.0])
            .build()
            .unwrap();
        let handler = RankAlternativesHandler::new(Arc::new(MockDatasetSource::with_dataset(dataset)));

        let err = handler.handle(RankAlternativesCommand::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SchemaMismatch);
        let missing = err.details.get("missing_columns").unwrap();
        assert!(missing.starts_with("daily_screen_time_min,social_media_time_min"));
        assert!(!missing.contains("sleep_hours"));
    }

    #[tokio::test]
    async fn empty_dataset_yields_empty_run() {
        let dataset = Dataset::builder().metric_columns().build().unwrap();
        let handler = RankAlternativesHandler::new(Arc::new(MockDatasetSource::with_dataset(dataset)));

        let result = handler.handle(RankAlternativesCommand::new()).await.unwrap();
        assert!(result.run.is_empty());
    }
}
