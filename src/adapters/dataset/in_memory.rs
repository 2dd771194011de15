//! In-memory dataset source.

use async_trait::async_trait;

use crate::domain::dataset::Dataset;
use crate::ports::{DatasetSource, IngestError};

/// Serves a prebuilt dataset. Each load returns a fresh copy.
#[derive(Debug, Clone)]
pub struct InMemoryDatasetSource {
    dataset: Dataset,
}

impl InMemoryDatasetSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DatasetSource for InMemoryDatasetSource {
    async fn load(&self) -> Result<Dataset, IngestError> {
        Ok(self.dataset.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory dataset ({} rows)", self.dataset.row_count())
    }
}
