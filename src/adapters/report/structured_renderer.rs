//! JSON and YAML report renderer.

use serde::Serialize;

use crate::domain::foundation::AlternativeId;
use crate::domain::scoring::{
    Criterion, Polarity, PriorityBand, RunSummary, ScoreRecord, ScoringRun,
};
use crate::ports::{RenderError, ReportFormat, ReportRenderer};

/// Serializes the full run as a structured document.
#[derive(Debug, Clone, Copy)]
pub struct StructuredReportRenderer {
    format: ReportFormat,
}

impl StructuredReportRenderer {
    pub fn json() -> Self {
        Self {
            format: ReportFormat::Json,
        }
    }

    pub fn yaml() -> Self {
        Self {
            format: ReportFormat::Yaml,
        }
    }
}

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    summary: RunSummary,
    weights: Vec<WeightEntry>,
    /// Input order.
    records: &'a [ScoreRecord],
    /// Closeness descending.
    ranking: Vec<RankingEntry>,
}

#[derive(Debug, Serialize)]
struct WeightEntry {
    criterion: Criterion,
    description: &'static str,
    polarity: Polarity,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct RankingEntry {
    id: AlternativeId,
    rank: u32,
    closeness: f64,
    priority: PriorityBand,
}

impl<'a> ReportDocument<'a> {
    fn from_run(run: &'a ScoringRun) -> Self {
        Self {
            summary: run.summary(),
            weights: Criterion::ALL
                .iter()
                .map(|c| WeightEntry {
                    criterion: *c,
                    description: c.description(),
                    polarity: c.polarity(),
                    weight: c.weight(),
                })
                .collect(),
            records: run.records(),
            ranking: run
                .ranked()
                .into_iter()
                .map(|r| RankingEntry {
                    id: r.id,
                    rank: r.rank,
                    closeness: r.closeness,
                    priority: r.priority(),
                })
                .collect(),
        }
    }
}

impl ReportRenderer for StructuredReportRenderer {
    fn render(&self, run: &ScoringRun) -> Result<String, RenderError> {
        let document = ReportDocument::from_run(run);

        match self.format {
            ReportFormat::Yaml => serde_yaml::to_string(&document)
                .map_err(|e| RenderError::Serialization(e.to_string())),
            _ => serde_json::to_string_pretty(&document)
                .map_err(|e| RenderError::Serialization(e.to_string())),
        }
    }

    fn format(&self) -> ReportFormat {
        self.format
    }
}
