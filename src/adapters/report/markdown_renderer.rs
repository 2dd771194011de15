//! Markdown report renderer.
//!
//! Produces a single document with the KPI summary, the intermediate TOPSIS
//! matrices and the final ranking. Process tables list alternatives in input
//! order; the ranking lists them by closeness.

use std::fmt::Write;

use crate::config::ReportConfig;
use crate::domain::dataset::Metric;
use crate::domain::scoring::{CriteriaVector, Criterion, ScoreRecord, ScoringRun};
use crate::ports::{RenderError, ReportFormat, ReportRenderer};

/// Decimals used for closeness in the ranking and summary.
pub const CLOSENESS_DECIMALS: usize = 4;

/// Markdown implementation of ReportRenderer.
#[derive(Debug, Clone)]
pub struct MarkdownReportRenderer {
    decimals: usize,
    include_process_tables: bool,
}

impl Default for MarkdownReportRenderer {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

impl MarkdownReportRenderer {
    pub fn new(decimals: usize, include_process_tables: bool) -> Self {
        Self {
            decimals,
            include_process_tables,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.decimals, config.include_process_tables)
    }

    fn num(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }

    fn write_summary(&self, out: &mut String, run: &ScoringRun) -> Result<(), RenderError> {
        let summary = run.summary();
        let max = summary
            .max_closeness
            .map(|v| format!("{:.*}", CLOSENESS_DECIMALS, v))
            .unwrap_or_else(|| "n/a".to_string());

        writeln!(out, "## Summary\n")?;
        writeln!(out, "| Total Alternatives | High | Medium | Low | Highest Ci |")?;
        writeln!(out, "|--------------------|------|--------|-----|------------|")?;
        writeln!(
            out,
            "| {} | {} | {} | {} | {} |\n",
            summary.total, summary.high, summary.medium, summary.low, max
        )?;

        if summary.coerced_values > 0 || summary.clamped_moods > 0 {
            writeln!(
                out,
                "> {} missing or non-numeric values scored as 0; {} mood levels clamped to 0-10.\n",
                summary.coerced_values, summary.clamped_moods
            )?;
        }
        Ok(())
    }

    fn write_weights(&self, out: &mut String) -> Result<(), RenderError> {
        writeln!(out, "## Criteria Weights (AHP)\n")?;
        writeln!(out, "| Criterion | Description | Type | Weight |")?;
        writeln!(out, "|-----------|-------------|------|--------|")?;
        for c in Criterion::ALL {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                c,
                c.description(),
                c.polarity(),
                self.num(c.weight())
            )?;
        }
        out.push('\n');
        Ok(())
    }

    fn write_raw(&self, out: &mut String, run: &ScoringRun) -> Result<(), RenderError> {
        writeln!(out, "## Raw Data with Criteria Aggregates\n")?;

        let mut header = String::from("| Alternative |");
        let mut rule = String::from("|-------------|");
        for m in Metric::ALL {
            write!(header, " {} |", m.column_name())?;
            rule.push_str("---|");
        }
        for c in Criterion::ALL {
            write!(header, " {} |", c)?;
            rule.push_str("---|");
        }
        writeln!(out, "{}\n{}", header, rule)?;

        for r in run.records() {
            write!(out, "| {} |", r.id)?;
            for m in Metric::ALL {
                write!(out, " {} |", self.num(r.raw.get(m)))?;
            }
            for c in Criterion::ALL {
                write!(out, " {} |", self.num(r.criteria[c]))?;
            }
            out.push('\n');
        }
        out.push('\n');
        Ok(())
    }

    fn write_matrix(
        &self,
        out: &mut String,
        title: &str,
        run: &ScoringRun,
        select: impl Fn(&ScoreRecord) -> &CriteriaVector,
    ) -> Result<(), RenderError> {
        writeln!(out, "## {}\n", title)?;
        writeln!(out, "| Alternative | C1 | C2 | C3 | C4 | C5 |")?;
        writeln!(out, "|-------------|----|----|----|----|----|")?;
        for r in run.records() {
            write!(out, "| {} |", r.id)?;
            for (_, value) in select(r).iter() {
                write!(out, " {} |", self.num(value))?;
            }
            out.push('\n');
        }
        out.push('\n');
        Ok(())
    }

    fn write_ideal(&self, out: &mut String, run: &ScoringRun) -> Result<(), RenderError> {
        writeln!(out, "## Ideal Solution\n")?;
        writeln!(out, "| Criterion | Type | Positive Ideal (A+) | Negative Ideal (A-) |")?;
        writeln!(out, "|-----------|------|---------------------|---------------------|")?;
        for row in run.ideal_solution() {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                row.criterion,
                row.polarity,
                self.num(row.positive),
                self.num(row.negative)
            )?;
        }
        out.push('\n');
        Ok(())
    }

    fn write_distances(&self, out: &mut String, run: &ScoringRun) -> Result<(), RenderError> {
        writeln!(out, "## Distance to Ideal Solution\n")?;
        writeln!(out, "| Alternative | D+ | D- | Ci | Rank |")?;
        writeln!(out, "|-------------|----|----|----|------|")?;
        for r in run.records() {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                r.id,
                self.num(r.distance_to_positive),
                self.num(r.distance_to_negative),
                self.num(r.closeness),
                r.rank
            )?;
        }
        out.push('\n');
        Ok(())
    }

    fn write_ranking(&self, out: &mut String, run: &ScoringRun) -> Result<(), RenderError> {
        writeln!(out, "## Ranking\n")?;
        writeln!(out, "| Alternative | Rank | Ci | Priority |")?;
        writeln!(out, "|-------------|------|----|----------|")?;
        for r in run.ranked() {
            writeln!(
                out,
                "| {} | {} | {:.*} | {} |",
                r.id,
                r.rank,
                CLOSENESS_DECIMALS,
                r.closeness,
                r.priority()
            )?;
        }
        Ok(())
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(&self, run: &ScoringRun) -> Result<String, RenderError> {
        let mut out = String::new();

        writeln!(out, "# Intervention Priority Report\n")?;
        writeln!(out, "Run `{}` computed at {}\n", run.run_id(), run.computed_at())?;

        self.write_summary(&mut out, run)?;

        if run.is_empty() {
            writeln!(out, "*No alternatives to rank.*")?;
            return Ok(out);
        }

        if self.include_process_tables {
            self.write_weights(&mut out)?;
            self.write_raw(&mut out, run)?;
            self.write_matrix(&mut out, "Normalized Matrix", run, |r| &r.normalized)?;
            self.write_matrix(&mut out, "Weighted Matrix", run, |r| &r.weighted)?;
            self.write_ideal(&mut out, run)?;
            self.write_distances(&mut out, run)?;
        }

        self.write_ranking(&mut out, run)?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
