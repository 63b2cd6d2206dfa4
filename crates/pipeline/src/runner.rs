//! The attribution pipeline: filter → enrich → partition → attribute → aggregate.
//!
//! Every stage consumes the whole table produced by the previous one.

use attribution_core::{AggregatedResult, AttributionConfig, Error, HitTable, Result};
use serde::Serialize;
use std::time::Instant;
use telemetry::metrics;
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::aggregate::aggregate;
use crate::attribution::RevenueAttributor;
use crate::enrichment::HitEnricher;
use crate::filter::retain_purchasing_visitors;
use crate::session::SessionTable;

/// Row counts of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub rows_ingested: usize,
    pub rows_retained: usize,
    pub rows_exploded: usize,
    pub excluded_self_referrals: usize,
    pub rows_attributed: usize,
    pub report_rows: usize,
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub results: Vec<AggregatedResult>,
    pub summary: RunSummary,
}

/// Runs the attribution stages over one hit table.
#[derive(Debug, Clone)]
pub struct AttributionPipeline {
    config: AttributionConfig,
}

impl AttributionPipeline {
    /// Creates a pipeline, rejecting invalid settings.
    pub fn new(config: AttributionConfig) -> Result<Self> {
        config.check()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AttributionConfig {
        &self.config
    }

    /// Runs every stage and returns the aggregated report.
    ///
    /// An empty table is rejected before any stage runs.
    pub fn run(&self, hits: HitTable) -> Result<PipelineOutput> {
        if hits.is_empty() {
            return Err(Error::empty_input("hit table has no rows"));
        }

        let run_id = Uuid::new_v4();
        let span = info_span!("attribution_run", %run_id);
        let _guard = span.enter();

        let rows_ingested = hits.len();
        metrics().rows_ingested.inc_by(rows_ingested as u64);

        let retained = timed("filter", || {
            retain_purchasing_visitors(hits, self.config.purchase_event)
        });
        let rows_retained = retained.len();
        metrics().rows_retained.inc_by(rows_retained as u64);
        debug!(rows_ingested, rows_retained, "Filtered to purchasing visitors");

        let exploded = timed("enrich", || HitEnricher::new().enrich_batch(retained));
        let rows_exploded = exploded.len();
        metrics().rows_exploded.inc_by(rows_exploded as u64);
        debug!(rows_exploded, "Exploded product entries");

        let sessions = timed("partition", || SessionTable::partition(exploded));
        debug!(rows = sessions.len(), "Partitioned visitors");

        let attribution = timed("attribute", || {
            RevenueAttributor::new(&self.config).attribute(&sessions)
        });
        metrics()
            .rows_excluded_self_referral
            .inc_by(attribution.excluded_self_referrals as u64);
        metrics()
            .rows_attributed
            .inc_by(attribution.rows.len() as u64);

        let results = timed("aggregate", || aggregate(&attribution.rows));
        metrics().report_rows.inc_by(results.len() as u64);

        let summary = RunSummary {
            run_id,
            rows_ingested,
            rows_retained,
            rows_exploded,
            excluded_self_referrals: attribution.excluded_self_referrals,
            rows_attributed: attribution.rows.len(),
            report_rows: results.len(),
        };

        info!(
            rows_ingested,
            rows_retained,
            rows_exploded,
            rows_attributed = summary.rows_attributed,
            report_rows = summary.report_rows,
            "Attribution complete"
        );

        Ok(PipelineOutput { results, summary })
    }
}

fn timed<T>(stage: &'static str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    let elapsed_ms = start.elapsed().as_millis() as u64;
    metrics().stage_latency_ms.observe(elapsed_ms);
    debug!(stage, elapsed_ms, "Stage finished");
    out
}
