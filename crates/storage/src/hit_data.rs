//! Hit log lifecycle: claim the landed file, load it, persist the report.

use attribution_core::{AggregatedResult, Error, HitTable, Result};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::StorageConfig;
use crate::store::ObjectStore;
use crate::tsv::{parse_hit_table, render_report};

/// Moves hit logs through input → processing and writes reports.
#[derive(Clone)]
pub struct HitDataStore {
    store: Arc<dyn ObjectStore>,
    config: StorageConfig,
}

impl HitDataStore {
    pub fn new(store: Arc<dyn ObjectStore>, config: StorageConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Claims the landed hit log for `date` and loads it.
    ///
    /// The input object is copied under the dated processing prefix and then
    /// deleted, so a second trigger for the same file finds nothing to do.
    /// A log with no data rows is `EmptyInput`.
    pub async fn fetch_hit_table(&self, date: NaiveDate) -> Result<HitTable> {
        let input_key = self.config.input_key();
        let processing_key = self.config.processing_key(date);

        self.store.copy(&input_key, &processing_key).await?;
        if let Err(e) = self.store.delete(&input_key).await {
            // The copy is already safe; a leftover input only risks a rerun.
            warn!(key = %input_key, error = %e, "Failed to delete input object");
        }
        info!(from = %input_key, to = %processing_key, "Moved hit log to processing");

        let body = self.store.get(&processing_key).await?;
        let table = parse_hit_table(&body)?;
        if table.is_empty() {
            return Err(Error::empty_input(processing_key));
        }

        info!(key = %processing_key, rows = table.len(), bytes = body.len(), "Loaded hit log");
        Ok(table)
    }

    /// Writes the report for `date` and returns its key.
    pub async fn write_report(&self, date: NaiveDate, results: &[AggregatedResult]) -> Result<String> {
        let key = self.config.output_key(date);
        let body = render_report(results).into_bytes();
        let bytes = body.len();
        self.store.put(&key, body).await?;
        info!(key = %key, rows = results.len(), bytes, "Wrote revenue report");
        Ok(key)
    }
}

impl std::fmt::Debug for HitDataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitDataStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
