//! Common test setup.

use attribution_core::{AttributionConfig, Result};
use chrono::NaiveDate;
use pipeline::{AttributionPipeline, PipelineOutput};
use std::sync::Arc;
use storage::{HitDataStore, StorageConfig};

use crate::mocks::MockObjectStore;

/// Test context wiring the real lifecycle and pipeline to a mock store.
pub struct TestContext {
    pub store: MockObjectStore,
    pub hit_data: HitDataStore,
    pub attribution: AttributionConfig,
    pub date: NaiveDate,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_attribution(AttributionConfig::default())
    }

    pub fn with_attribution(attribution: AttributionConfig) -> Self {
        let store = MockObjectStore::new();
        let hit_data = HitDataStore::new(Arc::new(store.clone()), StorageConfig::default());
        let date = NaiveDate::from_ymd_opt(2009, 9, 27).expect("valid date");
        Self {
            store,
            hit_data,
            attribution,
            date,
        }
    }

    /// Drops a hit log at the input key, as the upstream export would.
    pub fn land_hit_log(&self, body: &str) {
        self.store
            .insert(&self.hit_data.config().input_key(), body.as_bytes().to_vec());
    }

    pub fn input_key(&self) -> String {
        self.hit_data.config().input_key()
    }

    pub fn processing_key(&self) -> String {
        self.hit_data.config().processing_key(self.date)
    }

    pub fn output_key(&self) -> String {
        self.hit_data.config().output_key(self.date)
    }

    /// Runs the whole job once: fetch, attribute, write.
    pub async fn run(&self) -> Result<PipelineOutput> {
        let hits = self.hit_data.fetch_hit_table(self.date).await?;
        let output = AttributionPipeline::new(self.attribution.clone())?.run(hits)?;
        self.hit_data.write_report(self.date, &output.results).await?;
        Ok(output)
    }

    /// The written report, if any.
    pub fn report(&self) -> Option<String> {
        self.store.text(&self.output_key())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
