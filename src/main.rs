//! Search Revenue Attribution Job
//!
//! Batch job run once per hit log landing in the bucket:
//! - Claims the hit log (input → dated processing prefix)
//! - Keeps visitors with a purchase, explodes product entries
//! - Forward-fills purchase revenue and attributes it to search referrers
//! - Writes revenue per search engine domain and keyword as a tab-separated report

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};

use attribution_core::AttributionConfig;
use pipeline::AttributionPipeline;
use storage::{HitDataStore, LocalObjectStore, StorageConfig};
use telemetry::{init_tracing_from_env, metrics};

/// Application configuration.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default)]
    storage: StorageConfig,

    #[serde(default)]
    attribution: AttributionConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing_from_env();

    info!("Starting search revenue attribution v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    config.storage.check()?;
    config.attribution.check()?;

    info!(
        bucket = %config.storage.bucket,
        input = %config.storage.input_key(),
        own_domain = %config.attribution.own_domain,
        "Loaded config"
    );

    let result = run(&config).await;

    match &result {
        Ok(key) => {
            metrics().runs_completed.inc();
            info!(report = %key, "Completed");
        }
        Err(e) => {
            metrics().runs_failed.inc();
            error!("Attribution run failed: {:#}", e);
        }
    }

    match serde_json::to_string(&metrics().snapshot()) {
        Ok(snapshot) => info!(metrics = %snapshot, "Run metrics"),
        Err(e) => error!("Failed to serialize metrics: {}", e),
    }

    result.map(|_| ())
}

/// Runs one job: fetch, attribute, persist. Returns the report key.
async fn run(config: &Config) -> Result<String> {
    let today = Utc::now().date_naive();

    let store = Arc::new(LocalObjectStore::new(&config.storage.bucket));
    let hit_data = HitDataStore::new(store, config.storage.clone());

    let hits = hit_data
        .fetch_hit_table(today)
        .await
        .context("Failed to load hit data")?;

    let pipeline = AttributionPipeline::new(config.attribution.clone())?;
    let output = pipeline.run(hits).context("Attribution pipeline failed")?;

    info!(
        run_id = %output.summary.run_id,
        summary = %serde_json::to_string(&output.summary)?,
        "Pipeline summary"
    );

    hit_data
        .write_report(today, &output.results)
        .await
        .context("Failed to write revenue report")
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("SEARCH_REVENUE")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Job-level variables set by the trigger that launches the run
    if let Ok(bucket) = std::env::var("DATA_BUCKET") {
        config.storage.bucket = bucket;
    }
    if let Ok(path) = std::env::var("INPUT_DATA_PATH") {
        config.storage.input_data_path = path;
    }
    if let Ok(path) = std::env::var("PROCESSING_DATA_PATH") {
        config.storage.processing_data_path = path;
    }
    if let Ok(path) = std::env::var("OUTPUT_DATA_PATH") {
        config.storage.output_data_path = path;
    }
    if let Ok(file) = std::env::var("OUTPUT_DATA_FILE") {
        config.storage.output_data_file = file;
    }

    Ok(config)
}
