//! Internal telemetry for the attribution job.
//!
//! Structured logging through `tracing`, plus in-process counters that are
//! snapshotted and logged at the end of each run.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::*;
pub use tracing_setup::*;
