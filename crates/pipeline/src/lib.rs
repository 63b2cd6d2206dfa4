//! Attribution stages over clickstream hit data.
//!
//! Stages, in order:
//! - Filter (visitors with a purchase)
//! - Enrichment (product explosion, referrer columns)
//! - Session (per-visitor ranking and ordering)
//! - Attribution (revenue forward-fill and responsible referrer selection)
//! - Aggregate (revenue per search engine domain and keyword)

pub mod aggregate;
pub mod attribution;
pub mod enrichment;
pub mod filter;
pub mod runner;
pub mod session;

pub use aggregate::aggregate;
pub use attribution::{Attribution, RevenueAttributor};
pub use enrichment::HitEnricher;
pub use runner::*;
pub use session::SessionTable;
