//! Storage for the attribution job: object store, hit log codec, report output.

pub mod config;
pub mod hit_data;
pub mod store;
pub mod tsv;

pub use config::*;
pub use hit_data::HitDataStore;
pub use store::*;
pub use tsv::{parse_hit_table, render_report};
