//! Row shapes produced by each pipeline stage.
//!
//! Each stage consumes the previous stage's rows and produces new ones. Columns
//! a later stage no longer needs are dropped by the type, not by convention.

use serde::{Deserialize, Serialize};

use crate::product::ProductEntry;

/// One hit crossed with one of its product entries, plus referrer columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplodedRow {
    pub ip: Option<String>,
    pub hit_time_gmt: Option<i64>,
    pub date_time: Option<String>,
    pub event_list: Option<f64>,
    /// Host of `page_url`; internal only.
    pub page_domain: Option<String>,
    pub search_domain: Option<String>,
    pub search_query: Option<String>,
    pub search_term: Option<String>,
    pub product: ProductEntry,
}

/// An exploded row ranked within its visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub row: ExplodedRow,
    /// 1-based rank within the `ip` group, latest hit first.
    pub partition_key: u32,
}

/// A ranked row trimmed to the columns attribution needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRow {
    pub ip: Option<String>,
    pub hit_time_gmt: Option<i64>,
    pub date_time: Option<String>,
    pub event_list: Option<f64>,
    pub partition_key: u32,
    pub search_domain: Option<String>,
    pub search_term: Option<String>,
    pub tot_revenue: Option<f64>,
    pub merchandising_evar: Option<String>,
}

impl From<RankedRow> for SessionRow {
    fn from(ranked: RankedRow) -> Self {
        let RankedRow { row, partition_key } = ranked;
        Self {
            ip: row.ip,
            hit_time_gmt: row.hit_time_gmt,
            date_time: row.date_time,
            event_list: row.event_list,
            partition_key,
            search_domain: row.search_domain,
            search_term: row.search_term,
            tot_revenue: row.product.tot_revenue,
            merchandising_evar: row.product.merchandising_evar,
        }
    }
}

/// A session row carrying the revenue it is held responsible for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributedRow {
    pub row: SessionRow,
    /// `tot_revenue` forward-filled within the visitor.
    #[serde(rename = "Revenue_Simulated")]
    pub revenue_simulated: Option<f64>,
}

/// One line of the revenue report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    #[serde(rename = "Search Engine Domain")]
    pub search_engine_domain: String,
    #[serde(rename = "Search Keyword")]
    pub search_keyword: String,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
}
