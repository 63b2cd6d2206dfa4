//! Revenue aggregation by search engine domain and keyword.

use attribution_core::{AggregatedResult, AttributedRow};
use std::collections::BTreeMap;

/// Sums attributed revenue per `(search_domain, search_term)`.
///
/// Null revenue counts as zero. Rows missing either key form no group, so
/// non-search referrals never reach the report. Results are ordered by
/// revenue descending, then domain and keyword ascending.
pub fn aggregate(rows: &[AttributedRow]) -> Vec<AggregatedResult> {
    let mut totals: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for row in rows {
        let (Some(domain), Some(term)) = (
            row.row.search_domain.as_deref(),
            row.row.search_term.as_deref(),
        ) else {
            continue;
        };
        *totals.entry((domain, term)).or_insert(0.0) += row.revenue_simulated.unwrap_or(0.0);
    }

    let mut results: Vec<AggregatedResult> = totals
        .into_iter()
        .map(|((domain, term), revenue)| AggregatedResult {
            search_engine_domain: domain.to_string(),
            search_keyword: term.to_string(),
            revenue,
        })
        .collect();

    // Stable: equal revenue keeps the key order from the map.
    results.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    results
}
