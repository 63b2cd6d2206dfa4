//! Purchase filter: keep only visitors who bought something.

use attribution_core::HitTable;
use std::collections::HashSet;

/// Drops every hit of every visitor without a purchase event.
///
/// A visitor is identified by `ip`; one purchase anywhere in their hits keeps
/// all of their hits. Row order is preserved.
pub fn retain_purchasing_visitors(hits: HitTable, purchase_event: f64) -> HitTable {
    let buyers: HashSet<Option<String>> = hits
        .rows()
        .iter()
        .filter(|hit| hit.is_purchase(purchase_event))
        .map(|hit| hit.ip.clone())
        .collect();

    hits.into_rows()
        .into_iter()
        .filter(|hit| buyers.contains(&hit.ip))
        .collect()
}
