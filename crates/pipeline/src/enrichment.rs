//! Hit enrichment and product explosion.
//!
//! Turns each hit into one row per product entry and attaches the columns
//! derived from `referrer` and `page_url`.

use attribution_core::{
    host_of, resolve_referrer, split_product_list, ExplodedRow, HitRecord, HitTable, ProductEntry,
    ReferrerInfo,
};
use std::collections::HashMap;

/// Enricher for hit rows.
///
/// Referrer resolution is memoized: a hit log repeats the same handful of
/// referrers many times over.
#[derive(Debug, Default)]
pub struct HitEnricher {
    referrers: HashMap<String, ReferrerInfo>,
}

impl HitEnricher {
    /// Creates a new enricher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explodes one hit into one row per product entry.
    ///
    /// A hit with an empty `product_list` yields exactly one row whose product
    /// fields are all null.
    pub fn enrich(&mut self, hit: HitRecord) -> Vec<ExplodedRow> {
        let referrer = self.resolve(hit.referrer.as_deref());
        let page_domain = hit.page_url.as_deref().and_then(host_of);

        split_product_list(hit.product_list.as_deref())
            .into_iter()
            .map(|entry| ExplodedRow {
                ip: hit.ip.clone(),
                hit_time_gmt: hit.hit_time_gmt,
                date_time: hit.date_time.clone(),
                event_list: hit.event_list,
                page_domain: page_domain.clone(),
                search_domain: referrer.domain.clone(),
                search_query: referrer.query.clone(),
                search_term: referrer.search_term.clone(),
                product: ProductEntry::parse(entry),
            })
            .collect()
    }

    /// Enrich a whole table, keeping hit order.
    pub fn enrich_batch(&mut self, hits: HitTable) -> Vec<ExplodedRow> {
        let mut rows = Vec::with_capacity(hits.len());
        for hit in hits.into_rows() {
            rows.extend(self.enrich(hit));
        }
        rows
    }

    fn resolve(&mut self, referrer: Option<&str>) -> ReferrerInfo {
        let Some(referrer) = referrer else {
            return ReferrerInfo::default();
        };
        self.referrers
            .entry(referrer.to_string())
            .or_insert_with(|| resolve_referrer(referrer))
            .clone()
    }
}
