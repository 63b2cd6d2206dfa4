//! Revenue attribution.
//!
//! Within a visitor, revenue is forward-filled across ascending
//! `partition_key` (latest hit first), internal referrals are excluded, and
//! for each `(ip, Revenue_Simulated)` group the row with the smallest
//! `partition_key` is kept as the referrer responsible for that revenue.

use attribution_core::{AttributedRow, AttributionConfig};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

use crate::session::SessionTable;

/// Output of the attribution stage.
#[derive(Debug, Clone, Default)]
pub struct Attribution {
    /// One row per `(ip, Revenue_Simulated)` group, ordered by `(ip, partition_key)`.
    pub rows: Vec<AttributedRow>,
    /// Rows dropped because they were referred by the site itself.
    pub excluded_self_referrals: usize,
}

/// Attributes forward-filled revenue to referrer rows.
pub struct RevenueAttributor<'a> {
    config: &'a AttributionConfig,
}

impl<'a> RevenueAttributor<'a> {
    pub fn new(config: &'a AttributionConfig) -> Self {
        Self { config }
    }

    /// Runs fill, exclusion and reduction over an ordered session table.
    pub fn attribute(&self, table: &SessionTable) -> Attribution {
        let filled = fill_revenue(table);
        let filled_len = filled.len();

        let external: Vec<AttributedRow> = filled
            .into_iter()
            .filter(|row| !self.is_self_referral(row))
            .collect();
        let excluded_self_referrals = filled_len - external.len();

        let rows = select_responsible(external, self.config.skip_unattributed);

        debug!(
            filled = filled_len,
            excluded_self_referrals,
            attributed = rows.len(),
            "Attributed revenue"
        );

        Attribution {
            rows,
            excluded_self_referrals,
        }
    }

    fn is_self_referral(&self, row: &AttributedRow) -> bool {
        row.row.search_domain.as_deref() == Some(self.config.own_domain.as_str())
    }
}

/// Forward-fills `tot_revenue` into `Revenue_Simulated` per visitor.
///
/// Each row takes the nearest non-null `tot_revenue` at or before it in its
/// visitor's slice. Rows ahead of the first value stay null. The fill never
/// crosses from one visitor into the next.
pub fn fill_revenue(table: &SessionTable) -> Vec<AttributedRow> {
    let mut out = Vec::with_capacity(table.len());
    for visitor in table.visitors() {
        let filled = forward_fill(visitor.iter().map(|row| row.tot_revenue));
        out.extend(
            visitor
                .iter()
                .cloned()
                .zip(filled)
                .map(|(row, revenue_simulated)| AttributedRow {
                    row,
                    revenue_simulated,
                }),
        );
    }
    out
}

/// Propagates the last non-null value forward over following nulls.
pub fn forward_fill<I>(values: I) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut last = None;
    values
        .into_iter()
        .map(|value| {
            if value.is_some() {
                last = value;
            }
            last
        })
        .collect()
}

/// Keeps, per `(ip, Revenue_Simulated)`, the row with the smallest `partition_key`.
///
/// Null revenue is a group key like any other, so all unattributed rows of a
/// visitor collapse into one survivor unless `skip_unattributed` drops them.
/// Output keeps input order.
pub fn select_responsible(rows: Vec<AttributedRow>, skip_unattributed: bool) -> Vec<AttributedRow> {
    let selected = {
        let mut winners: HashMap<(Option<&str>, Option<u64>), usize> = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            if skip_unattributed && row.revenue_simulated.is_none() {
                continue;
            }
            let key = (row.row.ip.as_deref(), revenue_key(row.revenue_simulated));
            match winners.entry(key) {
                Entry::Occupied(mut slot) => {
                    if row.row.partition_key < rows[*slot.get()].row.partition_key {
                        slot.insert(i);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
            }
        }

        let mut selected = vec![false; rows.len()];
        for &i in winners.values() {
            selected[i] = true;
        }
        selected
    };

    rows.into_iter()
        .zip(selected)
        .filter_map(|(row, keep)| keep.then_some(row))
        .collect()
}

/// Hashable revenue key; `-0.0` and `0.0` group together.
fn revenue_key(revenue: Option<f64>) -> Option<u64> {
    revenue.map(|v| if v == 0.0 { 0 } else { v.to_bits() })
}
