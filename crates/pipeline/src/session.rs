//! Session partitioning: per-visitor ranking and ordering.
//!
//! A visitor is identified by `ip`. Rows are ranked latest hit first, and the
//! resulting `SessionTable` is ordered by `(ip, partition_key)`. Attribution
//! relies on that ordering, so the only way to build a `SessionTable` is
//! through this module.

use attribution_core::{ExplodedRow, RankedRow, SessionRow};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranks every row within its visitor.
///
/// Ranks run 1..N per `ip`, ordered by `hit_time_gmt` descending. Ties keep
/// input order (first seen gets the lower rank). A missing timestamp ranks
/// after every real one. Output keeps input order.
pub fn rank_visitors(rows: Vec<ExplodedRow>) -> Vec<RankedRow> {
    let ranks = {
        let mut by_visitor: HashMap<Option<&str>, Vec<usize>> = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            by_visitor.entry(row.ip.as_deref()).or_default().push(i);
        }

        let mut ranks = vec![0u32; rows.len()];
        for indices in by_visitor.values_mut() {
            // Stable sort: equal timestamps keep first-seen order.
            indices.sort_by(|&a, &b| latest_first(rows[a].hit_time_gmt, rows[b].hit_time_gmt));
            for (rank, &i) in indices.iter().enumerate() {
                ranks[i] = rank as u32 + 1;
            }
        }
        ranks
    };

    rows.into_iter()
        .zip(ranks)
        .map(|(row, partition_key)| RankedRow { row, partition_key })
        .collect()
}

fn latest_first(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ranked rows trimmed to attribution columns, ordered by
/// `(ip ascending, partition_key ascending)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionTable {
    rows: Vec<SessionRow>,
}

impl SessionTable {
    /// Ranks, trims and orders exploded rows.
    pub fn partition(rows: Vec<ExplodedRow>) -> Self {
        Self::from_ranked(rank_visitors(rows))
    }

    /// Trims ranked rows and establishes the `(ip, partition_key)` order.
    pub fn from_ranked(ranked: Vec<RankedRow>) -> Self {
        let mut rows: Vec<SessionRow> = ranked.into_iter().map(SessionRow::from).collect();
        rows.sort_by(|a, b| {
            a.ip.cmp(&b.ip)
                .then_with(|| a.partition_key.cmp(&b.partition_key))
        });
        Self { rows }
    }

    pub fn rows(&self) -> &[SessionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-visitor slices, each in ascending `partition_key` order.
    pub fn visitors(&self) -> impl Iterator<Item = &[SessionRow]> {
        self.rows.chunk_by(|a, b| a.ip == b.ip)
    }
}
