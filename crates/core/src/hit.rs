//! Hit records: one clickstream event per row of the hit log.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::columns::{
    DATE_TIME, EVENT_LIST, HIT_TIME_GMT, IP, PAGE_URL, PRODUCT_LIST, REFERRER,
    REQUIRED_INPUT_COLUMNS,
};
use crate::error::{Error, Result};

/// A single hit as read from the log.
///
/// All text fields are normalized: empty or whitespace-only values are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    /// Visitor identifier (network address).
    pub ip: Option<String>,
    /// Hit timestamp, seconds since epoch.
    pub hit_time_gmt: Option<i64>,
    pub date_time: Option<String>,
    /// Numeric event type code.
    pub event_list: Option<f64>,
    pub page_url: Option<String>,
    pub referrer: Option<String>,
    pub product_list: Option<String>,
}

impl HitRecord {
    /// Whether this hit carries the given purchase event code.
    pub fn is_purchase(&self, purchase_event: f64) -> bool {
        self.event_list == Some(purchase_event)
    }
}

/// An in-memory table of hits in original row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitTable {
    rows: Vec<HitRecord>,
}

impl HitTable {
    pub fn new(rows: Vec<HitRecord>) -> Self {
        Self { rows }
    }

    /// Builds a table from a header and raw text rows.
    ///
    /// Fails with `SchemaMismatch` naming the first required column absent
    /// from `header`. Column order is free and unknown columns are ignored.
    /// Rows shorter than the header read missing cells as empty.
    pub fn from_raw(header: &[String], rows: Vec<Vec<String>>) -> Result<Self> {
        let index: HashMap<&str, usize> = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim(), i))
            .collect();

        for column in REQUIRED_INPUT_COLUMNS {
            if !index.contains_key(column) {
                return Err(Error::missing_column(column));
            }
        }

        let cell = |row: &[String], column: &str| -> Option<String> {
            index
                .get(column)
                .and_then(|&i| row.get(i))
                .and_then(|v| non_blank(v))
        };

        let rows = rows
            .iter()
            .map(|row| {
                let row = row.as_slice();
                HitRecord {
                    ip: cell(row, IP),
                    hit_time_gmt: cell(row, HIT_TIME_GMT).and_then(|v| v.trim().parse().ok()),
                    date_time: cell(row, DATE_TIME),
                    event_list: cell(row, EVENT_LIST).and_then(|v| v.trim().parse().ok()),
                    page_url: cell(row, PAGE_URL),
                    referrer: cell(row, REFERRER),
                    product_list: cell(row, PRODUCT_LIST),
                }
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[HitRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<HitRecord> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<HitRecord> for HitTable {
    fn from_iter<I: IntoIterator<Item = HitRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Normalizes a text cell: empty or whitespace-only becomes `None`.
pub fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
