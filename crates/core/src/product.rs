//! Product entries packed inside a hit's `product_list`.
//!
//! `product_list` holds zero or more entries separated by `,`. Each entry is
//! `category;product_name;num_of_items;tot_revenue;custom_event;merchandising_evar`.
//! Every field parses independently; a missing or malformed field is null.

use serde::{Deserialize, Serialize};

use crate::columns::{PRODUCT_ENTRY_DELIMITER, PRODUCT_FIELD_DELIMITER};
use crate::hit::non_blank;

/// One typed product entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub category: Option<String>,
    pub product_name: Option<String>,
    pub num_of_items: Option<u32>,
    pub tot_revenue: Option<f64>,
    pub custom_event: Option<String>,
    pub merchandising_evar: Option<String>,
}

impl ProductEntry {
    /// Parses one `;`-separated entry. Fields past the sixth are ignored.
    pub fn parse(entry: &str) -> Self {
        let mut fields = entry.split(PRODUCT_FIELD_DELIMITER);
        let mut next = || fields.next().and_then(non_blank);

        let category = next();
        let product_name = next();
        let num_of_items = next().and_then(|s| s.trim().parse().ok());
        let tot_revenue = next().and_then(|s| parse_revenue(&s));
        let custom_event = next();
        let merchandising_evar = next();

        Self {
            category,
            product_name,
            num_of_items,
            tot_revenue,
            custom_event,
            merchandising_evar,
        }
    }

    /// True when no field carried a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Splits a `product_list` into its raw entries.
///
/// An empty list still yields one empty entry so the hit survives explosion.
pub fn split_product_list(product_list: Option<&str>) -> Vec<&str> {
    match product_list {
        Some(list) if !list.trim().is_empty() => list.split(PRODUCT_ENTRY_DELIMITER).collect(),
        _ => vec![""],
    }
}

fn parse_revenue(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
