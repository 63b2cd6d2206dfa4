//! Column names of the hit log and the revenue report.
//!
//! Input names match the tab-separated hit log header. Report names are the
//! public output contract and must not change.

// === Input columns ===

pub const IP: &str = "ip";
pub const HIT_TIME_GMT: &str = "hit_time_gmt";
pub const DATE_TIME: &str = "date_time";
pub const EVENT_LIST: &str = "event_list";
pub const PAGE_URL: &str = "page_url";
pub const REFERRER: &str = "referrer";
pub const PRODUCT_LIST: &str = "product_list";

/// Columns the pipeline cannot run without.
///
/// Checked once at load time so a missing column fails fast with its name.
pub const REQUIRED_INPUT_COLUMNS: [&str; 6] =
    [IP, HIT_TIME_GMT, EVENT_LIST, REFERRER, PAGE_URL, PRODUCT_LIST];

// === Delimiters ===

/// Separates product entries inside `product_list`.
pub const PRODUCT_ENTRY_DELIMITER: char = ',';

/// Separates the positional fields of one product entry.
pub const PRODUCT_FIELD_DELIMITER: char = ';';

/// Field separator of the hit log and the report.
pub const FIELD_DELIMITER: char = '\t';

// === Report columns ===

pub const REPORT_SEARCH_ENGINE_DOMAIN: &str = "Search Engine Domain";
pub const REPORT_SEARCH_KEYWORD: &str = "Search Keyword";
pub const REPORT_REVENUE: &str = "Revenue";

/// Report header in output order.
pub const REPORT_COLUMNS: [&str; 3] = [
    REPORT_SEARCH_ENGINE_DOMAIN,
    REPORT_SEARCH_KEYWORD,
    REPORT_REVENUE,
];
