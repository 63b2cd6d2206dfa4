//! Tab-separated codec for the hit log and the revenue report.
//!
//! The hit log is plain tab-separated text with a header line; there is no
//! quoting. Report values are sanitized so they cannot break the layout.

use std::borrow::Cow;

use attribution_core::columns::{FIELD_DELIMITER, REPORT_COLUMNS};
use attribution_core::{AggregatedResult, Error, HitTable, Result};
use tracing::warn;

/// Parses a tab-separated hit log.
///
/// `\r\n` line endings are accepted and blank lines are skipped. A body
/// without a header line is empty input; a missing required column is a
/// schema mismatch. Invalid UTF-8 is replaced with U+FFFD and logged.
pub fn parse_hit_table(body: &[u8]) -> Result<HitTable> {
    let text = decode_lossy(body);
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Err(Error::empty_input("hit log has no header"));
    };
    let header: Vec<String> = split_fields(header_line);

    let rows: Vec<Vec<String>> = lines.map(split_fields).collect();
    HitTable::from_raw(&header, rows)
}

fn decode_lossy(body: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(body);
    if let Cow::Owned(decoded) = &text {
        let affected_lines = count_replaced_lines(decoded);
        warn!(
            affected_lines,
            "hit log contains invalid UTF-8; bytes replaced with U+FFFD"
        );
    }
    text
}

fn count_replaced_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| line.contains(char::REPLACEMENT_CHARACTER))
        .count()
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(str::to_string).collect()
}

/// Renders the report with its header line.
pub fn render_report(results: &[AggregatedResult]) -> String {
    let mut out = String::new();
    out.push_str(&REPORT_COLUMNS.join("\t"));
    out.push('\n');
    for result in results {
        out.push_str(&sanitize(&result.search_engine_domain));
        out.push(FIELD_DELIMITER);
        out.push_str(&sanitize(&result.search_keyword));
        out.push(FIELD_DELIMITER);
        out.push_str(&result.revenue.to_string());
        out.push('\n');
    }
    out
}

fn sanitize(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}
