//! Referrer resolution: search engine domain, query string and search term.
//!
//! Resolution is total. A malformed or empty URL yields nulls, never an
//! error, so one bad referrer cannot abort a run.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

use crate::hit::non_blank;

/// Query parameters that carry the search term on supported engines
/// (google/bing `q`, yahoo `p`, `pid`, `k`), matched case-insensitively
/// against the raw query string.
pub const SEARCH_TERM_PATTERN: &str = r"(?i)( ?q=|p=|pid=|k=)([^&#]+)";

static SEARCH_TERM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEARCH_TERM_PATTERN).expect("invalid search term pattern"));

/// Fields derived from a referrer URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerInfo {
    /// Host with its first label stripped (`www.google.com` -> `google.com`).
    pub domain: Option<String>,
    /// Raw, unparsed query string, exactly as it appears in the referrer.
    pub query: Option<String>,
    /// Value of the first search parameter found in the query.
    pub search_term: Option<String>,
}

/// Resolves a referrer URL into domain, query and search term.
///
/// `Url` is only consulted for the host, which it lowercases. The query is
/// sliced from the input so search terms keep their original encoding.
pub fn resolve_referrer(referrer: &str) -> ReferrerInfo {
    let referrer = referrer.trim();
    let Ok(url) = Url::parse(referrer) else {
        return ReferrerInfo::default();
    };

    let domain = url.host_str().and_then(strip_first_label);
    let query = raw_query(referrer).and_then(non_blank);
    let search_term = query.as_deref().and_then(extract_search_term);

    ReferrerInfo {
        domain,
        query,
        search_term,
    }
}

/// Returns the host portion of a URL, or `None` if it does not parse.
pub fn host_of(url: &str) -> Option<String> {
    Url::parse(url.trim())
        .ok()
        .and_then(|u| u.host_str().and_then(non_blank))
}

/// Extracts the search term from a raw query string.
///
/// This is a substring match, not key/value parsing: `sp=x` matches `p=`.
pub fn extract_search_term(query: &str) -> Option<String> {
    SEARCH_TERM_REGEX
        .captures(query)
        .and_then(|caps| caps.get(2))
        .and_then(|m| non_blank(m.as_str()))
}

/// Text between the first `?` and the fragment, untouched.
fn raw_query(url: &str) -> Option<&str> {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    without_fragment.split_once('?').map(|(_, query)| query)
}

fn strip_first_label(host: &str) -> Option<String> {
    host.split_once('.').and_then(|(_, rest)| non_blank(rest))
}
