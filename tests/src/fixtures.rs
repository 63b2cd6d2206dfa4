//! Test fixtures: hit log bodies and expected reports.

/// Hit log header, in the column order the analytics export uses.
pub const HEADER: &str = "hit_time_gmt\tdate_time\tuser_agent\tip\tevent_list\tgeo_city\tgeo_region\tgeo_country\tpagename\tpage_url\tproduct_list\treferrer";

const UA: &str = "Mozilla/5.0 (Windows; U; Windows NT 5.1; en-US; rv:1.9.0.13) Gecko/2009073022 Firefox/3.0.13";

/// Builds one hit log line.
pub fn hit_line(
    hit_time_gmt: i64,
    ip: &str,
    event_list: &str,
    pagename: &str,
    page_url: &str,
    product_list: &str,
    referrer: &str,
) -> String {
    let date_time = chrono::DateTime::from_timestamp(hit_time_gmt, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    let hit_time = hit_time_gmt.to_string();
    let fields = [
        hit_time.as_str(),
        date_time.as_str(),
        UA,
        ip,
        event_list,
        "Salem",
        "OR",
        "US",
        pagename,
        page_url,
        product_list,
        referrer,
    ];
    fields.join("\t")
}

/// Joins a header and lines into a hit log body.
pub fn hit_log_from(lines: &[String]) -> String {
    let mut body = String::from(HEADER);
    body.push('\n');
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    body
}

/// A day of traffic across five visitors.
///
/// - 23.8.61.21 arrives from bing ("Zune") and buys for 250
/// - 44.12.96.2 arrives from google ("Ipod") and buys for 190
/// - 67.98.123.1 arrives from yahoo ("cd+player") and buys for 290
/// - 76.19.1.2 arrives from google ("Ipod") and buys for 190
/// - 112.33.98.231 arrives from google and never buys
pub fn hit_log_lines() -> Vec<String> {
    let checkout = "https://www.esshopzilla.com/checkout/?a=confirm";
    let complete = "https://www.esshopzilla.com/checkout/?a=complete";
    vec![
        hit_line(1254033280, "44.12.96.2", "", "Home", "http://www.esshopzilla.com", "", "http://www.google.com/search?hl=en&q=Ipod&aq=f&oq=&aqi="),
        hit_line(1254033379, "23.8.61.21", "2", "Zune - 32GB", "http://www.esshopzilla.com/product/?pid=as23233", "Electronics;Zune - 32GB;1;;", "http://www.bing.com/search?q=Zune&go=&form=QBLH&qs=n"),
        hit_line(1254033400, "67.98.123.1", "", "Home", "http://www.esshopzilla.com", "", "http://search.yahoo.com/search?p=cd+player&toggle=1&cop=mss&ei=UTF-8&fr=yfp-t-701"),
        hit_line(1254033577, "44.12.96.2", "2", "Ipod - Nano - 8GB", "http://www.esshopzilla.com/product/?pid=as32213", "Electronics;Ipod - Nano - 8GB;1;;", "http://www.esshopzilla.com/search/?k=Ipod"),
        hit_line(1254033600, "112.33.98.231", "", "Home", "http://www.esshopzilla.com", "", "http://www.google.com/search?hl=en&q=Zune"),
        hit_line(1254034000, "76.19.1.2", "", "Hot Buys", "http://www.esshopzilla.com/hotbuys/", "", "http://www.google.com/search?hl=en&q=Ipod"),
        hit_line(1254034100, "76.19.1.2", "1", "Order Complete", complete, "Electronics;Ipod - Nano - 8GB;1;190;", checkout),
        hit_line(1254034567, "23.8.61.21", "12", "Shopping Cart", "https://www.esshopzilla.com/cart/", "Electronics;Zune - 32GB;1;;", "http://www.esshopzilla.com/product/?pid=as23233"),
        hit_line(1254034666, "23.8.61.21", "1", "Order Complete", complete, "Electronics;Zune - 32GB;1;250;", checkout),
        hit_line(1254035000, "67.98.123.1", "1", "Order Complete", complete, "Electronics;Ipod - Touch - 32GB;1;290;", checkout),
        hit_line(1254035260, "44.12.96.2", "1", "Order Complete", complete, "Electronics;Ipod - Nano - 8GB;1;190;", checkout),
    ]
}

/// The full sample hit log.
pub fn hit_log() -> String {
    hit_log_from(&hit_log_lines())
}

/// Report expected for `hit_log()`.
pub fn expected_report() -> String {
    "Search Engine Domain\tSearch Keyword\tRevenue\n\
google.com\tIpod\t380\n\
yahoo.com\tcd+player\t290\n\
bing.com\tZune\t250\n"
        .to_string()
}
