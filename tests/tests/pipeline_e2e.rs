//! End-to-end tests for the attribution job.
//!
//! These tests drive the full flow against an in-memory object store:
//! input hit log → processing prefix → pipeline → dated report.

use attribution_core::AttributionConfig;
use integration_tests::{fixtures, setup::TestContext};

#[tokio::test]
async fn test_full_run_writes_expected_report() {
    let ctx = TestContext::new();
    ctx.land_hit_log(&fixtures::hit_log());

    let output = ctx.run().await.expect("run should succeed");

    assert_eq!(output.summary.rows_ingested, 11);
    assert_eq!(output.summary.rows_retained, 10, "non-buyer dropped");
    assert_eq!(output.summary.report_rows, 3);
    assert_eq!(ctx.report().as_deref(), Some(fixtures::expected_report().as_str()));
}

#[tokio::test]
async fn test_input_is_moved_to_processing() {
    let ctx = TestContext::new();
    ctx.land_hit_log(&fixtures::hit_log());

    ctx.run().await.unwrap();

    assert!(!ctx.store.contains(&ctx.input_key()));
    assert_eq!(ctx.processing_key(), "processing/2009-09-27/hit_data.txt");
    assert_eq!(ctx.store.text(&ctx.processing_key()), Some(fixtures::hit_log()));
    assert_eq!(
        ctx.output_key(),
        "outputs/2009-09-27_search_keyword_performance.tab"
    );
}

#[tokio::test]
async fn test_self_referrals_never_reported() {
    let ctx = TestContext::new();
    ctx.land_hit_log(&fixtures::hit_log());

    let output = ctx.run().await.unwrap();

    assert!(output
        .results
        .iter()
        .all(|r| r.search_engine_domain != "esshopzilla.com"));
    assert!(output.summary.excluded_self_referrals > 0);
}

#[tokio::test]
async fn test_non_buying_visitor_contributes_nothing() {
    let ctx = TestContext::new();
    // The only google "Zune" referral belongs to a visitor who never buys.
    ctx.land_hit_log(&fixtures::hit_log());

    let output = ctx.run().await.unwrap();

    assert!(output
        .results
        .iter()
        .all(|r| !(r.search_engine_domain == "google.com" && r.search_keyword == "Zune")));
}

#[tokio::test]
async fn test_unexcluded_checkout_hits_claim_all_revenue() {
    // With a foreign domain configured as "own", the store's checkout hits
    // are no longer internal. They rank closest to each purchase, carry no
    // search keyword, and so leave nothing for the report.
    let ctx = TestContext::with_attribution(AttributionConfig {
        own_domain: "example.org".into(),
        ..Default::default()
    });
    ctx.land_hit_log(&fixtures::hit_log());

    let output = ctx.run().await.unwrap();

    assert_eq!(output.summary.excluded_self_referrals, 0);
    assert!(output.results.is_empty());
}

#[tokio::test]
async fn test_same_keyword_sums_across_visitors() {
    let ctx = TestContext::new();
    let lines = vec![
        fixtures::hit_line(100, "1.1.1.1", "", "Home", "http://www.esshopzilla.com", "", "http://www.bing.com/search?q=shoes"),
        fixtures::hit_line(200, "1.1.1.1", "1", "Order Complete", "https://www.esshopzilla.com/checkout/?a=complete", "Apparel;Shoes;1;10;", "https://www.esshopzilla.com/checkout/?a=confirm"),
        fixtures::hit_line(100, "2.2.2.2", "", "Home", "http://www.esshopzilla.com", "", "http://www.bing.com/search?q=shoes"),
        fixtures::hit_line(200, "2.2.2.2", "1", "Order Complete", "https://www.esshopzilla.com/checkout/?a=complete", "Apparel;Shoes;1;5;", "https://www.esshopzilla.com/checkout/?a=confirm"),
    ];
    ctx.land_hit_log(&fixtures::hit_log_from(&lines));

    ctx.run().await.unwrap();

    assert_eq!(
        ctx.report().as_deref(),
        Some("Search Engine Domain\tSearch Keyword\tRevenue\nbing.com\tshoes\t15\n")
    );
}

#[tokio::test]
async fn test_no_search_referrals_yields_header_only_report() {
    let ctx = TestContext::new();
    let lines = vec![fixtures::hit_line(
        100,
        "1.1.1.1",
        "1",
        "Order Complete",
        "https://www.esshopzilla.com/checkout/?a=complete",
        "Apparel;Shoes;1;10;",
        "https://www.esshopzilla.com/checkout/?a=confirm",
    )];
    ctx.land_hit_log(&fixtures::hit_log_from(&lines));

    let output = ctx.run().await.unwrap();

    assert!(output.results.is_empty());
    assert_eq!(
        ctx.report().as_deref(),
        Some("Search Engine Domain\tSearch Keyword\tRevenue\n")
    );
}
