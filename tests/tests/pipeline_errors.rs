//! Tests for fatal conditions in the attribution job.
//!
//! Structural problems abort the run with a coded error and write no report.

use attribution_core::Error;
use integration_tests::{fixtures, setup::TestContext};

#[tokio::test]
async fn test_header_only_log_is_empty_input() {
    let ctx = TestContext::new();
    ctx.land_hit_log(&format!("{}\n", fixtures::HEADER));

    let err = ctx.run().await.unwrap_err();

    assert!(matches!(err, Error::EmptyInput(_)), "got {err:?}");
    assert_eq!(err.error_code(), "INPUT_001");
    assert!(ctx.report().is_none());
}

#[tokio::test]
async fn test_zero_byte_log_is_empty_input() {
    let ctx = TestContext::new();
    ctx.land_hit_log("");

    let err = ctx.run().await.unwrap_err();

    assert_eq!(err.error_code(), "INPUT_001");
}

#[tokio::test]
async fn test_missing_column_is_named() {
    let ctx = TestContext::new();
    let header = fixtures::HEADER.replace("\treferrer", "");
    let body = format!("{header}\n1254033280\t2009-09-27 06:34:40\tua\t1.1.1.1\t1\tSalem\tOR\tUS\tHome\thttp://www.esshopzilla.com\t\n");
    ctx.land_hit_log(&body);

    let err = ctx.run().await.unwrap_err();

    match err {
        Error::SchemaMismatch { column } => assert_eq!(column, "referrer"),
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
    assert!(ctx.report().is_none());
}

#[tokio::test]
async fn test_missing_input_object() {
    let ctx = TestContext::new();

    let err = ctx.run().await.unwrap_err();

    assert_eq!(err.error_code(), "STORE_001");
    assert!(ctx.store.keys().is_empty());
}

#[tokio::test]
async fn test_report_write_failure_surfaces() {
    let ctx = TestContext::new();
    ctx.land_hit_log(&fixtures::hit_log());
    ctx.store.set_fail_puts(true);

    let err = ctx.run().await.unwrap_err();

    assert_eq!(err.error_code(), "STORE_001");
    assert!(ctx.report().is_none());
}

#[tokio::test]
async fn test_malformed_rows_degrade_instead_of_failing() {
    let ctx = TestContext::new();
    let lines = vec![
        fixtures::hit_line(100, "1.1.1.1", "", "Home", "not a url", ";;;", "::garbage::"),
        fixtures::hit_line(150, "1.1.1.1", "", "Home", "http://www.esshopzilla.com", "", "http://www.google.com/search?q=ipod"),
        fixtures::hit_line(200, "1.1.1.1", "1", "Order Complete", "https://www.esshopzilla.com/checkout/?a=complete", "Electronics;Ipod;one;190;", "https://www.esshopzilla.com/checkout/?a=confirm"),
    ];
    ctx.land_hit_log(&fixtures::hit_log_from(&lines));

    let output = ctx.run().await.unwrap();

    assert_eq!(output.results.len(), 1);
    assert_eq!(output.results[0].search_keyword, "ipod");
    assert_eq!(output.results[0].revenue, 190.0);
}
