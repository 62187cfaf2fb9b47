use chrono::{TimeZone, Utc};
use httpmock::Method::GET;
use httpmock::MockServer;
use serde_json::json;

use biodesk::status;

use crate::common::{client_for, stock_json};

#[tokio::test]
async fn status_decodes_counters_and_top_movers() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "total_articles": 128,
                "total_stocks": 12,
                "last_news_update": "2025-09-12T08:30:00Z",
                "last_stock_update": "2025-09-12T09:00:00Z",
                "articles_by_category": {"Clinical Trials": 41, "Drug Modalities": 17},
                "top_gainers": [stock_json("CRSP", 61.33, 2.41)],
                "top_losers": [stock_json("MRNA", 142.10, -1.05)]
            }));
    });

    let client = client_for(&server);
    let s = status::get(&client).await.unwrap();

    mock.assert();
    assert_eq!(s.total_articles, 128);
    assert_eq!(s.total_stocks, 12);
    assert_eq!(
        s.last_news_update,
        Some(Utc.with_ymd_and_hms(2025, 9, 12, 8, 30, 0).unwrap())
    );
    assert_eq!(s.articles_by_category.get("Clinical Trials"), Some(&41));
    assert_eq!(s.top_gainers[0].symbol, "CRSP");
    assert_eq!(s.top_losers[0].symbol, "MRNA");
}

#[tokio::test]
async fn status_tolerates_sparse_payloads() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"total_articles": 3}));
    });

    let client = client_for(&server);
    let s = status::get(&client).await.unwrap();

    assert_eq!(s.total_articles, 3);
    assert!(s.last_news_update.is_none());
    assert!(s.top_gainers.is_empty());
}

#[tokio::test]
async fn api_info_reads_root_endpoint() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"message": "Biodesk News API", "version": "1.0.0"}));
    });

    let client = client_for(&server);
    let info = status::api_info(&client).await.unwrap();

    mock.assert();
    assert_eq!(info.version, "1.0.0");
}
