use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::json;

use biodesk::{StockView, StocksBuilder, stocks};

use crate::common::{client_for, stock_json};

#[tokio::test]
async fn each_view_maps_to_its_own_endpoint() {
    let server = MockServer::start();

    let all = server.mock(|when, then| {
        when.method(GET).path("/stocks");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([stock_json("MRNA", 142.10, -1.05), stock_json("CRSP", 61.33, 2.41)]));
    });
    let gainers = server.mock(|when, then| {
        when.method(GET).path("/stocks/gainers");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([stock_json("CRSP", 61.33, 2.41)]));
    });
    let losers = server.mock(|when, then| {
        when.method(GET).path("/stocks/losers");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([stock_json("MRNA", 142.10, -1.05)]));
    });

    let client = client_for(&server);

    let listed = StocksBuilder::new(&client).fetch().await.unwrap();
    assert_eq!(listed.len(), 2);

    let up = StocksBuilder::new(&client)
        .view(StockView::Gainers)
        .fetch()
        .await
        .unwrap();
    assert_eq!(up.len(), 1);
    assert_eq!(up[0].symbol, "CRSP");

    let down = StocksBuilder::new(&client)
        .view(StockView::Losers)
        .fetch()
        .await
        .unwrap();
    assert_eq!(down.len(), 1);
    assert_eq!(down[0].symbol, "MRNA");

    all.assert();
    gainers.assert();
    losers.assert();
}

#[tokio::test]
async fn tolerates_missing_optional_fields() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/stocks");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([{"symbol": "VRTX"}]));
    });

    let client = client_for(&server);
    let listed = StocksBuilder::new(&client).fetch().await.unwrap();

    assert_eq!(listed[0].symbol, "VRTX");
    assert_eq!(listed[0].current_price, 0.0);
    assert!(listed[0].market_cap.is_none());
}

#[tokio::test]
async fn refresh_posts_to_stock_endpoint() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/stocks/refresh");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"message": "Refreshed 12 quotes"}));
    });

    let client = client_for(&server);
    let outcome = stocks::refresh(&client).await.unwrap();

    mock.assert();
    assert_eq!(outcome.message.as_deref(), Some("Refreshed 12 quotes"));
    assert!(outcome.total_fetched.is_none());
}
