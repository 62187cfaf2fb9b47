use httpmock::Method::POST;
use httpmock::MockServer;
use serde_json::json;

use biodesk::{Category, SearchBuilder, search::search};

use crate::common::{article_json, client_for};

#[tokio::test]
async fn search_posts_query_with_null_category_and_default_limit() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/search")
            .json_body(json!({"query": "CAR-T", "category": null, "limit": 20}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([article_json(
                "a1",
                "CAR-T Phase II results",
                "Clinical Trials"
            )]));
    });

    let client = client_for(&server);
    let results = search(&client, "CAR-T").await.unwrap();

    mock.assert();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "a1");
}

#[tokio::test]
async fn search_builder_carries_category_and_limit() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/search")
            .json_body(json!({"query": "CRISPR", "category": "Drug Modalities", "limit": 10}));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([]));
    });

    let client = client_for(&server);
    let results = SearchBuilder::new(&client, "CRISPR")
        .category(Category::DrugModalities)
        .limit(10)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(results.is_empty());
}
