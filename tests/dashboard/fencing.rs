use std::time::Duration;

use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::json;

use biodesk::{Category, DashboardController};

use crate::common::{article_json, client_for};

/// A slow response from a superseded request must never overwrite the result
/// of a newer one, even though nothing is cancelled.
#[tokio::test]
async fn stale_slow_response_is_discarded() {
    let server = MockServer::start();

    let slow_search = server.mock(|when, then| {
        when.method(POST).path("/search");
        then.status(200)
            .header("content-type", "application/json")
            .delay(Duration::from_millis(500))
            .json_body(json!([article_json("stale", "Old search hit", "Early Discovery")]));
    });
    let scoped = server.mock(|when, then| {
        when.method(GET)
            .path("/articles")
            .query_param("category", "Clinical Trials");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([article_json("fresh", "CAR-T results", "Clinical Trials")]));
    });

    let controller = DashboardController::new(client_for(&server));
    controller.set_search_query("CRISPR").await;

    // Kick off the slow search, then supersede it with a category change
    // while it is still in flight.
    let search_task = tokio::spawn({
        let controller = controller.clone();
        async move { controller.submit_search().await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    controller.set_category(Some(Category::ClinicalTrials)).await;

    // The newer request already landed.
    assert_eq!(controller.snapshot().await.articles[0].id, "fresh");

    // Let the stale search settle; it completed server-side but must be
    // fenced out client-side.
    search_task.await.unwrap();
    slow_search.assert();
    scoped.assert();

    let snap = controller.snapshot().await;
    assert_eq!(snap.articles.len(), 1);
    assert_eq!(snap.articles[0].id, "fresh");
    // Every in-flight request has settled, so the flag cannot be stuck.
    assert!(!snap.news_loading);
}
