use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::json;

use biodesk::{Category, preferences};

use crate::common::client_for;

#[tokio::test]
async fn save_sends_user_id_and_category_names() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/preferences")
            .query_param("user_id", "u-42")
            .json_body(json!(["Clinical Trials", "Drug Modalities"]));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "id": "p-1",
                "user_id": "u-42",
                "preferred_categories": ["Clinical Trials", "Drug Modalities"],
                "created_at": "2025-09-12T08:30:00Z"
            }));
    });

    let client = client_for(&server);
    let saved = preferences::save(
        &client,
        "u-42",
        &[Category::ClinicalTrials, Category::DrugModalities],
    )
    .await
    .unwrap();

    mock.assert();
    assert_eq!(saved.user_id, "u-42");
    assert_eq!(
        saved.preferred_categories,
        vec![Category::ClinicalTrials, Category::DrugModalities]
    );
}

#[tokio::test]
async fn get_returns_default_taxonomy_for_unknown_user() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/preferences/new-user");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "id": "p-2",
                "user_id": "new-user",
                "preferred_categories": [
                    "Academic Research",
                    "Industry Updates",
                    "Early Discovery",
                    "Clinical Trials",
                    "Drug Modalities",
                    "Healthcare & Policy"
                ]
            }));
    });

    let client = client_for(&server);
    let prefs = preferences::get(&client, "new-user").await.unwrap();

    mock.assert();
    assert_eq!(prefs.preferred_categories, Category::ALL.to_vec());
    assert!(prefs.created_at.is_none());
}
