//! Visualization tests against the saved objects API.
//!
//! This module tests:
//! - The saved search link kept as `savedSearchId` on 6.x
//! - The saved search link moved into a `search_0` reference on 7.x
//! - Reading the link back through either form

mod common;

use common::*;
use kibana_client::models::visualization::SAVED_SEARCH_REF_NAME;
use kibana_client::{SearchFilter, VisualizationRequestBuilder};
use serde_json::json;

const VIS_STATE: &str = r#"{"title":"China errors","type":"area","params":{},"aggs":[]}"#;

fn china_errors(client: &KibanaClient) -> kibana_client::CreateVisualizationRequest {
    let visualization = client.visualization().unwrap();
    let source = visualization
        .new_search_source()
        .with_index_id("logstash-*")
        .with_filter(SearchFilter::exists("error.code"))
        .build()
        .unwrap();
    VisualizationRequestBuilder::new()
        .with_id("china-errors")
        .with_title("China errors")
        .with_description("This visualization shows errors from china")
        .with_visualization_state(VIS_STATE)
        .with_saved_search_id("china-search")
        .with_search_source(source)
        .build(&visualization.server_version())
        .unwrap()
}

#[tokio::test]
async fn test_create_visualization_v6_links_search_inline() {
    let server = MockServer::start().await;
    let store = SavedObjectStore::new();
    store.mount(&server).await;
    let client = client_for(&server, "6.0.0");

    let created = client
        .visualization()
        .unwrap()
        .create(&china_errors(&client))
        .await
        .unwrap();
    assert_eq!(created.saved_search_id(), Some("china-search"));

    let body = store.last_body();
    assert_eq!(body["attributes"]["savedSearchId"], "china-search");
    assert!(body["attributes"].get("savedSearchRefName").is_none());
    assert_eq!(body["attributes"]["visState"], VIS_STATE);
    assert_eq!(body["attributes"]["uiStateJSON"], "{}");
    assert!(body.get("references").is_none());
}

#[tokio::test]
async fn test_create_visualization_v7_links_search_by_reference() {
    let server = MockServer::start().await;
    let store = SavedObjectStore::new();
    store.mount(&server).await;
    let client = client_for(&server, "7.2.0");
    let visualization = client.visualization().unwrap();

    visualization.create(&china_errors(&client)).await.unwrap();

    let body = store.last_body();
    assert!(body["attributes"].get("savedSearchId").is_none());
    assert_eq!(body["attributes"]["savedSearchRefName"], SAVED_SEARCH_REF_NAME);

    let references = body["references"].as_array().unwrap();
    let search_ref = references
        .iter()
        .find(|r| r["name"] == SAVED_SEARCH_REF_NAME)
        .expect("saved search reference");
    assert_eq!(search_ref, &json!({"name": "search_0", "type": "search", "id": "china-search"}));
    assert!(
        references
            .iter()
            .any(|r| r["name"] == "kibanaSavedObjectMeta.searchSourceJSON.index")
    );

    let fetched = visualization.get_by_id("china-errors").await.unwrap();
    assert_eq!(fetched.saved_search_id(), Some("china-search"));
}

#[tokio::test]
async fn test_visualization_without_search_source_sends_empty_source() {
    let server = MockServer::start().await;
    let store = SavedObjectStore::new();
    store.mount(&server).await;
    let client = client_for(&server, "7.2.0");
    let visualization = client.visualization().unwrap();

    let request = VisualizationRequestBuilder::new()
        .with_title("Markdown")
        .with_visualization_state(r#"{"type":"markdown"}"#)
        .build(&visualization.server_version())
        .unwrap();
    visualization.create(&request).await.unwrap();

    let body = store.last_body();
    assert_eq!(
        body["attributes"]["kibanaSavedObjectMeta"]["searchSourceJSON"],
        "{}"
    );
    assert_eq!(body["references"], json!([]));
}

#[tokio::test]
async fn test_delete_visualization_then_get_is_not_found() {
    let server = MockServer::start().await;
    SavedObjectStore::new().mount(&server).await;
    let client = client_for(&server, "7.2.0");
    let visualization = client.visualization().unwrap();

    visualization.create(&china_errors(&client)).await.unwrap();
    visualization.delete("china-errors").await.unwrap();
    let err = visualization.get_by_id("china-errors").await.unwrap_err();
    assert!(err.is_not_found());
}
