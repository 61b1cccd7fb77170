//! Tests for the Raindrop client and collection resolution.

use super::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(url: &str) -> RaindropConfig {
    RaindropConfig {
        url: url.to_string(),
        token: "test-token".to_string(),
        public: "Public".to_string(),
        private: "Private".to_string(),
    }
}

fn collection(id: i64, title: &str) -> Collection {
    Collection {
        id,
        title: title.to_string(),
    }
}

fn raindrop(link: &str, collection: Option<CollectionRef>) -> Raindrop {
    Raindrop {
        link: link.to_string(),
        title: "Example".to_string(),
        note: "A note".to_string(),
        created: "2020-05-04T10:00:00Z".to_string(),
        last_update: "2020-05-04T10:00:00Z".to_string(),
        tags: vec!["rust".to_string()],
        collection,
    }
}

#[test]
fn test_resolve_both_collections() {
    let collections = vec![
        collection(1, "Public"),
        collection(2, "Private"),
        collection(3, "Other"),
    ];

    let (public, private) = resolve_collections(&collections, "Public", "Private");

    assert_eq!(public, Some(1));
    assert_eq!(private, Some(2));
}

#[test]
fn test_resolve_missing_collection() {
    let collections = vec![collection(1, "Public")];

    let (public, private) = resolve_collections(&collections, "Public", "Private");

    assert_eq!(public, Some(1));
    assert_eq!(private, None);
}

#[test]
fn test_resolve_empty_listing() {
    let (public, private) = resolve_collections(&[], "Public", "Private");

    assert_eq!(public, None);
    assert_eq!(private, None);
}

#[test]
fn test_resolve_duplicate_title_last_wins() {
    let collections = vec![collection(1, "Public"), collection(9, "Public")];

    let (public, _) = resolve_collections(&collections, "Public", "Private");

    assert_eq!(public, Some(9));
}

#[test]
fn test_resolve_same_name_for_both_targets() {
    let collections = vec![collection(5, "Bookmarks")];

    let (public, private) = resolve_collections(&collections, "Bookmarks", "Bookmarks");

    assert_eq!(public, Some(5));
    assert_eq!(private, Some(5));
}

#[test]
fn test_raindrop_serializes_collection_ref() {
    let record = raindrop("https://example.com/", Some(CollectionRef { id: 42 }));

    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["collection"]["$id"], 42);
    assert_eq!(value["lastUpdate"], "2020-05-04T10:00:00Z");
    assert!(value.get("last_update").is_none());
}

#[test]
fn test_raindrop_without_collection_omits_field() {
    let record = raindrop("https://example.com/", None);

    let value = serde_json::to_value(&record).unwrap();

    assert!(value.get("collection").is_none());
}

#[test]
fn test_collections_response_ignores_extra_fields() {
    let json = r#"{
        "result": true,
        "items": [
            {"_id": 1, "title": "Public", "count": 120, "public": true}
        ]
    }"#;

    let listing: CollectionsResponse = serde_json::from_str(json).unwrap();

    assert!(listing.result);
    assert_eq!(listing.items.len(), 1);
    assert_eq!(listing.items[0].id, 1);
}

#[test]
fn test_collections_response_defaults_missing_items() {
    let listing: CollectionsResponse = serde_json::from_str(r#"{"result": false}"#).unwrap();

    assert!(!listing.result);
    assert!(listing.items.is_empty());
}

#[tokio::test]
async fn test_collections_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": true,
            "items": [{"_id": 1, "title": "Public"}]
        })))
        .mount(&server)
        .await;

    let client = RaindropClient::new(test_config(&server.uri()));
    let collections = client.collections().await.unwrap();

    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].title, "Public");
}

#[tokio::test]
async fn test_collections_result_false_is_empty_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": false})))
        .mount(&server)
        .await;

    let client = RaindropClient::new(test_config(&server.uri()));
    let collections = client.collections().await.unwrap();

    assert!(collections.is_empty());
}

#[tokio::test]
async fn test_collections_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = RaindropClient::new(test_config(&server.uri()));
    let result = client.collections().await;

    assert!(matches!(result, Err(Error::CollectionFetch(_))));
}

#[tokio::test]
async fn test_collections_bad_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let client = RaindropClient::new(test_config(&server.uri()));
    let result = client.collections().await;

    assert!(matches!(result, Err(Error::Authentication(_))));
}

#[tokio::test]
async fn test_find_collections_resolves_names() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": true,
            "items": [
                {"_id": 11, "title": "Public"},
                {"_id": 22, "title": "Private"}
            ]
        })))
        .mount(&server)
        .await;

    let client = RaindropClient::new(test_config(&server.uri()));
    let (public, private) = client.find_collections().await.unwrap();

    assert_eq!(public, Some(11));
    assert_eq!(private, Some(22));
}

#[tokio::test]
async fn test_create_raindrops_posts_items() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/raindrops"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
        .mount(&server)
        .await;

    let client = RaindropClient::new(test_config(&server.uri()));
    let batch = vec![
        raindrop("https://example.com/a", Some(CollectionRef { id: 1 })),
        raindrop("https://example.com/b", None),
    ];
    client.create_raindrops(&batch).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["link"], "https://example.com/a");
    assert_eq!(body["items"][0]["collection"]["$id"], 1);
    assert!(body["items"][1].get("collection").is_none());
}

#[tokio::test]
async fn test_create_raindrops_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/raindrops"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = RaindropClient::new(test_config(&server.uri()));
    let batch = vec![raindrop("https://example.com/", None)];
    let result = client.create_raindrops(&batch).await;

    assert!(matches!(result, Err(Error::Upload(_))));
}
