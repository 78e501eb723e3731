//! Concurrent API integration tests
//!
//! Shorten and resolve calls share nothing but the store, so concurrent
//! requests must neither block each other nor fail.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
};
use linkhash::config::*;
use linkhash::create_app;
use linkhash::storage::{MappingStore, SqliteStore};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Helper to create test storage
async fn create_test_storage() -> Arc<dyn MappingStore> {
    let store = SqliteStore::new("sqlite::memory:", "short_urls", 1, Duration::from_secs(30))
        .await
        .unwrap();
    store.init().await.unwrap();
    Arc::new(store)
}

/// Helper to create test config
fn create_test_config() -> Config {
    Config {
        store: StoreConfig {
            backend: StoreBackend::Sqlite,
            url: "sqlite::memory:".to_string(),
            table_name: "short_urls".to_string(),
            max_connections: 1,
            connect_timeout_secs: 30,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        base_url: "http://localhost:3000".to_string(),
        short_id: ShortIdConfig::default(),
    }
}

fn shorten_request(long_url: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/shorten")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "long_url": long_url }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_concurrent_shortening_of_same_url() {
    // Every request for the same URL succeeds with the same short URL
    let store = create_test_storage().await;
    let app = create_app(store.clone(), &create_test_config()).unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let app_clone = app.clone();
        handles.push(tokio::spawn(async move {
            app_clone
                .oneshot(shorten_request("https://example.com/page"))
                .await
                .unwrap()
        }));
    }

    let mut short_urls = HashSet::new();
    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        short_urls.insert(body["short_url"].as_str().unwrap().to_string());
    }

    assert_eq!(short_urls.len(), 1);
    assert!(short_urls.contains("http://localhost:3000/fb37c0"));

    let mapping = store.get("fb37c0").await.unwrap().unwrap();
    assert_eq!(mapping.long_url, "https://example.com/page");
}

#[tokio::test]
async fn test_concurrent_colliding_writes_leave_one_winner() {
    // Racing writes to one id: last write wins, and it is one of the two
    let store = create_test_storage().await;
    let app = create_app(store.clone(), &create_test_config()).unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let app_clone = app.clone();
        let long_url = if i % 2 == 0 {
            "https://example.com/item/123"
        } else {
            "https://example.com/item/3806"
        };
        handles.push(tokio::spawn(async move {
            app_clone.oneshot(shorten_request(long_url)).await.unwrap()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().status(), StatusCode::OK);
    }

    let mapping = store.get("a8bcca").await.unwrap().unwrap();
    assert!(
        mapping.long_url == "https://example.com/item/123"
            || mapping.long_url == "https://example.com/item/3806",
        "unexpected winner: {}",
        mapping.long_url
    );
}

#[tokio::test]
async fn test_concurrent_shorten_and_resolve() {
    let store = create_test_storage().await;
    let app = create_app(store.clone(), &create_test_config()).unwrap();

    let mut shorten_handles = vec![];
    for i in 0..20 {
        let app_clone = app.clone();
        shorten_handles.push(tokio::spawn(async move {
            let long_url = format!("https://example.com/article/{i}");
            let response = app_clone
                .oneshot(shorten_request(&long_url))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            let short_id = body["short_url"]
                .as_str()
                .unwrap()
                .rsplit('/')
                .next()
                .unwrap()
                .to_string();
            (long_url, short_id)
        }));
    }

    let mut pairs = vec![];
    for handle in shorten_handles {
        pairs.push(handle.await.unwrap());
    }

    let mut resolve_handles = vec![];
    for (long_url, short_id) in pairs {
        let app_clone = app.clone();
        resolve_handles.push(tokio::spawn(async move {
            let request = Request::builder()
                .uri(format!("/{short_id}"))
                .body(Body::empty())
                .unwrap();
            let response = app_clone.oneshot(request).await.unwrap();
            (long_url, response)
        }));
    }

    for handle in resolve_handles {
        let (long_url, response) = handle.await.unwrap();
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), &long_url);
    }
}
