//! Connection pool behaviour seen through the HTTP surface.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;
use common::TestServer;

#[tokio::test]
async fn test_requests_wait_for_a_free_connection() {
    let server = TestServer::start_with(|config| config.database.pool_size = 1).await;

    let held = server.database.get_conn().unwrap();

    let client = server.client.clone();
    let url = server.url("/students");
    let pending = tokio::spawn(async move { client.get(url).send().await.unwrap().status() });

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!pending.is_finished(), "request should wait for the held connection");

    drop(held);
    assert_eq!(pending.await.unwrap(), StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_id_is_answered_without_a_connection() {
    let server = TestServer::start_with(|config| {
        config.database.pool_size = 1;
        config.database.connection_timeout = Duration::from_millis(200);
    })
    .await;

    let _held = server.database.get_conn().unwrap();

    let resp = server
        .client
        .get(server.url("/students/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exhausted_pool_timeout_is_an_opaque_server_error() {
    let server = TestServer::start_with(|config| {
        config.database.pool_size = 1;
        config.database.connection_timeout = Duration::from_millis(200);
    })
    .await;

    let _held = server.database.get_conn().unwrap();

    let resp = server.client.get(server.url("/students")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"message": "Internal server error", "code": 500}));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_more_requests_than_connections_all_succeed() {
    let server = TestServer::start_with(|config| config.database.pool_size = 2).await;

    let handles: Vec<_> = (0..12)
        .map(|i| {
            let client = server.client.clone();
            let url = server.url("/students");
            tokio::spawn(async move {
                let resp = client
                    .post(url)
                    .json(&json!({
                        "name": format!("Student {i}"),
                        "email": format!("student{i}@example.com"),
                        "age": 18 + i
                    }))
                    .send()
                    .await
                    .unwrap();
                let status = resp.status();
                let body: Value = resp.json().await.unwrap();
                (status, body["studentId"].as_i64())
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let (status, id) = handle.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        ids.push(id.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 12);

    let students: Value = server
        .client
        .get(server.url("/students"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(students.as_array().unwrap().len(), 12);
}
