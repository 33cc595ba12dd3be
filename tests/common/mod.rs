//! Shared utilities for the HTTP integration tests.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use students_api::api::{routes, server, AppContext};
use students_api::config::AppConfig;
use students_api::db::Database;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A running API server backed by a throwaway SQLite file.
pub struct TestServer {
    pub base_url: String,
    pub database: Database,
    pub client: reqwest::Client,
    _dir: TempDir,
}

impl TestServer {
    /// Starts a server with default settings and an unreachable remote function.
    pub async fn start() -> Self {
        Self::start_with(|_| {}).await
    }

    /// Starts a server after letting the caller adjust the configuration.
    pub async fn start_with<F>(adjust: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.database.url = dir.path().join("students.db").to_string_lossy().into_owned();
        config.database.pool_size = 4;
        config.remote.function_url = format!("http://{}/api/say", unused_addr().await);
        adjust(&mut config);

        let context: AppContext = server::build_context(&config).unwrap();
        let database = context.database.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, routes::app(context)).await.unwrap();
        });

        TestServer {
            base_url: format!("http://{}", addr),
            database,
            client: reqwest::Client::new(),
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Returns an address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// A fake remote function that records request lines and answers with a fixed reply.
pub struct MockRemote {
    pub url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockRemote {
    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Start a mock remote function returning `status` with a JSON `body`.
pub async fn start_mock_remote(status: u16, body: &'static str) -> MockRemote {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let seen = seen.clone();
            tokio::spawn(async move {
                let mut head = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let n = socket.read(&mut chunk).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&chunk[..n]);
                    if head.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                if let Some(line) = String::from_utf8_lossy(&head).lines().next() {
                    seen.lock().unwrap().push(line.to_string());
                }

                let status_text = match status {
                    200 => "200 OK",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    MockRemote {
        url: format!("http://{}/api/say", addr),
        requests,
    }
}
