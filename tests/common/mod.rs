//! Shared harness: seeds the database from `data/test-data.json` and serves the router on an
//! ephemeral port. Requires `DATABASE_URL`; callers skip when `start()` returns `None`.

#![allow(dead_code)]

use nc_news::{storage, transport, NewsService, SeedData};
use sqlx::postgres::PgPoolOptions;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;

// All tests share one database, so they run one at a time.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    server: JoinHandle<()>,
    _guard: MutexGuard<'static, ()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = self.client.get(self.url(path)).send().await.expect("send");
        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    pub async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let response = self
            .client
            .request(method, self.url(path))
            .json(&body)
            .send()
            .await
            .expect("send");
        let status = response.status().as_u16();
        let body = response.json().await.unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    pub async fn delete(&self, path: &str) -> u16 {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("send")
            .status()
            .as_u16()
    }
}

pub async fn start() -> Option<TestServer> {
    dotenv::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set; skipping database-backed test");
            return None;
        }
    };

    let guard = DB_LOCK.lock().await;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("connect to Postgres");
    let data = SeedData::from_json(include_str!("../../data/test-data.json")).expect("test data");
    storage::seed(&pool, &data).await.expect("seed");

    let router =
        transport::http::create_router(transport::http::AppState::new(NewsService::from_pool(pool)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("client");

    Some(TestServer {
        base_url: format!("http://{}", addr),
        client,
        server,
        _guard: guard,
    })
}

/// Reads a string-typed count column (`comment_count`, `result`, `total_results`).
pub fn count(row: &serde_json::Value, field: &str) -> i64 {
    row[field]
        .as_str()
        .unwrap_or_else(|| panic!("{} should be a string: {}", field, row))
        .parse()
        .expect("numeric string")
}
