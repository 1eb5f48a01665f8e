#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use chrono::{DateTime, Utc};
use fh_api::{config::Environment, state::ApiState};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build an `ApiState` against the test database.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set so DB-backed tests can
/// skip instead of failing on machines without a Postgres instance.
pub async fn try_test_state() -> Option<ApiState> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping DB-backed test");
        return None;
    };

    let pool = fh_db::create_pool(&database_url, 10)
        .await
        .expect("connect to test database");
    fh_db::ensure_db_and_migrate(&database_url, &pool)
        .await
        .expect("migrate test database");

    Some(ApiState {
        pool,
        environment: Environment::Development,
        bcrypt_cost: 4, // keep password hashing fast in tests
    })
}

/// Unique value for titles/names/emails so tests don't collide with each
/// other or with leftovers from previous runs.
pub fn unique(tag: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_nanos();
    format!("{tag}-{nanos}-{n}")
}

/// Insert a user directly and return its id.
pub async fn seed_user(pool: &PgPool) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO users (name, email, password_hash, created_at)
        VALUES ($1, $2, 'not-a-real-hash', NOW())
        RETURNING id
        "#,
    )
    .bind(unique("user"))
    .bind(format!("{}@example.com", unique("user")))
    .fetch_one(pool)
    .await
    .expect("seed user")
}

/// Insert a course with a unique name and the given category; returns
/// `(id, name)`.
pub async fn seed_course(pool: &PgPool, category: &str) -> (i64, String) {
    let name = unique("course");
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO courses (name, category)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(&name)
    .bind(category)
    .fetch_one(pool)
    .await
    .expect("seed course");
    (id, name)
}

/// Rewrite a topic's creation timestamp; used by the year-window tests.
pub async fn set_topic_created_at(pool: &PgPool, topic_id: i64, created_at: DateTime<Utc>) {
    sqlx::query("UPDATE topics SET created_at = $2 WHERE id = $1")
        .bind(topic_id)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("set topic created_at");
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body: body_bytes.to_vec(),
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a PUT request with JSON body
    pub async fn put_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Captured response with assertion helpers
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "unexpected status; body: {}",
            String::from_utf8_lossy(&self.body)
        );
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not valid JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
