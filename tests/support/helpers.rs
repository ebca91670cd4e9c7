// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use news_notes::{
    application::services::{ApplicationServices, ServiceDependencies},
    infrastructure::{
        database,
        repositories::{
            SqliteArticleRepository, SqliteCommentRepository, SqliteNoteRepository,
            SqliteUserRepository,
        },
        util::DefaultSlugGenerator,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt as _;

use super::mocks::{DummyClock, DummyPasswordHasher, DummyTokenManager};

pub const DEFAULT_HOME_PAGE_SIZE: u32 = 10;

/// Router over a fresh in-memory database, plus the pool for seeding and
/// inspecting rows directly.
pub struct TestApp {
    pub router: Router,
    pub pool: Arc<SqlitePool>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_home_page_size(DEFAULT_HOME_PAGE_SIZE).await
    }

    pub async fn with_home_page_size(news_on_home_page: u32) -> Self {
        // one connection keeps the in-memory database alive for the whole test
        let pool = database::init_pool("sqlite::memory:", 1)
            .await
            .expect("open in-memory database");
        database::run_migrations(&pool).await.expect("run migrations");
        let pool = Arc::new(pool);

        let services = Arc::new(ApplicationServices::new(ServiceDependencies {
            user_repo: Arc::new(SqliteUserRepository::new(Arc::clone(&pool))),
            article_repo: Arc::new(SqliteArticleRepository::new(Arc::clone(&pool))),
            comment_repo: Arc::new(SqliteCommentRepository::new(Arc::clone(&pool))),
            note_repo: Arc::new(SqliteNoteRepository::new(Arc::clone(&pool))),
            password_hasher: Arc::new(DummyPasswordHasher),
            token_manager: Arc::new(DummyTokenManager),
            clock: Arc::new(DummyClock),
            slugger: Arc::new(DefaultSlugGenerator),
            news_on_home_page,
        }));

        let state = HttpState {
            services,
            db_pool: Arc::clone(&pool),
        };

        Self {
            router: build_router(state, false),
            pool,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(request(Method::GET, uri, token, Body::empty())).await
    }

    pub async fn post_form(&self, uri: &str, token: Option<&str>, form: &[(&str, &str)]) -> Response {
        let body = serde_urlencoded::to_string(form).expect("encode form");
        let mut req = request(Method::POST, uri, token, Body::from(body));
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
        self.send(req).await
    }

    /// POST without a body or content type.
    pub async fn post_empty(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(request(Method::POST, uri, token, Body::empty())).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response {
        self.send(request(Method::DELETE, uri, token, Body::empty())).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&*self.pool)
            .await
            .expect("count rows")
    }
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(body).expect("valid request")
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert a `302 Found` and return its `Location`.
pub fn assert_redirect(resp: &Response) -> String {
    assert_eq!(resp.status(), StatusCode::FOUND, "expected redirect");
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_string()
}

/// Assert a JSON `ErrorResponse` with the given status, returning the body.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = body_json(resp).await;
    assert!(json.get("error").and_then(Value::as_str).is_some());
    assert!(
        !json.get("message").and_then(Value::as_str).unwrap_or("").is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
    json
}

/// Messages reported for `field` in a form error body.
pub fn field_messages(json: &Value, field: &str) -> Vec<String> {
    json["fields"][field]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
