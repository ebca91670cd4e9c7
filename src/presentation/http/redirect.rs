// src/presentation/http/redirect.rs
use axum::{
    http::{StatusCode, Uri, header::LOCATION},
    response::{IntoResponse, Response},
};

pub const LOGIN_URL: &str = "/auth/login/";
pub const NOTES_SUCCESS_URL: &str = "/done/";

/// `302 Found` pointing at the wrapped location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found(pub String);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(LOCATION, self.0)]).into_response()
    }
}

/// Login page URL, with `?next=` when the caller should come back afterwards.
pub fn login_url(next: Option<&Uri>) -> String {
    let Some(target) = next.and_then(Uri::path_and_query) else {
        return LOGIN_URL.to_string();
    };
    let query = serde_urlencoded::to_string([("next", target.as_str())])
        .unwrap_or_default()
        .replace("%2F", "/");
    format!("{LOGIN_URL}?{query}")
}

pub fn news_comments_url(news_id: i64) -> String {
    format!("/news/{news_id}/#comments")
}

/// Accept only local absolute paths as a post-login destination.
pub fn safe_next(next: Option<&str>) -> Option<String> {
    next.filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .map(str::to_string)
}
