// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, news, notes},
    error::{HttpError, HttpResult},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Assemble the application router. `rate_limit` guards the credential
/// endpoints and needs the server to provide connect info.
pub fn build_router(state: HttpState, rate_limit: bool) -> Router {
    let mut auth_routes = Router::new()
        .route("/auth/signup/", post(auth::signup))
        .route("/auth/login/", get(auth::login_form).post(auth::login));
    if rate_limit {
        match rate_limit_layer() {
            Some(layer) => auth_routes = auth_routes.layer(layer),
            None => warn!("rate limiter configuration rejected; auth routes are unthrottled"),
        }
    }

    Router::new()
        .route("/", get(news::index))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .route("/news/", get(news::list_news))
        .route("/news/{id}/", get(news::news_detail).post(news::create_comment))
        .route(
            "/news/{id}/edit",
            get(news::edit_comment_form).post(news::edit_comment),
        )
        .route(
            "/news/{id}/delete",
            post(news::delete_comment).delete(news::delete_comment),
        )
        .route("/notes/", get(notes::list_notes))
        .route("/notes/add", get(notes::add_note_form).post(notes::create_note))
        .route("/done/", get(notes::done))
        .route("/notes/{slug}/", get(notes::note_detail))
        .route(
            "/notes/{slug}/edit",
            get(notes::edit_note_form).post(notes::update_note),
        )
        .route(
            "/notes/{slug}/delete",
            post(notes::delete_note).delete(notes::delete_note),
        )
        .merge(auth_routes)
        .route("/auth/me/", get(auth::profile))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable.", body = StatusResponse),
        (status = 500, description = "Database unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> HttpResult<Json<StatusResponse>> {
    sqlx::query("SELECT 1")
        .execute(&*state.db_pool)
        .await
        .map_err(|err| {
            error!(error = %err, "health check failed");
            HttpError::from_error(crate::application::error::ApplicationError::infrastructure(
                err.to_string(),
            ))
        })?;

    Ok(Json(StatusResponse {
        status: "ok".into(),
    }))
}
