// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::news::{CreateCommentCommand, DeleteCommentCommand, EditCommentCommand},
    dto::{ArticleDto, CommentEditDto, NewsDetailDto},
    queries::news::{GetCommentForEditQuery, GetNewsDetailQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    Authenticated, FormBody, MaybeAuthenticated, RecordId, read_form, read_owned_form,
};
use crate::presentation::http::redirect::{Found, news_comments_url};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::OriginalUri};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentForm {
    #[serde(default)]
    pub text: String,
}

pub async fn index() -> Found {
    Found("/news/".into())
}

#[utoipa::path(
    get,
    path = "/news/",
    responses(
        (status = 200, description = "Most recent news, newest first.", body = [ArticleDto])
    ),
    security([]),
    tag = "News"
)]
pub async fn list_news(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .news_queries
        .list_home()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news/{id}/",
    params(("id" = i64, Path, description = "News identifier")),
    responses(
        (status = 200, description = "News with its comments; `form` only for authenticated callers.", body = NewsDetailDto),
        (status = 401, description = "Invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown news.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn news_detail(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    RecordId(id): RecordId,
) -> HttpResult<Json<NewsDetailDto>> {
    state
        .services
        .news_queries
        .get_news_detail(actor.user(), GetNewsDetailQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/news/{id}/",
    params(("id" = i64, Path, description = "News identifier")),
    request_body(content = CommentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Comment created, or login required."),
        (status = 400, description = "Invalid comment.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown news.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    OriginalUri(uri): OriginalUri,
    RecordId(id): RecordId,
    body: FormBody<CommentForm>,
) -> HttpResult<Found> {
    let form = read_form(body)?;
    let command = CreateCommentCommand {
        news_id: id,
        text: form.text,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(Some(&user), command)
        .await
        .into_http_at(&uri)?;

    Ok(Found(news_comments_url(comment.news_id)))
}

#[utoipa::path(
    get,
    path = "/news/{id}/edit",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 200, description = "Own comment with a pre-filled form.", body = CommentEditDto),
        (status = 302, description = "Login required."),
        (status = 404, description = "Missing or foreign comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn edit_comment_form(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    OriginalUri(uri): OriginalUri,
    RecordId(id): RecordId,
) -> HttpResult<Json<CommentEditDto>> {
    state
        .services
        .news_queries
        .get_comment_for_edit(actor.user(), GetCommentForEditQuery { id })
        .await
        .into_http_at(&uri)
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/news/{id}/edit",
    params(("id" = i64, Path, description = "Comment identifier")),
    request_body(content = CommentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Comment updated, or login required."),
        (status = 400, description = "Invalid comment.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Missing or foreign comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn edit_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    OriginalUri(uri): OriginalUri,
    RecordId(id): RecordId,
    body: FormBody<CommentForm>,
) -> HttpResult<Found> {
    let owned = state
        .services
        .news_queries
        .get_comment_for_edit(Some(&user), GetCommentForEditQuery { id });
    let form = read_owned_form(body, owned, &uri).await?;

    let command = EditCommentCommand {
        id,
        text: form.text,
    };

    let comment = state
        .services
        .comment_commands
        .edit_comment(Some(&user), command)
        .await
        .into_http_at(&uri)?;

    Ok(Found(news_comments_url(comment.news_id)))
}

#[utoipa::path(
    delete,
    path = "/news/{id}/delete",
    params(("id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 302, description = "Comment deleted, or login required."),
        (status = 404, description = "Missing or foreign comment.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    OriginalUri(uri): OriginalUri,
    RecordId(id): RecordId,
) -> HttpResult<Found> {
    let news_id = state
        .services
        .comment_commands
        .delete_comment(Some(&user), DeleteCommentCommand { id })
        .await
        .into_http_at(&uri)?;

    Ok(Found(news_comments_url(news_id)))
}
