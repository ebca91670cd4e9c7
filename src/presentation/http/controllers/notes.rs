// src/presentation/http/controllers/notes.rs
use crate::application::{
    commands::notes::{CreateNoteCommand, DeleteNoteCommand, UpdateNoteCommand},
    dto::{FormDto, NoteDto, NoteEditDto, notes::note_form},
    queries::notes::GetNoteQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    Authenticated, FormBody, MaybeAuthenticated, read_form, read_owned_form,
};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::redirect::{Found, NOTES_SUCCESS_URL};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{OriginalUri, Path},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    /// Leave blank to derive it from the title.
    #[serde(default)]
    pub slug: Option<String>,
}

#[utoipa::path(
    get,
    path = "/notes/",
    responses(
        (status = 200, description = "The caller's notes in creation order.", body = [NoteDto]),
        (status = 302, description = "Login required.")
    ),
    tag = "Notes"
)]
pub async fn list_notes(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    OriginalUri(uri): OriginalUri,
) -> HttpResult<Json<Vec<NoteDto>>> {
    state
        .services
        .note_queries
        .list_notes(actor.user())
        .await
        .into_http_at(&uri)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/notes/add",
    responses(
        (status = 200, description = "Empty note form.", body = FormDto),
        (status = 302, description = "Login required.")
    ),
    tag = "Notes"
)]
pub async fn add_note_form(Authenticated(_user): Authenticated) -> Json<FormDto> {
    Json(note_form(None))
}

#[utoipa::path(
    post,
    path = "/notes/add",
    request_body(content = NoteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Note created, or login required."),
        (status = 400, description = "Invalid note.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Derived slug collides with an existing note.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn create_note(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    OriginalUri(uri): OriginalUri,
    body: FormBody<NoteForm>,
) -> HttpResult<Found> {
    let form = read_form(body)?;
    let command = CreateNoteCommand {
        title: form.title,
        text: form.text,
        slug: form.slug,
    };

    state
        .services
        .note_commands
        .create_note(Some(&user), command)
        .await
        .into_http_at(&uri)?;

    Ok(Found(NOTES_SUCCESS_URL.into()))
}

#[utoipa::path(
    get,
    path = "/done/",
    responses(
        (status = 200, description = "A note operation succeeded.", body = StatusResponse),
        (status = 302, description = "Login required.")
    ),
    tag = "Notes"
)]
pub async fn done(Authenticated(_user): Authenticated) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "done".into(),
    })
}

#[utoipa::path(
    get,
    path = "/notes/{slug}/",
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "Own note.", body = NoteDto),
        (status = 302, description = "Login required."),
        (status = 404, description = "Missing or foreign note.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn note_detail(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
) -> HttpResult<Json<NoteDto>> {
    state
        .services
        .note_queries
        .get_note(actor.user(), GetNoteQuery { slug })
        .await
        .into_http_at(&uri)
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/notes/{slug}/edit",
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 200, description = "Own note with a pre-filled form.", body = NoteEditDto),
        (status = 302, description = "Login required."),
        (status = 404, description = "Missing or foreign note.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn edit_note_form(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
) -> HttpResult<Json<NoteEditDto>> {
    state
        .services
        .note_queries
        .get_note_for_edit(actor.user(), GetNoteQuery { slug })
        .await
        .into_http_at(&uri)
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/notes/{slug}/edit",
    params(("slug" = String, Path, description = "Note slug")),
    request_body(content = NoteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Note updated, or login required."),
        (status = 400, description = "Invalid note.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Missing or foreign note.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn update_note(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
    body: FormBody<NoteForm>,
) -> HttpResult<Found> {
    let owned = state
        .services
        .note_queries
        .get_note(Some(&user), GetNoteQuery { slug: slug.clone() });
    let form = read_owned_form(body, owned, &uri).await?;

    let command = UpdateNoteCommand {
        current_slug: slug,
        title: form.title,
        text: form.text,
        slug: form.slug,
    };

    state
        .services
        .note_commands
        .update_note(Some(&user), command)
        .await
        .into_http_at(&uri)?;

    Ok(Found(NOTES_SUCCESS_URL.into()))
}

#[utoipa::path(
    delete,
    path = "/notes/{slug}/delete",
    params(("slug" = String, Path, description = "Note slug")),
    responses(
        (status = 302, description = "Note deleted, or login required."),
        (status = 404, description = "Missing or foreign note.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
) -> HttpResult<Found> {
    state
        .services
        .note_commands
        .delete_note(Some(&user), DeleteNoteCommand { slug })
        .await
        .into_http_at(&uri)?;

    Ok(Found(NOTES_SUCCESS_URL.into()))
}
