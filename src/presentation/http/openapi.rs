// src/presentation/http/openapi.rs
use axum::Json;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::news_detail,
        crate::presentation::http::controllers::news::create_comment,
        crate::presentation::http::controllers::news::edit_comment_form,
        crate::presentation::http::controllers::news::edit_comment,
        crate::presentation::http::controllers::news::delete_comment,
        crate::presentation::http::controllers::notes::list_notes,
        crate::presentation::http::controllers::notes::add_note_form,
        crate::presentation::http::controllers::notes::create_note,
        crate::presentation::http::controllers::notes::done,
        crate::presentation::http::controllers::notes::note_detail,
        crate::presentation::http::controllers::notes::edit_note_form,
        crate::presentation::http::controllers::notes::update_note,
        crate::presentation::http::controllers::notes::delete_note,
        crate::presentation::http::controllers::auth::signup,
        crate::presentation::http::controllers::auth::login_form,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::profile,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::news::CommentForm,
            crate::presentation::http::controllers::notes::NoteForm,
            crate::presentation::http::controllers::auth::CredentialsForm,
            crate::presentation::http::controllers::auth::LoginFormResponse,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::NewsDetailDto,
            crate::application::dto::CommentEditDto,
            crate::application::dto::NoteDto,
            crate::application::dto::NoteEditDto,
            crate::application::dto::FormDto,
            crate::application::dto::FormFieldDto,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto
        )
    ),
    tags(
        (name = "News", description = "News feed and comments"),
        (name = "Notes", description = "Personal notes"),
        (name = "Auth", description = "Sign-up, login and identity"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "News & Notes API",
        description = "News with comments and personal notes",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (or the default path),
/// returning the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
