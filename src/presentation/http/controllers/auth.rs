// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, FormDto, FormFieldDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::redirect::safe_next;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Query,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

const DEFAULT_NEXT: &str = "/";

#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct NextParams {
    /// Local path to continue to after logging in.
    pub next: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginFormResponse {
    pub form: FormDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
    pub next: String,
}

fn credentials_form() -> FormDto {
    FormDto::new(vec![
        FormFieldDto::required("username"),
        FormFieldDto::required("password"),
    ])
}

#[utoipa::path(
    post,
    path = "/auth/signup/",
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "User created.", body = UserDto),
        (status = 400, description = "Invalid username or password.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    security([]),
    tag = "Auth"
)]
pub async fn signup(
    Extension(state): Extension<HttpState>,
    Form(form): Form<CredentialsForm>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        username: form.username,
        password: form.password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/auth/login/",
    params(NextParams),
    responses(
        (status = 200, description = "Login form description.", body = LoginFormResponse)
    ),
    security([]),
    tag = "Auth"
)]
pub async fn login_form(Query(params): Query<NextParams>) -> Json<LoginFormResponse> {
    Json(LoginFormResponse {
        form: credentials_form(),
        next: safe_next(params.next.as_deref()),
    })
}

#[utoipa::path(
    post,
    path = "/auth/login/",
    params(NextParams),
    request_body(content = CredentialsForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Bearer token issued.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many requests.")
    ),
    security([]),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NextParams>,
    Form(form): Form<CredentialsForm>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        username: form.username,
        password: form.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
        next: safe_next(params.next.as_deref()).unwrap_or_else(|| DEFAULT_NEXT.into()),
    }))
}

#[utoipa::path(
    get,
    path = "/auth/me/",
    responses(
        (status = 200, description = "The authenticated user.", body = UserDto),
        (status = 302, description = "Login required."),
        (status = 401, description = "Invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}
