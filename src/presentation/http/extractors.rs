// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    presentation::http::state::HttpState,
};
use axum::{
    Form,
    extract::{FromRequestParts, OriginalUri, Path, rejection::FormRejection},
    http::{Uri, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::{HttpError, HttpResult, IntoHttpResult};

/// Form body whose rejection is reported by the handler, after access checks.
pub type FormBody<T> = Result<Form<T>, FormRejection>;

/// Numeric `{id}` path segment. Anything that is not an `i64` cannot name a
/// record and is answered with `404`.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i64);

/// Requires a valid bearer token; anonymous callers are sent to the login page.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Anonymous when no `Authorization` header is sent. A header that does not
/// verify is still rejected with `401`.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

fn request_uri(parts: &Parts) -> Uri {
    parts
        .extensions
        .get::<OriginalUri>()
        .map_or_else(|| parts.uri.clone(), |original| original.0.clone())
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure("application state missing"))
        })?;

        let Some(header) = parts.headers.typed_get::<Authorization<Bearer>>() else {
            return Ok(Self(None));
        };

        let user = app_state
            .services
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(Some(user)))
    }
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let MaybeAuthenticated(user) = MaybeAuthenticated::from_request_parts(parts, state).await?;
        user.map(Self)
            .ok_or_else(|| HttpError::login_required(Some(&request_uri(parts))))
    }
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let not_found = || HttpError::from_error(ApplicationError::not_found("record not found"));
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found())?;
        raw.parse().map(Self).map_err(|_| not_found())
    }
}

fn rejected_form(rejection: &FormRejection) -> HttpError {
    HttpError::from_error(ApplicationError::validation(rejection.body_text()))
}

/// Unwrap a form body for a create endpoint whose caller is already known.
pub fn read_form<T>(body: FormBody<T>) -> HttpResult<T> {
    body.map(|Form(form)| form).map_err(|rejection| rejected_form(&rejection))
}

/// Unwrap a form body for an owner-only endpoint. When the body is unusable,
/// `access` runs first so a foreign or missing record still answers `404`.
pub async fn read_owned_form<T, R>(
    body: FormBody<T>,
    access: impl Future<Output = ApplicationResult<R>>,
    uri: &Uri,
) -> HttpResult<T> {
    match body {
        Ok(Form(form)) => Ok(form),
        Err(rejection) => {
            access.await.into_http_at(uri)?;
            Err(rejected_form(&rejection))
        }
    }
}

