use crate::{
    application::{ApplicationResult, error::ApplicationError},
    domain::validation::FieldErrors,
};
use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::error;
use utoipa::ToSchema;

use super::redirect::{Found, login_url};

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    fields: Option<FieldErrors>,
    location: Option<String>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::InvalidFields(fields) => Self {
                fields: Some(fields),
                ..Self::new(StatusCode::BAD_REQUEST, "form contains invalid fields".into())
            },
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::AuthenticationRequired => Self::login_required(None),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => {
                error!(error = %msg, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error".into())
            }
        }
    }

    /// Like [`HttpError::from_error`], but a login redirect carries `uri` as `next`.
    pub fn from_error_at(err: ApplicationError, uri: &Uri) -> Self {
        match err {
            ApplicationError::AuthenticationRequired => Self::login_required(Some(uri)),
            other => Self::from_error(other),
        }
    }

    pub fn login_required(next: Option<&Uri>) -> Self {
        Self {
            location: Some(login_url(next)),
            ..Self::new(StatusCode::FOUND, "authentication required".into())
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            fields: None,
            location: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if let Some(location) = self.location {
            return Found(location).into_response();
        }

        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            fields: self.fields.map(FieldErrors::into_inner),
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Field name to validation messages, present for form errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;

    /// Map errors for a request to `uri`, so a missing login sends the caller
    /// back there afterwards.
    fn into_http_at(self, uri: &Uri) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }

    fn into_http_at(self, uri: &Uri) -> HttpResult<T> {
        self.map_err(|err| HttpError::from_error_at(err, uri))
    }
}
