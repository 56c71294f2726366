//! Renders crate errors as plain-text HTTP responses.
//!
//! Every error maps to `500 Internal Server Error` with a body of the form
//! `{kind}: {message}`, for example `ConstraintViolation: UNIQUE constraint failed: customers.email`.

use crate::errors::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl Error {
    /// HTTP status used when this error reaches a handler boundary.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Plain-text response body naming the error kind.
    #[must_use]
    pub fn response_message(&self) -> String {
        format!("{}: {self}", self.kind())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.response_message();
        tracing::error!(kind = self.kind(), status = status.as_u16(), "{}", self);
        (status, body).into_response()
    }
}
