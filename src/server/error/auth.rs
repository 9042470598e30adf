use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The `x-admin-key` header was not sent with an API request.
    #[error("Request is missing the admin key header")]
    MissingAdminKey,

    /// The `x-admin-key` header does not match the configured shared secret.
    #[error("Request carried an invalid admin key")]
    InvalidAdminKey,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized with the same body so callers cannot tell
/// a missing key from a wrong one.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
