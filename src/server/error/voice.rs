use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::platform::PlatformError};

/// Errors raised while reading voice channels or moving members.
///
/// `InvalidChannel`, `UnconfiguredChannel`, `EmptySelection` and `UpstreamUnavailable`
/// abort a whole operation before any member is processed. The member-level variants
/// (`MemberNotFound`, `Refused`, `Timeout`) are converted into that member's
/// `error` outcome by the batch orchestrator and never abort a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    /// Channel does not exist in the guild or is not voice-capable.
    #[error("Channel {0} is not a valid voice channel")]
    InvalidChannel(String),

    /// Requested channel is not one of the two configured endpoints.
    ///
    /// Raised before any call to the platform.
    #[error("Target must be GENERAL_VC_ID or OTHER_TEAM_VC_ID, got {0}")]
    UnconfiguredChannel(String),

    /// A move was requested with no member ids.
    #[error("userIds[] must contain at least one member id")]
    EmptySelection,

    /// Member id does not belong to any member of the guild.
    #[error("Member {0} was not found in the guild")]
    MemberNotFound(String),

    /// The platform refused a lookup or a relocation. Display is the platform's reason,
    /// verbatim.
    #[error("{0}")]
    Refused(String),

    /// The platform cannot be reached at all.
    #[error("Discord is unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A single platform call exceeded the configured remote timeout.
    #[error("Discord did not respond within {0:?}")]
    Timeout(Duration),
}

impl From<PlatformError> for VoiceError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::Rejected(reason) => VoiceError::Refused(reason),
            PlatformError::Unavailable(reason) => VoiceError::UpstreamUnavailable(reason),
        }
    }
}

/// Converts voice errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `InvalidChannel`, `UnconfiguredChannel`, `EmptySelection`
/// - 404 Not Found - `MemberNotFound`
/// - 409 Conflict - `Refused`
/// - 503 Service Unavailable - `UpstreamUnavailable`, `Timeout`
impl IntoResponse for VoiceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidChannel(_) | Self::UnconfiguredChannel(_) | Self::EmptySelection => {
                StatusCode::BAD_REQUEST
            }
            Self::MemberNotFound(_) => StatusCode::NOT_FOUND,
            Self::Refused(_) => StatusCode::CONFLICT,
            Self::UpstreamUnavailable(_) | Self::Timeout(_) => {
                tracing::error!("{}", self);
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
