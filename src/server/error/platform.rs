use serenity::http::HttpError;
use thiserror::Error;

/// Failure reported by a `VoicePlatform` call.
///
/// "Not found" is not an error at this level; platform reads return `Ok(None)` for
/// unknown channels and members so callers can tell absence from failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform understood the request and refused it (missing permissions,
    /// member no longer connected to voice, rate limited).
    ///
    /// The reason is kept verbatim from the platform for diagnostics.
    #[error("{0}")]
    Rejected(String),

    /// The platform could not be reached or answered with a server-side failure.
    #[error("{0}")]
    Unavailable(String),
}

/// Classifies serenity errors into refusals and outages.
///
/// Discord 4xx responses are refusals and keep Discord's own message. Model errors are
/// raised by serenity before a request is sent (e.g. invalid permissions) and are also
/// refusals. Everything else (gateway, transport, 5xx) means Discord is unavailable.
impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        match &err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
                if response.status_code.is_client_error() =>
            {
                PlatformError::Rejected(response.error.message.clone())
            }
            serenity::Error::Model(_) => PlatformError::Rejected(err.to_string()),
            _ => PlatformError::Unavailable(err.to_string()),
        }
    }
}
