//! Shared-secret guard for the API routes.
//!
//! The panel has no user accounts. Every `/api/*` request must carry the configured
//! admin secret in the `x-admin-key` header. The guard runs as a route layer so the
//! check happens before any request body is parsed.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

pub struct AuthGuard<'a> {
    secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(secret: &'a str, headers: &'a HeaderMap) -> Self {
        Self { secret, headers }
    }

    /// Checks the admin key header against the shared secret.
    ///
    /// # Returns
    /// - `Ok(())` - Header present and equal to the secret
    /// - `Err(AuthError::MissingAdminKey)` - Header absent or not valid UTF-8
    /// - `Err(AuthError::InvalidAdminKey)` - Header does not match
    pub fn require(&self) -> Result<(), AppError> {
        let Some(key) = self
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
        else {
            return Err(AuthError::MissingAdminKey.into());
        };

        if key != self.secret {
            return Err(AuthError::InvalidAdminKey.into());
        }

        Ok(())
    }
}

/// Route layer rejecting API requests without a valid admin key.
pub async fn require_admin_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    AuthGuard::new(&state.admin_secret, request.headers()).require()?;

    Ok(next.run(request).await)
}
