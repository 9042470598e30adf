//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through Axum's
//! state extraction. Clones are cheap: the voice context holds its platform and
//! membership cache behind `Arc`s, so every request sees the same cache.

use crate::server::service::voice::VoiceContext;

#[derive(Clone)]
pub struct AppState {
    /// Platform, membership cache and configured channel pair used by the voice services.
    pub voice: VoiceContext,

    /// Shared secret expected in the `x-admin-key` header.
    pub admin_secret: String,
}

impl AppState {
    pub fn new(voice: VoiceContext, admin_secret: String) -> Self {
        Self {
            voice,
            admin_secret,
        }
    }
}
