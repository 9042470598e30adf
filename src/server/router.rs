use std::path::Path;

use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::server::{
    controller::voice::{
        all_to_general, api_not_found, get_voice_channels, move_members, move_selected_other,
    },
    middleware::auth::require_admin_key,
    state::AppState,
};

/// Builds the application router.
///
/// API routes sit behind the admin key layer. Every other path is served from the built
/// browser client in `static_dir`, falling back to its `index.html` so client-side routes
/// resolve.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let client =
        ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/voice", get(get_voice_channels))
        .route("/api/move", post(move_members))
        .route("/api/move-selected-other", post(move_selected_other))
        .route("/api/all-to-general", post(all_to_general))
        .route("/api/{*rest}", any(api_not_found))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_key,
        ))
        .fallback_service(client)
        .with_state(state)
}
