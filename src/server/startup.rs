use std::time::Duration;

use dioxus_logger::tracing;
use tokio::{net::TcpListener, sync::Notify};

use crate::server::{config::Config, error::AppError};

/// Logs a warning when the admin secret was left at its default value.
///
/// The server still starts; anyone who knows the default can use the panel.
pub fn warn_on_default_secret(config: &Config) {
    if config.uses_default_secret() {
        tracing::warn!(
            "ADMIN_SHARED_SECRET is not set, using the default. Set it before exposing the panel"
        );
    }
}

/// Waits until the bot reports its gateway cache as ready.
///
/// Channel snapshots are read from the gateway cache, so serving requests before the
/// guild has been received would report every channel as unavailable. If the cache is
/// not ready within `timeout` startup continues anyway and requests fail with 503
/// until it is.
///
/// # Arguments
/// - `ready` - Notified by the bot's `cache_ready` handler
/// - `timeout` - Upper bound on the wait
pub async fn wait_for_discord(ready: &Notify, timeout: Duration) {
    match tokio::time::timeout(timeout, ready.notified()).await {
        Ok(()) => tracing::info!("Discord cache is ready"),
        Err(_) => tracing::warn!(
            "Discord cache not ready after {:?}, starting web server anyway",
            timeout
        ),
    }
}

/// Binds the HTTP listener on all interfaces.
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to `0.0.0.0:port`
/// - `Err(AppError::IoErr)` - Port in use or not permitted
pub async fn bind_listener(port: u16) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    Ok(listener)
}
