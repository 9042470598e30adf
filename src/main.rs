mod model;
mod server;

use std::sync::Arc;

use dioxus_logger::tracing::{self, Level};
use tokio::sync::Notify;

use crate::server::{
    bot, config::Config, data::voice::discord::DiscordVoicePlatform, error::AppError, router,
    service::voice::VoiceContext, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    let config = Config::from_env()?;
    startup::warn_on_default_secret(&config);

    tracing::info!("Starting voice panel for guild {}", config.guild_id);

    // Initialize Discord bot and grab its HTTP client and gateway cache before it moves
    let ready = Arc::new(Notify::new());
    let bot_client = bot::start::init_bot(&config, ready.clone()).await?;
    let platform = DiscordVoicePlatform::new(
        bot_client.http.clone(),
        bot_client.cache.clone(),
        config.guild_id,
    );

    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    startup::wait_for_discord(&ready, config.ready_timeout).await;

    let voice = VoiceContext::new(
        Arc::new(platform),
        config.channels.clone(),
        config.member_cache_ttl,
        config.remote_timeout,
    );
    let state = AppState::new(voice, config.admin_shared_secret.clone());
    let app = router::router(state, &config.static_dir);

    let listener = startup::bind_listener(config.port).await?;
    tracing::info!("Web UI on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
