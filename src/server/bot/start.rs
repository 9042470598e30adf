use std::sync::Arc;

use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents, GuildId};
use tokio::sync::Notify;

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord bot client without connecting it.
///
/// The client is returned unstarted so its `http` and `cache` handles can be cloned
/// for the voice platform before it is moved into its own task.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and guild id
/// - `ready` - Notified once the gateway cache has received every guild
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Invalid token or client construction failed
pub async fn init_bot(config: &Config, ready: Arc<Notify>) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(GuildId::new(config.guild_id), ready);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Connects the bot and runs it until the gateway connection ends.
///
/// Should be called from within a spawned task since it does not return while the bot
/// is connected.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
