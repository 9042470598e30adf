//! Ready event handlers for bot initialization.
//!
//! `ready` fires once the gateway handshake completes. `cache_ready` fires after every
//! guild in the ready payload has been received and cached; only then can channel
//! snapshots be served from the cache, so it is what releases the web server at startup.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};
use tokio::sync::Notify;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `_ctx` - Discord context (unused)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
}

/// Handles the cache ready event and signals startup to continue.
///
/// Warns when the configured guild is not among the bot's guilds, which means the bot
/// was never invited there and every channel read will fail.
///
/// # Arguments
/// - `guild_id` - Configured guild
/// - `ready` - Startup signal, notified exactly once per call
/// - `_ctx` - Discord context (unused)
/// - `guilds` - Guilds now present in the cache
pub async fn handle_cache_ready(
    guild_id: GuildId,
    ready: &Notify,
    _ctx: Context,
    guilds: Vec<GuildId>,
) {
    if guilds.contains(&guild_id) {
        tracing::info!("Discord cache ready with {} guilds", guilds.len());
    } else {
        tracing::warn!(
            "Discord cache ready but the bot is not in guild {}; invite it before using the panel",
            guild_id
        );
    }

    ready.notify_one();
}
