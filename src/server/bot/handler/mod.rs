use std::sync::Arc;

use serenity::all::{Context, EventHandler, GuildId, Ready, VoiceState};
use serenity::async_trait;
use tokio::sync::Notify;

pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    /// Guild the panel operates on; events from other guilds are ignored.
    pub guild_id: GuildId,
    pub ready: Arc<Notify>,
}

impl Handler {
    pub fn new(guild_id: GuildId, ready: Arc<Notify>) -> Self {
        Self { guild_id, ready }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called once every guild from the ready payload has been cached
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(self.guild_id, &self.ready, ctx, guilds).await;
    }

    /// Called when a member joins, leaves or switches voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(self.guild_id, ctx, old, new).await;
    }
}
