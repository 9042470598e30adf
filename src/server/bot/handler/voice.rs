use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, VoiceState};

/// Logs voice placement changes in the configured guild.
///
/// The gateway cache has already applied the update when this runs, so the next channel
/// snapshot sees it without any further work here.
///
/// # Arguments
/// - `guild_id` - Configured guild; updates from other guilds are ignored
/// - `_ctx` - Discord context (unused)
/// - `old` - Previous voice state, if it was cached
/// - `new` - New voice state
pub async fn handle_voice_state_update(
    guild_id: GuildId,
    _ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    if new.guild_id != Some(guild_id) {
        return;
    }

    let from = old.and_then(|state| state.channel_id);

    match (from, new.channel_id) {
        (None, Some(to)) => tracing::debug!("Member {} joined voice channel {}", new.user_id, to),
        (Some(from), None) => {
            tracing::debug!("Member {} left voice channel {}", new.user_id, from)
        }
        (Some(from), Some(to)) if from != to => tracing::debug!(
            "Member {} moved from voice channel {} to {}",
            new.user_id,
            from,
            to
        ),
        _ => {}
    }
}
