use std::sync::Arc;

use serenity::all::{ChannelId, ChannelType, Guild, GuildId, UserId, VoiceState};
use serenity::async_trait;
use serenity::cache::Cache;
use serenity::http::{Http, HttpError};

use super::{RemoteChannel, RemoteMember, VoicePlatform};
use crate::server::{error::platform::PlatformError, model::voice::VoiceMember};

/// `VoicePlatform` backed by serenity's gateway cache and REST client.
///
/// Channel and voice-state reads are served from the cache, which the gateway keeps in
/// sync through `GUILDS`, `GUILD_MEMBERS` and `GUILD_VOICE_STATES` events. Member lookups
/// and relocations go over REST.
pub struct DiscordVoicePlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
    guild_id: GuildId,
}

impl DiscordVoicePlatform {
    /// Creates a platform scoped to a single guild.
    ///
    /// # Arguments
    /// - `http` - Discord REST client shared with the bot
    /// - `cache` - Gateway cache shared with the bot
    /// - `guild_id` - Non-zero guild snowflake the panel operates on
    pub fn new(http: Arc<Http>, cache: Arc<Cache>, guild_id: u64) -> Self {
        Self {
            http,
            cache,
            guild_id: GuildId::new(guild_id),
        }
    }

    /// Runs `f` against the cached guild.
    ///
    /// The cache reference is dropped before returning so it is never held across an
    /// await point.
    fn with_guild<T>(&self, f: impl FnOnce(&Guild) -> T) -> Result<T, PlatformError> {
        let guild = self.cache.guild(self.guild_id).ok_or_else(|| {
            PlatformError::Unavailable(format!(
                "Guild {} is not available in the gateway cache",
                self.guild_id
            ))
        })?;

        Ok(f(&guild))
    }
}

#[async_trait]
impl VoicePlatform for DiscordVoicePlatform {
    async fn get_channel(&self, channel_id: &str) -> Result<Option<RemoteChannel>, PlatformError> {
        let Some(channel_id) = parse_snowflake(channel_id).map(ChannelId::new) else {
            return Ok(None);
        };

        self.with_guild(|guild| channel_from_guild(guild, channel_id))
    }

    async fn get_member(&self, member_id: &str) -> Result<Option<RemoteMember>, PlatformError> {
        let Some(user_id) = parse_snowflake(member_id).map(UserId::new) else {
            return Ok(None);
        };

        let member = match self.http.get_member(self.guild_id, user_id).await {
            Ok(member) => member,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // REST members carry no voice state; placement comes from the gateway cache
        let voice_channel_id = self.with_guild(|guild| placement_in_guild(guild, user_id))?;

        Ok(Some(RemoteMember {
            id: member.user.id.to_string(),
            name: member.display_name().to_string(),
            voice_channel_id,
        }))
    }

    async fn move_member(&self, member_id: &str, channel_id: &str) -> Result<(), PlatformError> {
        let user_id = parse_snowflake(member_id)
            .map(UserId::new)
            .ok_or_else(|| PlatformError::Rejected(format!("Invalid member id '{}'", member_id)))?;
        let channel_id = parse_snowflake(channel_id)
            .map(ChannelId::new)
            .ok_or_else(|| {
                PlatformError::Rejected(format!("Invalid channel id '{}'", channel_id))
            })?;

        self.guild_id
            .move_member(&self.http, user_id, channel_id)
            .await?;

        Ok(())
    }
}

/// Parses a non-zero Discord snowflake; serenity ids panic on zero.
pub fn parse_snowflake(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id != 0)
}

/// Builds a channel record from a cached guild.
///
/// Voice and stage channels are voice-capable. Occupants are derived from the guild's
/// voice states and sorted by display name, then id, so listings are stable across reads.
///
/// # Returns
/// - `Some(RemoteChannel)` - Channel exists in the guild
/// - `None` - No channel with this id in the guild
pub fn channel_from_guild(guild: &Guild, channel_id: ChannelId) -> Option<RemoteChannel> {
    let channel = guild.channels.get(&channel_id)?;
    let voice_capable = matches!(channel.kind, ChannelType::Voice | ChannelType::Stage);

    let mut occupants: Vec<VoiceMember> = if voice_capable {
        guild
            .voice_states
            .values()
            .filter(|state| state.channel_id == Some(channel_id))
            .map(|state| VoiceMember::new(state.user_id.to_string(), occupant_name(guild, state)))
            .collect()
    } else {
        Vec::new()
    };

    occupants.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });

    Some(RemoteChannel {
        id: channel_id.to_string(),
        name: channel.name.clone(),
        voice_capable,
        occupants,
    })
}

/// Voice channel a user is connected to according to the cached guild voice states.
pub fn placement_in_guild(guild: &Guild, user_id: UserId) -> Option<String> {
    guild
        .voice_states
        .get(&user_id)
        .and_then(|state| state.channel_id)
        .map(|channel_id| channel_id.to_string())
}

/// Display name of a voice channel occupant.
///
/// Prefers the cached guild member, then the member attached to the voice state, and
/// falls back to the raw user id when neither is cached.
fn occupant_name(guild: &Guild, state: &VoiceState) -> String {
    guild
        .members
        .get(&state.user_id)
        .or(state.member.as_ref())
        .map(|member| member.display_name().to_string())
        .unwrap_or_else(|| state.user_id.to_string())
}

fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}
