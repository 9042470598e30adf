//! Test factory for creating Serenity GuildChannel objects.

use serde_json::Value;
use serenity::all::GuildChannel;

/// Discord channel type for guild text channels.
const CHANNEL_TYPE_TEXT: u8 = 0;
/// Discord channel type for guild voice channels.
const CHANNEL_TYPE_VOICE: u8 = 2;

/// JSON payload for a guild channel of the given Discord channel type.
pub fn channel_json(channel_id: u64, guild_id: u64, name: &str, kind: u8) -> Value {
    let (bitrate, user_limit) = if kind == CHANNEL_TYPE_VOICE {
        (Some(64000), Some(0))
    } else {
        (None, None)
    };

    serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "last_message_id": null,
        "topic": null,
        "bitrate": bitrate,
        "user_limit": user_limit,
        "rate_limit_per_user": 0,
        "rtc_region": null,
        "flags": 0,
    })
}

pub fn voice_channel_json(channel_id: u64, guild_id: u64, name: &str) -> Value {
    channel_json(channel_id, guild_id, name, CHANNEL_TYPE_VOICE)
}

pub fn text_channel_json(channel_id: u64, guild_id: u64, name: &str) -> Value {
    channel_json(channel_id, guild_id, name, CHANNEL_TYPE_TEXT)
}

/// Creates a test Serenity voice channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_voice_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(voice_channel_json(channel_id, guild_id, name))
        .expect("Failed to create test voice channel - invalid JSON structure")
}

/// Creates a test Serenity text channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(text_channel_json(channel_id, guild_id, name))
        .expect("Failed to create test text channel - invalid JSON structure")
}
