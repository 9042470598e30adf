//! Test factory for creating Serenity Guild objects.
//!
//! This module provides a builder for mock Serenity `Guild` structs as they appear in
//! the gateway cache: channels, members and voice states included. Guilds are created by
//! deserializing JSON, simulating the `GUILD_CREATE` payload Discord sends.

use serde_json::Value;
use serenity::all::Guild;

use super::{
    channel::{text_channel_json, voice_channel_json},
    member::member_json,
    voice_state::voice_state_json,
};

/// Builder for test guilds with voice channels and connected members.
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild::TestGuildBuilder;
///
/// let guild = TestGuildBuilder::new(1, "Test Guild")
///     .with_voice_channel(10, "General")
///     .with_text_channel(11, "chat")
///     .with_member(100, "ann", Some("Ann"))
///     .with_voice_state(100, Some(10))
///     .build();
/// ```
pub struct TestGuildBuilder {
    guild_id: u64,
    name: String,
    channels: Vec<Value>,
    members: Vec<Value>,
    voice_states: Vec<Value>,
}

impl TestGuildBuilder {
    /// Creates a builder for an empty guild.
    pub fn new(guild_id: u64, name: &str) -> Self {
        Self {
            guild_id,
            name: name.to_string(),
            channels: Vec::new(),
            members: Vec::new(),
            voice_states: Vec::new(),
        }
    }

    pub fn with_voice_channel(mut self, channel_id: u64, name: &str) -> Self {
        self.channels
            .push(voice_channel_json(channel_id, self.guild_id, name));
        self
    }

    pub fn with_text_channel(mut self, channel_id: u64, name: &str) -> Self {
        self.channels
            .push(text_channel_json(channel_id, self.guild_id, name));
        self
    }

    /// Adds a cached guild member.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID (snowflake)
    /// - `username` - Account username
    /// - `nick` - Optional guild nickname, used as display name when set
    pub fn with_member(mut self, user_id: u64, username: &str, nick: Option<&str>) -> Self {
        self.members
            .push(member_json(self.guild_id, user_id, username, nick));
        self
    }

    /// Adds a voice state connecting `user_id` to `channel_id`.
    pub fn with_voice_state(mut self, user_id: u64, channel_id: Option<u64>) -> Self {
        self.voice_states
            .push(voice_state_json(self.guild_id, user_id, channel_id));
        self
    }

    /// Builds the Serenity Guild.
    ///
    /// # Panics
    /// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
    pub fn build(self) -> Guild {
        serde_json::from_value(serde_json::json!({
            "id": self.guild_id.to_string(),
            "name": self.name,
            "icon": null,
            "icon_hash": null,
            "owner_id": "100000000000000000",
            "afk_timeout": 300,
            "verification_level": 0,
            "default_message_notifications": 0,
            "explicit_content_filter": 0,
            "roles": [],
            "emojis": [],
            "stickers": [],
            "features": [],
            "mfa_level": 0,
            "system_channel_flags": 0,
            "premium_tier": 0,
            "premium_subscription_count": 0,
            "premium_progress_bar_enabled": false,
            "preferred_locale": "en-US",
            "nsfw_level": 0,
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "large": false,
            "member_count": self.members.len(),
            "voice_states": self.voice_states,
            "channels": self.channels,
            "threads": [],
            "presences": [],
            "max_presences": 25000,
            "max_members": 100000,
            "unavailable": false,
            "members": self.members,
            "stage_instances": [],
            "guild_scheduled_events": [],
        }))
        .expect("Failed to create test guild - invalid JSON structure")
    }
}

/// Creates a test Serenity Guild with no channels, members or voice states.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str) -> Guild {
    TestGuildBuilder::new(guild_id, name).build()
}
