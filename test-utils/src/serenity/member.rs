//! Test factory for creating Serenity Member objects.

use serde_json::Value;
use serenity::all::Member;

/// JSON payload for a guild member.
///
/// The user has no global name, so the display name is the nickname when set and the
/// username otherwise.
pub fn member_json(guild_id: u64, user_id: u64, username: &str, nick: Option<&str>) -> Value {
    serde_json::json!({
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "guild_id": guild_id.to_string(),
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "communication_disabled_until": null,
    })
}

/// Creates a test Serenity Member.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `nick` - Optional guild nickname
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    nick: Option<&str>,
) -> Member {
    serde_json::from_value(member_json(guild_id, user_id, username, nick))
        .expect("Failed to create test member - invalid JSON structure")
}
