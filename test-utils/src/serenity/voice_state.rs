//! Test factory for creating Serenity VoiceState objects.

use serde_json::Value;
use serenity::all::VoiceState;

/// JSON payload for a voice state; `channel_id` of `None` means disconnected.
pub fn voice_state_json(guild_id: u64, user_id: u64, channel_id: Option<u64>) -> Value {
    serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "session_id": format!("session-{}", user_id),
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    })
}

/// Creates a test Serenity VoiceState.
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(
    guild_id: u64,
    user_id: u64,
    channel_id: Option<u64>,
) -> VoiceState {
    serde_json::from_value(voice_state_json(guild_id, user_id, channel_id))
        .expect("Failed to create test voice state - invalid JSON structure")
}
