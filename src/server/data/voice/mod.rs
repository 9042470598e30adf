//! The voice platform capability.
//!
//! `VoicePlatform` is the only way the service layer reaches Discord. It is injected as
//! an `Arc<dyn VoicePlatform>` so the orchestrator can be driven by the gateway-backed
//! `DiscordVoicePlatform` in production and by an in-process fake in tests.

pub mod discord;

#[cfg(test)]
pub mod fake;

#[cfg(test)]
mod test;

use serenity::async_trait;

use crate::server::{error::platform::PlatformError, model::voice::VoiceMember};

/// Channel as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteChannel {
    pub id: String,
    pub name: String,
    /// Whether members can be connected to (and moved into) this channel.
    pub voice_capable: bool,
    /// Members currently connected, empty for non-voice channels.
    pub occupants: Vec<VoiceMember>,
}

/// Guild member as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMember {
    pub id: String,
    pub name: String,
    pub voice_channel_id: Option<String>,
}

/// Remote operations the orchestrator needs from the voice platform.
///
/// Reads return `Ok(None)` when the channel or member does not exist in the guild.
/// Implementations are expected to make at most one remote request per call.
#[async_trait]
pub trait VoicePlatform: Send + Sync {
    /// Reads a channel and its current occupants.
    async fn get_channel(&self, channel_id: &str) -> Result<Option<RemoteChannel>, PlatformError>;

    /// Looks up a single guild member and its current voice placement.
    async fn get_member(&self, member_id: &str) -> Result<Option<RemoteMember>, PlatformError>;

    /// Relocates a connected member to `channel_id`.
    async fn move_member(&self, member_id: &str, channel_id: &str) -> Result<(), PlatformError>;
}
