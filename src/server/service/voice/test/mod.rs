use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    config::VoiceChannelPair,
    data::voice::fake::{FakeVoicePlatform, PlatformCall},
    error::voice::VoiceError,
    model::voice::{MoveAction, MoveOutcome, Resolution, VoiceMember},
    service::voice::{
        BatchMoveService, ChannelSnapshotReader, MemberLocator, MoveExecutor, VoiceContext,
    },
};

mod move_selected;

const GENERAL: &str = "10";
const OTHER: &str = "20";
const CHAT: &str = "30";

/// Guild with the two configured voice channels and an unrelated text channel.
fn two_channel_platform() -> FakeVoicePlatform {
    FakeVoicePlatform::new()
        .with_voice_channel(GENERAL, "General")
        .with_voice_channel(OTHER, "Other Team")
        .with_text_channel(CHAT, "chat")
}

fn context(platform: &Arc<FakeVoicePlatform>) -> VoiceContext {
    context_with(
        platform,
        VoiceChannelPair::new(GENERAL, OTHER),
        Duration::from_secs(5),
        Duration::from_secs(1),
    )
}

fn context_with(
    platform: &Arc<FakeVoicePlatform>,
    channels: VoiceChannelPair,
    member_cache_ttl: Duration,
    remote_timeout: Duration,
) -> VoiceContext {
    VoiceContext::new(platform.clone(), channels, member_cache_ttl, remote_timeout)
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
