use dioxus_logger::tracing;

use super::VoiceContext;
use crate::server::{error::voice::VoiceError, model::voice::ChannelSnapshot};

/// Reads the live occupants of a voice channel.
pub struct ChannelSnapshotReader<'a> {
    ctx: &'a VoiceContext,
}

impl<'a> ChannelSnapshotReader<'a> {
    pub fn new(ctx: &'a VoiceContext) -> Self {
        Self { ctx }
    }

    /// Reads a channel's name and current occupants.
    ///
    /// Makes one platform call. Every occupant is recorded in the membership cache as
    /// placed in this channel. An empty channel is a valid snapshot.
    ///
    /// # Arguments
    /// - `channel_id` - Channel to read
    ///
    /// # Returns
    /// - `Ok(ChannelSnapshot)` - Voice-capable channel with its occupants
    /// - `Err(VoiceError::InvalidChannel)` - Channel missing or not voice-capable
    /// - `Err(VoiceError::UpstreamUnavailable)` / `Err(VoiceError::Timeout)` - Platform unreachable
    pub async fn read(&self, channel_id: &str) -> Result<ChannelSnapshot, VoiceError> {
        let channel = self
            .ctx
            .call(self.ctx.platform.get_channel(channel_id))
            .await?;

        let Some(channel) = channel.filter(|c| c.voice_capable) else {
            return Err(VoiceError::InvalidChannel(channel_id.to_string()));
        };

        let snapshot = ChannelSnapshot::from_remote(channel);
        self.ctx.cache.record_snapshot(&snapshot).await;

        tracing::debug!(
            "Read channel {} ({}) with {} occupants",
            snapshot.name,
            snapshot.id,
            snapshot.members.len()
        );

        Ok(snapshot)
    }
}
