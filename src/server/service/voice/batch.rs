//! Batch move orchestration.
//!
//! `BatchMoveService` is the entry point the controllers call. It validates the target
//! against the configured channel pair, reads the channels involved, and then processes
//! members one at a time, converting each member's failure into its own outcome so a
//! single refusal never aborts the rest of the batch.
//!
//! Members are processed sequentially with one platform call in flight at a time. This
//! stays well inside Discord's per-route rate limits and keeps the report in input order.

use dioxus_logger::tracing;

use super::{ChannelSnapshotReader, MemberLocator, MoveExecutor, VoiceContext};
use crate::server::{
    error::voice::VoiceError,
    model::voice::{BatchReport, LocatedMember, MoveOutcome, TwoChannels},
};

pub struct BatchMoveService<'a> {
    ctx: &'a VoiceContext,
}

impl<'a> BatchMoveService<'a> {
    pub fn new(ctx: &'a VoiceContext) -> Self {
        Self { ctx }
    }

    /// Reads both configured channels, general first.
    ///
    /// # Returns
    /// - `Ok(TwoChannels)` - Snapshots of the general and other-team channels
    /// - `Err(VoiceError::InvalidChannel)` - A configured id is not a voice channel
    /// - `Err(VoiceError)` - Platform unreachable
    pub async fn list_two_channels(&self) -> Result<TwoChannels, VoiceError> {
        self.ctx.cache.prune_stale().await;

        let reader = ChannelSnapshotReader::new(self.ctx);
        let general = reader.read(&self.ctx.channels.general).await?;
        let other = reader.read(&self.ctx.channels.other).await?;

        Ok(TwoChannels { general, other })
    }

    /// Moves the given members into `target_channel_id`.
    ///
    /// The target is checked against the configured pair before anything else, so an
    /// unconfigured target makes no platform calls. The target channel is then read,
    /// which both validates it and refreshes the cache with its occupants. Each member
    /// id is then located and, if in voice, moved. Duplicate ids are processed once per
    /// occurrence.
    ///
    /// # Arguments
    /// - `member_ids` - Non-empty list of member ids, in the order outcomes are reported
    /// - `target_channel_id` - One of the two configured channels
    ///
    /// # Returns
    /// - `Ok(BatchReport)` - Exactly one outcome per input id, in input order
    /// - `Err(VoiceError::EmptySelection)` - No member ids were given
    /// - `Err(VoiceError::UnconfiguredChannel)` - Target outside the configured pair
    /// - `Err(VoiceError::InvalidChannel)` - Target is not a voice channel
    /// - `Err(VoiceError)` - Platform unreachable before any member was processed
    pub async fn move_selected(
        &self,
        member_ids: &[String],
        target_channel_id: &str,
    ) -> Result<BatchReport, VoiceError> {
        if member_ids.is_empty() {
            return Err(VoiceError::EmptySelection);
        }
        self.ensure_configured(target_channel_id)?;

        self.ctx.cache.prune_stale().await;

        let target = ChannelSnapshotReader::new(self.ctx)
            .read(target_channel_id)
            .await?;

        let mut report = BatchReport::with_capacity(member_ids.len());
        for member_id in member_ids {
            report.push(self.move_one(member_id, &target.id).await);
        }

        tracing::info!(
            "Moved selection of {} members to {} ({} failed)",
            report.len(),
            target.name,
            report.failures()
        );

        Ok(report)
    }

    /// Moves everyone in the other-team channel back into the general channel.
    pub async fn sweep_all_to_general(&self) -> Result<BatchReport, VoiceError> {
        let channels = &self.ctx.channels;
        self.sweep(&channels.other, &channels.general).await
    }

    /// Moves every occupant of `source_channel_id` into `target_channel_id`.
    ///
    /// Occupants come straight from the source snapshot, so no member lookups are made.
    /// Outcomes follow the occupant order of the snapshot.
    ///
    /// # Returns
    /// - `Ok(BatchReport)` - One outcome per occupant; empty when the source is empty
    /// - `Err(VoiceError::UnconfiguredChannel)` - Either channel outside the configured pair
    /// - `Err(VoiceError::InvalidChannel)` - Either channel is not a voice channel
    /// - `Err(VoiceError)` - Platform unreachable before any member was processed
    pub async fn sweep(
        &self,
        source_channel_id: &str,
        target_channel_id: &str,
    ) -> Result<BatchReport, VoiceError> {
        self.ensure_configured(source_channel_id)?;
        self.ensure_configured(target_channel_id)?;

        self.ctx.cache.prune_stale().await;

        let reader = ChannelSnapshotReader::new(self.ctx);
        let target = reader.read(target_channel_id).await?;
        let source = reader.read(source_channel_id).await?;

        let executor = MoveExecutor::new(self.ctx);
        let mut report = BatchReport::with_capacity(source.members.len());
        for occupant in &source.members {
            let member = LocatedMember::in_channel(occupant, &source.id);
            let outcome = match executor.execute(&member, &target.id).await {
                Ok(_) => MoveOutcome::ok(&member.id),
                Err(e) => {
                    tracing::warn!("Failed to move member {} to {}: {}", member.id, target.id, e);
                    MoveOutcome::error(&member.id, e.to_string())
                }
            };
            report.push(outcome);
        }

        tracing::info!(
            "Swept {} members from {} to {} ({} failed)",
            report.len(),
            source.name,
            target.name,
            report.failures()
        );

        Ok(report)
    }

    /// Locates and moves a single member, folding any failure into its outcome.
    async fn move_one(&self, member_id: &str, target_channel_id: &str) -> MoveOutcome {
        let member = match MemberLocator::new(self.ctx).locate(member_id).await {
            Ok(member) => member,
            Err(e) => {
                tracing::warn!("Failed to locate member {}: {}", member_id, e);
                return MoveOutcome::error(member_id, e.to_string());
            }
        };

        if !member.is_in_voice() {
            return MoveOutcome::not_in_voice(member_id);
        }

        match MoveExecutor::new(self.ctx)
            .execute(&member, target_channel_id)
            .await
        {
            Ok(_) => MoveOutcome::ok(member_id),
            Err(e) => {
                tracing::warn!(
                    "Failed to move member {} to {}: {}",
                    member_id,
                    target_channel_id,
                    e
                );
                MoveOutcome::error(member_id, e.to_string())
            }
        }
    }

    fn ensure_configured(&self, channel_id: &str) -> Result<(), VoiceError> {
        if self.ctx.channels.contains(channel_id) {
            Ok(())
        } else {
            Err(VoiceError::UnconfiguredChannel(channel_id.to_string()))
        }
    }
}
