use dioxus_logger::tracing;

use super::VoiceContext;
use crate::server::{
    error::voice::VoiceError,
    model::voice::{LocatedMember, MoveAction},
};

/// Relocates single members to a target voice channel.
pub struct MoveExecutor<'a> {
    ctx: &'a VoiceContext,
}

impl<'a> MoveExecutor<'a> {
    pub fn new(ctx: &'a VoiceContext) -> Self {
        Self { ctx }
    }

    /// Moves a resolved member into `target_channel_id`.
    ///
    /// A member already in the target is left alone without contacting the platform.
    /// After a successful move the member's new placement is cached, so repeating the
    /// move is a no-op.
    ///
    /// # Returns
    /// - `Ok(MoveAction::AlreadyPlaced)` - Member was already in the target
    /// - `Ok(MoveAction::Moved)` - Platform accepted the relocation
    /// - `Err(VoiceError::Refused)` - Platform refused; reason kept verbatim
    /// - `Err(VoiceError)` - Platform unreachable or the call timed out
    pub async fn execute(
        &self,
        member: &LocatedMember,
        target_channel_id: &str,
    ) -> Result<MoveAction, VoiceError> {
        if member.is_in(target_channel_id) {
            tracing::debug!(
                "Member {} already in channel {}, skipping move",
                member.id,
                target_channel_id
            );
            return Ok(MoveAction::AlreadyPlaced);
        }

        self.ctx
            .call(self.ctx.platform.move_member(&member.id, target_channel_id))
            .await?;

        self.ctx
            .cache
            .record(LocatedMember {
                voice_channel_id: Some(target_channel_id.to_string()),
                ..member.clone()
            })
            .await;

        tracing::debug!(
            "Moved member {} from {:?} to {}",
            member.id,
            member.voice_channel_id,
            target_channel_id
        );

        Ok(MoveAction::Moved)
    }
}
