use dioxus_logger::tracing;

use super::VoiceContext;
use crate::server::{
    error::voice::VoiceError,
    model::voice::{LocatedMember, Resolution},
};

/// Resolves member ids to their current voice placement.
pub struct MemberLocator<'a> {
    ctx: &'a VoiceContext,
}

impl<'a> MemberLocator<'a> {
    pub fn new(ctx: &'a VoiceContext) -> Self {
        Self { ctx }
    }

    /// Resolves a member's placement, cache first.
    ///
    /// A fresh cache entry is returned without contacting the platform. On a miss,
    /// exactly one platform lookup is made for this member and its result is cached.
    ///
    /// # Returns
    /// - `Ok(Resolution::FromCache)` - Fresh cache entry
    /// - `Ok(Resolution::FromRemote)` - Looked up on the platform and cached
    /// - `Ok(Resolution::NotFound)` - No such member in the guild
    /// - `Err(VoiceError)` - The lookup failed or timed out
    pub async fn resolve(&self, member_id: &str) -> Result<Resolution, VoiceError> {
        if let Some(member) = self.ctx.cache.get(member_id).await {
            tracing::debug!("Member {} resolved from cache", member_id);
            return Ok(Resolution::FromCache(member));
        }

        let Some(remote) = self
            .ctx
            .call(self.ctx.platform.get_member(member_id))
            .await?
        else {
            return Ok(Resolution::NotFound);
        };

        let member = LocatedMember::from(remote);
        self.ctx.cache.record(member.clone()).await;

        tracing::debug!("Member {} resolved from Discord", member_id);

        Ok(Resolution::FromRemote(member))
    }

    /// Resolves a member, treating absence from the guild as an error.
    ///
    /// # Returns
    /// - `Ok(LocatedMember)` - Member with its placement (which may be "not in voice")
    /// - `Err(VoiceError::MemberNotFound)` - No such member in the guild
    /// - `Err(VoiceError)` - The lookup failed or timed out
    pub async fn locate(&self, member_id: &str) -> Result<LocatedMember, VoiceError> {
        self.resolve(member_id)
            .await?
            .into_member()
            .ok_or_else(|| VoiceError::MemberNotFound(member_id.to_string()))
    }
}
