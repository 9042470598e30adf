//! Voice membership reconciliation and batch moves.
//!
//! The components are layered leaves first:
//!
//! - `ChannelSnapshotReader` reads a channel's live occupants
//! - `MemberLocator` resolves a member's placement, cache first, one lookup on miss
//! - `MoveExecutor` relocates one member, a no-op when already in the target
//! - `BatchMoveService` drives lists of members through the above and collects a report
//!
//! All of them share a `VoiceContext`, which carries the injected platform, the
//! membership cache and the configured channel pair.

pub mod batch;
pub mod cache;
pub mod executor;
pub mod locator;
pub mod snapshot;

#[cfg(test)]
mod test;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    config::VoiceChannelPair,
    data::voice::VoicePlatform,
    error::{platform::PlatformError, voice::VoiceError},
};

pub use batch::BatchMoveService;
pub use cache::MembershipCache;
pub use executor::MoveExecutor;
pub use locator::MemberLocator;
pub use snapshot::ChannelSnapshotReader;

/// Dependencies shared by the voice services.
///
/// Cheap to clone: the platform is reference counted and the cache shares its storage.
#[derive(Clone)]
pub struct VoiceContext {
    pub platform: Arc<dyn VoicePlatform>,
    pub cache: MembershipCache,
    pub channels: VoiceChannelPair,
    /// Upper bound for any single platform call.
    pub remote_timeout: Duration,
}

impl VoiceContext {
    /// Creates the voice context.
    ///
    /// # Arguments
    /// - `platform` - Remote voice platform capability
    /// - `channels` - The two channels moves are allowed between
    /// - `member_cache_ttl` - How long a cached placement is trusted
    /// - `remote_timeout` - Upper bound for any single platform call
    pub fn new(
        platform: Arc<dyn VoicePlatform>,
        channels: VoiceChannelPair,
        member_cache_ttl: Duration,
        remote_timeout: Duration,
    ) -> Self {
        Self {
            platform,
            cache: MembershipCache::new(member_cache_ttl),
            channels,
            remote_timeout,
        }
    }

    /// Awaits a platform call, bounded by the remote timeout.
    ///
    /// # Returns
    /// - `Ok(T)` - The platform call succeeded in time
    /// - `Err(VoiceError::Timeout)` - The call did not finish within `remote_timeout`
    /// - `Err(VoiceError::Refused)` / `Err(VoiceError::UpstreamUnavailable)` - Platform failure
    pub(crate) async fn call<T, F>(&self, call: F) -> Result<T, VoiceError>
    where
        F: Future<Output = Result<T, PlatformError>>,
    {
        match tokio::time::timeout(self.remote_timeout, call).await {
            Ok(result) => result.map_err(VoiceError::from),
            Err(_) => Err(VoiceError::Timeout(self.remote_timeout)),
        }
    }
}
