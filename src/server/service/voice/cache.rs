//! Process-lifetime membership cache.
//!
//! This module provides the `MembershipCache`, an advisory map from member id to the
//! member's last known voice placement. It is populated by channel snapshot reads,
//! member lookups and successful moves, and consulted by the member locator before
//! falling back to a platform lookup. Voice presence changes outside the panel all the
//! time, so entries are only trusted for a short TTL and are pruned at the start of
//! every top-level operation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::model::voice::{ChannelSnapshot, LocatedMember};

/// Cached placement with the instant it was recorded.
#[derive(Clone)]
struct CachedMember {
    member: LocatedMember,
    recorded_at: Instant,
}

impl CachedMember {
    fn new(member: LocatedMember) -> Self {
        Self {
            member,
            recorded_at: Instant::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        self.recorded_at.elapsed() < ttl
    }
}

/// Shared cache of member placements keyed by member id.
///
/// Clones share the same storage. The lock is only held for map operations, never
/// across a platform call.
#[derive(Clone)]
pub struct MembershipCache {
    entries: Arc<RwLock<HashMap<String, CachedMember>>>,
    ttl: Duration,
}

impl MembershipCache {
    /// Creates an empty cache whose entries are trusted for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the cached member if its entry is younger than the TTL.
    ///
    /// Stale entries are treated as misses.
    pub async fn get(&self, member_id: &str) -> Option<LocatedMember> {
        let entries = self.entries.read().await;

        entries
            .get(member_id)
            .filter(|cached| cached.is_fresh(self.ttl))
            .map(|cached| cached.member.clone())
    }

    /// Records a member's placement, replacing any previous entry.
    pub async fn record(&self, member: LocatedMember) {
        self.entries
            .write()
            .await
            .insert(member.id.clone(), CachedMember::new(member));
    }

    /// Records every occupant of a freshly read channel.
    ///
    /// Members cached as being in this channel who are no longer among its occupants
    /// are evicted, since the snapshot proves that placement wrong.
    pub async fn record_snapshot(&self, snapshot: &ChannelSnapshot) {
        let mut entries = self.entries.write().await;

        entries.retain(|id, cached| {
            !cached.member.is_in(&snapshot.id) || snapshot.members.iter().any(|m| &m.id == id)
        });

        for occupant in &snapshot.members {
            entries.insert(
                occupant.id.clone(),
                CachedMember::new(LocatedMember::in_channel(occupant, &snapshot.id)),
            );
        }
    }

    /// Removes entries older than the TTL.
    ///
    /// # Returns
    /// - Number of entries removed
    pub async fn prune_stale(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();

        entries.retain(|_, cached| cached.is_fresh(self.ttl));

        before - entries.len()
    }

    /// Number of entries currently held, fresh or not.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
