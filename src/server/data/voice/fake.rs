//! In-process `VoicePlatform` double for tests.
//!
//! Holds a tiny model of a guild (channels, members and their placement) and records
//! every call made against it so tests can assert exactly which remote operations the
//! orchestrator issued.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use serenity::async_trait;

use super::{RemoteChannel, RemoteMember, VoicePlatform};
use crate::server::{error::platform::PlatformError, model::voice::VoiceMember};

/// Remote call recorded by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    GetChannel(String),
    GetMember(String),
    MoveMember {
        member_id: String,
        channel_id: String,
    },
}

struct FakeChannel {
    id: String,
    name: String,
    voice_capable: bool,
}

struct FakeMember {
    id: String,
    name: String,
    voice_channel_id: Option<String>,
}

#[derive(Default)]
struct FakeState {
    channels: Vec<FakeChannel>,
    members: Vec<FakeMember>,
    rejections: HashMap<String, String>,
    lookup_refusals: HashMap<String, String>,
    stalled: HashSet<String>,
    unavailable: bool,
    calls: Vec<PlatformCall>,
}

#[derive(Default)]
pub struct FakeVoicePlatform {
    state: Mutex<FakeState>,
}

impl FakeVoicePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voice_channel(self, id: &str, name: &str) -> Self {
        self.add_channel(id, name, true)
    }

    pub fn with_text_channel(self, id: &str, name: &str) -> Self {
        self.add_channel(id, name, false)
    }

    /// Adds a guild member, connected to `voice_channel_id` when given.
    pub fn with_member(self, id: &str, name: &str, voice_channel_id: Option<&str>) -> Self {
        self.state.lock().unwrap().members.push(FakeMember {
            id: id.to_string(),
            name: name.to_string(),
            voice_channel_id: voice_channel_id.map(str::to_string),
        });
        self
    }

    /// Makes every move of `member_id` fail with `reason`.
    pub fn rejecting_moves_of(self, member_id: &str, reason: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .rejections
            .insert(member_id.to_string(), reason.to_string());
        self
    }

    /// Makes every lookup of `member_id` fail with `reason`.
    pub fn refusing_lookups_of(self, member_id: &str, reason: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .lookup_refusals
            .insert(member_id.to_string(), reason.to_string());
        self
    }

    /// Makes lookups and moves of `member_id` hang far beyond any test timeout.
    pub fn stalling_on(self, member_id: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .stalled
            .insert(member_id.to_string());
        self
    }

    /// Makes every call fail as if Discord were unreachable.
    pub fn unavailable(self) -> Self {
        self.state.lock().unwrap().unavailable = true;
        self
    }

    /// Simulates a placement change made outside the panel.
    pub fn set_placement(&self, member_id: &str, voice_channel_id: Option<&str>) {
        let mut state = self.state.lock().unwrap();
        if let Some(member) = state.members.iter_mut().find(|m| m.id == member_id) {
            member.voice_channel_id = voice_channel_id.map(str::to_string);
        }
    }

    pub fn placement_of(&self, member_id: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .members
            .iter()
            .find(|m| m.id == member_id)
            .and_then(|m| m.voice_channel_id.clone())
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn member_lookups(&self) -> usize {
        self.count(|call| matches!(call, PlatformCall::GetMember(_)))
    }

    pub fn move_calls(&self) -> Vec<(String, String)> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter_map(|call| match call {
                PlatformCall::MoveMember {
                    member_id,
                    channel_id,
                } => Some((member_id.clone(), channel_id.clone())),
                _ => None,
            })
            .collect()
    }

    fn add_channel(self, id: &str, name: &str, voice_capable: bool) -> Self {
        self.state.lock().unwrap().channels.push(FakeChannel {
            id: id.to_string(),
            name: name.to_string(),
            voice_capable,
        });
        self
    }

    fn count(&self, predicate: impl Fn(&PlatformCall) -> bool) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| predicate(call))
            .count()
    }

    /// Records the call and reports whether it should stall.
    fn record(&self, call: PlatformCall, member_id: Option<&str>) -> Result<bool, PlatformError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);

        if state.unavailable {
            return Err(PlatformError::Unavailable(
                "Gateway connection closed".to_string(),
            ));
        }

        Ok(member_id.is_some_and(|id| state.stalled.contains(id)))
    }
}

async fn stall() {
    tokio::time::sleep(Duration::from_secs(60)).await;
}

#[async_trait]
impl VoicePlatform for FakeVoicePlatform {
    async fn get_channel(&self, channel_id: &str) -> Result<Option<RemoteChannel>, PlatformError> {
        self.record(PlatformCall::GetChannel(channel_id.to_string()), None)?;

        let state = self.state.lock().unwrap();
        let Some(channel) = state.channels.iter().find(|c| c.id == channel_id) else {
            return Ok(None);
        };

        let occupants = state
            .members
            .iter()
            .filter(|m| channel.voice_capable && m.voice_channel_id.as_deref() == Some(channel_id))
            .map(|m| VoiceMember::new(m.id.clone(), m.name.clone()))
            .collect();

        Ok(Some(RemoteChannel {
            id: channel.id.clone(),
            name: channel.name.clone(),
            voice_capable: channel.voice_capable,
            occupants,
        }))
    }

    async fn get_member(&self, member_id: &str) -> Result<Option<RemoteMember>, PlatformError> {
        if self.record(PlatformCall::GetMember(member_id.to_string()), Some(member_id))? {
            stall().await;
        }

        let state = self.state.lock().unwrap();
        if let Some(reason) = state.lookup_refusals.get(member_id) {
            return Err(PlatformError::Rejected(reason.clone()));
        }

        Ok(state
            .members
            .iter()
            .find(|m| m.id == member_id)
            .map(|m| RemoteMember {
                id: m.id.clone(),
                name: m.name.clone(),
                voice_channel_id: m.voice_channel_id.clone(),
            }))
    }

    async fn move_member(&self, member_id: &str, channel_id: &str) -> Result<(), PlatformError> {
        let call = PlatformCall::MoveMember {
            member_id: member_id.to_string(),
            channel_id: channel_id.to_string(),
        };
        if self.record(call, Some(member_id))? {
            stall().await;
        }

        let mut state = self.state.lock().unwrap();
        if let Some(reason) = state.rejections.get(member_id) {
            return Err(PlatformError::Rejected(reason.clone()));
        }

        let Some(member) = state.members.iter_mut().find(|m| m.id == member_id) else {
            return Err(PlatformError::Rejected("Unknown Member".to_string()));
        };
        if member.voice_channel_id.is_none() {
            return Err(PlatformError::Rejected(
                "Target user is not connected to voice.".to_string(),
            ));
        }

        member.voice_channel_id = Some(channel_id.to_string());
        Ok(())
    }
}
