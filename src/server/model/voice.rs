//! Voice channel domain models.
//!
//! Provides the transient views the orchestrator works with: channel snapshots read from
//! the platform, members with their voice placement, the tagged result of locating a
//! member, and the per-member outcomes collected into a batch report. None of these are
//! persisted; they describe Discord's live state at the instant they were read.

use crate::model::voice::{
    MoveResultDto, MoveStatusDto, VoiceChannelDto, VoiceChannelsDto, VoiceMemberDto,
};
use crate::server::data::voice::{RemoteChannel, RemoteMember};

/// Member connected to a voice channel, as listed in a channel snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceMember {
    pub id: String,
    pub name: String,
}

impl VoiceMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn into_dto(self) -> VoiceMemberDto {
        VoiceMemberDto {
            id: self.id,
            display_name: self.name,
        }
    }
}

/// Live view of a voice-capable channel and its occupants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSnapshot {
    pub id: String,
    pub name: String,
    /// Occupants in the order reported by the platform.
    pub members: Vec<VoiceMember>,
}

impl ChannelSnapshot {
    /// Builds a snapshot from a platform channel record.
    ///
    /// The caller is responsible for checking that the channel is voice-capable.
    pub fn from_remote(channel: RemoteChannel) -> Self {
        Self {
            id: channel.id,
            name: channel.name,
            members: channel.occupants,
        }
    }

    pub fn into_dto(self) -> VoiceChannelDto {
        VoiceChannelDto {
            id: self.id,
            name: self.name,
            members: self.members.into_iter().map(VoiceMember::into_dto).collect(),
        }
    }
}

/// Snapshots of both configured channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoChannels {
    pub general: ChannelSnapshot,
    pub other: ChannelSnapshot,
}

impl TwoChannels {
    /// Lists the channels general first, the order the panel renders them in.
    pub fn into_dto(self) -> VoiceChannelsDto {
        VoiceChannelsDto {
            channels: vec![self.general.into_dto(), self.other.into_dto()],
        }
    }
}

/// Guild member together with its voice placement at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedMember {
    pub id: String,
    pub name: String,
    /// Voice channel the member is connected to, `None` when not in voice.
    pub voice_channel_id: Option<String>,
}

impl LocatedMember {
    /// Member known to be connected to `channel_id`.
    pub fn in_channel(member: &VoiceMember, channel_id: &str) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            voice_channel_id: Some(channel_id.to_string()),
        }
    }

    pub fn is_in_voice(&self) -> bool {
        self.voice_channel_id.is_some()
    }

    /// Returns true if the member is already connected to `channel_id`.
    pub fn is_in(&self, channel_id: &str) -> bool {
        self.voice_channel_id.as_deref() == Some(channel_id)
    }
}

impl From<RemoteMember> for LocatedMember {
    fn from(member: RemoteMember) -> Self {
        Self {
            id: member.id,
            name: member.name,
            voice_channel_id: member.voice_channel_id,
        }
    }
}

/// Result of locating a member, tagged with where the placement came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Fresh entry in the membership cache; no platform call was made.
    FromCache(LocatedMember),
    /// Fetched with a single platform lookup and cached.
    FromRemote(LocatedMember),
    /// The platform has no such member in the guild.
    NotFound,
}

impl Resolution {
    pub fn into_member(self) -> Option<LocatedMember> {
        match self {
            Self::FromCache(member) | Self::FromRemote(member) => Some(member),
            Self::NotFound => None,
        }
    }
}

/// What the move executor did for a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAction {
    /// Member was already in the target channel; nothing was sent.
    AlreadyPlaced,
    /// Relocation command was accepted by the platform.
    Moved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStatus {
    Ok,
    NotInVoice,
    Error(String),
}

/// Outcome of processing one member id within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub member_id: String,
    pub status: MoveStatus,
}

impl MoveOutcome {
    pub fn ok(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            status: MoveStatus::Ok,
        }
    }

    pub fn not_in_voice(member_id: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            status: MoveStatus::NotInVoice,
        }
    }

    pub fn error(member_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            status: MoveStatus::Error(reason.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, MoveStatus::Error(_))
    }

    pub fn into_dto(self) -> MoveResultDto {
        let (status, reason) = match self.status {
            MoveStatus::Ok => (MoveStatusDto::Ok, None),
            MoveStatus::NotInVoice => (MoveStatusDto::NotInVoice, None),
            MoveStatus::Error(reason) => (MoveStatusDto::Error, Some(reason)),
        };

        MoveResultDto {
            id: self.member_id,
            status,
            reason,
        }
    }
}

/// Ordered outcomes of a batch, one per processed member id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    outcomes: Vec<MoveOutcome>,
}

impl BatchReport {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, outcome: MoveOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[cfg(test)]
    pub fn outcomes(&self) -> &[MoveOutcome] {
        &self.outcomes
    }

    /// Number of outcomes with an error status.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_error()).count()
    }

    pub fn into_dto(self) -> Vec<MoveResultDto> {
        self.outcomes
            .into_iter()
            .map(MoveOutcome::into_dto)
            .collect()
    }
}
