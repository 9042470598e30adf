use serde::{Deserialize, Serialize};

/// Member currently connected to a voice channel.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VoiceMemberDto {
    pub id: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct VoiceChannelDto {
    pub id: String,
    pub name: String,
    pub members: Vec<VoiceMemberDto>,
}

/// Body of `GET /api/voice`: both configured voice channels, general first.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct VoiceChannelsDto {
    pub channels: Vec<VoiceChannelDto>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum MoveStatusDto {
    Ok,
    NotInVoice,
    Error,
}

/// Outcome of a single member's move; `reason` is only present for errors.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct MoveResultDto {
    pub id: String,
    pub status: MoveStatusDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct MoveResultsDto {
    pub results: Vec<MoveResultDto>,
}

/// Body of `POST /api/move`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequestDto {
    #[serde(default)]
    pub user_ids: Vec<String>,
    #[serde(default)]
    pub target_channel_id: Option<String>,
}

/// Body of `POST /api/move-selected-other`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectionDto {
    #[serde(default)]
    pub user_ids: Vec<String>,
}
