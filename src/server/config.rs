use std::path::PathBuf;
use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ADMIN_SHARED_SECRET: &str = "change-me";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "client/dist";
const DEFAULT_MEMBER_CACHE_TTL_SECS: u64 = 5;
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_READY_TIMEOUT_SECS: u64 = 60;

/// The two voice channels members may be moved between.
///
/// Any channel id outside this pair is rejected before the platform is contacted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannelPair {
    /// Channel everyone is swept back into.
    pub general: String,
    /// Channel selected members are split off into.
    pub other: String,
}

impl VoiceChannelPair {
    pub fn new(general: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            general: general.into(),
            other: other.into(),
        }
    }

    /// Returns true if `channel_id` is one of the two configured channels.
    pub fn contains(&self, channel_id: &str) -> bool {
        channel_id == self.general || channel_id == self.other
    }
}

pub struct Config {
    pub discord_token: String,
    pub guild_id: u64,
    pub channels: VoiceChannelPair,

    pub admin_shared_secret: String,
    pub port: u16,
    pub static_dir: PathBuf,

    pub member_cache_ttl: Duration,
    pub remote_timeout: Duration,
    pub ready_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let guild_id = snowflake_var("GUILD_ID", &required("GUILD_ID")?)?;
        let general = snowflake_var("GENERAL_VC_ID", &required("GENERAL_VC_ID")?)?;
        let other = snowflake_var("OTHER_TEAM_VC_ID", &required("OTHER_TEAM_VC_ID")?)?;

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            guild_id,
            channels: VoiceChannelPair::new(general.to_string(), other.to_string()),
            admin_shared_secret: std::env::var("ADMIN_SHARED_SECRET")
                .unwrap_or_else(|_| DEFAULT_ADMIN_SHARED_SECRET.to_string()),
            port: optional_parsed("PORT", DEFAULT_PORT)?,
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR)),
            member_cache_ttl: Duration::from_secs(optional_parsed(
                "MEMBER_CACHE_TTL_SECS",
                DEFAULT_MEMBER_CACHE_TTL_SECS,
            )?),
            remote_timeout: Duration::from_secs(optional_parsed(
                "REMOTE_TIMEOUT_SECS",
                DEFAULT_REMOTE_TIMEOUT_SECS,
            )?),
            ready_timeout: Duration::from_secs(optional_parsed(
                "READY_TIMEOUT_SECS",
                DEFAULT_READY_TIMEOUT_SECS,
            )?),
        })
    }

    /// Whether the admin secret was left at its well-known default.
    pub fn uses_default_secret(&self) -> bool {
        self.admin_shared_secret == DEFAULT_ADMIN_SHARED_SECRET
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Parses the snowflake held by env var `name`, rejecting zero since serenity ids must be
/// non-zero.
fn snowflake_var(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
