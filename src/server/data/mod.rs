//! Data access layer for Discord voice state.
//!
//! The voice panel owns no database. Its data source is Discord itself, reached through
//! the `VoicePlatform` capability: channel and voice-state reads come from the gateway
//! cache, member lookups and relocations go over the REST API. Platform records are
//! converted into domain models at this boundary.

pub mod voice;
