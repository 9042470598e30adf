//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, GuildChannel, Member, VoiceState) for testing purposes. These factories
//! create valid Serenity objects by deserializing JSON, simulating what Discord's
//! API would return.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` / `guild::TestGuildBuilder` - Serenity Guild objects
//! - `channel::create_test_voice_channel` / `channel::create_test_text_channel` - GuildChannel objects
//! - `member::create_test_member` - Member objects
//! - `voice_state::create_test_voice_state` - VoiceState objects

pub mod channel;
pub mod guild;
pub mod member;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::{create_test_text_channel, create_test_voice_channel};
pub use guild::{create_test_guild, TestGuildBuilder};
pub use member::create_test_member;
pub use voice_state::create_test_voice_state;
