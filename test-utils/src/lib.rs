//! Voice Panel Test Utils
//!
//! Provides shared testing utilities for the voice panel. The crate offers factories for
//! Serenity model objects (guilds, channels, members, voice states) built the way Discord
//! delivers them over the gateway, so the Discord adapter's conversions can be tested
//! without a live connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::guild::TestGuildBuilder;
//!
//! #[test]
//! fn lists_voice_occupants() {
//!     let guild = TestGuildBuilder::new(1, "Test Guild")
//!         .with_voice_channel(10, "General")
//!         .with_member(100, "ann", None)
//!         .with_voice_state(100, Some(10))
//!         .build();
//!
//!     // Use the guild in your tests...
//! }
//! ```

pub mod serenity;
