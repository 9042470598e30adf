//! Discord bot connection that keeps the gateway cache of voice states warm.
//!
//! The panel reads channel occupants from serenity's gateway cache rather than polling
//! REST, so the bot must stay connected for the lifetime of the server. It runs in its
//! own tokio task; its HTTP client and cache are shared with the voice platform adapter
//! before the client is moved into that task.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data, including channel kinds and names
//! - `GUILD_MEMBERS` - Member data for display names (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice state updates, the source of channel occupancy
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
