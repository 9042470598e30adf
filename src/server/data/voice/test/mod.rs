use serenity::all::{ChannelId, UserId};
use test_utils::serenity::{create_test_guild, create_test_member, TestGuildBuilder};

use crate::server::data::voice::discord::{channel_from_guild, parse_snowflake, placement_in_guild};
use crate::server::model::voice::VoiceMember;


const GUILD_ID: u64 = 1;
const GENERAL: u64 = 10;
const OTHER: u64 = 20;
const CHAT: u64 = 30;

/// Guild with two voice channels, one text channel and three cached members.
///
/// Ann (nicknamed) is in General, Bob is in Other, Cid is cached but not in voice.
fn guild_with_voice() -> serenity::all::Guild {
    TestGuildBuilder::new(GUILD_ID, "Test Guild")
        .with_voice_channel(GENERAL, "General")
        .with_voice_channel(OTHER, "Other Team")
        .with_text_channel(CHAT, "chat")
        .with_member(100, "ann", Some("Ann"))
        .with_member(200, "bob", None)
        .with_member(300, "cid", None)
        .with_voice_state(100, Some(GENERAL))
        .with_voice_state(200, Some(OTHER))
        .build()
}

/// Expected: zero, negative, empty and non-numeric ids are rejected
#[test]
fn parses_only_non_zero_snowflakes() {
    assert_eq!(parse_snowflake("123"), Some(123));
    assert_eq!(parse_snowflake(" 7 "), Some(7));
    assert_eq!(parse_snowflake("0"), None);
    assert_eq!(parse_snowflake("-5"), None);
    assert_eq!(parse_snowflake(""), None);
    assert_eq!(parse_snowflake("ann"), None);
}

/// Expected: display name is the nickname when set, username otherwise
#[test]
fn member_display_name_prefers_nickname() {
    let nicked = create_test_member(GUILD_ID, 100, "ann", Some("Ann"));
    let plain = create_test_member(GUILD_ID, 200, "bob", None);

    assert_eq!(nicked.display_name(), "Ann");
    assert_eq!(plain.display_name(), "bob");
}
