use super::*;

/// Tests the basic selection move.
///
/// Member 1 is in General and member 2 is in the guild but not in voice. Moving both
/// to the other-team channel moves 1 and reports 2 as not in voice.
///
/// Expected: Ok([1 ok, 2 not-in-voice]) and member 1 now in Other Team
#[tokio::test]
async fn moves_connected_and_skips_disconnected() -> Result<(), VoiceError> {
    let platform = Arc::new(
        two_channel_platform()
            .with_member("1", "Ann", Some(GENERAL))
            .with_member("2", "Bob", None),
    );
    let ctx = context(&platform);

    let report = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["1", "2"]), OTHER)
        .await?;

    assert_eq!(
        report.outcomes(),
        &[MoveOutcome::ok("1"), MoveOutcome::not_in_voice("2")]
    );
    assert_eq!(platform.placement_of("1"), Some(OTHER.to_string()));

    Ok(())
}

/// Tests repeating the same move.
///
/// Expected: ok both times, only one relocation sent to the platform
#[tokio::test]
async fn repeated_move_is_idempotent() -> Result<(), VoiceError> {
    let platform = Arc::new(two_channel_platform().with_member("1", "Ann", Some(GENERAL)));
    let ctx = context(&platform);
    let service = BatchMoveService::new(&ctx);

    let first = service.move_selected(&ids(&["1"]), OTHER).await?;
    let second = service.move_selected(&ids(&["1"]), OTHER).await?;

    assert_eq!(first.outcomes(), &[MoveOutcome::ok("1")]);
    assert_eq!(second.outcomes(), &[MoveOutcome::ok("1")]);
    assert_eq!(platform.move_calls().len(), 1);
    assert_eq!(platform.placement_of("1"), Some(OTHER.to_string()));

    Ok(())
}

/// Tests report completeness with duplicate and unknown ids.
///
/// Verifies every occurrence of every id gets exactly one outcome, in input order,
/// and that a duplicate is processed independently (its second occurrence is a no-op).
///
/// Expected: Ok([1 ok, 2 not-in-voice, 1 ok, 404 error]) with one relocation
#[tokio::test]
async fn reports_one_outcome_per_input_id() -> Result<(), VoiceError> {
    let platform = Arc::new(
        two_channel_platform()
            .with_member("1", "Ann", Some(OTHER))
            .with_member("2", "Bob", None),
    );
    let ctx = context(&platform);

    let report = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["1", "2", "1", "404"]), GENERAL)
        .await?;

    assert_eq!(report.len(), 4);
    assert_eq!(
        report.outcomes(),
        &[
            MoveOutcome::ok("1"),
            MoveOutcome::not_in_voice("2"),
            MoveOutcome::ok("1"),
            MoveOutcome::error("404", "Member 404 was not found in the guild"),
        ]
    );
    assert_eq!(platform.move_calls().len(), 1);

    Ok(())
}

/// Tests failure isolation between members.
///
/// Member 404 does not exist, member 3's move is refused, member 1 is movable. The
/// failures must not prevent member 1 from being moved.
///
/// Expected: Ok([404 error, 3 error(reason), 1 ok]) and member 1 in General
#[tokio::test]
async fn isolates_member_failures() -> Result<(), VoiceError> {
    let platform = Arc::new(
        two_channel_platform()
            .with_member("1", "Ann", Some(OTHER))
            .with_member("3", "Cid", Some(OTHER))
            .rejecting_moves_of("3", "Missing Permissions"),
    );
    let ctx = context(&platform);

    let report = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["404", "3", "1"]), GENERAL)
        .await?;

    assert_eq!(
        report.outcomes(),
        &[
            MoveOutcome::error("404", "Member 404 was not found in the guild"),
            MoveOutcome::error("3", "Missing Permissions"),
            MoveOutcome::ok("1"),
        ]
    );
    assert_eq!(report.failures(), 2);
    assert_eq!(platform.placement_of("1"), Some(GENERAL.to_string()));
    assert_eq!(platform.placement_of("3"), Some(OTHER.to_string()));

    Ok(())
}

/// Tests moving a member who is already in the target channel.
///
/// Expected: Ok([1 ok]) with no lookups and no relocation
#[tokio::test]
async fn already_placed_member_triggers_no_move() -> Result<(), VoiceError> {
    let platform = Arc::new(two_channel_platform().with_member("1", "Ann", Some(GENERAL)));
    let ctx = context(&platform);

    let report = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["1"]), GENERAL)
        .await?;

    assert_eq!(report.outcomes(), &[MoveOutcome::ok("1")]);
    assert!(platform.move_calls().is_empty());
    assert_eq!(platform.member_lookups(), 0);

    Ok(())
}

/// Tests a target outside the configured channel pair.
///
/// Expected: Err(VoiceError::UnconfiguredChannel) and zero platform calls
#[tokio::test]
async fn rejects_unconfigured_target_without_remote_calls() {
    let platform = Arc::new(two_channel_platform().with_member("1", "Ann", Some(GENERAL)));
    let ctx = context(&platform);

    let result = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["1"]), CHAT)
        .await;

    assert_eq!(result, Err(VoiceError::UnconfiguredChannel(CHAT.to_string())));
    assert!(platform.calls().is_empty());
}

/// Tests an empty selection.
///
/// Expected: Err(VoiceError::EmptySelection) and zero platform calls
#[tokio::test]
async fn rejects_empty_selection() {
    let platform = Arc::new(two_channel_platform());
    let ctx = context(&platform);

    let result = BatchMoveService::new(&ctx).move_selected(&[], GENERAL).await;

    assert_eq!(result, Err(VoiceError::EmptySelection));
    assert!(platform.calls().is_empty());
}

/// Tests a configured target that is not a voice channel.
///
/// Expected: Err(VoiceError::InvalidChannel) before any member is processed
#[tokio::test]
async fn rejects_non_voice_target() {
    let platform = Arc::new(two_channel_platform().with_member("1", "Ann", Some(GENERAL)));
    let ctx = context_with(
        &platform,
        VoiceChannelPair::new(GENERAL, CHAT),
        Duration::from_secs(5),
        Duration::from_secs(1),
    );

    let result = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["1"]), CHAT)
        .await;

    assert_eq!(result, Err(VoiceError::InvalidChannel(CHAT.to_string())));
    assert_eq!(
        platform.calls(),
        vec![PlatformCall::GetChannel(CHAT.to_string())]
    );
}

/// Tests a batch while Discord is unreachable.
///
/// Expected: Err(VoiceError::UpstreamUnavailable) with no member lookups or moves
#[tokio::test]
async fn unavailable_platform_aborts_before_members() {
    let platform = Arc::new(
        two_channel_platform()
            .with_member("1", "Ann", Some(GENERAL))
            .unavailable(),
    );
    let ctx = context(&platform);

    let result = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["1"]), OTHER)
        .await;

    assert!(matches!(result, Err(VoiceError::UpstreamUnavailable(_))));
    assert_eq!(platform.member_lookups(), 0);
    assert!(platform.move_calls().is_empty());
}

/// Tests that a slow member does not hold up the rest of the batch.
///
/// Expected: Ok([5 error(timeout), 1 ok])
#[tokio::test]
async fn timeout_is_isolated_to_member() -> Result<(), VoiceError> {
    let platform = Arc::new(
        two_channel_platform()
            .with_member("5", "Eve", Some(OTHER))
            .with_member("1", "Ann", Some(OTHER))
            .stalling_on("5"),
    );
    let ctx = context_with(
        &platform,
        VoiceChannelPair::new(GENERAL, OTHER),
        Duration::from_secs(5),
        Duration::from_millis(50),
    );

    let report = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["5", "1"]), GENERAL)
        .await?;

    assert_eq!(
        report.outcomes(),
        &[
            MoveOutcome::error(
                "5",
                VoiceError::Timeout(Duration::from_millis(50)).to_string()
            ),
            MoveOutcome::ok("1"),
        ]
    );
    assert_eq!(platform.placement_of("1"), Some(GENERAL.to_string()));

    Ok(())
}

/// Tests that a placement changed outside the panel is picked up.
///
/// After member 1 is moved to General, someone drags them back to Other Team. The next
/// batch reads General, sees member 1 is gone, drops the cached placement and moves
/// them again instead of reporting a false no-op.
///
/// Expected: second batch ok with a second relocation sent
#[tokio::test]
async fn refreshes_placement_changed_externally() -> Result<(), VoiceError> {
    let platform = Arc::new(two_channel_platform().with_member("1", "Ann", Some(OTHER)));
    let ctx = context(&platform);
    let service = BatchMoveService::new(&ctx);

    service.move_selected(&ids(&["1"]), GENERAL).await?;
    platform.set_placement("1", Some(OTHER));

    let report = service.move_selected(&ids(&["1"]), GENERAL).await?;

    assert_eq!(report.outcomes(), &[MoveOutcome::ok("1")]);
    assert_eq!(platform.move_calls().len(), 2);
    assert_eq!(platform.placement_of("1"), Some(GENERAL.to_string()));

    Ok(())
}

/// Tests a member whose lookup is refused.
///
/// Expected: Ok([6 error("Missing Access"), 1 ok]) with no relocation attempted for 6
#[tokio::test]
async fn refused_lookup_is_isolated_to_member() -> Result<(), VoiceError> {
    let platform = Arc::new(
        two_channel_platform()
            .with_member("6", "Fay", Some(OTHER))
            .with_member("1", "Ann", Some(OTHER))
            .refusing_lookups_of("6", "Missing Access"),
    );
    let ctx = context(&platform);

    let report = BatchMoveService::new(&ctx)
        .move_selected(&ids(&["6", "1"]), GENERAL)
        .await?;

    assert_eq!(
        report.outcomes(),
        &[
            MoveOutcome::error("6", "Missing Access"),
            MoveOutcome::ok("1"),
        ]
    );
    assert_eq!(
        platform.move_calls(),
        vec![("1".to_string(), GENERAL.to_string())]
    );

    Ok(())
}
