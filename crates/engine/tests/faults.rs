mod common;

use std::collections::VecDeque;

use stats_core::{ActionCategory, ActionResult, RecordId};
use stats_engine::services::{allocate_id, allocate_id_with};
use stats_engine::{DocumentKind, EngineError, ErrorSeverity, UpdateStage};

use common::{Call, Fault, new_game, new_player, seeded, seeded_faulty};

#[tokio::test]
async fn test_unreachable_store_is_not_reported_as_missing() {
    let (store, fx) = seeded_faulty().await;
    store.arm(Call::Count, Some(DocumentKind::Team), 0, Fault::Unreachable);

    let err = fx
        .engine
        .register_action(
            fx.player.id,
            &fx.action(ActionCategory::Attack, ActionResult::Point),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::StoreUnavailable {
            operation: "check team exists",
            ..
        }
    ));
    assert_eq!(err.severity(), ErrorSeverity::Unavailable);
}

#[tokio::test]
async fn test_team_failure_keeps_the_game_update() {
    let (store, fx) = seeded_faulty().await;
    store.arm(Call::Increment, Some(DocumentKind::Team), 0, Fault::NoMatch);

    let err = fx
        .engine
        .register_action(
            fx.player.id,
            &fx.action(ActionCategory::Block, ActionResult::Point),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::UpdateFailed(UpdateStage::TeamIncrement)
    ));

    let game = fx.engine.game(fx.game.id).await.unwrap();
    let team = fx.engine.team(fx.team.id).await.unwrap();
    let player = fx.engine.player(fx.player.id).await.unwrap();
    assert_eq!(game.stats.block.best, 1);
    assert!(game.stats.is_consistent());
    assert_eq!(team.stats.block.best, 0);
    assert_eq!(player.stats.block.best, 0);
}

#[tokio::test]
async fn test_each_phase_fails_with_its_own_stage() {
    let cases = [
        (Call::Increment, DocumentKind::Game, UpdateStage::GameIncrement),
        (Call::Replace, DocumentKind::Game, UpdateStage::GameRecompute),
        (Call::Increment, DocumentKind::Team, UpdateStage::TeamIncrement),
        (Call::Replace, DocumentKind::Team, UpdateStage::TeamRecompute),
        (Call::Increment, DocumentKind::Player, UpdateStage::PlayerIncrement),
        (Call::Replace, DocumentKind::Player, UpdateStage::PlayerRecompute),
    ];

    for (call, kind, stage) in cases {
        let (store, fx) = seeded_faulty().await;
        store.arm(call, Some(kind), 0, Fault::NoMatch);
        let err = fx
            .engine
            .register_action(
                fx.player.id,
                &fx.action(ActionCategory::Set, ActionResult::Neutral),
            )
            .await
            .unwrap_err();
        match err {
            EngineError::UpdateFailed(actual) => assert_eq!(actual, stage),
            other => panic!("{call:?} on {kind}: unexpected error {other}"),
        }
    }
}

#[tokio::test]
async fn test_stale_player_heals_on_next_action() {
    let (store, fx) = seeded_faulty().await;
    store.arm(Call::Replace, Some(DocumentKind::Player), 0, Fault::NoMatch);

    let err = fx
        .engine
        .register_action(
            fx.player.id,
            &fx.action(ActionCategory::Attack, ActionResult::Point),
        )
        .await
        .unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Internal);

    // Raw counter committed, derived fields stale.
    let player = fx.engine.player(fx.player.id).await.unwrap();
    assert_eq!(player.stats.attack.best, 1);
    assert_eq!(player.stats.attack.total, 0);
    assert!(!player.stats.is_consistent());

    fx.register(ActionCategory::Attack, ActionResult::Point).await;
    let player = fx.engine.player(fx.player.id).await.unwrap();
    assert_eq!(player.stats.attack.best, 2);
    assert_eq!(player.stats.attack.total, 2);
    assert!(player.stats.is_consistent());
}

#[tokio::test]
async fn test_unreachable_recompute_leaves_raw_counter_committed() {
    let (store, fx) = seeded_faulty().await;
    store.arm(Call::Replace, Some(DocumentKind::Game), 0, Fault::Unreachable);

    let err = fx
        .engine
        .register_action(
            fx.player.id,
            &fx.action(ActionCategory::Reception, ActionResult::Perfect),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::StoreUnavailable { .. }));

    let game = fx.engine.game(fx.game.id).await.unwrap();
    assert_eq!(game.stats.reception.best, 1);
    assert_eq!(game.stats.reception.total, 0);
    // The cascade never started.
    let team = fx.engine.team(fx.team.id).await.unwrap();
    assert_eq!(team.stats.reception.best, 0);

    let game = fx
        .register(ActionCategory::Reception, ActionResult::Error)
        .await;
    assert_eq!(game.stats.reception.total, 2);
    assert!(game.stats.is_consistent());
}

#[tokio::test]
async fn test_lost_game_insert_is_an_update_failure() {
    let (store, fx) = seeded_faulty().await;
    fx.engine.finish_game(fx.team.id, fx.game.id).await.unwrap();
    store.arm(Call::Insert, Some(DocumentKind::Game), 0, Fault::NoMatch);

    let err = fx
        .engine
        .create_game(fx.player.id, fx.team.id, new_game("Sagunto"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::UpdateFailed(UpdateStage::CreateGame)
    ));
    assert_eq!(fx.engine.team(fx.team.id).await.unwrap().total_games, 1);
}

#[tokio::test]
async fn test_lost_profile_write_is_an_update_failure() {
    let (store, fx) = seeded_faulty().await;
    store.arm(Call::Replace, Some(DocumentKind::Player), 0, Fault::NoMatch);

    let err = fx
        .engine
        .update_player(fx.player.id, new_player("marta.sanz@club.es"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::UpdateFailed(UpdateStage::UpdatePlayer)
    ));
    assert_eq!(err.error_code(), "UPDATE_FAILED");
    assert_eq!(fx.engine.player(fx.player.id).await.unwrap().email, "marta@club.es");
}

#[tokio::test]
async fn test_allocator_skips_used_team_and_game_ids() {
    let fx = seeded().await;
    let fresh = RecordId::from_bytes([0xab; RecordId::LEN]);
    let mut candidates = VecDeque::from([fx.team.id, fx.game.id, fresh]);

    let id = allocate_id_with(fx.engine.store(), move || {
        candidates.pop_front().expect("ran out of candidates")
    })
    .await
    .unwrap();
    assert_eq!(id, fresh);
}

#[tokio::test]
async fn test_allocator_fails_when_store_is_unreachable() {
    let (store, _fx) = seeded_faulty().await;
    store.arm(Call::Count, Some(DocumentKind::Game), 0, Fault::Unreachable);

    let err = allocate_id(store.as_ref()).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::StoreUnavailable {
            operation: "allocate id: count games",
            ..
        }
    ));
}
