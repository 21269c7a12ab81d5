mod common;

use stats_core::{ActionCategory, ActionResult, GameStatus};
use stats_engine::{EngineConfig, StatsEngine, StoreBackend};
use tempfile::TempDir;

use common::seed;

fn file_config(dir: &TempDir) -> EngineConfig {
    EngineConfig {
        store: StoreBackend::File,
        data_dir: dir.path().to_path_buf(),
        log_dir: dir.path().join("logs"),
    }
}

#[tokio::test]
async fn test_statistics_survive_restart() {
    let dir = TempDir::new().expect("temp dir");
    let engine = StatsEngine::from_config(&file_config(&dir)).expect("file store should open");
    let fx = seed(engine).await;

    fx.register(ActionCategory::Attack, ActionResult::Point).await;
    fx.register(ActionCategory::Attack, ActionResult::Error).await;
    fx.engine.finish_game(fx.team.id, fx.game.id).await.unwrap();
    drop(fx.engine);

    let reopened = StatsEngine::from_config(&file_config(&dir)).expect("file store should reopen");
    let game = reopened.game(fx.game.id).await.unwrap();
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.stats.attack.total, 2);
    assert_eq!(game.stats.attack.effectiveness.as_f64(), 0.5);

    let player = reopened.player(fx.player.id).await.unwrap();
    assert_eq!(player.total_teams, 1);
    assert_eq!(player.total_games, 1);
    assert_eq!(player.stats.totals.actions, 2);
    assert!(player.stats.is_consistent());
}

#[tokio::test]
async fn test_corrupted_store_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("volley-store.json"), "{ not json").unwrap();

    let err = StatsEngine::from_config(&file_config(&dir))
        .err()
        .expect("corrupted file must not open");
    assert_eq!(err.error_code(), "STORE_UNAVAILABLE");
}
