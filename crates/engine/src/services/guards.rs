//! Precondition checks gating registration and the lifecycle flows.
//!
//! Existence is checked by count, never by fetch: anything other than exactly
//! one match fails the check.

use stats_core::{ActionCategory, ActionResult, CounterSlot, Game, RecordId};

use crate::api::errors::{ConflictReason, EngineError, Result, StoreResultExt};
use crate::repository::{DocumentKind, DocumentStore, Predicate};

async fn assert_exactly_one(
    store: &dyn DocumentStore,
    predicate: &Predicate,
    operation: &'static str,
) -> Result<()> {
    let count = store.count_matching(predicate).await.during(operation)?;
    if count != 1 {
        tracing::warn!(?predicate, count, "existence check failed");
        return Err(EngineError::NotFound(predicate.kind()));
    }
    tracing::debug!(?predicate, "record found");
    Ok(())
}

pub async fn assert_player_exists(store: &dyn DocumentStore, player_id: RecordId) -> Result<()> {
    assert_exactly_one(store, &Predicate::Player(player_id), "check player exists").await
}

pub async fn assert_team_exists(store: &dyn DocumentStore, team_id: RecordId) -> Result<()> {
    assert_exactly_one(store, &Predicate::Team(team_id), "check team exists").await
}

/// The game must exist under the given team.
pub async fn assert_game_exists(
    store: &dyn DocumentStore,
    team_id: RecordId,
    game_id: RecordId,
) -> Result<()> {
    let predicate = Predicate::TeamGame { team_id, game_id };
    assert_exactly_one(store, &predicate, "check game exists").await
}

/// Rejects actions against, or a second finish of, a finished game.
pub async fn assert_game_active(
    store: &dyn DocumentStore,
    team_id: RecordId,
    game_id: RecordId,
) -> Result<()> {
    let active = store
        .count_matching(&Predicate::ActiveTeamGame { team_id, game_id })
        .await
        .during("check game active")?;
    if active != 1 {
        tracing::warn!(%game_id, "game is already finished");
        return Err(EngineError::Conflict(ConflictReason::GameAlreadyFinished));
    }
    tracing::debug!(%game_id, "game is still active");
    Ok(())
}

/// Fails on the first active game, reporting which game blocks.
pub fn assert_no_active_game<'a>(games: impl IntoIterator<Item = &'a Game>) -> Result<()> {
    if let Some(game) = games.into_iter().find(|game| game.is_active()) {
        tracing::warn!(game_id = %game.id, "an active game blocks a new one");
        return Err(EngineError::Conflict(ConflictReason::ActiveGame {
            id: game.id,
            started_at: game.started_at,
            city: game.city.clone(),
            country: game.country.clone(),
            opponent: game.opponent.clone(),
        }));
    }
    tracing::debug!("no active games found");
    Ok(())
}

/// Maps a scored action onto its raw counter or rejects the pair.
pub fn check_pair(category: ActionCategory, result: ActionResult) -> Result<CounterSlot> {
    CounterSlot::for_action(category, result).ok_or_else(|| {
        tracing::warn!(%category, %result, "invalid action pair");
        EngineError::InvalidActionPair { category, result }
    })
}

/// The name must not be used by another team of the same player.
pub async fn assert_team_name_free(
    store: &dyn DocumentStore,
    player_id: RecordId,
    name: &str,
    except: Option<RecordId>,
) -> Result<()> {
    let teams = store
        .find_many(&Predicate::TeamsOf(player_id))
        .await
        .during("check team name")?;
    let clash = teams
        .into_iter()
        .filter_map(|doc| doc.into_team())
        .any(|team| team.name == name && Some(team.id) != except);
    if clash {
        tracing::warn!(%player_id, name, "team name already taken");
        return Err(EngineError::Conflict(ConflictReason::TeamNameTaken(
            name.to_owned(),
        )));
    }
    Ok(())
}

pub async fn assert_email_free(store: &dyn DocumentStore, email: &str) -> Result<()> {
    let taken = store
        .count_matching(&Predicate::PlayerByEmail(email.to_owned()))
        .await
        .during("check email")?;
    if taken > 0 {
        tracing::warn!(email, "email already registered");
        return Err(EngineError::Conflict(ConflictReason::EmailTaken(
            email.to_owned(),
        )));
    }
    Ok(())
}

/// Returns the owner of a team, or `NotFound(Team)`.
pub async fn team_owner(store: &dyn DocumentStore, team_id: RecordId) -> Result<RecordId> {
    store
        .find_one(&Predicate::Team(team_id))
        .await
        .during("load team owner")?
        .and_then(|doc| doc.into_team())
        .map(|team| team.player_id)
        .ok_or(EngineError::NotFound(DocumentKind::Team))
}
