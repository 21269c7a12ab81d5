use chrono::Utc;
use stats_core::validation::team_name;
use stats_core::{NewTeam, RecordId, Team};

use super::{counts, guards, ids};
use crate::api::errors::{EngineError, Result, StoreResultExt, UpdateStage};
use crate::repository::{Document, DocumentKind, DocumentStore, FieldUpdate, Predicate};

/// Registers a team under `player_id` and refreshes the player's team count.
pub async fn create_team(
    store: &dyn DocumentStore,
    player_id: RecordId,
    request: NewTeam,
) -> Result<Team> {
    guards::assert_player_exists(store, player_id).await?;
    guards::assert_team_name_free(store, player_id, &request.name, None).await?;

    let id = ids::allocate_id(store).await?;
    let team = Team::new(id, player_id, request, Utc::now());
    let inserted = store
        .insert(Document::Team(team.clone()))
        .await
        .during("insert team")?;
    if !inserted {
        return Err(EngineError::UpdateFailed(UpdateStage::CreateTeam));
    }
    tracing::info!(team_id = %team.id, %player_id, name = %team.name, "team created");

    counts::recount_player_teams(store, player_id).await?;
    Ok(team)
}

/// Renames a team; the name must stay unique among its owner's teams.
pub async fn rename_team(store: &dyn DocumentStore, team_id: RecordId, new_name: &str) -> Result<Team> {
    let name = team_name(new_name)?;
    guards::assert_team_exists(store, team_id).await?;
    let owner = guards::team_owner(store, team_id).await?;
    guards::assert_team_name_free(store, owner, &name, Some(team_id)).await?;

    let team = store
        .atomic_replace(&Predicate::Team(team_id), FieldUpdate::TeamName(name))
        .await
        .during("rename team")?
        .and_then(|doc| doc.into_team())
        .ok_or(EngineError::UpdateFailed(UpdateStage::RenameTeam))?;

    tracing::info!(%team_id, name = %team.name, "team renamed");
    Ok(team)
}

/// Removes a team with its games and refreshes the owner's cached counts.
pub async fn delete_team(
    store: &dyn DocumentStore,
    player_id: RecordId,
    team_id: RecordId,
) -> Result<()> {
    guards::assert_team_exists(store, team_id).await?;
    if guards::team_owner(store, team_id).await? != player_id {
        tracing::warn!(%team_id, %player_id, "team belongs to another player");
        return Err(EngineError::NotFound(DocumentKind::Team));
    }

    let deleted = store
        .delete_matching(&Predicate::Team(team_id))
        .await
        .during("delete team")?;
    if deleted != 1 {
        return Err(EngineError::UpdateFailed(UpdateStage::DeleteTeam));
    }
    tracing::info!(%team_id, %player_id, "team deleted");

    counts::recount_player_teams(store, player_id).await?;
    counts::recount_player_games(store, player_id).await?;
    Ok(())
}
