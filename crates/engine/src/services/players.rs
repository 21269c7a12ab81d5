use chrono::Utc;
use stats_core::{NewPlayer, Player, RecordId};

use super::{guards, ids, queries};
use crate::api::errors::{EngineError, Result, StoreResultExt, UpdateStage};
use crate::repository::{Document, DocumentStore, FieldUpdate, Predicate};

/// Registers a player with zeroed statistics and counts.
pub async fn create_player(store: &dyn DocumentStore, request: NewPlayer) -> Result<Player> {
    guards::assert_email_free(store, &request.email).await?;

    let id = ids::allocate_id(store).await?;
    let player = Player::new(id, request, Utc::now());
    let inserted = store
        .insert(Document::Player(player.clone()))
        .await
        .during("insert player")?;
    if !inserted {
        return Err(EngineError::UpdateFailed(UpdateStage::CreatePlayer));
    }

    tracing::info!(
        player_id = %player.id,
        name = %player.full_name(),
        email = %player.email,
        "player created"
    );
    Ok(player)
}

/// Replaces a player's profile fields.
///
/// Email uniqueness is only checked when the email actually changes, so a
/// player may resubmit their own address.
pub async fn update_player(
    store: &dyn DocumentStore,
    player_id: RecordId,
    request: NewPlayer,
) -> Result<Player> {
    let current = queries::player(store, player_id).await?;
    if !current.email.eq_ignore_ascii_case(&request.email) {
        guards::assert_email_free(store, &request.email).await?;
    }

    let player = store
        .atomic_replace(&Predicate::Player(player_id), FieldUpdate::PlayerProfile(request))
        .await
        .during("update player")?
        .and_then(|doc| doc.into_player())
        .ok_or(EngineError::UpdateFailed(UpdateStage::UpdatePlayer))?;

    tracing::info!(%player_id, name = %player.full_name(), "player updated");
    Ok(player)
}

/// Removes a player together with every team and game it owns.
pub async fn delete_player(store: &dyn DocumentStore, player_id: RecordId) -> Result<()> {
    guards::assert_player_exists(store, player_id).await?;

    let deleted = store
        .delete_matching(&Predicate::Player(player_id))
        .await
        .during("delete player")?;
    if deleted != 1 {
        return Err(EngineError::UpdateFailed(UpdateStage::DeletePlayer));
    }

    tracing::info!(%player_id, "player deleted");
    Ok(())
}
