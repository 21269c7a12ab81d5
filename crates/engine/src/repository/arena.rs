//! Record arena shared by the in-memory and file stores.

use serde::{Deserialize, Serialize};
use stats_core::{CounterSlot, Game, Player, Team, Tracked};

use super::{Document, DocumentKind, FieldUpdate, Predicate, StoreError, StoreResult};

/// Players, teams and games in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Arena {
    #[serde(default)]
    players: Vec<Player>,
    #[serde(default)]
    teams: Vec<Team>,
    #[serde(default)]
    games: Vec<Game>,
}

/// Mutable borrow of the first record matched by a predicate.
enum RecordMut<'a> {
    Player(&'a mut Player),
    Team(&'a mut Team),
    Game(&'a mut Game),
}

impl RecordMut<'_> {
    fn tracked(&mut self) -> &mut dyn Tracked {
        match self {
            Self::Player(player) => &mut **player,
            Self::Team(team) => &mut **team,
            Self::Game(game) => &mut **game,
        }
    }

    fn snapshot(&self) -> Document {
        match self {
            Self::Player(player) => Document::Player((**player).clone()),
            Self::Team(team) => Document::Team((**team).clone()),
            Self::Game(game) => Document::Game((**game).clone()),
        }
    }

    fn kind(&self) -> DocumentKind {
        match self {
            Self::Player(_) => DocumentKind::Player,
            Self::Team(_) => DocumentKind::Team,
            Self::Game(_) => DocumentKind::Game,
        }
    }

    fn apply(&mut self, update: FieldUpdate) -> StoreResult<()> {
        let kind = self.kind();
        let field = update.field_name();
        match (self, update) {
            (record, FieldUpdate::DerivedStatistics(stats)) => {
                record.tracked().stats_mut().adopt_derived(&stats)
            }
            (Self::Game(game), FieldUpdate::Status(status)) => game.status = status,
            (Self::Team(team), FieldUpdate::TeamName(name)) => team.name = name,
            (Self::Player(player), FieldUpdate::PlayerProfile(profile)) => {
                player.update_profile(profile)
            }
            (Self::Team(team), FieldUpdate::TeamGameCount(count)) => team.total_games = count,
            (Self::Player(player), FieldUpdate::PlayerTeamCount(count)) => {
                player.total_teams = count
            }
            (Self::Player(player), FieldUpdate::PlayerGameCount(count)) => {
                player.total_games = count
            }
            _ => return Err(StoreError::FieldMismatch { kind, field }),
        }
        Ok(())
    }
}

impl Arena {
    pub(crate) fn count(&self, predicate: &Predicate) -> u64 {
        let count = match predicate.kind() {
            DocumentKind::Player => self
                .players
                .iter()
                .filter(|p| predicate.matches_player(p))
                .count(),
            DocumentKind::Team => self.teams.iter().filter(|t| predicate.matches_team(t)).count(),
            DocumentKind::Game => self.games.iter().filter(|g| predicate.matches_game(g)).count(),
        };
        count as u64
    }

    pub(crate) fn find(&self, predicate: &Predicate) -> Vec<Document> {
        match predicate.kind() {
            DocumentKind::Player => self
                .players
                .iter()
                .filter(|p| predicate.matches_player(p))
                .cloned()
                .map(Document::Player)
                .collect(),
            DocumentKind::Team => self
                .teams
                .iter()
                .filter(|t| predicate.matches_team(t))
                .cloned()
                .map(Document::Team)
                .collect(),
            DocumentKind::Game => self
                .games
                .iter()
                .filter(|g| predicate.matches_game(g))
                .cloned()
                .map(Document::Game)
                .collect(),
        }
    }

    pub(crate) fn find_first(&self, predicate: &Predicate) -> Option<Document> {
        match predicate.kind() {
            DocumentKind::Player => self
                .players
                .iter()
                .find(|p| predicate.matches_player(p))
                .cloned()
                .map(Document::Player),
            DocumentKind::Team => self
                .teams
                .iter()
                .find(|t| predicate.matches_team(t))
                .cloned()
                .map(Document::Team),
            DocumentKind::Game => self
                .games
                .iter()
                .find(|g| predicate.matches_game(g))
                .cloned()
                .map(Document::Game),
        }
    }

    fn first_mut(&mut self, predicate: &Predicate) -> Option<RecordMut<'_>> {
        match predicate.kind() {
            DocumentKind::Player => self
                .players
                .iter_mut()
                .find(|p| predicate.matches_player(p))
                .map(RecordMut::Player),
            DocumentKind::Team => self
                .teams
                .iter_mut()
                .find(|t| predicate.matches_team(t))
                .map(RecordMut::Team),
            DocumentKind::Game => self
                .games
                .iter_mut()
                .find(|g| predicate.matches_game(g))
                .map(RecordMut::Game),
        }
    }

    pub(crate) fn insert(&mut self, document: Document) -> bool {
        let id = document.id();
        let id_taken = self.players.iter().any(|p| p.id == id)
            || self.teams.iter().any(|t| t.id == id)
            || self.games.iter().any(|g| g.id == id);
        if id_taken {
            return false;
        }
        match document {
            Document::Player(player) => self.players.push(player),
            Document::Team(team) => {
                if !self.players.iter().any(|p| p.id == team.player_id) {
                    return false;
                }
                self.teams.push(team);
            }
            Document::Game(game) => {
                if !self.teams.iter().any(|t| t.id == game.team_id) {
                    return false;
                }
                self.games.push(game);
            }
        }
        true
    }

    pub(crate) fn increment(
        &mut self,
        predicate: &Predicate,
        slot: CounterSlot,
        delta: u64,
    ) -> Option<Document> {
        let mut record = self.first_mut(predicate)?;
        record.tracked().stats_mut().increment(slot, delta);
        Some(record.snapshot())
    }

    pub(crate) fn replace(
        &mut self,
        predicate: &Predicate,
        update: FieldUpdate,
    ) -> StoreResult<Option<Document>> {
        let Some(mut record) = self.first_mut(predicate) else {
            return Ok(None);
        };
        record.apply(update)?;
        Ok(Some(record.snapshot()))
    }

    pub(crate) fn delete(&mut self, predicate: &Predicate) -> u64 {
        let matched = self.count(predicate);
        match predicate.kind() {
            DocumentKind::Player => {
                let doomed: Vec<_> = self
                    .players
                    .iter()
                    .filter(|p| predicate.matches_player(p))
                    .map(|p| p.id)
                    .collect();
                self.players.retain(|p| !doomed.contains(&p.id));
                let doomed_teams: Vec<_> = self
                    .teams
                    .iter()
                    .filter(|t| doomed.contains(&t.player_id))
                    .map(|t| t.id)
                    .collect();
                self.teams.retain(|t| !doomed_teams.contains(&t.id));
                self.games.retain(|g| !doomed_teams.contains(&g.team_id));
            }
            DocumentKind::Team => {
                let doomed: Vec<_> = self
                    .teams
                    .iter()
                    .filter(|t| predicate.matches_team(t))
                    .map(|t| t.id)
                    .collect();
                self.teams.retain(|t| !doomed.contains(&t.id));
                self.games.retain(|g| !doomed.contains(&g.team_id));
            }
            DocumentKind::Game => self.games.retain(|g| !predicate.matches_game(g)),
        }
        matched
    }
}
