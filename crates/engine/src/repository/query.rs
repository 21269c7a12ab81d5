//! Typed predicates, documents and field updates understood by every store.
//!
//! Records are kept side by side (players, teams, games) with parent
//! back-references, so every predicate reduces to identifier equality on one
//! record kind.

use stats_core::{Game, GameStatus, NewPlayer, Player, RecordId, Statistics, Team, Tracked};

/// The three record kinds held by a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DocumentKind {
    Player,
    Team,
    Game,
}

/// Selects records of a single kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// Every player.
    AllPlayers,
    /// The player with this id.
    Player(RecordId),
    /// Players registered under this email (case-insensitive).
    PlayerByEmail(String),
    /// Every team.
    AllTeams,
    /// The team with this id.
    Team(RecordId),
    /// Every team owned by this player.
    TeamsOf(RecordId),
    /// The game with this id.
    Game(RecordId),
    /// The game `game_id` owned by team `team_id`.
    TeamGame { team_id: RecordId, game_id: RecordId },
    /// Same as [`Predicate::TeamGame`], restricted to an active game.
    ActiveTeamGame { team_id: RecordId, game_id: RecordId },
    /// Every game owned by this team.
    GamesOf(RecordId),
}

impl Predicate {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::AllPlayers | Self::Player(_) | Self::PlayerByEmail(_) => DocumentKind::Player,
            Self::AllTeams | Self::Team(_) | Self::TeamsOf(_) => DocumentKind::Team,
            Self::Game(_)
            | Self::TeamGame { .. }
            | Self::ActiveTeamGame { .. }
            | Self::GamesOf(_) => DocumentKind::Game,
        }
    }

    pub fn matches_player(&self, player: &Player) -> bool {
        match self {
            Self::AllPlayers => true,
            Self::Player(id) => player.id == *id,
            Self::PlayerByEmail(email) => player.email.eq_ignore_ascii_case(email),
            _ => false,
        }
    }

    pub fn matches_team(&self, team: &Team) -> bool {
        match self {
            Self::AllTeams => true,
            Self::Team(id) => team.id == *id,
            Self::TeamsOf(player_id) => team.player_id == *player_id,
            _ => false,
        }
    }

    pub fn matches_game(&self, game: &Game) -> bool {
        match self {
            Self::Game(id) => game.id == *id,
            Self::TeamGame { team_id, game_id } => game.id == *game_id && game.team_id == *team_id,
            Self::ActiveTeamGame { team_id, game_id } => {
                game.id == *game_id && game.team_id == *team_id && game.is_active()
            }
            Self::GamesOf(team_id) => game.team_id == *team_id,
            _ => false,
        }
    }
}

/// A record read from or written to a store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Document {
    Player(Player),
    Team(Team),
    Game(Game),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Player(_) => DocumentKind::Player,
            Self::Team(_) => DocumentKind::Team,
            Self::Game(_) => DocumentKind::Game,
        }
    }

    pub fn id(&self) -> RecordId {
        match self {
            Self::Player(player) => player.id,
            Self::Team(team) => team.id,
            Self::Game(game) => game.id,
        }
    }

    pub fn stats(&self) -> &Statistics {
        match self {
            Self::Player(player) => player.stats(),
            Self::Team(team) => team.stats(),
            Self::Game(game) => game.stats(),
        }
    }

    pub fn into_player(self) -> Option<Player> {
        match self {
            Self::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn into_team(self) -> Option<Team> {
        match self {
            Self::Team(team) => Some(team),
            _ => None,
        }
    }

    pub fn into_game(self) -> Option<Game> {
        match self {
            Self::Game(game) => Some(game),
            _ => None,
        }
    }
}

/// A whole-field overwrite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Overwrites every derived statistics field of any record kind with the
    /// ones carried here; raw counters are left as stored.
    DerivedStatistics(Statistics),
    /// Game lifecycle status.
    Status(GameStatus),
    /// Team name.
    TeamName(String),
    /// Player name, category, position and email.
    PlayerProfile(NewPlayer),
    /// Cached game count of a team.
    TeamGameCount(u64),
    /// Cached team count of a player.
    PlayerTeamCount(u64),
    /// Cached game count of a player.
    PlayerGameCount(u64),
}

impl FieldUpdate {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::DerivedStatistics(_) => "stats",
            Self::Status(_) => "status",
            Self::TeamName(_) => "name",
            Self::PlayerProfile(_) => "profile",
            Self::TeamGameCount(_) | Self::PlayerGameCount(_) => "total_games",
            Self::PlayerTeamCount(_) => "total_teams",
        }
    }
}
