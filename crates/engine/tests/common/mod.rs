#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stats_core::{
    ActionCategory, ActionResult, CounterSlot, Game, NewGame, NewPlayer, NewTeam, Player, Team,
};
use stats_engine::{
    Document, DocumentKind, DocumentStore, FieldUpdate, GameAction, InMemoryDocumentStore,
    Predicate, StatsEngine, StoreError, StoreResult,
};

/// Store calls a fault can be armed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    Count,
    FindOne,
    FindMany,
    Insert,
    Increment,
    Replace,
    Delete,
}

/// What an armed call does instead of reaching the inner store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// Fails with `StoreError::Unreachable`.
    Unreachable,
    /// Behaves as if nothing matched.
    NoMatch,
}

struct Rule {
    call: Call,
    kind: Option<DocumentKind>,
    skip: usize,
    fault: Fault,
}

/// In-memory store that fails selected calls once.
#[derive(Default)]
pub struct FaultyStore {
    inner: InMemoryDocumentStore,
    rules: Mutex<Vec<Rule>>,
}

impl FaultyStore {
    /// Arms `fault` for the next `call` on records of `kind` (any kind when
    /// `None`), after letting `skip` matching calls through.
    pub fn arm(&self, call: Call, kind: Option<DocumentKind>, skip: usize, fault: Fault) {
        self.rules.lock().unwrap().push(Rule {
            call,
            kind,
            skip,
            fault,
        });
    }

    fn take(&self, call: Call, kind: DocumentKind) -> Option<Fault> {
        let mut rules = self.rules.lock().unwrap();
        let index = rules
            .iter()
            .position(|rule| rule.call == call && rule.kind.is_none_or(|k| k == kind))?;
        if rules[index].skip > 0 {
            rules[index].skip -= 1;
            return None;
        }
        Some(rules.remove(index).fault)
    }

    fn unreachable() -> StoreError {
        StoreError::Unreachable("injected fault".into())
    }
}

#[async_trait]
impl DocumentStore for FaultyStore {
    async fn count_matching(&self, predicate: &Predicate) -> StoreResult<u64> {
        match self.take(Call::Count, predicate.kind()) {
            Some(Fault::Unreachable) => Err(Self::unreachable()),
            Some(Fault::NoMatch) => Ok(0),
            None => self.inner.count_matching(predicate).await,
        }
    }

    async fn find_one(&self, predicate: &Predicate) -> StoreResult<Option<Document>> {
        match self.take(Call::FindOne, predicate.kind()) {
            Some(Fault::Unreachable) => Err(Self::unreachable()),
            Some(Fault::NoMatch) => Ok(None),
            None => self.inner.find_one(predicate).await,
        }
    }

    async fn find_many(&self, predicate: &Predicate) -> StoreResult<Vec<Document>> {
        match self.take(Call::FindMany, predicate.kind()) {
            Some(Fault::Unreachable) => Err(Self::unreachable()),
            Some(Fault::NoMatch) => Ok(Vec::new()),
            None => self.inner.find_many(predicate).await,
        }
    }

    async fn insert(&self, document: Document) -> StoreResult<bool> {
        match self.take(Call::Insert, document.kind()) {
            Some(Fault::Unreachable) => Err(Self::unreachable()),
            Some(Fault::NoMatch) => Ok(false),
            None => self.inner.insert(document).await,
        }
    }

    async fn atomic_increment(
        &self,
        predicate: &Predicate,
        slot: CounterSlot,
        delta: u64,
    ) -> StoreResult<Option<Document>> {
        match self.take(Call::Increment, predicate.kind()) {
            Some(Fault::Unreachable) => Err(Self::unreachable()),
            Some(Fault::NoMatch) => Ok(None),
            None => self.inner.atomic_increment(predicate, slot, delta).await,
        }
    }

    async fn atomic_replace(
        &self,
        predicate: &Predicate,
        update: FieldUpdate,
    ) -> StoreResult<Option<Document>> {
        match self.take(Call::Replace, predicate.kind()) {
            Some(Fault::Unreachable) => Err(Self::unreachable()),
            Some(Fault::NoMatch) => Ok(None),
            None => self.inner.atomic_replace(predicate, update).await,
        }
    }

    async fn delete_matching(&self, predicate: &Predicate) -> StoreResult<u64> {
        match self.take(Call::Delete, predicate.kind()) {
            Some(Fault::Unreachable) => Err(Self::unreachable()),
            Some(Fault::NoMatch) => Ok(0),
            None => self.inner.delete_matching(predicate).await,
        }
    }
}

/// A player with one team and one active game.
pub struct Fixture {
    pub engine: StatsEngine,
    pub player: Player,
    pub team: Team,
    pub game: Game,
}

impl Fixture {
    pub fn action(&self, category: ActionCategory, result: ActionResult) -> GameAction {
        GameAction {
            team_id: self.team.id,
            game_id: self.game.id,
            category,
            result,
        }
    }

    pub async fn register(&self, category: ActionCategory, result: ActionResult) -> Game {
        self.engine
            .register_action(self.player.id, &self.action(category, result))
            .await
            .expect("action should register")
    }
}

pub fn new_player(email: &str) -> NewPlayer {
    NewPlayer::new("Marta", "Sanz", "Women", "OH", email).expect("valid player")
}

pub fn new_team(name: &str) -> NewTeam {
    NewTeam::new(name, "Women").expect("valid team")
}

pub fn new_game(opponent: &str) -> NewGame {
    NewGame::new("Spain", "Valencia", opponent, "OH", "7").expect("valid game")
}

pub async fn seed(engine: StatsEngine) -> Fixture {
    let player = engine
        .create_player(new_player("marta@club.es"))
        .await
        .expect("player should be created");
    let team = engine
        .create_team(player.id, new_team("Valencia Volley"))
        .await
        .expect("team should be created");
    let game = engine
        .create_game(player.id, team.id, new_game("Castellón"))
        .await
        .expect("game should be created");
    Fixture {
        engine,
        player,
        team,
        game,
    }
}

pub async fn seeded() -> Fixture {
    seed(StatsEngine::in_memory()).await
}

pub async fn seeded_faulty() -> (Arc<FaultyStore>, Fixture) {
    let store = Arc::new(FaultyStore::default());
    let fixture = seed(StatsEngine::new(store.clone())).await;
    (store, fixture)
}
