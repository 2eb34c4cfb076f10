//! In-memory game ledger.
//!
//! Tracks each game's target, difficulty and guess counter, and turns a
//! submitted guess into a [`MoveOutcome`]. The counter is read and
//! incremented under one lock, so concurrent moves on the same game never
//! observe the same prior count.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use derive_more::Display;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::catalog::CountryCatalog;
use crate::country::{CountryId, Difficulty};
use crate::engine::{HintThresholds, MoveOutcome, assess_move};

/// Unique identifier for a game.
pub type GameId = String;

/// Opaque identity of the player who started a game.
pub type OwnerId = String;

/// Whether a game still accepts guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    /// Guesses are accepted.
    InProgress,
    /// The target was found.
    Won,
}

/// One game of guessing a single target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Game ID.
    pub id: GameId,
    /// The country to find.
    pub target: CountryId,
    /// Fixed for the life of the game.
    pub difficulty: Difficulty,
    /// Player who started the game, if signed in.
    pub owner: Option<OwnerId>,
    /// Guesses accepted so far.
    pub guess_count: u32,
    /// Guessed countries, oldest first.
    pub history: Vec<CountryId>,
    /// Game status.
    pub status: GameStatus,
}

impl GameSession {
    /// Creates a new game with no guesses.
    #[instrument]
    pub fn new(
        id: GameId,
        target: CountryId,
        difficulty: Difficulty,
        owner: Option<OwnerId>,
    ) -> Self {
        info!(game_id = %id, %difficulty, "Creating new game");
        Self {
            id,
            target,
            difficulty,
            owner,
            guess_count: 0,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Records a guess and returns the count before it.
    fn record_guess(&mut self, guess: CountryId) -> u32 {
        let prior = self.guess_count;
        self.guess_count = prior.saturating_add(1);
        self.history.push(guess);
        prior
    }
}

/// Error from a ledger operation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// A game with this ID already exists.
    #[display("Game '{}' already exists", _0)]
    GameExists(GameId),

    /// No game has this ID.
    #[display("Game '{}' not found", _0)]
    GameNotFound(GameId),

    /// The catalog has no country with this ID.
    #[display("Country {} not found", _0)]
    CountryNotFound(CountryId),

    /// The game's target has already been found.
    #[display("Game '{}' is already over", _0)]
    GameOver(GameId),

    /// Another thread panicked while holding the ledger lock.
    #[display("Game ledger lock poisoned")]
    LockPoisoned,
}

impl std::error::Error for SessionError {}

/// Manages all games over a shared country catalog.
#[derive(Debug, Clone)]
pub struct SessionManager {
    catalog: Arc<CountryCatalog>,
    thresholds: HintThresholds,
    sessions: Arc<Mutex<HashMap<GameId, GameSession>>>,
}

impl SessionManager {
    /// Creates a manager with no games.
    #[instrument(skip(catalog), fields(countries = catalog.len()))]
    pub fn new(catalog: Arc<CountryCatalog>, thresholds: HintThresholds) -> Self {
        info!("Creating session manager");
        Self {
            catalog,
            thresholds,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The catalog games are played over.
    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<GameId, GameSession>>, SessionError> {
        self.sessions.lock().map_err(|_| {
            warn!("Game ledger lock poisoned");
            SessionError::LockPoisoned
        })
    }

    /// Starts a game against `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameExists`] for a reused ID and
    /// [`SessionError::CountryNotFound`] for an unknown target.
    #[instrument(skip(self))]
    pub fn create_game(
        &self,
        id: GameId,
        target: CountryId,
        difficulty: Difficulty,
        owner: Option<OwnerId>,
    ) -> Result<GameId, SessionError> {
        if self.catalog.get(target).is_none() {
            warn!(%target, "Unknown target country");
            return Err(SessionError::CountryNotFound(target));
        }

        let mut sessions = self.lock()?;
        if sessions.contains_key(&id) {
            warn!(game_id = %id, "Game already exists");
            return Err(SessionError::GameExists(id));
        }

        sessions.insert(id.clone(), GameSession::new(id.clone(), target, difficulty, owner));
        info!(game_id = %id, total_games = sessions.len(), "Game created");
        Ok(id)
    }

    /// Submits a guess and returns the feedback for it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] for an unknown game or country, or when the
    /// game is already won. Rejected guesses are not counted.
    #[instrument(skip(self))]
    pub fn submit_guess(&self, game_id: &str, guess: CountryId) -> Result<MoveOutcome, SessionError> {
        let guess_country = self.catalog.get(guess).ok_or_else(|| {
            warn!(%guess, "Unknown guess country");
            SessionError::CountryNotFound(guess)
        })?;

        let mut sessions = self.lock()?;
        let session = sessions.get_mut(game_id).ok_or_else(|| {
            warn!(game_id, "Guess for unknown game");
            SessionError::GameNotFound(game_id.to_string())
        })?;

        if session.status == GameStatus::Won {
            warn!(game_id, "Guess after game was won");
            return Err(SessionError::GameOver(session.id.clone()));
        }

        let target = self
            .catalog
            .get(session.target)
            .ok_or(SessionError::CountryNotFound(session.target))?;

        let prior = session.record_guess(guess);
        let outcome = assess_move(
            guess_country,
            target,
            session.difficulty,
            prior,
            &self.thresholds,
        );

        if outcome.correct {
            session.status = GameStatus::Won;
            info!(game_id, guesses = session.guess_count, "Target found");
        } else {
            debug!(game_id, guesses = session.guess_count, "Guess recorded");
        }

        Ok(outcome)
    }

    /// Number of guesses accepted for a game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::GameNotFound`] for an unknown game.
    #[instrument(skip(self))]
    pub fn move_count(&self, game_id: &str) -> Result<u32, SessionError> {
        self.lock()?
            .get(game_id)
            .map(|s| s.guess_count)
            .ok_or_else(|| SessionError::GameNotFound(game_id.to_string()))
    }

    /// Snapshot of a game.
    #[instrument(skip(self))]
    pub fn get_game(&self, game_id: &str) -> Result<Option<GameSession>, SessionError> {
        Ok(self.lock()?.get(game_id).cloned())
    }

    /// Removes a game, returning its final state.
    #[instrument(skip(self))]
    pub fn remove_game(&self, game_id: &str) -> Result<Option<GameSession>, SessionError> {
        let removed = self.lock()?.remove(game_id);
        if removed.is_some() {
            info!(game_id, "Game removed");
        }
        Ok(removed)
    }

    /// IDs of all games.
    #[instrument(skip(self))]
    pub fn list_games(&self) -> Result<Vec<GameId>, SessionError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}
