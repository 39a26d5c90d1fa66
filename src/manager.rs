//! Registry hosting many independent games.

use crate::error::EngineError;
use crate::game::{Game, GameId};
use crate::player::Player;
use crate::types::{Mark, MoveOutcome};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Owns a collection of games keyed by id and routes per-game operations.
///
/// Each game is exclusively owned by its map entry; deleting the entry
/// drops the game. The manager itself is synchronous, so a caller that
/// serves concurrent clients wraps it in its own locking discipline.
#[derive(Debug, Default)]
pub struct GameManager {
    games: HashMap<GameId, Game>,
}

impl GameManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Creates a game between the two player ids and registers it.
    ///
    /// The first id plays `X` and moves first, the second plays `O`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PlayerIdConflict`] when both ids are equal.
    #[instrument(skip(self))]
    pub fn create_game(
        &mut self,
        player1_id: &str,
        player2_id: &str,
    ) -> Result<GameId, EngineError> {
        let game = Game::new(
            Player::new(player1_id, Mark::X),
            Player::new(player2_id, Mark::O),
        )?;
        let id = game.id();
        self.games.insert(id, game);
        info!(game_id = %id, count = self.games.len(), "registered game");
        Ok(id)
    }

    /// Looks up a game by id.
    pub fn game(&self, game_id: GameId) -> Option<&Game> {
        self.games.get(&game_id)
    }

    /// Looks up a game by id for mutation.
    pub fn game_mut(&mut self, game_id: GameId) -> Option<&mut Game> {
        self.games.get_mut(&game_id)
    }

    /// Routes a move to the addressed game.
    ///
    /// Reports [`MoveOutcome::GameNotFound`] for an unknown id without
    /// touching any game; otherwise forwards the game's own outcome
    /// verbatim.
    #[instrument(skip(self))]
    pub fn submit_move(
        &mut self,
        game_id: GameId,
        player_id: &str,
        row: usize,
        col: usize,
    ) -> MoveOutcome {
        match self.games.get_mut(&game_id) {
            Some(game) => game.submit_move(player_id, row, col),
            None => {
                debug!("move addressed to unknown game");
                MoveOutcome::GameNotFound
            }
        }
    }

    /// Removes a game, dropping its state. Returns whether an entry
    /// existed.
    #[instrument(skip(self))]
    pub fn delete_game(&mut self, game_id: GameId) -> bool {
        let removed = self.games.remove(&game_id).is_some();
        if removed {
            info!(count = self.games.len(), "deleted game");
        } else {
            debug!("delete addressed to unknown game");
        }
        removed
    }

    /// Ids of all hosted games, in no particular order.
    pub fn game_ids(&self) -> Vec<GameId> {
        self.games.keys().copied().collect()
    }

    /// Number of hosted games.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True when no games are hosted.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
