//! Single-match orchestration: turn order, status transitions, history.

use crate::board::Board;
use crate::error::EngineError;
use crate::player::{Player, PlayerId};
use crate::types::{Cell, GameStatus, Mark, MoveOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Unique identifier for a game.
///
/// Backed by a random 128-bit UUID, so ids are unpredictable and
/// collision-resistant across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    /// Creates a new random game id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a game id from an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One recorded move: who placed which mark where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Id of the player who moved.
    pub player_id: PlayerId,
    /// Mark that was placed.
    pub mark: Mark,
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based).
    pub col: usize,
}

/// Which of the two fixed player slots holds the next move.
///
/// An explicit tag instead of comparing player identities, so turn
/// ownership stays unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Seat {
    /// First constructor argument.
    One,
    /// Second constructor argument.
    Two,
}

impl Seat {
    fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// A single arbitrated match between two players.
///
/// Enforces turn order, records every applied move, and transitions the
/// status exactly once when a terminal condition is reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    board: Board,
    players: [Player; 2],
    active: Seat,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Creates a game between two validated players.
    ///
    /// The mark-`X` player takes the first turn regardless of argument
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MarkConflict`] when both players carry the
    /// same mark, or [`EngineError::PlayerIdConflict`] when they share an
    /// id.
    #[instrument(skip_all, fields(player1 = %player1.id(), player2 = %player2.id()))]
    pub fn new(player1: Player, player2: Player) -> Result<Self, EngineError> {
        if player1.mark() == player2.mark() {
            warn!("rejected game: both players carry the same mark");
            return Err(EngineError::MarkConflict);
        }
        if player1.id() == player2.id() {
            warn!("rejected game: both players carry the same id");
            return Err(EngineError::PlayerIdConflict);
        }

        let active = if player1.mark() == Mark::X {
            Seat::One
        } else {
            Seat::Two
        };

        let id = GameId::new();
        info!(game_id = %id, "created game");
        Ok(Self {
            id,
            board: Board::new(),
            players: [player1, player2],
            active,
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// The game's unique id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the grid.
    pub fn board_state(&self) -> Vec<Vec<Cell>> {
        self.board.snapshot()
    }

    /// Both players, in constructor order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player who owns the next move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// All applied moves in chronological order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    fn seat_of(&self, player_id: &str) -> Option<Seat> {
        if self.players[0].id() == player_id {
            Some(Seat::One)
        } else if self.players[1].id() == player_id {
            Some(Seat::Two)
        } else {
            None
        }
    }

    /// Submits a move for the given player.
    ///
    /// Validation runs strictly before any mutation. Exactly one of win,
    /// draw, or turn hand-off happens per applied move.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn submit_move(&mut self, player_id: &str, row: usize, col: usize) -> MoveOutcome {
        // Terminal games accept nothing, including the abandoned state.
        if self.status.is_terminal() {
            debug!(status = ?self.status, "move submitted to finished game");
            return MoveOutcome::GameOver;
        }

        let Some(seat) = self.seat_of(player_id) else {
            warn!("move submitted by unregistered player");
            return MoveOutcome::InvalidPlayer;
        };

        if seat != self.active {
            debug!("move submitted out of turn");
            return MoveOutcome::NotYourTurn;
        }

        if !self.board.is_valid_move(row, col) {
            debug!("move rejected by board");
            return MoveOutcome::InvalidMove;
        }

        // Apply the move and record it.
        let mark = self.players[seat.index()].mark();
        self.board.make_move(row, col, mark);
        self.history.push(MoveRecord {
            player_id: player_id.to_string(),
            mark,
            row,
            col,
        });

        if let Some(winner) = self.board.check_winner() {
            self.status = GameStatus::for_winner(winner);
            info!(status = ?self.status, "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("game drawn");
        } else {
            self.active = self.active.other();
        }

        MoveOutcome::Success
    }

    /// Force-terminates an in-progress game.
    ///
    /// Later submissions report [`MoveOutcome::GameOver`], the same as for
    /// any other terminal status. Abandoning a game that already reached a
    /// terminal status changes nothing.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn abandon(&mut self) {
        if self.status.is_terminal() {
            debug!(status = ?self.status, "abandon ignored, game already terminal");
            return;
        }
        self.status = GameStatus::Finished;
        info!("game abandoned");
    }

    /// Restores the initial state: empty board, mark-`X` player on turn,
    /// empty history, status in progress. The game id is preserved.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = if self.players[0].mark() == Mark::X {
            Seat::One
        } else {
            Seat::Two
        };
        self.status = GameStatus::InProgress;
        self.history.clear();
        debug!("game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fresh_game() -> Game {
        Game::new(Player::new("alice", Mark::X), Player::new("bob", Mark::O)).unwrap()
    }

    #[test]
    fn test_game_id_roundtrip() {
        let id = GameId::new();
        let parsed: GameId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_game_ids_are_unique() {
        assert_ne!(GameId::new(), GameId::new());
    }

    #[test]
    fn test_duplicate_marks_rejected() {
        let result = Game::new(Player::new("alice", Mark::X), Player::new("bob", Mark::X));
        assert_eq!(result.unwrap_err(), EngineError::MarkConflict);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Game::new(Player::new("alice", Mark::X), Player::new("alice", Mark::O));
        assert_eq!(result.unwrap_err(), EngineError::PlayerIdConflict);
    }

    #[test]
    fn test_x_moves_first_regardless_of_argument_order() {
        let game = Game::new(Player::new("bob", Mark::O), Player::new("alice", Mark::X)).unwrap();
        assert_eq!(game.current_player().id(), "alice");
        assert_eq!(game.current_player().mark(), Mark::X);
    }

    #[test]
    fn test_x_wins_top_row_scenario() {
        let mut game = fresh_game();
        let moves = [
            ("alice", 0, 0),
            ("bob", 1, 1),
            ("alice", 0, 1),
            ("bob", 1, 2),
            ("alice", 0, 2),
        ];
        for (player_id, row, col) in moves {
            assert_eq!(game.submit_move(player_id, row, col), MoveOutcome::Success);
        }
        assert_eq!(game.status(), GameStatus::XWon);
        assert_eq!(game.status().winner(), Some(Mark::X));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_draw_scenario() {
        let mut game = fresh_game();
        let moves = [
            ("alice", 0, 0),
            ("bob", 0, 1),
            ("alice", 0, 2),
            ("bob", 1, 0),
            ("alice", 1, 1),
            ("bob", 1, 2),
            ("alice", 2, 1),
            ("bob", 2, 0),
            ("alice", 2, 2),
        ];
        for (player_id, row, col) in moves {
            assert_eq!(game.submit_move(player_id, row, col), MoveOutcome::Success);
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.board().is_full());
        assert_eq!(game.board().check_winner(), None);
    }

    #[test]
    fn test_turn_alternation_starts_with_x() {
        let mut game = fresh_game();
        assert_eq!(game.current_player().id(), "alice");

        game.submit_move("alice", 0, 0);
        assert_eq!(game.current_player().id(), "bob");

        game.submit_move("bob", 1, 1);
        assert_eq!(game.current_player().id(), "alice");
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut game = fresh_game();
        assert_eq!(game.submit_move("bob", 0, 0), MoveOutcome::NotYourTurn);
        assert_eq!(game.submit_move("alice", 0, 0), MoveOutcome::Success);
        assert_eq!(game.submit_move("alice", 1, 1), MoveOutcome::NotYourTurn);
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut game = fresh_game();
        assert_eq!(game.submit_move("mallory", 0, 0), MoveOutcome::InvalidPlayer);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_occupied_and_out_of_range_are_invalid_moves() {
        let mut game = fresh_game();
        assert_eq!(game.submit_move("alice", 5, 5), MoveOutcome::InvalidMove);
        assert_eq!(game.submit_move("alice", 0, 0), MoveOutcome::Success);
        assert_eq!(game.submit_move("bob", 0, 0), MoveOutcome::InvalidMove);
        // A rejected move does not consume the turn.
        assert_eq!(game.current_player().id(), "bob");
    }

    #[test]
    fn test_terminal_game_is_immutable() {
        let mut game = fresh_game();
        for (player_id, row, col) in [
            ("alice", 0, 0),
            ("bob", 1, 1),
            ("alice", 0, 1),
            ("bob", 1, 2),
            ("alice", 0, 2),
        ] {
            game.submit_move(player_id, row, col);
        }
        assert_eq!(game.status(), GameStatus::XWon);

        let frozen = game.clone();
        assert_eq!(game.submit_move("bob", 2, 0), MoveOutcome::GameOver);
        assert_eq!(game.submit_move("alice", 2, 2), MoveOutcome::GameOver);
        assert_eq!(game.submit_move("mallory", 2, 2), MoveOutcome::GameOver);
        assert_eq!(game.board_state(), frozen.board_state());
        assert_eq!(game.history(), frozen.history());
        assert_eq!(game.status(), frozen.status());
    }

    #[test]
    fn test_history_records_moves_in_order() {
        let mut game = fresh_game();
        game.submit_move("alice", 0, 0);
        game.submit_move("bob", 2, 1);

        assert_eq!(
            game.history(),
            &[
                MoveRecord {
                    player_id: "alice".to_string(),
                    mark: Mark::X,
                    row: 0,
                    col: 0,
                },
                MoveRecord {
                    player_id: "bob".to_string(),
                    mark: Mark::O,
                    row: 2,
                    col: 1,
                },
            ]
        );
    }

    #[test]
    fn test_move_record_serializes_with_flat_fields() {
        let record = MoveRecord {
            player_id: "alice".to_string(),
            mark: Mark::X,
            row: 0,
            col: 2,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "player_id": "alice",
                "mark": "X",
                "row": 0,
                "col": 2,
            })
        );
    }

    #[test]
    fn test_reset_matches_fresh_game_except_id() {
        let mut game = fresh_game();
        game.submit_move("alice", 0, 0);
        game.submit_move("bob", 1, 1);
        let id = game.id();

        game.reset();

        let fresh = fresh_game();
        assert_eq!(game.id(), id);
        assert_eq!(game.status(), fresh.status());
        assert_eq!(game.board_state(), fresh.board_state());
        assert_eq!(game.history(), fresh.history());
        assert_eq!(game.current_player().id(), fresh.current_player().id());
    }

    #[test]
    fn test_reset_hands_turn_back_to_x_player() {
        let mut game = Game::new(Player::new("bob", Mark::O), Player::new("alice", Mark::X)).unwrap();
        game.submit_move("alice", 0, 0);
        assert_eq!(game.current_player().id(), "bob");

        game.reset();
        assert_eq!(game.current_player().id(), "alice");
    }

    #[test]
    fn test_abandon_terminates_game() {
        let mut game = fresh_game();
        game.submit_move("alice", 0, 0);

        game.abandon();
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.submit_move("bob", 1, 1), MoveOutcome::GameOver);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_abandon_keeps_existing_terminal_status() {
        let mut game = fresh_game();
        for (player_id, row, col) in [
            ("alice", 0, 0),
            ("bob", 1, 1),
            ("alice", 0, 1),
            ("bob", 1, 2),
            ("alice", 0, 2),
        ] {
            game.submit_move(player_id, row, col);
        }
        assert_eq!(game.status(), GameStatus::XWon);

        game.abandon();
        assert_eq!(game.status(), GameStatus::XWon);
    }

    proptest! {
        /// Successful non-terminal moves hand the turn to the other
        /// player; rejected placements leave it with the mover.
        #[test]
        fn prop_turn_alternates_on_success(moves in prop::collection::vec((0usize..3, 0usize..3), 1..9)) {
            let mut game = fresh_game();
            for (row, col) in moves {
                if game.status().is_terminal() {
                    break;
                }
                let mover = game.current_player().id().to_string();
                match game.submit_move(&mover, row, col) {
                    MoveOutcome::Success => {
                        if !game.status().is_terminal() {
                            prop_assert_ne!(game.current_player().id(), mover.as_str());
                        }
                    }
                    MoveOutcome::InvalidMove => {
                        prop_assert_eq!(game.current_player().id(), mover.as_str());
                    }
                    other => prop_assert!(false, "unexpected outcome {:?}", other),
                }
            }
        }
    }
}
