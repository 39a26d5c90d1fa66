//! Tic-tac-toe arbitration engine with multi-game session management.
//!
//! This library models and arbitrates turn-based tic-tac-toe matches for
//! multiple concurrent players: move validation, win/draw detection, and
//! per-game state tracking behind a registry hosting many independent
//! games.
//!
//! # Architecture
//!
//! - **Board**: grid plus incremental line counters for O(N) win checks
//! - **Game**: two players, turn order, status transitions, move history
//! - **GameManager**: id-keyed registry routing per-game operations
//!
//! Data flows one direction, manager to game to board; outcomes return
//! upward as plain values. The engine is synchronous and performs no I/O;
//! a caller serving concurrent clients supplies its own locking
//! discipline around each game.
//!
//! # Example
//!
//! ```
//! use tictactoe_arbiter::{GameManager, GameStatus, MoveOutcome};
//!
//! # fn main() -> Result<(), tictactoe_arbiter::EngineError> {
//! let mut manager = GameManager::new();
//!
//! // First player takes X and moves first.
//! let game_id = manager.create_game("alice", "bob")?;
//!
//! assert_eq!(manager.submit_move(game_id, "alice", 0, 0), MoveOutcome::Success);
//! assert_eq!(manager.submit_move(game_id, "alice", 1, 1), MoveOutcome::NotYourTurn);
//! assert_eq!(manager.submit_move(game_id, "bob", 1, 1), MoveOutcome::Success);
//!
//! let game = manager.game(game_id).expect("game was just created");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod manager;
mod player;
mod types;

// Crate-level exports - Board
pub use board::{Board, DEFAULT_SIZE};

// Crate-level exports - Errors
pub use error::EngineError;

// Crate-level exports - Game
pub use game::{Game, GameId, MoveRecord};

// Crate-level exports - Manager
pub use manager::GameManager;

// Crate-level exports - Players
pub use player::{Player, PlayerId};

// Crate-level exports - Vocabulary types
pub use types::{Cell, GameStatus, Mark, MoveOutcome};
