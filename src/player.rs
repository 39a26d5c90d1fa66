//! Player identity types.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a player, unique within a single game.
pub type PlayerId = String;

/// A participant in one game: identity plus assigned mark.
///
/// Created once per game assignment and immutable afterwards. The mark is
/// a closed enum, so a player can never hold an invalid symbol; parsing
/// untrusted symbols happens at the [`Mark`] boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player's unique id.
    id: PlayerId,
    /// Which mark this player places.
    mark: Mark,
}

impl Player {
    /// Creates a player with the given id and mark.
    pub fn new(id: impl Into<PlayerId>, mark: Mark) -> Self {
        Self {
            id: id.into(),
            mark,
        }
    }

    /// The player's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}
