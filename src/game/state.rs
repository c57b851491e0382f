use serde::{Deserialize, Serialize};

use super::Player;

/// Whose turn is next. A two-state machine toggled only by a successful
/// [`Board::apply_move`](super::Board::apply_move).
///
/// Terminal outcomes (win/draw) are deliberately not part of this state; they
/// are reported by the [`referee`](crate::referee) module, which is layered
/// on the board's query interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    RedPlaysNext,
    YellowPlaysNext,
}

impl GameState {
    /// The state in which the given player moves next.
    pub fn turn_of(player: Player) -> Self {
        match player {
            Player::Red => GameState::RedPlaysNext,
            Player::Yellow => GameState::YellowPlaysNext,
        }
    }

    /// The player implied by this state.
    pub fn player(self) -> Player {
        match self {
            GameState::RedPlaysNext => Player::Red,
            GameState::YellowPlaysNext => Player::Yellow,
        }
    }

    /// The other player's turn.
    pub fn toggled(self) -> Self {
        GameState::turn_of(self.player().other())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_of() {
        assert_eq!(GameState::turn_of(Player::Red), GameState::RedPlaysNext);
        assert_eq!(GameState::turn_of(Player::Yellow), GameState::YellowPlaysNext);
    }

    #[test]
    fn test_player_round_trips() {
        assert_eq!(GameState::RedPlaysNext.player(), Player::Red);
        assert_eq!(GameState::YellowPlaysNext.player(), Player::Yellow);
    }

    #[test]
    fn test_toggled_alternates() {
        assert_eq!(GameState::RedPlaysNext.toggled(), GameState::YellowPlaysNext);
        assert_eq!(GameState::YellowPlaysNext.toggled(), GameState::RedPlaysNext);
    }
}
