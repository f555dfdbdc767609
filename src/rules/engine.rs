//! Rules engine trait.
//!
//! Runners and presentation layers program against `RulesEngine`:
//! - How a die value moves a token
//! - How a turn modifies state
//! - When the game is over

use crate::board::Board;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

use super::movement::Move;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// First player to reach square 100.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `resolve_move`: pure, must not touch any state
/// - `apply_action`: must be deterministic for replay, and must leave `state`
///   untouched when it returns an error
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// The board in play.
    fn board(&self) -> &Board;

    /// Number of seats.
    fn player_count(&self) -> usize;

    /// Resolve a move of `steps` from `position` without changing anything.
    fn resolve_move(&self, position: u8, steps: u8) -> Result<Move, GameError>;

    /// Play the current player's turn with the given die value.
    fn apply_action(&self, state: &mut GameState, steps: u8) -> Result<Move, GameError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(GameResult::Winner)
    }
}
