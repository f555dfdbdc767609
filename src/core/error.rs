//! Error types for the rules engine.
//!
//! Every rejected call leaves the game state untouched.

use thiserror::Error;

use super::player::PlayerId;

/// Top-level error returned by engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error(
        "board generation exhausted after {attempts} attempts: placed {placed_snakes}/{snakes} snakes and {placed_ladders}/{ladders} ladders"
    )]
    BoardGenerationExhausted {
        attempts: u32,
        snakes: usize,
        ladders: usize,
        placed_snakes: usize,
        placed_ladders: usize,
    },
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("inconsistent game state: {0}")]
    InvalidState(String),
}

/// A move or roll the rules do not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("die value {0} is outside 1..=6")]
    StepsOutOfRange(u8),
    #[error("square {0} is outside 1..=100")]
    PositionOutOfRange(u8),
    #[error("token already on square 100, no move possible")]
    AlreadyFinished,
    #[error("game is over, {winner} has won")]
    GameOver { winner: PlayerId },
    #[error("{0} has no seat at this table")]
    UnknownPlayer(PlayerId),
}

/// A board layout that breaks the topology rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("square {0} is outside 1..=100")]
    SquareOutOfRange(u8),
    #[error("snake {start}->{end} must lead downwards")]
    SnakeNotDescending { start: u8, end: u8 },
    #[error("ladder {start}->{end} must lead upwards")]
    LadderNotAscending { start: u8, end: u8 },
    #[error("square {0} is the start of both a snake and a ladder")]
    DuplicateOrigin(u8),
    #[error("square {0} is reserved and cannot be part of a snake or ladder")]
    ReservedSquare(u8),
    #[error("redirections starting at square {0} loop back on themselves")]
    Cycle(u8),
}
