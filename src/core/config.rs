//! Game configuration.
//!
//! A session is configured once, before the first roll:
//! - how many players sit at the table
//! - which board is used (classic, custom, or generated)
//! - whether snakes and ladders chain
//!
//! Configs are built in code (see `GameBuilder`) or read from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::GameError;
use crate::board::{Board, BoardGenerator, DEFAULT_MAX_ATTEMPTS};

/// Fewest players a game can seat.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game can seat (one per token colour).
pub const MAX_PLAYERS: usize = 4;

/// Whether a redirection's destination is checked for another redirection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainPolicy {
    /// Follow at most one snake or ladder per move.
    #[default]
    Single,
    /// Keep following until the token rests on a plain square.
    Chained,
}

/// Which board a session plays on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardSetup {
    /// The fixed board the game ships with.
    #[default]
    Classic,
    /// Caller-supplied `start -> end` maps.
    Custom {
        snakes: BTreeMap<u8, u8>,
        ladders: BTreeMap<u8, u8>,
    },
    /// Generated from the session seed.
    Random { snakes: usize, ladders: usize },
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    /// Board selection.
    pub board: BoardSetup,

    /// Snake/ladder chaining rule.
    pub chain_policy: ChainPolicy,

    /// Cap on samples drawn when generating a random board.
    pub max_generation_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            board: BoardSetup::Classic,
            chain_policy: ChainPolicy::Single,
            max_generation_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// ```
    /// use snakes_ladders::core::{BoardSetup, GameConfig};
    ///
    /// let config = GameConfig::from_json(
    ///     r#"{"player_count": 3, "board": {"random": {"snakes": 5, "ladders": 5}}}"#,
    /// ).unwrap();
    /// assert_eq!(config.player_count, 3);
    /// assert_eq!(config.board, BoardSetup::Random { snakes: 5, ladders: 5 });
    /// ```
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be {}-{}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, self.player_count
            )));
        }
        Ok(())
    }

    /// Build the board this config describes.
    ///
    /// `seed` is only consulted for generated boards.
    pub fn build_board(&self, seed: u64) -> Result<Board, GameError> {
        match &self.board {
            BoardSetup::Classic => Ok(Board::classic()),
            BoardSetup::Custom { snakes, ladders } => Ok(Board::new(snakes, ladders)?),
            BoardSetup::Random { snakes, ladders } => BoardGenerator::new(*snakes, *ladders)
                .with_max_attempts(self.max_generation_attempts)
                .generate(seed),
        }
    }
}
