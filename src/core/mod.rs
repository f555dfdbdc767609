//! Core engine types: players, state, turn records, RNG, configuration, errors.
//!
//! These are the building blocks the rules and the game engine work with.
//! Nothing here knows how a move is resolved; see `rules` for that.

pub mod config;
pub mod error;
pub mod player;
pub mod record;
pub mod rng;
pub mod state;

pub use config::{BoardSetup, ChainPolicy, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{BoardError, GameError, InputError};
pub use player::{Player, PlayerId, PlayerMap, Token};
pub use record::TurnRecord;
pub use rng::{GameRng, GameRngState, DIE_FACES};
pub use state::{GameState, Phase};
