//! # snakes-ladders
//!
//! A deterministic rules engine for Snakes and Ladders.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: the board lives in the engine, everything that
//!    changes lives in an explicit `GameState`.
//!
//! 2. **Injected randomness**: dice and board layout come from a seeded
//!    `GameRng`, so every game can be replayed from its seed.
//!
//! 3. **Rules only**: the engine resolves a roll to its final square in one
//!    call. Drawing, animation and input belong to whatever presents the game.
//!
//! ## Modules
//!
//! - `core`: Players, state, turn records, RNG, configuration, errors
//! - `board`: Squares, snakes and ladders, board generation
//! - `rules`: Movement resolution and the `RulesEngine` trait
//! - `games`: The Snakes and Ladders engine and builder
//! - `sim`: Headless runner that plays games to completion
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::{GameBuilder, MoveKind, Phase};
//!
//! let (engine, mut state) = GameBuilder::new().build(42).unwrap();
//!
//! // Known die values can be fed straight in
//! let outcome = engine.take_turn(&mut state, 3).unwrap();
//! assert_eq!(outcome.mv.to.number(), 14);
//! assert_eq!(outcome.mv.kind, MoveKind::Ladder);
//! assert!(matches!(outcome.phase, Phase::AwaitingRoll(_)));
//!
//! // Or rolled from the state's dice stream
//! let outcome = engine.play_turn(&mut state).unwrap();
//! assert!((1..=6).contains(&outcome.mv.steps));
//! ```

pub mod board;
pub mod core;
pub mod games;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    BoardError, BoardSetup, ChainPolicy, GameConfig, GameError, GameRng, GameRngState, GameState,
    InputError, Phase, Player, PlayerId, PlayerMap, Token, TurnRecord,
};

pub use crate::board::{Board, BoardGenerator, BoardTopology, Redirect, RedirectKind, Square};

pub use crate::rules::{GameResult, Move, MoveKind, RulesEngine};

pub use crate::games::snakes_ladders::{GameBuilder, GameEngine, TurnOutcome};

pub use crate::sim::{Simulation, SimulationConfig, SimulationReport};
