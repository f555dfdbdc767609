//! Movement rules and the rules engine trait.
//!
//! `movement` resolves a single die roll into a final square.
//! `RulesEngine` is the interface games expose to runners; the engine in
//! `games` implements it.

pub mod engine;
pub mod movement;

pub use engine::{GameResult, RulesEngine};
pub use movement::{Move, MoveKind};
