//! Snakes and Ladders.
//!
//! - Players start on square 1 and take turns rolling one die
//! - Walking past 100 stops on 100
//! - Landing on a ladder's foot climbs it, landing on a snake's head slides down
//! - First player to reach 100 wins and play stops
//!
//! Seats 2-4 players (default 2).

mod game;

pub use game::{GameBuilder, GameEngine, TurnOutcome};
