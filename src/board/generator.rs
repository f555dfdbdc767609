//! Randomized board generation.
//!
//! Snakes and ladders are placed by rejection sampling. Every square used by
//! an accepted pair, as start or end, is off limits to later pairs, so a
//! generated board never gives a square two roles.
//!
//! Sampling ranges:
//!
//! | Relation | start      | end                |
//! |----------|------------|--------------------|
//! | Snake    | 20..=99    | 2..=start-1        |
//! | Ladder   | 2..=79     | start+1..=99       |
//!
//! The number of samples drawn is capped; a request the cap cannot satisfy
//! fails with [`GameError::BoardGenerationExhausted`].

use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use tracing::{info, trace, warn};

use super::topology::Board;
use crate::core::error::GameError;
use crate::core::rng::GameRng;

/// Default cap on samples drawn while generating a board.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// Squares that may take part in a snake or ladder (2..=99).
const FREE_SQUARES: usize = 98;

/// How many snakes and ladders to place, and how hard to try.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGenerator {
    pub snakes: usize,
    pub ladders: usize,
    pub max_attempts: u32,
}

impl BoardGenerator {
    /// A generator for the given counts with the default attempt cap.
    #[must_use]
    pub fn new(snakes: usize, ladders: usize) -> Self {
        Self {
            snakes,
            ladders,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the attempt cap.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate a board from a seed.
    ///
    /// Same seed and counts always produce the same board.
    pub fn generate(&self, seed: u64) -> Result<Board, GameError> {
        self.generate_with(&mut GameRng::new(seed).for_context("board"))
    }

    /// Generate a board drawing from `rng`.
    #[tracing::instrument(level = "debug", skip(rng), fields(seed = rng.seed()))]
    pub fn generate_with(&self, rng: &mut GameRng) -> Result<Board, GameError> {
        if 2 * (self.snakes + self.ladders) > FREE_SQUARES {
            warn!("requested more snakes and ladders than the board can hold");
            return Err(self.exhausted(0, 0, 0));
        }

        let mut used: FxHashSet<u8> = FxHashSet::default();
        let mut snakes = BTreeMap::new();
        let mut ladders = BTreeMap::new();
        let mut attempts = 0u32;

        while snakes.len() < self.snakes {
            if attempts >= self.max_attempts {
                warn!(attempts, "gave up placing snakes");
                return Err(self.exhausted(attempts, snakes.len(), ladders.len()));
            }
            attempts += 1;

            let start = rng.gen_range_u8(20..=99);
            let end = rng.gen_range_u8(2..=start - 1);
            if used.contains(&start) || used.contains(&end) {
                trace!(start, end, "rejected snake");
                continue;
            }
            used.extend([start, end]);
            snakes.insert(start, end);
        }

        while ladders.len() < self.ladders {
            if attempts >= self.max_attempts {
                warn!(attempts, "gave up placing ladders");
                return Err(self.exhausted(attempts, snakes.len(), ladders.len()));
            }
            attempts += 1;

            let start = rng.gen_range_u8(2..=79);
            let end = rng.gen_range_u8(start + 1..=99);
            if used.contains(&start) || used.contains(&end) {
                trace!(start, end, "rejected ladder");
                continue;
            }
            used.extend([start, end]);
            ladders.insert(start, end);
        }

        let board = Board::new(&snakes, &ladders)?;
        info!(attempts, snakes = self.snakes, ladders = self.ladders, "generated board");
        Ok(board)
    }

    fn exhausted(&self, attempts: u32, placed_snakes: usize, placed_ladders: usize) -> GameError {
        GameError::BoardGenerationExhausted {
            attempts,
            snakes: self.snakes,
            ladders: self.ladders,
            placed_snakes,
            placed_ladders,
        }
    }
}
