//! Movement resolution: walk, clamp, then follow snakes and ladders.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Redirect, RedirectKind, Square};
use crate::core::config::ChainPolicy;
use crate::core::error::InputError;
use crate::core::rng::DIE_FACES;

/// How a move ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Landed on a plain square.
    Normal,
    /// Climbed a ladder.
    Ladder,
    /// Slid down a snake.
    Snake,
    /// Finished on square 100.
    Win,
}

/// A fully resolved move.
///
/// The presentation layer animates `from -> landed` as a walk and each entry
/// of `redirects` as a slide or climb.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub steps: u8,
    /// Square reached by walking, after clamping.
    pub landed: Square,
    /// Snakes and ladders followed, in order.
    pub redirects: SmallVec<[Redirect; 2]>,
    /// Final resting square.
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Did the move end on the final square?
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.kind == MoveKind::Win
    }
}

/// Check a die value.
pub fn validate_steps(steps: u8) -> Result<u8, InputError> {
    if (1..=DIE_FACES).contains(&steps) {
        Ok(steps)
    } else {
        Err(InputError::StepsOutOfRange(steps))
    }
}

/// Resolve a move of `steps` from `position` on `board`.
///
/// Fails if the die value is not 1..=6, the position is off the board, or the
/// token is already on square 100.
pub fn resolve(
    board: &Board,
    policy: ChainPolicy,
    position: u8,
    steps: u8,
) -> Result<Move, InputError> {
    let steps = validate_steps(steps)?;
    let from = Square::new(position).map_err(|_| InputError::PositionOutOfRange(position))?;
    if from == Square::FINISH {
        return Err(InputError::AlreadyFinished);
    }

    let landed = from.advance(steps);
    let mut redirects: SmallVec<[Redirect; 2]> = SmallVec::new();
    let mut to = landed;

    // Boards are acyclic, so the chain is bounded by the number of redirects.
    while let Some(redirect) = board.redirect_at(to) {
        redirects.push(*redirect);
        to = redirect.to;
        if policy == ChainPolicy::Single {
            break;
        }
    }

    let kind = if to == Square::FINISH {
        MoveKind::Win
    } else {
        match redirects.last().map(|r| r.kind) {
            Some(RedirectKind::Ladder) => MoveKind::Ladder,
            Some(RedirectKind::Snake) => MoveKind::Snake,
            None => MoveKind::Normal,
        }
    };

    Ok(Move {
        from,
        steps,
        landed,
        redirects,
        to,
        kind,
    })
}
