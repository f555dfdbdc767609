//! Board topology: which squares redirect a token, and where to.
//!
//! ## Invariants
//!
//! - Snakes lead down, ladders lead up.
//! - A square is the start of at most one snake or ladder.
//! - Squares 1 and 100 are never part of a snake or ladder.
//! - Following redirections from any start never revisits a square.
//!
//! `Board::new` checks all of these, so every `Board` in circulation holds them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::square::Square;
use crate::core::error::BoardError;

/// Snakes of the classic board, `start -> end`.
pub const CLASSIC_SNAKES: [(u8, u8); 8] = [
    (98, 78),
    (95, 75),
    (93, 73),
    (87, 24),
    (64, 60),
    (62, 19),
    (54, 34),
    (17, 7),
];

/// Ladders of the classic board, `start -> end`.
pub const CLASSIC_LADDERS: [(u8, u8); 7] = [
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
];

/// Which way a redirection moves the token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedirectKind {
    Snake,
    Ladder,
}

/// A single snake or ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Redirect {
    pub kind: RedirectKind,
    pub from: Square,
    pub to: Square,
}

/// Plain-number view of the board handed to a presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTopology {
    pub snakes: BTreeMap<u8, u8>,
    pub ladders: BTreeMap<u8, u8>,
}

/// A validated 100-square board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardTopology", into = "BoardTopology")]
pub struct Board {
    redirects: BTreeMap<Square, Redirect>,
}

impl Board {
    /// Build a board from `start -> end` maps, checking every invariant.
    pub fn new(
        snakes: &BTreeMap<u8, u8>,
        ladders: &BTreeMap<u8, u8>,
    ) -> Result<Self, BoardError> {
        let mut redirects = BTreeMap::new();

        let relations = snakes
            .iter()
            .map(|(&s, &e)| (RedirectKind::Snake, s, e))
            .chain(ladders.iter().map(|(&s, &e)| (RedirectKind::Ladder, s, e)));

        for (kind, start, end) in relations {
            let from = Square::new(start)?;
            let to = Square::new(end)?;

            for square in [from, to] {
                if square == Square::START || square == Square::FINISH {
                    return Err(BoardError::ReservedSquare(square.number()));
                }
            }

            match kind {
                RedirectKind::Snake if end >= start => {
                    return Err(BoardError::SnakeNotDescending { start, end });
                }
                RedirectKind::Ladder if end <= start => {
                    return Err(BoardError::LadderNotAscending { start, end });
                }
                _ => {}
            }

            if redirects.insert(from, Redirect { kind, from, to }).is_some() {
                return Err(BoardError::DuplicateOrigin(start));
            }
        }

        let board = Self { redirects };
        board.check_acyclic()?;
        Ok(board)
    }

    /// The fixed board the game ships with.
    #[must_use]
    pub fn classic() -> Self {
        let redirects = CLASSIC_SNAKES
            .iter()
            .map(|&(s, e)| (RedirectKind::Snake, s, e))
            .chain(CLASSIC_LADDERS.iter().map(|&(s, e)| (RedirectKind::Ladder, s, e)))
            .map(|(kind, s, e)| {
                let redirect = Redirect {
                    kind,
                    from: Square(s),
                    to: Square(e),
                };
                (redirect.from, redirect)
            })
            .collect();

        Self { redirects }
    }

    /// A board with no snakes or ladders.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            redirects: BTreeMap::new(),
        }
    }

    /// The snake or ladder starting on `square`, if any.
    #[must_use]
    pub fn redirect_at(&self, square: Square) -> Option<&Redirect> {
        self.redirects.get(&square)
    }

    /// All snakes and ladders, ordered by start square.
    pub fn redirects(&self) -> impl Iterator<Item = &Redirect> {
        self.redirects.values()
    }

    /// Snakes, ordered by start square.
    pub fn snakes(&self) -> impl Iterator<Item = &Redirect> {
        self.redirects().filter(|r| r.kind == RedirectKind::Snake)
    }

    /// Ladders, ordered by start square.
    pub fn ladders(&self) -> impl Iterator<Item = &Redirect> {
        self.redirects().filter(|r| r.kind == RedirectKind::Ladder)
    }

    /// Plain `start -> end` maps for snakes and ladders.
    #[must_use]
    pub fn topology(&self) -> BoardTopology {
        BoardTopology {
            snakes: as_pairs(self.snakes()),
            ladders: as_pairs(self.ladders()),
        }
    }

    fn check_acyclic(&self) -> Result<(), BoardError> {
        for &start in self.redirects.keys() {
            let mut seen = BTreeSet::from([start]);
            let mut at = start;
            while let Some(next) = self.redirects.get(&at).map(|r| r.to) {
                if !seen.insert(next) {
                    return Err(BoardError::Cycle(start.number()));
                }
                at = next;
            }
        }
        Ok(())
    }
}

fn as_pairs<'a>(redirects: impl Iterator<Item = &'a Redirect>) -> BTreeMap<u8, u8> {
    redirects.map(|r| (r.from.number(), r.to.number())).collect()
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl TryFrom<BoardTopology> for Board {
    type Error = BoardError;

    fn try_from(topology: BoardTopology) -> Result<Self, Self::Error> {
        Board::new(&topology.snakes, &topology.ladders)
    }
}

impl From<Board> for BoardTopology {
    fn from(board: Board) -> Self {
        board.topology()
    }
}
