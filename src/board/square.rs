//! Board squares.
//!
//! Squares are numbered 1..=100. The board is laid out in ten rows of ten,
//! starting bottom-left and snaking back and forth.

use serde::{Deserialize, Serialize};

use crate::core::error::BoardError;

/// Squares per board row.
pub const ROW_LEN: u8 = 10;

/// A square on the 100-square board.
///
/// Construction goes through [`Square::new`], so a `Square` is always in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(pub(crate) u8);

impl Square {
    /// Where every token starts.
    pub const START: Square = Square(1);
    /// Reaching this square wins the game.
    pub const FINISH: Square = Square(100);

    /// Create a square, rejecting numbers outside 1..=100.
    pub fn new(number: u8) -> Result<Self, BoardError> {
        if (Self::START.0..=Self::FINISH.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(BoardError::SquareOutOfRange(number))
        }
    }

    /// The square's number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Walk `steps` squares forward. Overshoot stops on the final square.
    #[must_use]
    pub fn advance(self, steps: u8) -> Self {
        Self(self.0.saturating_add(steps).min(Self::FINISH.0))
    }

    /// Row and column of this square, row 0 being the bottom row.
    ///
    /// Even rows run left to right, odd rows right to left.
    ///
    /// ```
    /// use snakes_ladders::board::Square;
    ///
    /// assert_eq!(Square::START.grid_cell(), (0, 0));
    /// assert_eq!(Square::new(11).unwrap().grid_cell(), (1, 9));
    /// assert_eq!(Square::FINISH.grid_cell(), (9, 0));
    /// ```
    #[must_use]
    pub fn grid_cell(self) -> (u8, u8) {
        let offset = self.0 - 1;
        let row = offset / ROW_LEN;
        let col = offset % ROW_LEN;
        if row % 2 == 1 {
            (row, ROW_LEN - 1 - col)
        } else {
            (row, col)
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = BoardError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Square::new(number)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
