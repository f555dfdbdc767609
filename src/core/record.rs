//! Turn history entries.
//!
//! Every applied turn is recorded, so a session can be replayed from its seed
//! or inspected by a presentation layer.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::rules::Move;

/// A recorded turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// The player who moved.
    pub player: PlayerId,

    /// The resolved move, including the die value.
    pub mv: Move,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(turn: u32, player: PlayerId, mv: Move) -> Self {
        Self { turn, player, mv }
    }

    /// The die value rolled this turn.
    #[must_use]
    pub fn roll(&self) -> u8 {
        self.mv.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::config::ChainPolicy;
    use crate::rules::movement::resolve;

    #[test]
    fn test_turn_record() {
        let mv = resolve(&Board::classic(), ChainPolicy::Single, 1, 3).unwrap();
        let record = TurnRecord::new(1, PlayerId::new(0), mv.clone());

        assert_eq!(record.turn, 1);
        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.roll(), 3);
        assert_eq!(record.mv, mv);
    }

    #[test]
    fn test_turn_record_serialization() {
        let mv = resolve(&Board::classic(), ChainPolicy::Single, 95, 3).unwrap();
        let record = TurnRecord::new(7, PlayerId::new(1), mv);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TurnRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
