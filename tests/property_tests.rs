//! Property tests for movement and board generation.

use proptest::prelude::*;

use snakes_ladders::board::BoardGenerator;
use snakes_ladders::{
    Board, ChainPolicy, GameBuilder, GameError, InputError, MoveKind, RedirectKind, RulesEngine,
    Square,
};

fn classic_engine() -> snakes_ladders::GameEngine {
    GameBuilder::new().build(0).unwrap().0
}

proptest! {
    #[test]
    fn test_apply_turn_stays_on_board(position in 1u8..100, steps in 1u8..=6) {
        let engine = classic_engine();
        let (to, kind) = engine.apply_turn(position, steps).unwrap();

        prop_assert!(to >= Square::START && to <= Square::FINISH);
        prop_assert_eq!(kind == MoveKind::Win, to == Square::FINISH);
        // Plain moves land exactly where the walk ended
        if kind == MoveKind::Normal {
            prop_assert_eq!(to.number(), (position + steps).min(100));
        }
    }

    #[test]
    fn test_apply_turn_rejects_bad_steps(position in 1u8..100, steps in 7u8..=255) {
        let engine = classic_engine();
        prop_assert_eq!(
            engine.apply_turn(position, steps),
            Err(GameError::InvalidInput(InputError::StepsOutOfRange(steps)))
        );
    }

    #[test]
    fn test_generated_boards_hold_invariants(
        seed in any::<u64>(),
        snakes in 0usize..=10,
        ladders in 0usize..=10,
    ) {
        let board = BoardGenerator::new(snakes, ladders).generate(seed).unwrap();

        prop_assert_eq!(board.snakes().count(), snakes);
        prop_assert_eq!(board.ladders().count(), ladders);

        let mut seen = std::collections::HashSet::new();
        for r in board.redirects() {
            match r.kind {
                RedirectKind::Snake => prop_assert!(r.from > r.to),
                RedirectKind::Ladder => prop_assert!(r.from < r.to),
            }
            prop_assert!(r.from != Square::START && r.from != Square::FINISH);
            prop_assert!(r.to != Square::START && r.to != Square::FINISH);
            prop_assert!(seen.insert(r.from), "square {} reused", r.from);
            prop_assert!(seen.insert(r.to), "square {} reused", r.to);
        }

        // The board survives a round trip through its public topology
        prop_assert_eq!(Board::try_from(board.topology()).unwrap(), board);
    }

    #[test]
    fn test_chained_moves_never_rest_on_redirect(
        seed in any::<u64>(),
        position in 1u8..100,
        steps in 1u8..=6,
    ) {
        let (engine, _) = GameBuilder::new()
            .random_board(8, 8)
            .chain_policy(ChainPolicy::Chained)
            .build(seed)
            .unwrap();

        let (to, _) = engine.apply_turn(position, steps).unwrap();
        prop_assert!(engine.board().redirect_at(to).is_none());
    }
}
