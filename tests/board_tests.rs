//! Board topology and generation tests.
//!
//! These check the board invariants on the classic board and on large
//! batches of generated boards.

use std::collections::BTreeMap;

use snakes_ladders::board::BoardGenerator;
use snakes_ladders::{Board, BoardError, GameBuilder, GameError, RedirectKind};

fn assert_single_role(board: &Board) {
    let mut roles: BTreeMap<u8, usize> = BTreeMap::new();
    for r in board.redirects() {
        *roles.entry(r.from.number()).or_default() += 1;
        *roles.entry(r.to.number()).or_default() += 1;
    }
    for (square, count) in roles {
        assert_eq!(count, 1, "square {} has {} roles", square, count);
    }
}

// =============================================================================
// Classic Board
// =============================================================================

#[test]
fn test_classic_topology() {
    let topology = Board::classic().topology();

    assert_eq!(topology.snakes.get(&98), Some(&78));
    assert_eq!(topology.snakes.get(&17), Some(&7));
    assert_eq!(topology.ladders.get(&4), Some(&14));
    assert_eq!(topology.ladders.get(&28), Some(&84));

    // 1 and 100 are never mapped
    for square in [1u8, 100] {
        assert!(!topology.snakes.contains_key(&square));
        assert!(!topology.ladders.contains_key(&square));
        assert!(!topology.snakes.values().any(|&e| e == square));
        assert!(!topology.ladders.values().any(|&e| e == square));
    }
}

#[test]
fn test_classic_no_shared_origin() {
    let topology = Board::classic().topology();

    for start in topology.snakes.keys() {
        assert!(!topology.ladders.contains_key(start));
    }
}

#[test]
fn test_classic_single_role() {
    assert_single_role(&Board::classic());
}

#[test]
fn test_engine_exposes_topology() {
    let (engine, _) = GameBuilder::new().build(0).unwrap();
    assert_eq!(engine.board_topology(), Board::classic().topology());
}

// =============================================================================
// Generated Boards
// =============================================================================

#[test]
fn test_thousand_generated_boards_hold_invariants() {
    for seed in 0..1000u64 {
        let board = BoardGenerator::new(8, 8).generate(seed).unwrap();

        for r in board.redirects() {
            match r.kind {
                RedirectKind::Snake => assert!(r.from > r.to, "seed {}: bad snake", seed),
                RedirectKind::Ladder => assert!(r.from < r.to, "seed {}: bad ladder", seed),
            }
        }
        assert_single_role(&board);
        assert_eq!(board.snakes().count(), 8);
        assert_eq!(board.ladders().count(), 8);
    }
}

#[test]
fn test_dense_board_generation() {
    // 30 pairs use 60 of the 98 free squares
    let board = BoardGenerator::new(15, 15)
        .with_max_attempts(1_000_000)
        .generate(5)
        .unwrap();

    assert_single_role(&board);
}

#[test]
fn test_generation_exhausted() {
    let result = GameBuilder::new()
        .random_board(10, 10)
        .max_generation_attempts(3)
        .build(1);

    assert!(matches!(
        result,
        Err(GameError::BoardGenerationExhausted { attempts: 3, .. })
    ));
}

// =============================================================================
// Custom Boards
// =============================================================================

#[test]
fn test_custom_board_validation_errors() {
    let cases: Vec<(Vec<(u8, u8)>, Vec<(u8, u8)>, BoardError)> = vec![
        (vec![(5, 50)], vec![], BoardError::SnakeNotDescending { start: 5, end: 50 }),
        (vec![], vec![(50, 5)], BoardError::LadderNotAscending { start: 50, end: 5 }),
        (vec![(60, 20)], vec![(60, 70)], BoardError::DuplicateOrigin(60)),
        (vec![(60, 1)], vec![], BoardError::ReservedSquare(1)),
        (vec![(0, 1)], vec![], BoardError::SquareOutOfRange(0)),
    ];

    for (snakes, ladders, expected) in cases {
        let result = GameBuilder::new()
            .custom_board(snakes.into_iter().collect(), ladders.into_iter().collect())
            .build(0);

        assert_eq!(result.err(), Some(GameError::InvalidBoard(expected)));
    }
}
