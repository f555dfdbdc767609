//! Snakes and Ladders game engine.

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::board::{Board, BoardTopology, Square};
use crate::core::{
    BoardSetup, ChainPolicy, GameConfig, GameError, GameState, InputError, Phase, PlayerId,
    TurnRecord,
};
use crate::rules::movement::{self, Move, MoveKind};
use crate::rules::RulesEngine;

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The player who moved.
    pub player: PlayerId,
    /// The resolved move.
    pub mv: Move,
    /// Phase after the turn: next player to roll, or the winner.
    pub phase: Phase,
}

/// The rules core for one session.
///
/// Owns the board and the config; immutable once built. All game progress
/// lives in the `GameState` passed to each operation.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
}

/// Builder for creating a GameEngine and its initial state.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config, e.g. one read from JSON.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn board(mut self, setup: BoardSetup) -> Self {
        self.config.board = setup;
        self
    }

    /// Play on a generated board with the given counts.
    pub fn random_board(self, snakes: usize, ladders: usize) -> Self {
        self.board(BoardSetup::Random { snakes, ladders })
    }

    /// Play on caller-supplied `start -> end` maps.
    pub fn custom_board(self, snakes: BTreeMap<u8, u8>, ladders: BTreeMap<u8, u8>) -> Self {
        self.board(BoardSetup::Custom { snakes, ladders })
    }

    pub fn chain_policy(mut self, policy: ChainPolicy) -> Self {
        self.config.chain_policy = policy;
        self
    }

    pub fn max_generation_attempts(mut self, attempts: u32) -> Self {
        self.config.max_generation_attempts = attempts;
        self
    }

    /// Build the engine and initial state.
    ///
    /// The seed drives both the dice and, for generated boards, the layout.
    pub fn build(self, seed: u64) -> Result<(GameEngine, GameState), GameError> {
        self.config.validate()?;
        let board = self.config.build_board(seed)?;
        let state = GameState::new(self.config.player_count, seed)?;

        debug!(
            seed,
            players = self.config.player_count,
            snakes = board.snakes().count(),
            ladders = board.ladders().count(),
            "game ready"
        );

        let engine = GameEngine {
            config: self.config,
            board,
        };
        Ok((engine, state))
    }
}

impl GameEngine {
    /// Get the config this engine was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snakes and ladders as plain `start -> end` maps.
    pub fn board_topology(&self) -> BoardTopology {
        self.board.topology()
    }

    /// Roll the die from the state's dice stream. Uniform over 1..=6.
    pub fn roll_dice(&self, state: &mut GameState) -> u8 {
        state.rng.roll_die()
    }

    /// Resolve a move and report only where it ends and how.
    pub fn apply_turn(&self, position: u8, steps: u8) -> Result<(Square, MoveKind), GameError> {
        let mv = self.resolve_move(position, steps)?;
        Ok((mv.to, mv.kind))
    }

    /// Pass the turn to the next seat.
    ///
    /// Rejected once a player has won; the winner keeps the turn.
    pub fn advance_turn(&self, state: &mut GameState) -> Result<(), GameError> {
        state.ensure_in_progress()?;
        state.advance_turn();
        Ok(())
    }

    /// Play the current player's turn with a known die value.
    pub fn take_turn(&self, state: &mut GameState, steps: u8) -> Result<TurnOutcome, GameError> {
        state.ensure_in_progress()?;

        let player = state.current_player();
        let position = state
            .player(player)
            .ok_or(InputError::UnknownPlayer(player))?
            .position
            .number();
        let mv = self.resolve_move(position, steps)?;

        debug!(
            turn = state.turn_number(),
            %player,
            roll = steps,
            from = %mv.from,
            to = %mv.to,
            kind = ?mv.kind,
            "turn"
        );

        state.record_turn(TurnRecord::new(state.turn_number(), player, mv.clone()));
        if mv.is_win() {
            info!(%player, turns = state.turn_number(), "player wins");
        } else {
            state.advance_turn();
        }

        Ok(TurnOutcome {
            player,
            mv,
            phase: state.phase(),
        })
    }

    /// Roll the die and play the current player's turn.
    ///
    /// Once the game is over nothing is rolled.
    pub fn play_turn(&self, state: &mut GameState) -> Result<TurnOutcome, GameError> {
        state.ensure_in_progress()?;
        let steps = self.roll_dice(state);
        self.take_turn(state, steps)
    }
}

impl RulesEngine for GameEngine {
    fn board(&self) -> &Board {
        &self.board
    }

    fn player_count(&self) -> usize {
        self.config.player_count
    }

    fn resolve_move(&self, position: u8, steps: u8) -> Result<Move, GameError> {
        Ok(movement::resolve(
            &self.board,
            self.config.chain_policy,
            position,
            steps,
        )?)
    }

    fn apply_action(&self, state: &mut GameState, steps: u8) -> Result<Move, GameError> {
        self.take_turn(state, steps).map(|outcome| outcome.mv)
    }
}
