//! Simulation loop.

use tracing::{debug, warn};

use crate::board::RedirectKind;
use crate::core::{GameError, GameState, PlayerMap};
use crate::rules::{GameResult, MoveKind, RulesEngine};

/// Default cap on turns per simulated game.
pub const DEFAULT_MAX_TURNS: u32 = 10_000;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Maximum turns before giving up on a game.
    pub max_turns: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum turns per game.
    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }
}

/// Summary of a simulated game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationReport {
    /// `None` if the turn cap was hit first.
    pub result: Option<GameResult>,
    /// Turns played in this run.
    pub turns: u32,
    /// Ladders climbed per player.
    pub ladders: PlayerMap<u32>,
    /// Snakes slid down per player.
    pub snakes: PlayerMap<u32>,
}

/// Runs games against any rules engine.
pub struct Simulation<'a, E: RulesEngine> {
    engine: &'a E,
    config: SimulationConfig,
}

impl<'a, E: RulesEngine> Simulation<'a, E> {
    pub fn new(engine: &'a E, config: SimulationConfig) -> Self {
        Self { engine, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play from the current state until someone wins or the turn cap is hit.
    pub fn run(&self, state: &mut GameState) -> Result<SimulationReport, GameError> {
        let player_count = state.player_count();
        let mut ladders = PlayerMap::with_value(player_count, 0);
        let mut snakes = PlayerMap::with_value(player_count, 0);
        let mut turns = 0;

        while self.engine.is_terminal(state).is_none() {
            if turns >= self.config.max_turns {
                warn!(turns, "turn cap reached without a winner");
                break;
            }

            let player = state.current_player();
            let steps = state.rng.roll_die();
            let mv = self.engine.apply_action(state, steps)?;
            turns += 1;

            // Under chaining one move may climb and slide several times.
            for redirect in &mv.redirects {
                match redirect.kind {
                    RedirectKind::Ladder => ladders[player] += 1,
                    RedirectKind::Snake => snakes[player] += 1,
                }
            }
            if mv.kind == MoveKind::Win {
                debug!(%player, turns, "simulation finished");
            }
        }

        Ok(SimulationReport {
            result: self.engine.is_terminal(state),
            turns,
            ladders,
            snakes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::games::snakes_ladders::GameBuilder;

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();
        assert_eq!(config.max_turns, DEFAULT_MAX_TURNS);
        assert_eq!(SimulationConfig::new().with_max_turns(3).max_turns, 3);
    }

    #[test]
    fn test_runs_to_completion() {
        let (engine, mut state) = GameBuilder::new().build(42).unwrap();

        let report = Simulation::new(&engine, SimulationConfig::default())
            .run(&mut state)
            .unwrap();

        let Some(GameResult::Winner(winner)) = report.result else {
            panic!("game should have a winner");
        };
        assert_eq!(state.winner(), Some(winner));
        assert_eq!(report.turns as usize, state.history().len());
    }

    #[test]
    fn test_turn_cap() {
        let (engine, mut state) = GameBuilder::new().build(42).unwrap();

        let report = Simulation::new(&engine, SimulationConfig::new().with_max_turns(3))
            .run(&mut state)
            .unwrap();

        assert_eq!(report.result, None);
        assert_eq!(report.turns, 3);
        assert_eq!(state.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_counts_redirects() {
        let (engine, mut state) = GameBuilder::new().build(11).unwrap();

        let report = Simulation::new(&engine, SimulationConfig::default())
            .run(&mut state)
            .unwrap();

        let climbed: u32 = report.ladders.values().sum();
        let slid: u32 = report.snakes.values().sum();
        let redirected = state
            .history()
            .iter()
            .filter(|r| !r.mv.redirects.is_empty())
            .count() as u32;
        assert_eq!(climbed + slid, redirected);
    }
}
