//! Play Snakes and Ladders headlessly and log every turn.
//!
//! ```text
//! simulate --seed 7 --players 3 --board random --snakes 8 --ladders 8
//! simulate --config game.json --json
//! ```

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use snakes_ladders::{
    BoardSetup, ChainPolicy, GameBuilder, GameConfig, GameResult, Simulation, SimulationConfig,
};

/// Snakes and ladders on a random board when no count is given.
const DEFAULT_COUNT: usize = 8;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BoardArg {
    Classic,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "simulate", about = "Run a headless game of Snakes and Ladders")]
struct Args {
    /// Seed for dice and, with --board random, board layout
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of players (2-4)
    #[arg(long)]
    players: Option<usize>,

    /// Board to play on
    #[arg(long, value_enum)]
    board: Option<BoardArg>,

    /// Snakes on a random board (implies --board random)
    #[arg(long)]
    snakes: Option<usize>,

    /// Ladders on a random board (implies --board random)
    #[arg(long)]
    ladders: Option<usize>,

    /// Follow snakes and ladders that lead onto another one
    #[arg(long)]
    chained: bool,

    /// Give up after this many turns
    #[arg(long, default_value_t = snakes_ladders::sim::DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// JSON game config; command-line flags override it
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json: bool,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameConfig::from_json(&text)?
            }
            None => GameConfig::default(),
        };

        if let Some(players) = self.players {
            config.player_count = players;
        }
        let counts_given = self.snakes.is_some() || self.ladders.is_some();
        match self.board {
            Some(BoardArg::Classic) if counts_given => {
                bail!("--snakes and --ladders only apply to a random board")
            }
            Some(BoardArg::Classic) => config.board = BoardSetup::Classic,
            Some(BoardArg::Random) => config.board = self.random_board(&config.board),
            None if counts_given => config.board = self.random_board(&config.board),
            None => {}
        }
        if self.chained {
            config.chain_policy = ChainPolicy::Chained;
        }
        Ok(config)
    }

    /// Random board counts from the flags, falling back to the config's.
    fn random_board(&self, current: &BoardSetup) -> BoardSetup {
        let (snakes, ladders) = match current {
            BoardSetup::Random { snakes, ladders } => (*snakes, *ladders),
            _ => (DEFAULT_COUNT, DEFAULT_COUNT),
        };
        BoardSetup::Random {
            snakes: self.snakes.unwrap_or(snakes),
            ladders: self.ladders.unwrap_or(ladders),
        }
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.json);

    let config = args.game_config()?;
    let (engine, mut state) = GameBuilder::from_config(config)
        .build(args.seed)
        .context("setting up game")?;

    let topology = engine.board_topology();
    info!(snakes = ?topology.snakes, ladders = ?topology.ladders, "board");

    let simulation =
        Simulation::new(&engine, SimulationConfig::new().with_max_turns(args.max_turns));
    info!(max_turns = simulation.config().max_turns, "simulating");
    let report = simulation.run(&mut state)?;

    match report.result {
        Some(GameResult::Winner(winner)) => {
            info!(%winner, turns = report.turns, "game over");
            println!("{} wins after {} turns", winner, report.turns);
        }
        None => {
            println!("no winner after {} turns", report.turns);
        }
    }
    for (player, climbed) in report.ladders.iter() {
        println!(
            "{}: {} ladders, {} snakes",
            player, climbed, report.snakes[player]
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> anyhow::Result<GameConfig> {
        let args = Args::try_parse_from(std::iter::once("simulate").chain(args.iter().copied()))?;
        args.game_config()
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(config_for(&[]).unwrap().board, BoardSetup::Classic);
    }

    #[test]
    fn test_counts_imply_random_board() {
        assert_eq!(
            config_for(&["--snakes", "3"]).unwrap().board,
            BoardSetup::Random { snakes: 3, ladders: DEFAULT_COUNT }
        );
        assert_eq!(
            config_for(&["--board", "random", "--ladders", "5"]).unwrap().board,
            BoardSetup::Random { snakes: DEFAULT_COUNT, ladders: 5 }
        );
    }

    #[test]
    fn test_counts_with_classic_board_rejected() {
        assert!(config_for(&["--board", "classic", "--snakes", "3"]).is_err());
    }
}
