//! Headless game runner.
//!
//! Plays games to completion by rolling the state's dice for every player.
//! There is no decision making in Snakes and Ladders, so this is all a
//! "player" needs to do.
//!
//! ## Usage
//!
//! ```
//! use snakes_ladders::games::snakes_ladders::GameBuilder;
//! use snakes_ladders::sim::{Simulation, SimulationConfig};
//!
//! let (engine, mut state) = GameBuilder::new().build(7).unwrap();
//! let report = Simulation::new(&engine, SimulationConfig::default())
//!     .run(&mut state)
//!     .unwrap();
//! assert!(report.result.is_some());
//! ```

pub mod runner;

pub use runner::{Simulation, SimulationConfig, SimulationReport, DEFAULT_MAX_TURNS};
