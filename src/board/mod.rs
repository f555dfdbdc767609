//! The 100-square board: squares, snakes and ladders, and board generation.
//!
//! A `Board` is built once per session, either the classic fixed layout or a
//! randomly generated one, and never changes afterwards.

pub mod generator;
pub mod square;
pub mod topology;

pub use generator::{BoardGenerator, DEFAULT_MAX_ATTEMPTS};
pub use square::Square;
pub use topology::{Board, BoardTopology, Redirect, RedirectKind};
