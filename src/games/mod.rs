//! Game implementations built on the rules core.
//!
//! - `snakes_ladders`: the Snakes and Ladders engine and its builder

pub mod snakes_ladders;
