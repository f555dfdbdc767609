//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. The default game seats two players.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::Square;

/// Seat identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    // Seats are shown 1-based, as on the game banner.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Colour of a player's token. Only the presentation layer interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Token {
    /// Tokens handed out in seat order.
    pub const SEAT_ORDER: [Token; 4] = [Token::Red, Token::Blue, Token::Green, Token::Yellow];

    /// Token for a seat.
    #[must_use]
    pub fn for_seat(player: PlayerId) -> Self {
        Self::SEAT_ORDER[player.index() % Self::SEAT_ORDER.len()]
    }
}

/// A seated player and their token's square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub position: Square,
    pub token: Token,
}

impl Player {
    /// A player waiting on the start square.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            position: Square::START,
            token: Token::for_seat(id),
        }
    }

    /// Has this player reached the final square?
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.position == Square::FINISH
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use snakes_ladders::core::{PlayerId, PlayerMap};
///
/// let mut ladders_climbed: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// ladders_climbed[PlayerId::new(1)] += 1;
/// assert_eq!(ladders_climbed[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// Callers validate `player_count` (see `GameConfig::validate`).
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry, or `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over entries in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
