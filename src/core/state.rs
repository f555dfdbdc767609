//! Game state: everything that changes during a session.
//!
//! ## GameState
//!
//! - Seated players and their squares
//! - Whose turn it is, and the turn number
//! - The winner, once there is one (absorbing)
//! - The dice stream
//! - Turn history
//!
//! The board is not part of the state; it belongs to the engine and never
//! changes after the session starts. All mutation goes through the engine's
//! turn operations.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{MAX_PLAYERS, MIN_PLAYERS};
use super::error::{GameError, InputError};
use super::player::{Player, PlayerId, PlayerMap};
use super::record::TurnRecord;
use super::rng::GameRng;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player to roll.
    AwaitingRoll(PlayerId),
    /// This player reached square 100. No further rolls are accepted.
    Finished(PlayerId),
}

/// Full game state.
///
/// Uses an `im` persistent vector for history, so cloning a state to look
/// ahead or snapshot it is cheap. Deserialized snapshots are checked for
/// consistency before use.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct GameState {
    players: PlayerMap<Player>,

    /// Player whose turn it is.
    current: PlayerId,

    /// Set once, when a player reaches square 100.
    winner: Option<PlayerId>,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Dice stream.
    pub rng: GameRng,

    history: Vector<TurnRecord>,
}

/// Wire form of `GameState`, checked before it becomes one.
#[derive(Deserialize)]
struct StateSnapshot {
    players: PlayerMap<Player>,
    current: PlayerId,
    winner: Option<PlayerId>,
    turn_number: u32,
    rng: GameRng,
    history: Vector<TurnRecord>,
}

impl TryFrom<StateSnapshot> for GameState {
    type Error = GameError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        let state = Self {
            players: snapshot.players,
            current: snapshot.current,
            winner: snapshot.winner,
            turn_number: snapshot.turn_number,
            rng: snapshot.rng,
            history: snapshot.history,
        };
        state.check_consistent()?;
        Ok(state)
    }
}

impl GameState {
    /// Seat `player_count` players on square 1, player 0 to roll first.
    ///
    /// Fails unless `player_count` is within `MIN_PLAYERS..=MAX_PLAYERS`.
    pub fn new(player_count: usize, seed: u64) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be {}-{}, got {}",
                MIN_PLAYERS, MAX_PLAYERS, player_count
            )));
        }
        Ok(Self {
            players: PlayerMap::new(player_count, Player::new),
            current: PlayerId::new(0),
            winner: None,
            turn_number: 1,
            rng: GameRng::new(seed),
            history: Vector::new(),
        })
    }

    /// Check that seats, turn and winner agree with each other.
    fn check_consistent(&self) -> Result<(), GameError> {
        let invalid = |reason: String| Err(GameError::InvalidState(reason));

        let count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return invalid(format!("{} seats, expected {}-{}", count, MIN_PLAYERS, MAX_PLAYERS));
        }
        if let Some((seat, player)) = self.players.iter().find(|(seat, p)| p.id != *seat) {
            return invalid(format!("{} is seated as {}", player.id, seat));
        }
        if self.current.index() >= count {
            return invalid(format!("{} is not seated", self.current));
        }

        let finished: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|(_, p)| p.has_finished())
            .map(|(seat, _)| seat)
            .collect();
        match self.winner {
            Some(winner) if finished != [winner] => {
                invalid(format!("{} is recorded as winner but is not alone on square 100", winner))
            }
            Some(winner) if winner != self.current => {
                invalid(format!("{} won but {} holds the turn", winner, self.current))
            }
            None if !finished.is_empty() => {
                invalid("a player is on square 100 without a winner".into())
            }
            _ => Ok(()),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// A single player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Player whose turn it is (or who won, once the game is over).
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Has a player won?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.winner {
            Some(winner) => Phase::Finished(winner),
            None => Phase::AwaitingRoll(self.current),
        }
    }

    /// Turns played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Error unless a roll is currently allowed.
    pub fn ensure_in_progress(&self) -> Result<(), InputError> {
        match self.winner {
            Some(winner) => Err(InputError::GameOver { winner }),
            None => Ok(()),
        }
    }

    // === Mutation (engine only) ===

    /// Move the current player's token and record the turn.
    pub(crate) fn record_turn(&mut self, record: TurnRecord) {
        self.players[record.player].position = record.mv.to;
        if record.mv.is_win() {
            self.winner = Some(record.player);
        }
        self.history.push_back(record);
    }

    /// Pass the turn to the next seat.
    pub(crate) fn advance_turn(&mut self) {
        self.current = self.current.next(self.player_count());
        self.turn_number += 1;
    }
}
