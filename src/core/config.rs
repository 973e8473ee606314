//! Board configuration types.
//!
//! The engine is configured at construction by providing:
//! - `SeatConfig`: one entry per seat (name, display color, ring entry point)
//! - `BoardConfig`: the ordered seat table plus the safe-square set
//!
//! Seat assignment is data: `add_player` always takes the next row of the
//! table, and removal always pops the last one.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of cells on the shared ring.
pub const RING_LEN: u8 = 52;

/// Number of cells on each player's private home path.
pub const HOME_LEN: u8 = 6;

/// Index of the last home cell. Landing here exactly finishes the token.
pub const FINAL_HOME_INDEX: u8 = HOME_LEN - 1;

/// Tokens owned by every player.
pub const TOKENS_PER_PLAYER: u8 = 4;

/// Seats can never be removed below this count.
pub const MIN_PLAYERS: usize = 2;

/// Faces on the single die.
pub const DIE_FACES: u8 = 6;

/// The roll that releases a token from base and grants a bonus turn.
pub const RELEASE_ROLL: u8 = 6;

/// RGB display color, serialized as a 3-element array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

/// Configuration for a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name of the player sitting here.
    pub name: String,

    /// Display color.
    pub color: Color,

    /// Absolute ring square where this seat's tokens enter the ring.
    pub entry_point: u8,
}

impl SeatConfig {
    /// Create a new seat configuration.
    pub fn new(name: impl Into<String>, color: Color, entry_point: u8) -> Self {
        Self {
            name: name.into(),
            color,
            entry_point,
        }
    }
}

/// Errors reported by `BoardConfig::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board needs at least 2 seats, got {0}")]
    TooFewSeats(usize),

    #[error("seat {seat} entry point {entry} is off the ring")]
    EntryOffRing { seat: usize, entry: u8 },

    #[error("seats {first} and {second} share entry point {entry}")]
    DuplicateEntry { first: usize, second: usize, entry: u8 },

    #[error("safe square {0} is off the ring")]
    SafeSquareOffRing(u8),
}

/// Complete board configuration.
///
/// `BoardConfig::classic()` is the standard four-seat board. Custom tables
/// are built with the `with_*` methods and checked with `validate()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Seat table in turn order. Its length is the maximum player count.
    pub seats: Vec<SeatConfig>,

    /// Absolute ring squares where tokens cannot be captured.
    pub safe_squares: FxHashSet<u8>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl BoardConfig {
    /// Create an empty configuration (no seats, no safe squares).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seats: Vec::new(),
            safe_squares: FxHashSet::default(),
        }
    }

    /// The standard board: Red, Green, Yellow, Blue entering 13 squares
    /// apart, with each entry square and the square 8 past it safe.
    #[must_use]
    pub fn classic() -> Self {
        Self::empty()
            .with_seat(SeatConfig::new("Red", Color(220, 40, 40), 0))
            .with_seat(SeatConfig::new("Green", Color(40, 180, 80), 13))
            .with_seat(SeatConfig::new("Yellow", Color(230, 210, 70), 26))
            .with_seat(SeatConfig::new("Blue", Color(60, 120, 220), 39))
            .with_safe_squares([0, 8, 13, 21, 26, 34, 39, 47])
    }

    /// Append a seat to the table.
    #[must_use]
    pub fn with_seat(mut self, seat: SeatConfig) -> Self {
        self.seats.push(seat);
        self
    }

    /// Add safe squares.
    #[must_use]
    pub fn with_safe_squares(mut self, squares: impl IntoIterator<Item = u8>) -> Self {
        self.safe_squares.extend(squares);
        self
    }

    /// Maximum number of players (one per seat).
    #[must_use]
    pub fn max_players(&self) -> usize {
        self.seats.len()
    }

    /// Get a seat by index.
    #[must_use]
    pub fn seat(&self, index: usize) -> Option<&SeatConfig> {
        self.seats.get(index)
    }

    /// Check whether an absolute ring square is safe.
    #[must_use]
    pub fn is_safe(&self, square: u8) -> bool {
        self.safe_squares.contains(&square)
    }

    /// Check the table for seats and squares the engine cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats.len() < MIN_PLAYERS {
            return Err(ConfigError::TooFewSeats(self.seats.len()));
        }

        for (i, seat) in self.seats.iter().enumerate() {
            if seat.entry_point >= RING_LEN {
                return Err(ConfigError::EntryOffRing {
                    seat: i,
                    entry: seat.entry_point,
                });
            }
            if let Some(first) = self.seats[..i]
                .iter()
                .position(|s| s.entry_point == seat.entry_point)
            {
                return Err(ConfigError::DuplicateEntry {
                    first,
                    second: i,
                    entry: seat.entry_point,
                });
            }
        }

        if let Some(&square) = self.safe_squares.iter().find(|&&s| s >= RING_LEN) {
            return Err(ConfigError::SafeSquareOffRing(square));
        }

        Ok(())
    }
}
