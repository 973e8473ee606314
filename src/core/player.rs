//! Player identification and per-player token ownership.
//!
//! ## PlayerId
//!
//! Seat index in turn order, 0-based.
//!
//! ## Player
//!
//! A seated player: fixed name, color and entry point, plus exactly
//! `TOKENS_PER_PLAYER` tokens. Fields are read-only outside the crate so
//! every token transition goes through the engine.

use serde::{Deserialize, Serialize};

use super::config::{Color, SeatConfig, RING_LEN};
use super::token::{Token, TokenId, TokenState};

/// Player identifier (seat index).
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use ludo_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Absolute ring square `offset` squares past `entry`.
#[must_use]
pub fn ring_square(entry: u8, offset: u8) -> u8 {
    ((entry as u16 + offset as u16) % RING_LEN as u16) as u8
}

/// A seated player and their tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    seat: PlayerId,
    name: String,
    color: Color,
    entry_point: u8,
    tokens: Vec<Token>,
}

impl Player {
    /// Seat a new player with a full set of tokens in base.
    #[must_use]
    pub fn new(seat: PlayerId, config: &SeatConfig) -> Self {
        Self {
            seat,
            name: config.name.clone(),
            color: config.color,
            entry_point: config.entry_point,
            tokens: TokenId::all().map(Token::new).collect(),
        }
    }

    /// Rebuild a player from restored parts. The caller validates the tokens.
    pub(crate) fn from_parts(
        seat: PlayerId,
        name: String,
        color: Color,
        entry_point: u8,
        tokens: Vec<Token>,
    ) -> Self {
        Self {
            seat,
            name,
            color,
            entry_point,
            tokens,
        }
    }

    #[must_use]
    pub fn seat(&self) -> PlayerId {
        self.seat
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Absolute ring square where this player's tokens enter.
    #[must_use]
    pub fn entry_point(&self) -> u8 {
        self.entry_point
    }

    /// All tokens, in id order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Get a token by id.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id() == id)
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.iter_mut().find(|t| t.id() == id)
    }

    pub(crate) fn tokens_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.tokens.iter_mut()
    }

    /// True iff every token is finished.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.tokens.iter().all(|t| t.state().is_finished())
    }

    /// Number of finished tokens.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.state().is_finished()).count()
    }

    /// Absolute ring square for a token state owned by this player.
    ///
    /// Returns `None` unless the state is `OnRing`.
    #[must_use]
    pub fn absolute_square(&self, state: TokenState) -> Option<u8> {
        state
            .ring_offset()
            .map(|offset| ring_square(self.entry_point, offset))
    }

    /// Ids of tokens that can move with the given die value.
    pub fn movable_tokens(&self, die: u8) -> impl Iterator<Item = TokenId> + '_ {
        self.tokens
            .iter()
            .filter(move |t| t.is_movable_with(die))
            .map(Token::id)
    }

    /// True iff at least one token can move with the given die value.
    #[must_use]
    pub fn can_move_any(&self, die: u8) -> bool {
        self.tokens.iter().any(|t| t.is_movable_with(die))
    }
}
