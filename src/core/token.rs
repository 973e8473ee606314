//! Tokens and their position state machine.
//!
//! A token is always in exactly one of four states. Position data only exists
//! in the variant where it means something:
//!
//! ```text
//! Base --(6)--> OnRing { offset 0..=51 } --> InHomePath { index 0..=4 } --> Finished
//!                    ^                              |
//!                    +------ capture sends back to Base
//! ```
//!
//! Landing exactly on the last home cell finishes the token, so a live
//! `InHomePath` index is always below `FINAL_HOME_INDEX`.

use serde::{Deserialize, Serialize};

use super::config::TOKENS_PER_PLAYER;
use crate::rules::movement;

/// Token identifier, unique within its owning player.
///
/// Ids are 1-based: a player's tokens are `TokenId(1)..=TokenId(4)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over the ids of a full token set.
    pub fn all() -> impl Iterator<Item = TokenId> {
        (1..=TOKENS_PER_PLAYER).map(TokenId)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.0)
    }
}

/// Where a token is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenState {
    /// Waiting in the player's base. Only a 6 releases it.
    #[default]
    Base,
    /// On the shared ring, `offset` squares past the owner's entry point.
    OnRing { offset: u8 },
    /// On the owner's private home path.
    InHomePath { index: u8 },
    /// Reached the final home cell. Never moves again.
    Finished,
}

impl TokenState {
    /// Ring offset if the token is on the ring.
    #[must_use]
    pub const fn ring_offset(self) -> Option<u8> {
        match self {
            TokenState::OnRing { offset } => Some(offset),
            _ => None,
        }
    }

    /// Home path index if the token is on its home path.
    #[must_use]
    pub const fn home_index(self) -> Option<u8> {
        match self {
            TokenState::InHomePath { index } => Some(index),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, TokenState::Base)
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, TokenState::Finished)
    }
}

/// A single token owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    state: TokenState,
}

impl Token {
    /// Create a token in base.
    #[must_use]
    pub const fn new(id: TokenId) -> Self {
        Self {
            id,
            state: TokenState::Base,
        }
    }

    /// Create a token in a given state.
    #[must_use]
    pub(crate) const fn with_state(id: TokenId, state: TokenState) -> Self {
        Self { id, state }
    }

    #[must_use]
    pub const fn id(&self) -> TokenId {
        self.id
    }

    #[must_use]
    pub const fn state(&self) -> TokenState {
        self.state
    }

    /// Check if this token can move with the given die value.
    #[must_use]
    pub fn is_movable_with(&self, die: u8) -> bool {
        movement::destination(self.state, die).is_some()
    }

    pub(crate) fn set_state(&mut self, state: TokenState) {
        self.state = state;
    }

    /// Send the token back to base.
    pub(crate) fn send_to_base(&mut self) {
        self.state = TokenState::Base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_id() {
        let id = TokenId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(format!("{}", id), "Token 3");

        let all: Vec<_> = TokenId::all().collect();
        assert_eq!(all, vec![TokenId(1), TokenId(2), TokenId(3), TokenId(4)]);
    }

    #[test]
    fn test_new_token_in_base() {
        let token = Token::new(TokenId(1));
        assert!(token.state().is_base());
        assert_eq!(token.state().ring_offset(), None);
        assert_eq!(token.state().home_index(), None);
    }

    #[test]
    fn test_state_accessors() {
        assert_eq!(TokenState::OnRing { offset: 7 }.ring_offset(), Some(7));
        assert_eq!(TokenState::OnRing { offset: 7 }.home_index(), None);
        assert_eq!(TokenState::InHomePath { index: 2 }.home_index(), Some(2));
        assert!(TokenState::Finished.is_finished());
        assert!(!TokenState::Finished.is_base());
    }

    #[test]
    fn test_base_needs_six() {
        let token = Token::new(TokenId(1));
        for die in 1..=5 {
            assert!(!token.is_movable_with(die));
        }
        assert!(token.is_movable_with(6));
    }

    #[test]
    fn test_finished_never_moves() {
        let token = Token::with_state(TokenId(2), TokenState::Finished);
        for die in 1..=6 {
            assert!(!token.is_movable_with(die));
        }
    }

    #[test]
    fn test_send_to_base() {
        let mut token = Token::with_state(TokenId(4), TokenState::OnRing { offset: 30 });
        token.send_to_base();
        assert_eq!(token.state(), TokenState::Base);
        assert_eq!(token.id(), TokenId(4));
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::with_state(TokenId(1), TokenState::InHomePath { index: 3 });
        let json = serde_json::to_string(&token).unwrap();
        let deserialized: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }
}
