//! Logical token locations.

use serde::{Deserialize, Serialize};

use crate::core::config::TOKENS_PER_PLAYER;
use crate::core::player::{ring_square, Player, PlayerId};
use crate::core::token::{Token, TokenState};

/// Where a token is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// One of the owner's base slots (`0..4`, one per token id).
    Base { seat: PlayerId, slot: u8 },
    /// An absolute square on the shared ring.
    Ring { square: u8 },
    /// A cell on the owner's home path.
    Home { seat: PlayerId, index: u8 },
    /// The shared finish in the center of the board.
    Finished,
}

impl Zone {
    /// Locate a token owned by `owner`.
    #[must_use]
    pub fn of(owner: &Player, token: &Token) -> Self {
        match token.state() {
            TokenState::Base => Zone::Base {
                seat: owner.seat(),
                slot: token.id().raw().wrapping_sub(1) % TOKENS_PER_PLAYER,
            },
            TokenState::OnRing { offset } => Zone::Ring {
                square: ring_square(owner.entry_point(), offset),
            },
            TokenState::InHomePath { index } => Zone::Home {
                seat: owner.seat(),
                index,
            },
            TokenState::Finished => Zone::Finished,
        }
    }

    /// Check if this zone is on the shared ring.
    #[must_use]
    pub fn is_ring(&self) -> bool {
        matches!(self, Zone::Ring { .. })
    }
}
