//! Action records: what happened, to whom, and when.
//!
//! The engine appends an `ActionRecord` for every accepted operation. The log
//! is for callers (replay display, debugging, training data); it is not part
//! of the persisted snapshot and cannot be used to undo moves.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::token::{TokenId, TokenState};

/// A token sent back to base by a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// Owner of the captured token.
    pub player: PlayerId,
    /// The captured token.
    pub token: TokenId,
}

/// An accepted engine operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The die was rolled.
    Roll(u8),

    /// A token moved with the pending die.
    Move {
        token: TokenId,
        die: u8,
        from: TokenState,
        to: TokenState,
        /// Opposing tokens sent to base. Usually empty.
        captured: SmallVec<[Capture; 4]>,
    },

    /// The pending die was discarded and the turn passed without a move.
    Skip(u8),

    /// A seat was added.
    SeatAdded,

    /// The last seat was removed.
    SeatRemoved,
}

impl Action {
    /// Tokens captured by this action, if any.
    #[must_use]
    pub fn captured(&self) -> &[Capture] {
        match self {
            Action::Move { captured, .. } => captured,
            _ => &[],
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action (or whose seat changed).
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
