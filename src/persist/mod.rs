//! Save/load of the logical game state.
//!
//! - `Snapshot`: the persisted layout (`current_turn`, `dice_value`, `players`)
//! - `store`: JSON save files on disk
//! - `error`: typed validation and I/O errors
//!
//! A snapshot that does not describe a playable game is never adopted: the
//! engine falls back to a fresh 2-player game instead.

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::{PersistError, SnapshotError};
pub use snapshot::{PlayerSnapshot, Snapshot, TokenSnapshot, TokenTag};
pub use store::{load_game, save_game, Restore, DEFAULT_SAVE_PATH};
