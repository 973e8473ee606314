//! JSON save files.

use std::fs;
use std::path::Path;

use super::error::PersistError;
use super::snapshot::Snapshot;
use crate::core::config::MIN_PLAYERS;
use crate::core::rng::DiceSource;
use crate::rules::GameEngine;

/// Save file used when the caller does not pick one.
pub const DEFAULT_SAVE_PATH: &str = "savegame.json";

/// What `load_game` did to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Restore {
    /// The saved game was adopted as-is.
    Restored,
    /// The file was unreadable as a game; a fresh 2-player game was started.
    Fallback,
}

/// Write the engine's state to `path` as pretty JSON.
pub fn save_game<D: DiceSource>(
    engine: &GameEngine<D>,
    path: impl AsRef<Path>,
) -> Result<(), PersistError> {
    let path = path.as_ref();
    let json = engine.serialize().to_json()?;
    fs::write(path, json).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a saved game from `path` into `engine`.
///
/// A file that cannot be read (including a missing file) is an error and
/// leaves the engine untouched. A file that reads but does not hold a
/// playable game resets the engine to a fresh 2-player game.
pub fn load_game<D: DiceSource>(
    engine: &mut GameEngine<D>,
    path: impl AsRef<Path>,
) -> Result<Restore, PersistError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let adopted = match Snapshot::from_json(&json) {
        Ok(snapshot) => engine.deserialize(&snapshot),
        Err(_) => {
            engine.new_game(MIN_PLAYERS);
            false
        }
    };

    Ok(if adopted {
        Restore::Restored
    } else {
        Restore::Fallback
    })
}
