//! # ludo-engine
//!
//! Rules engine for four-seat Ludo: dice-driven token movement, capture on
//! shared ring squares, bonus turns, win detection, and save/load.
//!
//! ## Design Principles
//!
//! 1. **One Authority**: All state changes go through `GameEngine`. Callers
//!    get read-only views of players and tokens.
//!
//! 2. **No Panics on Bad Input**: Illegal requests return `false` / `None`
//!    and leave the state untouched. Bad save files fall back to a fresh
//!    2-player game.
//!
//! 3. **Injectable Dice**: The die is the only random input and sits behind
//!    `DiceSource`, so games replay exactly from a seed or a script.
//!
//! 4. **Configuration Over Convention**: Seats and safe squares come from a
//!    `BoardConfig` table, not hidden globals.
//!
//! ## Modules
//!
//! - `core`: Tokens, players, state, action log, dice, configuration
//! - `rules`: Movement, capture, and the `GameEngine`
//! - `zones`: Logical token locations for renderers
//! - `persist`: Snapshot layout and JSON save files
//! - `session`: Command dispatch and the forced-skip policy

pub mod core;
pub mod rules;
pub mod zones;
pub mod persist;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, BoardConfig, Capture, Color, ConfigError, DiceSource, GameRng,
    GameState, Player, PlayerId, ScriptedDice, SeatConfig, Token, TokenId, TokenState,
};

pub use crate::rules::GameEngine;

pub use crate::zones::Zone;

pub use crate::persist::{
    load_game, save_game, PersistError, Restore, Snapshot, SnapshotError, DEFAULT_SAVE_PATH,
};

pub use crate::session::{Command, Outcome, Session};
