//! Core engine types: tokens, players, state, actions, dice, configuration.
//!
//! These are the data model. Rules that change them live in `rules`.

pub mod config;
pub mod token;
pub mod player;
pub mod rng;
pub mod action;
pub mod state;

pub use config::{
    BoardConfig, Color, ConfigError, SeatConfig, DIE_FACES, FINAL_HOME_INDEX, HOME_LEN,
    MIN_PLAYERS, RELEASE_ROLL, RING_LEN, TOKENS_PER_PLAYER,
};
pub use token::{Token, TokenId, TokenState};
pub use player::{Player, PlayerId};
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use action::{Action, ActionRecord, Capture};
pub use state::GameState;
