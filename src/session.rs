//! Command dispatch for a front end.
//!
//! A renderer turns clicks and key presses into `Command`s; the session
//! applies them to its engine and reports what happened. This is also where
//! the forced-skip policy lives: whenever the current player holds a die
//! they cannot spend (after a roll, a seat removal, or a load), the session
//! discards the die and passes the turn.
//!
//! ```
//! use ludo_engine::core::{PlayerId, ScriptedDice, TokenId};
//! use ludo_engine::session::{Command, Outcome, Session};
//! use ludo_engine::GameEngine;
//!
//! let engine = GameEngine::with_dice(2, ScriptedDice::new([3, 6]));
//! let mut session = Session::new(engine, "savegame.json");
//!
//! // Nothing can leave base on a 3: the turn is skipped.
//! let outcome = session.handle(Command::Roll).unwrap();
//! assert_eq!(outcome, Outcome::Skipped { player: PlayerId::new(0), value: 3 });
//! assert_eq!(session.engine().current_turn(), PlayerId::new(1));
//! ```

use std::path::{Path, PathBuf};

use crate::core::player::PlayerId;
use crate::core::rng::DiceSource;
use crate::core::token::TokenId;
use crate::persist::{load_game, save_game, PersistError, Restore};
use crate::rules::GameEngine;

/// A request from the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Roll the die for the current player.
    Roll,
    /// Move one of the current player's tokens by the pending die.
    Move(TokenId),
    /// Seat the next player.
    AddPlayer,
    /// Remove the last seated player.
    RemovePlayer,
    /// Write the game to the session's save file.
    Save,
    /// Replace the game with the session's save file.
    Load,
}

/// What a command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The die was rolled and at least one token can move.
    Rolled { player: PlayerId, value: u8 },
    /// The die was rolled, nothing could move, and the turn passed.
    Skipped { player: PlayerId, value: u8 },
    /// A token moved. `winner` is set only on the move that decided the game.
    Moved {
        player: PlayerId,
        token: TokenId,
        winner: Option<PlayerId>,
    },
    PlayerAdded,
    /// The last seat left. `skipped` is the die discarded because the seat
    /// that inherited it had nothing to move.
    PlayerRemoved { skipped: Option<u8> },
    Saved,
    /// A save was loaded. `skipped` is a pending die from the save that the
    /// current player could not spend.
    Loaded {
        restore: Restore,
        skipped: Option<u8>,
    },
    /// The engine refused the command; nothing changed.
    Rejected,
}

/// An engine plus the policies a front end needs around it.
#[derive(Debug)]
pub struct Session<D: DiceSource> {
    engine: GameEngine<D>,
    save_path: PathBuf,
    winner_announced: bool,
}

impl<D: DiceSource> Session<D> {
    /// Wrap an engine, saving to and loading from `save_path`.
    pub fn new(engine: GameEngine<D>, save_path: impl Into<PathBuf>) -> Self {
        let winner_announced = engine.winner_index().is_some();
        Self {
            engine,
            save_path: save_path.into(),
            winner_announced,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<D> {
        &self.engine
    }

    #[must_use]
    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Take the engine back.
    #[must_use]
    pub fn into_engine(self) -> GameEngine<D> {
        self.engine
    }

    /// Apply one command.
    ///
    /// Only `Save` and `Load` can fail; engine rejections come back as
    /// `Outcome::Rejected`.
    pub fn handle(&mut self, command: Command) -> Result<Outcome, PersistError> {
        let outcome = match command {
            Command::Roll => self.roll(),
            Command::Move(token) => self.move_token(token),
            Command::AddPlayer => accepted(self.engine.add_player(), Outcome::PlayerAdded),
            Command::RemovePlayer => {
                if self.engine.remove_player() {
                    self.winner_announced = self.engine.winner_index().is_some();
                    Outcome::PlayerRemoved {
                        skipped: self.skip_unusable_die(),
                    }
                } else {
                    Outcome::Rejected
                }
            }
            Command::Save => {
                save_game(&self.engine, &self.save_path)?;
                Outcome::Saved
            }
            Command::Load => {
                let restore = load_game(&mut self.engine, &self.save_path)?;
                self.winner_announced = self.engine.winner_index().is_some();
                Outcome::Loaded {
                    restore,
                    skipped: self.skip_unusable_die(),
                }
            }
        };
        Ok(outcome)
    }

    fn roll(&mut self) -> Outcome {
        let player = self.engine.current_turn();
        let Some(value) = self.engine.roll_dice() else {
            return Outcome::Rejected;
        };

        if self.engine.can_move_any(player, value) {
            Outcome::Rolled { player, value }
        } else {
            self.engine.clear_dice_and_advance();
            Outcome::Skipped { player, value }
        }
    }

    /// Discard a pending die the current player cannot spend, passing the
    /// turn. Returns the discarded value.
    fn skip_unusable_die(&mut self) -> Option<u8> {
        let die = self.engine.pending_dice()?;
        if self.engine.can_move_any(self.engine.current_turn(), die) {
            return None;
        }
        self.engine.clear_dice_and_advance();
        Some(die)
    }

    fn move_token(&mut self, token: TokenId) -> Outcome {
        let player = self.engine.current_turn();
        if !self.engine.move_token(player, token) {
            return Outcome::Rejected;
        }

        let winner = match self.engine.winner_index() {
            Some(winner) if !self.winner_announced => {
                self.winner_announced = true;
                Some(winner)
            }
            _ => None,
        };

        Outcome::Moved {
            player,
            token,
            winner,
        }
    }
}

fn accepted(ok: bool, outcome: Outcome) -> Outcome {
    if ok {
        outcome
    } else {
        Outcome::Rejected
    }
}
