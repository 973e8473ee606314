//! The game engine: the single authority over game state.
//!
//! Every state transition goes through a `GameEngine` method. Illegal
//! requests are rejected with `false` / `None` and leave the state untouched.
//!
//! ## Turn flow
//!
//! ```text
//! roll_dice() ──► can_move_any()? ──yes──► move_token() ──► (6: same player, else next)
//!                        │
//!                        no
//!                        ▼
//!             clear_dice_and_advance()
//! ```
//!
//! The skip on "no movable token" is the caller's policy: the engine never
//! skips on its own. `Session` implements the standard policy.

use im::Vector;

use crate::core::action::{Action, ActionRecord};
use crate::core::config::{BoardConfig, ConfigError, MIN_PLAYERS, RELEASE_ROLL};
use crate::core::player::{Player, PlayerId};
use crate::core::rng::{DiceSource, GameRng};
use crate::core::state::GameState;
use crate::core::token::TokenId;
use crate::persist::Snapshot;
use crate::rules::capture::resolve_captures;
use crate::rules::movement::destination;
use crate::zones::Zone;

/// Ludo rules engine.
///
/// Generic over the dice source so tests and replays can script rolls.
///
/// ```
/// use ludo_engine::core::{PlayerId, ScriptedDice, TokenId, TokenState};
/// use ludo_engine::GameEngine;
///
/// let mut engine = GameEngine::with_dice(2, ScriptedDice::new([6]));
///
/// assert_eq!(engine.roll_dice(), Some(6));
/// assert!(engine.move_token(PlayerId::new(0), TokenId::new(1)));
///
/// let token = engine.current_player().token(TokenId::new(1)).unwrap();
/// assert_eq!(token.state(), TokenState::OnRing { offset: 0 });
/// assert_eq!(engine.current_turn(), PlayerId::new(0)); // bonus turn
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<D: DiceSource = GameRng> {
    config: BoardConfig,
    state: GameState,
    dice: D,

    /// Accepted actions since the last `new_game` / `deserialize`.
    history: Vector<ActionRecord>,

    /// Turn number (starts at 1, bumped whenever the turn passes).
    turn_number: u32,

    /// Action sequence within the turn.
    action_sequence: u32,
}

impl GameEngine<GameRng> {
    /// Create a classic game with entropy-seeded dice.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::with_dice(player_count, GameRng::from_entropy())
    }

    /// Create a classic game with deterministic dice.
    #[must_use]
    pub fn seeded(player_count: usize, seed: u64) -> Self {
        Self::with_dice(player_count, GameRng::new(seed))
    }
}

impl<D: DiceSource> GameEngine<D> {
    /// Create a classic game with the given dice source.
    #[must_use]
    pub fn with_dice(player_count: usize, dice: D) -> Self {
        let config = BoardConfig::classic();
        let state = GameState::new(&config, player_count);
        Self::from_state(config, state, dice)
    }

    /// Create a game on a custom board.
    pub fn with_config(
        config: BoardConfig,
        player_count: usize,
        dice: D,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config, player_count);
        Ok(Self::from_state(config, state, dice))
    }

    fn from_state(config: BoardConfig, state: GameState, dice: D) -> Self {
        Self {
            config,
            state,
            dice,
            history: Vector::new(),
            turn_number: 1,
            action_sequence: 0,
        }
    }

    // === Setup ===

    /// Start over with `player_count` players from the front of the seat table.
    ///
    /// Counts outside `[2, max_players]` are clamped.
    pub fn new_game(&mut self, player_count: usize) {
        self.replace_state(GameState::new(&self.config, player_count));
    }

    /// Seat the next player from the seat table.
    ///
    /// Returns false if every seat is taken.
    pub fn add_player(&mut self) -> bool {
        let index = self.state.player_count();
        let Some(seat) = self.config.seat(index) else {
            return false;
        };

        let id = PlayerId::new(index as u8);
        self.state.push_player(Player::new(id, seat));
        self.record(id, Action::SeatAdded);
        true
    }

    /// Remove the most recently seated player.
    ///
    /// Returns false if only the minimum number of players remain.
    pub fn remove_player(&mut self) -> bool {
        if self.state.player_count() <= MIN_PLAYERS {
            return false;
        }

        match self.state.pop_player() {
            Some(removed) => {
                self.record(removed.seat(), Action::SeatRemoved);
                true
            }
            None => false,
        }
    }

    // === Dice ===

    /// Roll the die for the current player.
    ///
    /// Returns `None` without touching the dice source while a move is
    /// still pending.
    pub fn roll_dice(&mut self) -> Option<u8> {
        if self.state.awaiting_move() {
            return None;
        }

        let value = self.dice.roll();
        self.state.set_pending_dice(value);
        self.record(self.state.current_turn(), Action::Roll(value));
        Some(value)
    }

    /// Check if any of `player`'s tokens can move with `die`.
    ///
    /// Unknown players can never move.
    #[must_use]
    pub fn can_move_any(&self, player: PlayerId, die: u8) -> bool {
        self.state
            .player(player)
            .is_some_and(|p| p.can_move_any(die))
    }

    /// Ids of `player`'s tokens that can move with `die`.
    #[must_use]
    pub fn movable_tokens(&self, player: PlayerId, die: u8) -> Vec<TokenId> {
        self.state
            .player(player)
            .map(|p| p.movable_tokens(die).collect())
            .unwrap_or_default()
    }

    /// Discard the pending die and pass the turn without moving.
    ///
    /// This is the forced-skip primitive for callers whose player cannot
    /// move. Returns false if no die is pending.
    pub fn clear_dice_and_advance(&mut self) -> bool {
        let Some(value) = self.state.pending_dice() else {
            return false;
        };

        let player = self.state.current_turn();
        self.state.clear_pending_dice();
        self.record(player, Action::Skip(value));
        self.pass_turn();
        true
    }

    // === Movement ===

    /// Move `token` of `player` by the pending die.
    ///
    /// Rejected (false, no change) if no die is pending, the player or token
    /// does not exist, or the token cannot move that far. On success:
    /// - the token advances (base -> ring -> home path -> finished)
    /// - opposing tokens on a non-safe landing square go back to base
    /// - the die is cleared
    /// - the turn passes unless the die was a 6
    pub fn move_token(&mut self, player: PlayerId, token: TokenId) -> bool {
        let Some(die) = self.state.pending_dice() else {
            return false;
        };

        let Some(owner) = self.state.player_mut(player) else {
            return false;
        };
        let Some(moving) = owner.token_mut(token) else {
            return false;
        };

        let from = moving.state();
        let Some(to) = destination(from, die) else {
            return false;
        };
        moving.set_state(to);
        let landing = owner.absolute_square(to);

        let captured = match landing {
            Some(square) => {
                resolve_captures(self.state.players_mut(), player, square, &self.config)
            }
            None => Default::default(),
        };

        self.state.clear_pending_dice();
        self.record(
            player,
            Action::Move {
                token,
                die,
                from,
                to,
                captured,
            },
        );

        if die != RELEASE_ROLL {
            self.pass_turn();
        }

        true
    }

    fn pass_turn(&mut self) {
        self.state.advance_turn();
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    // === Queries ===

    /// First player (in seat order) whose tokens have all finished.
    #[must_use]
    pub fn winner_index(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.state.current_player()
    }

    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        self.state.current_turn()
    }

    #[must_use]
    pub fn pending_dice(&self) -> Option<u8> {
        self.state.pending_dice()
    }

    /// True iff a rolled die is waiting to be spent.
    #[must_use]
    pub fn awaiting_move(&self) -> bool {
        self.state.awaiting_move()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Where a token sits on the board.
    #[must_use]
    pub fn token_zone(&self, player: PlayerId, token: TokenId) -> Option<Zone> {
        let owner = self.state.player(player)?;
        let token = owner.token(token)?;
        Some(Zone::of(owner, token))
    }

    /// All ring tokens on an absolute square, in seat order.
    #[must_use]
    pub fn occupants(&self, square: u8) -> Vec<(PlayerId, TokenId)> {
        self.state
            .players()
            .iter()
            .flat_map(|p| {
                p.tokens()
                    .iter()
                    .filter(move |t| p.absolute_square(t.state()) == Some(square))
                    .map(move |t| (p.seat(), t.id()))
            })
            .collect()
    }

    // === Persistence ===

    /// Capture the logical state.
    #[must_use]
    pub fn serialize(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Restore from a snapshot.
    ///
    /// Returns true if the snapshot was adopted. An invalid snapshot (for
    /// example fewer than 2 players) resets to a fresh 2-player game and
    /// returns false. History restarts either way.
    pub fn deserialize(&mut self, snapshot: &Snapshot) -> bool {
        match snapshot.restore(&self.config) {
            Ok(state) => {
                self.replace_state(state);
                true
            }
            Err(_) => {
                self.new_game(MIN_PLAYERS);
                false
            }
        }
    }

    fn replace_state(&mut self, state: GameState) {
        self.state = state;
        self.history = Vector::new();
        self.turn_number = 1;
        self.action_sequence = 0;
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedDice;
    use crate::core::token::TokenState;

    fn engine(players: usize, rolls: &[u8]) -> GameEngine<ScriptedDice> {
        GameEngine::with_dice(players, ScriptedDice::new(rolls.iter().copied()))
    }

    fn state_of(engine: &GameEngine<ScriptedDice>, seat: u8, token: u8) -> TokenState {
        engine
            .player(PlayerId::new(seat))
            .and_then(|p| p.token(TokenId::new(token)))
            .map(|t| t.state())
            .unwrap()
    }

    #[test]
    fn test_new_game_defaults() {
        let engine = engine(3, &[1]);

        assert_eq!(engine.player_count(), 3);
        assert_eq!(engine.current_turn(), PlayerId::new(0));
        assert_eq!(engine.pending_dice(), None);
        assert!(engine.history().is_empty());
        assert_eq!(engine.turn_number(), 1);
    }

    #[test]
    fn test_with_config_rejects_invalid_board() {
        let result = GameEngine::with_config(BoardConfig::empty(), 2, ScriptedDice::new([1]));
        assert_eq!(result.err(), Some(ConfigError::TooFewSeats(0)));
    }

    #[test]
    fn test_roll_sets_pending() {
        let mut engine = engine(2, &[4]);

        assert_eq!(engine.roll_dice(), Some(4));
        assert_eq!(engine.pending_dice(), Some(4));
        assert!(engine.awaiting_move());
    }

    #[test]
    fn test_roll_rejected_while_pending() {
        let mut engine = engine(2, &[4, 5]);
        engine.roll_dice();

        assert_eq!(engine.roll_dice(), None);
        assert_eq!(engine.pending_dice(), Some(4));
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.dice.rolls_made(), 1);

        // The rejected roll consumed nothing: the next accepted roll is the second value.
        assert!(engine.clear_dice_and_advance());
        assert_eq!(engine.roll_dice(), Some(5));
        assert_eq!(engine.dice.rolls_made(), 2);
    }

    #[test]
    fn test_move_without_roll_rejected() {
        let mut engine = engine(2, &[6]);

        assert!(!engine.move_token(PlayerId::new(0), TokenId::new(1)));
        assert_eq!(state_of(&engine, 0, 1), TokenState::Base);
    }

    #[test]
    fn test_move_unknown_token_or_player_rejected() {
        let mut engine = engine(2, &[6]);
        engine.roll_dice();

        assert!(!engine.move_token(PlayerId::new(0), TokenId::new(9)));
        assert!(!engine.move_token(PlayerId::new(3), TokenId::new(1)));
        assert_eq!(engine.pending_dice(), Some(6));
    }

    #[test]
    fn test_release_keeps_turn() {
        let mut engine = engine(2, &[6]);
        engine.roll_dice();

        assert!(engine.move_token(PlayerId::new(0), TokenId::new(1)));
        assert_eq!(state_of(&engine, 0, 1), TokenState::OnRing { offset: 0 });
        assert_eq!(engine.current_turn(), PlayerId::new(0));
        assert_eq!(engine.pending_dice(), None);
    }

    #[test]
    fn test_non_six_passes_turn() {
        let mut engine = engine(2, &[6, 3]);
        engine.roll_dice();
        engine.move_token(PlayerId::new(0), TokenId::new(1));
        engine.roll_dice();

        assert!(engine.move_token(PlayerId::new(0), TokenId::new(1)));
        assert_eq!(state_of(&engine, 0, 1), TokenState::OnRing { offset: 3 });
        assert_eq!(engine.current_turn(), PlayerId::new(1));
        assert_eq!(engine.turn_number(), 2);
    }

    #[test]
    fn test_illegal_move_leaves_die_pending() {
        let mut engine = engine(2, &[3]);
        engine.roll_dice();

        assert!(!engine.move_token(PlayerId::new(0), TokenId::new(1)));
        assert_eq!(engine.pending_dice(), Some(3));
        assert_eq!(engine.current_turn(), PlayerId::new(0));
    }

    #[test]
    fn test_clear_dice_and_advance() {
        let mut engine = engine(2, &[2]);
        assert!(!engine.clear_dice_and_advance());

        engine.roll_dice();
        assert!(!engine.can_move_any(PlayerId::new(0), 2));
        assert!(engine.clear_dice_and_advance());

        assert_eq!(engine.pending_dice(), None);
        assert_eq!(engine.current_turn(), PlayerId::new(1));
        assert_eq!(
            engine.history().last().map(|r| r.action.clone()),
            Some(Action::Skip(2))
        );
    }

    #[test]
    fn test_add_and_remove_players() {
        let mut engine = engine(2, &[1]);

        assert!(engine.add_player());
        assert!(engine.add_player());
        assert!(!engine.add_player());
        assert_eq!(engine.player_count(), 4);
        assert_eq!(engine.players()[3].name(), "Blue");

        assert!(engine.remove_player());
        assert!(engine.remove_player());
        assert!(!engine.remove_player());
        assert_eq!(engine.player_count(), 2);
    }

    #[test]
    fn test_occupants() {
        let mut engine = engine(2, &[6]);
        engine.roll_dice();
        engine.move_token(PlayerId::new(0), TokenId::new(2));

        assert_eq!(engine.occupants(0), vec![(PlayerId::new(0), TokenId::new(2))]);
        assert!(engine.occupants(1).is_empty());
    }

    #[test]
    fn test_history_sequence() {
        let mut engine = engine(2, &[6, 1]);
        engine.roll_dice();
        engine.move_token(PlayerId::new(0), TokenId::new(1));
        engine.roll_dice();
        engine.move_token(PlayerId::new(0), TokenId::new(1));

        let records: Vec<_> = engine.history().iter().map(|r| (r.turn, r.sequence)).collect();
        assert_eq!(records, vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
        assert_eq!(engine.turn_number(), 2);
    }
}
