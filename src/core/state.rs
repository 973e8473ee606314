//! Game state: seated players, whose turn it is, and the pending die.
//!
//! `GameState` is the logical state that save/load round-trips. The engine
//! owns it exclusively; outside the crate it is read-only. Every state is
//! built from a validated board or a validated `Snapshot`, so it always has
//! at least two players and `current_turn` is always a seated player.
//!
//! There is no separate "awaiting move" flag: a move is awaited exactly when
//! a die is pending.

use serde::Serialize;

use super::config::{BoardConfig, MIN_PLAYERS};
use super::player::{Player, PlayerId};

/// Complete logical game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Players in turn order. Index == seat.
    players: Vec<Player>,

    /// Whose turn it is (index into `players`).
    current_turn: usize,

    /// Die value waiting to be spent on a move.
    pending_dice: Option<u8>,
}

impl GameState {
    /// Seat `player_count` players from the front of the seat table.
    ///
    /// The count is clamped to `[MIN_PLAYERS, config.max_players()]`.
    #[must_use]
    pub(crate) fn new(config: &BoardConfig, player_count: usize) -> Self {
        let count = player_count.clamp(MIN_PLAYERS, config.max_players().max(MIN_PLAYERS));

        let players = config
            .seats
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, seat)| Player::new(PlayerId::new(i as u8), seat))
            .collect();

        Self {
            players,
            current_turn: 0,
            pending_dice: None,
        }
    }

    /// Assemble a state from already validated parts.
    pub(crate) fn from_parts(
        players: Vec<Player>,
        current_turn: usize,
        pending_dice: Option<u8>,
    ) -> Self {
        Self {
            players,
            current_turn,
            pending_dice,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.players.len())
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    // === Turn ===

    /// Whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> PlayerId {
        PlayerId::new(self.current_turn as u8)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    /// Pass the turn to the next seat.
    pub(crate) fn advance_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.players.len();
    }

    // === Dice ===

    /// Die value waiting to be spent, if any.
    #[must_use]
    pub fn pending_dice(&self) -> Option<u8> {
        self.pending_dice
    }

    /// True iff a move is awaited.
    #[must_use]
    pub fn awaiting_move(&self) -> bool {
        self.pending_dice.is_some()
    }

    pub(crate) fn set_pending_dice(&mut self, value: u8) {
        self.pending_dice = Some(value);
    }

    pub(crate) fn clear_pending_dice(&mut self) {
        self.pending_dice = None;
    }

    // === Seats ===

    /// Append a player. Caller checks the seat limit.
    pub(crate) fn push_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Remove the last player, keeping `current_turn` in range.
    pub(crate) fn pop_player(&mut self) -> Option<Player> {
        let removed = self.players.pop()?;
        if !self.players.is_empty() {
            self.current_turn %= self.players.len();
        }
        Some(removed)
    }

    // === Outcome ===

    /// First player (in seat order) with every token finished.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .position(Player::all_finished)
            .map(|i| PlayerId::new(i as u8))
    }
}
