//! The persisted game layout.
//!
//! ```json
//! {
//!   "current_turn": 0,
//!   "dice_value": null,
//!   "players": [
//!     {
//!       "name": "Red",
//!       "color": [220, 40, 40],
//!       "entry_global": 0,
//!       "tokens": [{ "id": 1, "state": "ring", "ring_rel": 5, "home_idx": -1 }, ...]
//!     },
//!     ...
//!   ]
//! }
//! ```
//!
//! Position fields that do not apply to a token's state are written as `-1`
//! and ignored on load.

use serde::{Deserialize, Serialize};

use super::error::{PersistError, SnapshotError};
use crate::core::config::{
    BoardConfig, Color, DIE_FACES, FINAL_HOME_INDEX, MIN_PLAYERS, RING_LEN, TOKENS_PER_PLAYER,
};
use crate::core::player::{Player, PlayerId};
use crate::core::state::GameState;
use crate::core::token::{Token, TokenId, TokenState};

/// Marker for position fields that do not apply.
const UNUSED: i32 = -1;

/// Persisted token state name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenTag {
    Base,
    Ring,
    Home,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub id: u8,
    pub state: TokenTag,
    pub ring_rel: i32,
    pub home_idx: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub color: Color,
    pub entry_global: u8,
    pub tokens: Vec<TokenSnapshot>,
}

/// Structured snapshot of the full logical state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub current_turn: usize,

    #[serde(default)]
    pub dice_value: Option<u8>,

    pub players: Vec<PlayerSnapshot>,
}

impl TokenSnapshot {
    fn capture(token: &Token) -> Self {
        let id = token.id().raw();
        match token.state() {
            TokenState::Base => Self::unplaced(id, TokenTag::Base),
            TokenState::Finished => Self::unplaced(id, TokenTag::Finished),
            TokenState::OnRing { offset } => Self {
                id,
                state: TokenTag::Ring,
                ring_rel: i32::from(offset),
                home_idx: UNUSED,
            },
            TokenState::InHomePath { index } => Self {
                id,
                state: TokenTag::Home,
                ring_rel: UNUSED,
                home_idx: i32::from(index),
            },
        }
    }

    fn unplaced(id: u8, state: TokenTag) -> Self {
        Self {
            id,
            state,
            ring_rel: UNUSED,
            home_idx: UNUSED,
        }
    }

    fn restore(&self, player: usize) -> Result<Token, SnapshotError> {
        if !(1..=TOKENS_PER_PLAYER).contains(&self.id) {
            return Err(SnapshotError::TokenIdOutOfRange {
                player,
                token: self.id,
            });
        }

        let state = match self.state {
            TokenTag::Base => TokenState::Base,
            TokenTag::Finished => TokenState::Finished,
            TokenTag::Ring => {
                if !(0..i32::from(RING_LEN)).contains(&self.ring_rel) {
                    return Err(SnapshotError::RingOffset {
                        player,
                        token: self.id,
                        offset: self.ring_rel,
                    });
                }
                TokenState::OnRing {
                    offset: self.ring_rel as u8,
                }
            }
            TokenTag::Home => {
                // A token on the final cell is finished, so live indices stop short of it.
                if !(0..i32::from(FINAL_HOME_INDEX)).contains(&self.home_idx) {
                    return Err(SnapshotError::HomeIndex {
                        player,
                        token: self.id,
                        index: self.home_idx,
                    });
                }
                TokenState::InHomePath {
                    index: self.home_idx as u8,
                }
            }
        };

        Ok(Token::with_state(TokenId::new(self.id), state))
    }
}

impl PlayerSnapshot {
    fn capture(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            color: player.color(),
            entry_global: player.entry_point(),
            tokens: player.tokens().iter().map(TokenSnapshot::capture).collect(),
        }
    }

    fn restore(&self, index: usize) -> Result<Player, SnapshotError> {
        if self.entry_global >= RING_LEN {
            return Err(SnapshotError::EntryOffRing {
                player: index,
                entry: self.entry_global,
            });
        }

        if self.tokens.len() != TOKENS_PER_PLAYER as usize {
            return Err(SnapshotError::TokenCount {
                player: index,
                count: self.tokens.len(),
            });
        }

        let mut tokens = self
            .tokens
            .iter()
            .map(|t| t.restore(index))
            .collect::<Result<Vec<_>, _>>()?;

        tokens.sort_by_key(Token::id);
        if let Some(pair) = tokens.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(SnapshotError::DuplicateToken {
                player: index,
                token: pair[0].id().raw(),
            });
        }

        Ok(Player::from_parts(
            PlayerId::new(index as u8),
            self.name.clone(),
            self.color,
            self.entry_global,
            tokens,
        ))
    }
}

impl Snapshot {
    /// Capture a game state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            current_turn: state.current_turn().index(),
            dice_value: state.pending_dice(),
            players: state.players().iter().map(PlayerSnapshot::capture).collect(),
        }
    }

    /// Rebuild a game state, rejecting anything that is not a playable game
    /// on `config`'s board.
    pub fn restore(&self, config: &BoardConfig) -> Result<GameState, SnapshotError> {
        let count = self.players.len();
        if count < MIN_PLAYERS {
            return Err(SnapshotError::TooFewPlayers(count));
        }
        if count > config.max_players() {
            return Err(SnapshotError::TooManyPlayers {
                count,
                max: config.max_players(),
            });
        }

        if self.current_turn >= count {
            return Err(SnapshotError::TurnOutOfRange {
                turn: self.current_turn,
                count,
            });
        }

        if let Some(die) = self.dice_value {
            if !(1..=DIE_FACES).contains(&die) {
                return Err(SnapshotError::InvalidDie(die));
            }
        }

        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| p.restore(i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameState::from_parts(
            players,
            self.current_turn,
            self.dice_value,
        ))
    }

    /// Pretty-printed JSON, the save file format.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(players: usize) -> Snapshot {
        Snapshot::capture(&GameState::new(&BoardConfig::classic(), players))
    }

    #[test]
    fn test_capture_fresh_game() {
        let snapshot = fresh(2);

        assert_eq!(snapshot.current_turn, 0);
        assert_eq!(snapshot.dice_value, None);
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.players[1].name, "Green");
        assert_eq!(snapshot.players[1].entry_global, 13);
        assert_eq!(
            snapshot.players[0].tokens[0],
            TokenSnapshot {
                id: 1,
                state: TokenTag::Base,
                ring_rel: -1,
                home_idx: -1,
            }
        );
    }

    #[test]
    fn test_json_field_names() {
        let mut snapshot = fresh(2);
        snapshot.dice_value = Some(6);
        snapshot.players[0].tokens[1] = TokenSnapshot {
            id: 2,
            state: TokenTag::Ring,
            ring_rel: 5,
            home_idx: -1,
        };

        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(value["current_turn"], 0);
        assert_eq!(value["dice_value"], 6);
        assert_eq!(value["players"][0]["color"], serde_json::json!([220, 40, 40]));
        assert_eq!(value["players"][0]["entry_global"], 0);
        assert_eq!(value["players"][0]["tokens"][1]["state"], "ring");
        assert_eq!(value["players"][0]["tokens"][1]["ring_rel"], 5);
        assert_eq!(value["players"][0]["tokens"][1]["home_idx"], -1);
    }

    #[test]
    fn test_missing_turn_and_dice_default() {
        let json = r#"{
            "players": [
                {"name": "Red", "color": [220, 40, 40], "entry_global": 0, "tokens": []},
                {"name": "Green", "color": [40, 180, 80], "entry_global": 13, "tokens": []}
            ]
        }"#;

        let snapshot = Snapshot::from_json(json).unwrap();
        assert_eq!(snapshot.current_turn, 0);
        assert_eq!(snapshot.dice_value, None);
    }

    #[test]
    fn test_restore_round_trip() {
        let config = BoardConfig::classic();
        let mut snapshot = fresh(3);
        snapshot.current_turn = 2;
        snapshot.dice_value = Some(4);
        snapshot.players[2].tokens[3] = TokenSnapshot {
            id: 4,
            state: TokenTag::Home,
            ring_rel: -1,
            home_idx: 3,
        };

        let state = snapshot.restore(&config).unwrap();

        assert_eq!(state.current_turn(), PlayerId::new(2));
        assert_eq!(state.pending_dice(), Some(4));
        assert_eq!(
            state.players()[2].token(TokenId::new(4)).map(|t| t.state()),
            Some(TokenState::InHomePath { index: 3 })
        );
        assert_eq!(Snapshot::capture(&state), snapshot);
    }

    #[test]
    fn test_restore_sorts_tokens() {
        let mut snapshot = fresh(2);
        snapshot.players[0].tokens.reverse();

        let state = snapshot.restore(&BoardConfig::classic()).unwrap();
        let ids: Vec<_> = state.players()[0].tokens().iter().map(|t| t.id().raw()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_restore_rejects_too_few_players() {
        let mut snapshot = fresh(2);
        snapshot.players.pop();

        assert_eq!(
            snapshot.restore(&BoardConfig::classic()),
            Err(SnapshotError::TooFewPlayers(1))
        );
    }

    #[test]
    fn test_restore_rejects_bad_turn_and_die() {
        let config = BoardConfig::classic();

        let mut snapshot = fresh(2);
        snapshot.current_turn = 2;
        assert_eq!(
            snapshot.restore(&config),
            Err(SnapshotError::TurnOutOfRange { turn: 2, count: 2 })
        );

        let mut snapshot = fresh(2);
        snapshot.dice_value = Some(0);
        assert_eq!(snapshot.restore(&config), Err(SnapshotError::InvalidDie(0)));
    }

    #[test]
    fn test_restore_rejects_bad_tokens() {
        let config = BoardConfig::classic();

        let mut snapshot = fresh(2);
        snapshot.players[1].tokens.pop();
        assert_eq!(
            snapshot.restore(&config),
            Err(SnapshotError::TokenCount { player: 1, count: 3 })
        );

        let mut snapshot = fresh(2);
        snapshot.players[0].tokens[1].id = 1;
        assert_eq!(
            snapshot.restore(&config),
            Err(SnapshotError::DuplicateToken { player: 0, token: 1 })
        );

        let mut snapshot = fresh(2);
        snapshot.players[0].tokens[0].state = TokenTag::Ring;
        snapshot.players[0].tokens[0].ring_rel = 52;
        assert_eq!(
            snapshot.restore(&config),
            Err(SnapshotError::RingOffset { player: 0, token: 1, offset: 52 })
        );

        let mut snapshot = fresh(2);
        snapshot.players[0].tokens[0].state = TokenTag::Home;
        snapshot.players[0].tokens[0].home_idx = 5;
        assert_eq!(
            snapshot.restore(&config),
            Err(SnapshotError::HomeIndex { player: 0, token: 1, index: 5 })
        );
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut snapshot = fresh(4);
        snapshot.dice_value = Some(2);

        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(Snapshot::from_bytes(&bytes).unwrap(), snapshot);
    }
}
