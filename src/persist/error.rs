use std::path::PathBuf;

/// Reasons a snapshot cannot be turned back into a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot has {0} players, need at least 2")]
    TooFewPlayers(usize),

    #[error("snapshot has {count} players, board seats at most {max}")]
    TooManyPlayers { count: usize, max: usize },

    #[error("current turn {turn} out of range for {count} players")]
    TurnOutOfRange { turn: usize, count: usize },

    #[error("die value {0} is not in 1..=6")]
    InvalidDie(u8),

    #[error("player {player} entry point {entry} is off the ring")]
    EntryOffRing { player: usize, entry: u8 },

    #[error("player {player} has {count} tokens, expected 4")]
    TokenCount { player: usize, count: usize },

    #[error("player {player} token id {token} is not in 1..=4")]
    TokenIdOutOfRange { player: usize, token: u8 },

    #[error("player {player} has token {token} twice")]
    DuplicateToken { player: usize, token: u8 },

    #[error("player {player} token {token} ring offset {offset} is not in 0..52")]
    RingOffset { player: usize, token: u8, offset: i32 },

    #[error("player {player} token {token} home index {index} is not in 0..5")]
    HomeIndex { player: usize, token: u8, index: i32 },
}

/// Errors from reading or writing saved games.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("invalid snapshot: {0}")]
    Invalid(#[from] SnapshotError),
}

impl PersistError {
    /// True if the save file simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PersistError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
