use std::path::PathBuf;

use crate::game::Player;

/// Reasons a move is rejected. Every variant is detected before the board
/// is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("it is not {attempted}'s turn ({expected} to move)")]
    WrongPlayer { expected: Player, attempted: Player },

    #[error("column {column} is out of bounds")]
    ColumnOutOfBounds { column: i64 },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameAlreadyOver,
}

/// Errors from board lookups and board rehydration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinates ({column}, {row}) are out of bounds")]
    InvalidCoordinates { column: usize, row: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("board must have {expected} columns, found {found}")]
    WrongColumnCount { expected: usize, found: usize },

    #[error("column {column} holds {len} pieces (max {max})")]
    ColumnOverflow { column: usize, len: usize, max: usize },

    #[error("column {column} has a gap at row {row}")]
    Gap { column: usize, row: usize },
}

/// Errors from creating or rehydrating a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("{0} player name must not be blank")]
    BlankPlayerName(Player),

    #[error("invalid current player '{0}' (expected red or blue)")]
    InvalidPlayer(String),

    #[error("invalid status '{0}' (expected in_progress, red, blue or tie)")]
    InvalidStatus(String),

    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// Errors from parsing raw move tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid player '{0}' (expected red or blue)")]
    InvalidPlayer(String),

    #[error("invalid column '{0}' (expected an integer)")]
    InvalidColumn(String),
}

/// Errors from a move request expressed as raw tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
