//! The stored form of a game and the raw move request, as exchanged with
//! whatever persists games and receives moves.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Board, Game, Player, Status};
use crate::error::{GameError, ParseError, RequestError};

/// Stored fields of a game. A missing, `null` or blank board, current
/// player or status takes the value a new game would have; missing or
/// `null` names fall back to the player tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Columns bottom-to-top
    #[serde(default)]
    pub board: Option<Vec<Vec<Option<Player>>>>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub current_player: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub red_player_name: Option<String>,
    #[serde(default)]
    pub blue_player_name: Option<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

impl GameRecord {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Stored board, or an empty one
    pub fn board(&self) -> Result<Board, GameError> {
        match &self.board {
            Some(columns) => Ok(Board::from_columns(columns.clone())?),
            None => Ok(Board::new()),
        }
    }

    /// Stored player to move, or the first player
    pub fn current_player(&self) -> Result<Player, GameError> {
        match &self.current_player {
            Some(token) => token
                .parse()
                .map_err(|_| GameError::InvalidPlayer(token.clone())),
            None => Ok(Game::FIRST_PLAYER),
        }
    }

    /// Stored status, or in progress
    pub fn status(&self) -> Result<Status, GameError> {
        match &self.status {
            Some(token) => token.parse(),
            None => Ok(Status::InProgress),
        }
    }
}

impl Game {
    /// Rehydrate from stored fields, validating the board shape, the player
    /// and status tokens, and the names.
    pub fn from_record(record: GameRecord) -> Result<Game, GameError> {
        let board = record.board()?;
        let current_player = record.current_player()?;
        let status = record.status()?;
        Game::from_parts(
            board,
            current_player,
            status,
            record
                .red_player_name
                .unwrap_or_else(|| Player::Red.token().to_string()),
            record
                .blue_player_name
                .unwrap_or_else(|| Player::Blue.token().to_string()),
        )
    }

    pub fn to_record(&self) -> GameRecord {
        let columns = self
            .board()
            .to_columns()
            .into_iter()
            .map(|column| column.into_iter().map(Some).collect())
            .collect();
        GameRecord {
            board: Some(columns),
            current_player: Some(self.current_player().token().to_string()),
            status: Some(self.status().token().to_string()),
            red_player_name: Some(self.red_player_name().to_string()),
            blue_player_name: Some(self.blue_player_name().to_string()),
        }
    }

    /// Parse and apply a move given as raw column and player tokens.
    pub fn apply_request(&mut self, column: &str, player: &str) -> Result<Status, RequestError> {
        let request = MoveRequest::parse(column, player)?;
        Ok(self.apply_move(request.column, request.player)?)
    }
}

/// A move as received from outside: column and player token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub column: i64,
    pub player: Player,
}

impl MoveRequest {
    /// Parse a column (any integer) and a player token. Range checks are
    /// left to [`Game::apply_move`].
    pub fn parse(column: &str, player: &str) -> Result<Self, ParseError> {
        let column = column.trim();
        let column = column
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidColumn(column.to_string()))?;
        let player = player.parse()?;
        Ok(MoveRequest { column, player })
    }
}
