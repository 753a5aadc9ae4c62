use log::{debug, info};

use super::{Board, Player, Status, NUM_COLUMNS};
use crate::error::{BoardError, GameError, MoveError};

/// A single game: board, whose turn it is, status, and the two player names.
///
/// The board only changes through [`Game::apply_move`], and only while the
/// status is [`Status::InProgress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: Status,
    red_player_name: String,
    blue_player_name: String,
}

impl Game {
    /// Blue moves first.
    pub const FIRST_PLAYER: Player = Player::Blue;

    /// Create a fresh game. Both names are required.
    pub fn new(
        red_player_name: impl Into<String>,
        blue_player_name: impl Into<String>,
    ) -> Result<Self, GameError> {
        Self::from_parts(
            Board::new(),
            Self::FIRST_PLAYER,
            Status::InProgress,
            red_player_name.into(),
            blue_player_name.into(),
        )
    }

    /// Rehydrate a game from stored fields.
    pub fn from_parts(
        board: Board,
        current_player: Player,
        status: Status,
        red_player_name: String,
        blue_player_name: String,
    ) -> Result<Self, GameError> {
        if red_player_name.trim().is_empty() {
            return Err(GameError::BlankPlayerName(Player::Red));
        }
        if blue_player_name.trim().is_empty() {
            return Err(GameError::BlankPlayerName(Player::Blue));
        }
        Ok(Game {
            board,
            current_player,
            status,
            red_player_name,
            blue_player_name,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The player who moves after the current one
    pub fn next_player(&self) -> Player {
        self.current_player.other()
    }

    /// Get game status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get red player's name
    pub fn red_player_name(&self) -> &str {
        &self.red_player_name
    }

    /// Get blue player's name
    pub fn blue_player_name(&self) -> &str {
        &self.blue_player_name
    }

    /// Display name for `player`
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.red_player_name,
            Player::Blue => &self.blue_player_name,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Columns that currently accept a piece; empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..NUM_COLUMNS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Status implied by the board contents. Does not mutate.
    pub fn evaluate(&self) -> Status {
        self.board.evaluate()
    }

    /// Drop `player`'s piece into `column`, advance the turn and update the
    /// status. On error nothing changes.
    pub fn apply_move(&mut self, column: i64, player: Player) -> Result<Status, MoveError> {
        if self.is_terminal() {
            debug!("rejecting move in column {column}: game is {}", self.status);
            return Err(MoveError::GameAlreadyOver);
        }
        if player != self.current_player {
            debug!("rejecting move by {player}: {} to move", self.current_player);
            return Err(MoveError::WrongPlayer {
                expected: self.current_player,
                attempted: player,
            });
        }
        let index = usize::try_from(column)
            .ok()
            .filter(|&c| c < NUM_COLUMNS)
            .ok_or(MoveError::ColumnOutOfBounds { column })?;

        let row = self
            .board
            .drop_piece(index, player)
            .map_err(|e| match e {
                BoardError::ColumnFull { column } => MoveError::ColumnFull { column },
                _ => MoveError::ColumnOutOfBounds { column },
            })?;
        debug!("{player} dropped into column {index}, row {row}");

        self.current_player = self.current_player.other();
        self.status = self.board.evaluate();
        if self.is_terminal() {
            info!(
                "game over after {} moves: {}",
                self.board.piece_count(),
                self.status
            );
        }

        Ok(self.status)
    }

    /// Apply a move and return new state (immutable)
    pub fn with_move(&self, column: i64, player: Player) -> Result<Game, MoveError> {
        let mut next = self.clone();
        next.apply_move(column, player)?;
        Ok(next)
    }
}
