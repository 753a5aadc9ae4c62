//! Connect Four board engine: board representation, player tokens, status
//! state machine, and the game that ties them together.

mod board;
mod player;
mod record;
mod state;
mod status;

#[cfg(test)]
mod properties;

pub use board::{Board, Direction, COORDINATES, NUM_CELLS, NUM_COLUMNS, NUM_ROWS};
pub use player::Player;
pub use record::{GameRecord, MoveRequest};
pub use state::Game;
pub use status::{Scope, Status};
