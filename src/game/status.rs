use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::GameError;

/// Game status. `InProgress` is the only non-terminal state; every other
/// value is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    InProgress,
    Red,
    Blue,
    Tie,
}

impl Status {
    /// Status reporting a win for `player`
    pub fn won_by(player: Player) -> Status {
        match player {
            Player::Red => Status::Red,
            Player::Blue => Status::Blue,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Status::InProgress
    }

    /// The winning player, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            Status::Red => Some(Player::Red),
            Status::Blue => Some(Player::Blue),
            Status::InProgress | Status::Tie => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Status::InProgress => "in_progress",
            Status::Red => "red",
            Status::Blue => "blue",
            Status::Tie => "tie",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Status {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Status::InProgress),
            "red" => Ok(Status::Red),
            "blue" => Ok(Status::Blue),
            "tie" => Ok(Status::Tie),
            other => Err(GameError::InvalidStatus(other.to_string())),
        }
    }
}

/// Named subsets of statuses used when listing stored games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    InProgress,
    Finished,
    Won,
    Tie,
}

impl Scope {
    pub fn matches(self, status: Status) -> bool {
        match self {
            Scope::InProgress => status == Status::InProgress,
            Scope::Finished => status.is_terminal(),
            Scope::Won => status.winner().is_some(),
            Scope::Tie => status == Status::Tie,
        }
    }

    /// Keep only the items whose status falls in this scope
    pub fn filter<'a, T, I, F>(self, items: I, status_of: F) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        F: Fn(&T) -> Status,
    {
        items
            .into_iter()
            .filter(move |item| self.matches(status_of(*item)))
    }
}
