use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Player, Status};
use crate::error::BoardError;

pub const NUM_COLUMNS: usize = 7;
pub const NUM_ROWS: usize = 6;
pub const NUM_CELLS: usize = NUM_COLUMNS * NUM_ROWS;

/// Run length needed to win.
const RUN: usize = 4;

/// Every board coordinate as `(column, row)`, column-major, rows ascending.
pub const COORDINATES: [(usize, usize); NUM_CELLS] = coordinates();

const fn coordinates() -> [(usize, usize); NUM_CELLS] {
    let mut coords = [(0, 0); NUM_CELLS];
    let mut i = 0;
    while i < NUM_CELLS {
        coords[i] = (i / NUM_ROWS, i % NUM_ROWS);
        i += 1;
    }
    coords
}

/// Step vector `(d_column, d_row)` along one line axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub d_column: isize,
    pub d_row: isize,
}

impl Direction {
    pub const HORIZONTAL: Direction = Direction { d_column: 1, d_row: 0 };
    pub const VERTICAL: Direction = Direction { d_column: 0, d_row: 1 };
    /// Up and to the right, `/`
    pub const DIAGONAL: Direction = Direction { d_column: 1, d_row: 1 };
    /// Down and to the right, `\`
    pub const ANTI_DIAGONAL: Direction = Direction { d_column: 1, d_row: -1 };

    /// Scan order used by win detection
    pub const ALL: [Direction; 4] = [
        Direction::HORIZONTAL,
        Direction::VERTICAL,
        Direction::DIAGONAL,
        Direction::ANTI_DIAGONAL,
    ];

    /// The coordinate `distance` steps from `(column, row)`, or `None` if it
    /// falls off the board.
    pub fn step(self, column: usize, row: usize, distance: usize) -> Option<(usize, usize)> {
        let distance = distance as isize;
        let c = column as isize + self.d_column * distance;
        let r = row as isize + self.d_row * distance;
        if (0..NUM_COLUMNS as isize).contains(&c) && (0..NUM_ROWS as isize).contains(&r) {
            Some((c as usize, r as usize))
        } else {
            None
        }
    }
}

/// Column-major grid. Row 0 is the bottom; each column is filled from row 0
/// up to its height with no gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<Player>>>", into = "Vec<Vec<Player>>")]
pub struct Board {
    cells: [[Option<Player>; NUM_ROWS]; NUM_COLUMNS],
    heights: [usize; NUM_COLUMNS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; NUM_ROWS]; NUM_COLUMNS],
            heights: [0; NUM_COLUMNS],
        }
    }

    /// Rebuild a board from columns listed bottom-to-top. Trailing `None`s
    /// are ignored; any other `None` is a gap.
    pub fn from_columns(columns: Vec<Vec<Option<Player>>>) -> Result<Self, BoardError> {
        if columns.len() != NUM_COLUMNS {
            return Err(BoardError::WrongColumnCount {
                expected: NUM_COLUMNS,
                found: columns.len(),
            });
        }

        let mut board = Board::new();
        for (column, pieces) in columns.into_iter().enumerate() {
            let len = pieces
                .iter()
                .rposition(Option::is_some)
                .map_or(0, |last| last + 1);
            if len > NUM_ROWS {
                return Err(BoardError::ColumnOverflow {
                    column,
                    len,
                    max: NUM_ROWS,
                });
            }
            for (row, piece) in pieces[..len].iter().enumerate() {
                let player = piece.ok_or(BoardError::Gap { column, row })?;
                board.cells[column][row] = Some(player);
            }
            board.heights[column] = len;
        }
        Ok(board)
    }

    /// Columns bottom-to-top, occupied cells only
    pub fn to_columns(&self) -> Vec<Vec<Player>> {
        (0..NUM_COLUMNS).map(|c| self.column(c).collect()).collect()
    }

    /// Pieces in `column` from the bottom up. Empty for an out-of-range column.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Player> + '_ {
        let height = self.heights.get(column).copied().unwrap_or(0);
        self.cells
            .get(column)
            .into_iter()
            .flat_map(move |cells| cells[..height].iter().flatten().copied())
    }

    /// The piece at `(column, row)`. Out-of-range coordinates are an error,
    /// not an empty cell.
    pub fn position(&self, column: usize, row: usize) -> Result<Option<Player>, BoardError> {
        if column >= NUM_COLUMNS || row >= NUM_ROWS {
            return Err(BoardError::InvalidCoordinates { column, row });
        }
        Ok(self.cells[column][row])
    }

    /// Number of pieces in `column`
    pub fn height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    /// Total pieces on the board
    pub fn piece_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        self.height(column) >= NUM_ROWS
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.piece_count() == NUM_CELLS
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<usize, BoardError> {
        if column >= NUM_COLUMNS {
            return Err(BoardError::InvalidCoordinates { column, row: 0 });
        }
        let row = self.heights[column];
        if row >= NUM_ROWS {
            return Err(BoardError::ColumnFull { column });
        }

        self.cells[column][row] = Some(player);
        self.heights[column] += 1;
        Ok(row)
    }

    /// First player found holding four in a row, scanning cells in
    /// [`COORDINATES`] order and directions in [`Direction::ALL`] order.
    pub fn winner(&self) -> Option<Player> {
        COORDINATES.iter().find_map(|&(column, row)| {
            let player = self.cells[column][row]?;
            Direction::ALL
                .iter()
                .any(|&dir| self.run_from(column, row, dir, player))
                .then_some(player)
        })
    }

    /// Whether the three cells after `(column, row)` along `dir` all hold
    /// `player`.
    fn run_from(&self, column: usize, row: usize, dir: Direction, player: Player) -> bool {
        (1..RUN).all(|distance| {
            dir.step(column, row, distance)
                .and_then(|(c, r)| self.cells[c][r])
                == Some(player)
        })
    }

    /// Classify the board: a winner, a tie when full, otherwise in progress.
    pub fn evaluate(&self) -> Status {
        match self.winner() {
            Some(player) => Status::won_by(player),
            None if self.is_full() => Status::Tie,
            None => Status::InProgress,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Vec<Option<Player>>>> for Board {
    type Error = BoardError;

    fn try_from(columns: Vec<Vec<Option<Player>>>) -> Result<Self, Self::Error> {
        Board::from_columns(columns)
    }
}

impl From<Board> for Vec<Vec<Player>> {
    fn from(board: Board) -> Self {
        board.to_columns()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..NUM_ROWS).rev() {
            for column in 0..NUM_COLUMNS {
                let marker = self.cells[column][row].map_or('.', Player::marker);
                write!(f, "{marker}")?;
                if column + 1 < NUM_COLUMNS {
                    f.write_str(" ")?;
                }
            }
            writeln!(f)?;
        }
        for column in 0..NUM_COLUMNS {
            write!(f, "{column}")?;
            if column + 1 < NUM_COLUMNS {
                f.write_str(" ")?;
            }
        }
        writeln!(f)
    }
}
