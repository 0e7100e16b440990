use std::collections::VecDeque;

use super::slot::{Coord, Direction, Slot};
use super::Player;
use crate::config::DisplayConfig;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Pieces in a line needed to win
pub const CONNECT: usize = 4;

/// Result of dropping a piece into the rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The piece landed. The winner may or may not be set now.
    Placed,
    /// The column exists but has no empty slot left
    ColumnFull,
    /// The column is not a whole number in 1..=7
    OutOfRange,
}

/// The four lines through a slot that can hold a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::DiagonalDownRight,
        Axis::DiagonalDownLeft,
    ];

    /// Direction of the first walk along this axis
    pub fn forward(self) -> Direction {
        match self {
            Axis::Vertical => Direction::North,
            Axis::Horizontal => Direction::East,
            Axis::DiagonalDownRight => Direction::SouthEast,
            Axis::DiagonalDownLeft => Direction::NorthEast,
        }
    }

    /// The pair of opposite directions walked when scanning this axis
    pub fn directions(self) -> (Direction, Direction) {
        let forward = self.forward();
        (forward, forward.opposite())
    }
}

/// The rack: 7 columns of 6 slots, plus the winner of the current game.
///
/// Columns are stored left to right, and each column top to bottom, so
/// `columns[c - 1][r - 1]` is the slot at column `c`, row `r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [[Slot; ROWS]; COLS],
    winner: Option<Player>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: std::array::from_fn(|c| std::array::from_fn(|r| Slot::new(c + 1, r + 1))),
            winner: None,
        }
    }

    /// Get the slot at a 1-based position
    pub fn get(&self, column: usize, row: usize) -> Option<&Slot> {
        let coord = Coord::new(column, row);
        coord.in_bounds().then(|| self.slot(coord))
    }

    /// Owner of the slot at a 1-based position; `None` when empty or off the rack
    pub fn owner(&self, column: usize, row: usize) -> Option<Player> {
        self.get(column, row).and_then(Slot::owner)
    }

    fn slot(&self, coord: Coord) -> &Slot {
        &self.columns[coord.column - 1][coord.row - 1]
    }

    fn slot_mut(&mut self, coord: Coord) -> &mut Slot {
        &mut self.columns[coord.column - 1][coord.row - 1]
    }

    /// The row a piece dropped into `column` would land on.
    ///
    /// This is the lowest empty slot, i.e. the last empty one scanning from
    /// the top. `None` when the column is full or does not exist.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if !(1..=COLS).contains(&column) {
            return None;
        }

        self.columns[column - 1]
            .iter()
            .filter(|slot| slot.is_empty())
            .map(Slot::row)
            .last()
    }

    /// Check if a column is full. Columns off the rack count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.landing_row(column).is_none()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (1..=COLS).all(|column| self.is_column_full(column))
    }

    /// Drop a piece for `player` into `column` (1-based).
    ///
    /// On success the win check runs through the new piece and the winner is
    /// recorded if this move completed a line. A refused move leaves the board
    /// untouched.
    pub fn place(&mut self, player: Player, column: i64) -> Placement {
        let column = match usize::try_from(column) {
            Ok(column) if (1..=COLS).contains(&column) => column,
            _ => return Placement::OutOfRange,
        };

        let Some(row) = self.landing_row(column) else {
            return Placement::ColumnFull;
        };

        let coord = Coord::new(column, row);
        self.slot_mut(coord).claim(player);

        if self.winner.is_none() && self.connects_four(player, coord) {
            self.winner = Some(player);
        }

        Placement::Placed
    }

    /// Like [`Board::place`], for a column typed by a player. Anything that is
    /// not a whole number is out of range.
    pub fn place_input(&mut self, player: Player, input: &str) -> Placement {
        match input.trim().parse::<i64>() {
            Ok(column) => self.place(player, column),
            Err(_) => Placement::OutOfRange,
        }
    }

    /// Owners along `axis` through `coord`, from one edge of the rack to the
    /// other.
    ///
    /// Walks outward from `coord` in the axis's first direction appending
    /// each owner, then in the opposite direction prepending each owner.
    pub fn line_through(&self, coord: Coord, axis: Axis) -> Vec<Option<Player>> {
        let (forward, backward) = axis.directions();
        let origin = self.slot(coord);
        let mut line = VecDeque::from([origin.owner()]);

        let mut cursor = origin;
        while let Some(next) = cursor.neighbor(forward) {
            cursor = self.slot(next);
            line.push_back(cursor.owner());
        }

        let mut cursor = origin;
        while let Some(next) = cursor.neighbor(backward) {
            cursor = self.slot(next);
            line.push_front(cursor.owner());
        }

        line.into()
    }

    /// Check whether any line through `coord` holds four consecutive pieces
    /// of `player`
    pub fn connects_four(&self, player: Player, coord: Coord) -> bool {
        Axis::ALL.iter().any(|&axis| {
            self.line_through(coord, axis)
                .windows(CONNECT)
                .any(|run| run.iter().all(|&owner| owner == Some(player)))
        })
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Winner as a number: 0 while nobody has won, otherwise the player id
    pub fn winner_id(&self) -> u8 {
        self.winner.map_or(0, Player::id)
    }

    /// Render the rack with the default markers
    pub fn draw(&self) -> String {
        self.draw_with(&DisplayConfig::default())
    }

    /// Render the rack top row first, then a separator and the column legend
    pub fn draw_with(&self, display: &DisplayConfig) -> String {
        let mut out = String::from("\n");

        for row in 0..ROWS {
            out.push_str("  ");
            for column in &self.columns {
                out.push_str(&column[row].render(display));
            }
        }

        out.push_str("  ");
        out.push_str(&"=".repeat(COLS * 3 + 1));
        out.push_str("\n  ");
        for column in 1..=COLS {
            out.push_str(&format!(" {column} "));
        }
        out.push('\n');

        out
    }

    /// Start over with an empty rack and no winner
    pub fn reset(&mut self) {
        *self = Board::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
