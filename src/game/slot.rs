use super::board::{COLS, ROWS};
use super::Player;
use crate::config::DisplayConfig;

/// A 1-based grid position. Column 1 is leftmost, row 1 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub column: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(column: usize, row: usize) -> Self {
        Coord { column, row }
    }

    /// Whether the position lies on the 7x6 rack
    pub fn in_bounds(self) -> bool {
        (1..=COLS).contains(&self.column) && (1..=ROWS).contains(&self.row)
    }

    /// The adjacent position in `direction`, or `None` past the edge of the rack
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (dc, dr) = direction.offset();
        let column = self.column.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        let next = Coord { column, row };
        next.in_bounds().then_some(next)
    }
}

/// Compass directions, clockwise from north. Rows grow downwards, so
/// "south" points at the bottom of the rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (column, row) delta of one step
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        Direction::ALL[(self.index() + 4) % 8]
    }

    /// Position of this direction in [`Direction::ALL`] and in a slot's
    /// neighbor table
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single cell of the rack.
///
/// Neighbor coordinates are computed once when the slot is created. They are
/// plain positions; the board resolves them against its own grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    coord: Coord,
    owner: Option<Player>,
    neighbors: [Option<Coord>; 8],
}

impl Slot {
    /// Create an empty slot at `column`, `row` (both 1-based)
    pub fn new(column: usize, row: usize) -> Self {
        let coord = Coord::new(column, row);
        debug_assert!(coord.in_bounds(), "slot {coord:?} is off the rack");

        Slot {
            coord,
            owner: None,
            neighbors: Direction::ALL.map(|direction| coord.step(direction)),
        }
    }

    pub fn column(&self) -> usize {
        self.coord.column
    }

    pub fn row(&self) -> usize {
        self.coord.row
    }

    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    /// Numeric owner: 0 when empty, otherwise the player id
    pub fn owner_id(&self) -> u8 {
        self.owner.map_or(0, Player::id)
    }

    /// The neighboring position in `direction`, if it is on the rack
    pub fn neighbor(&self, direction: Direction) -> Option<Coord> {
        self.neighbors[direction.index()]
    }

    pub fn neighbors(&self) -> &[Option<Coord>; 8] {
        &self.neighbors
    }

    /// Give the slot to `player`. A slot is claimed at most once per game.
    pub(crate) fn claim(&mut self, player: Player) {
        debug_assert!(self.owner.is_none(), "slot {:?} already owned", self.coord);
        self.owner = Some(player);
    }

    /// Render the cell as `|` + marker + space; the last column also closes
    /// the row.
    pub fn render(&self, display: &DisplayConfig) -> String {
        let piece = display.marker(self.owner);
        if self.coord.column == COLS {
            format!("|{piece} |\n")
        } else {
            format!("|{piece} ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(slot: &Slot) -> Vec<(Direction, Coord)> {
        Direction::ALL
            .iter()
            .filter_map(|&d| slot.neighbor(d).map(|c| (d, c)))
            .collect()
    }

    fn plain() -> DisplayConfig {
        DisplayConfig {
            color: false,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn test_new_slot_is_empty() {
        let slot = Slot::new(3, 2);
        assert_eq!(slot.column(), 3);
        assert_eq!(slot.row(), 2);
        assert!(slot.is_empty());
        assert_eq!(slot.owner_id(), 0);
    }

    #[test]
    fn test_top_left_corner_neighbors() {
        let slot = Slot::new(1, 1);
        assert_eq!(
            present(&slot),
            vec![
                (Direction::East, Coord::new(2, 1)),
                (Direction::SouthEast, Coord::new(2, 2)),
                (Direction::South, Coord::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_bottom_right_corner_neighbors() {
        let slot = Slot::new(7, 6);
        assert_eq!(
            present(&slot),
            vec![
                (Direction::North, Coord::new(7, 5)),
                (Direction::West, Coord::new(6, 6)),
                (Direction::NorthWest, Coord::new(6, 5)),
            ]
        );
    }

    #[test]
    fn test_interior_slot_has_all_neighbors() {
        let slot = Slot::new(4, 4);
        assert!(slot.neighbors().iter().all(Option::is_some));
        assert_eq!(slot.neighbor(Direction::North), Some(Coord::new(4, 3)));
        assert_eq!(slot.neighbor(Direction::NorthEast), Some(Coord::new(5, 3)));
        assert_eq!(slot.neighbor(Direction::SouthWest), Some(Coord::new(3, 5)));
        assert_eq!(slot.neighbor(Direction::NorthWest), Some(Coord::new(3, 3)));
    }

    #[test]
    fn test_edge_slot_neighbors() {
        // Bottom edge, away from the corners
        let slot = Slot::new(4, 6);
        assert_eq!(slot.neighbors().iter().flatten().count(), 5);
        assert_eq!(slot.neighbor(Direction::South), None);
        assert_eq!(slot.neighbor(Direction::SouthEast), None);
        assert_eq!(slot.neighbor(Direction::SouthWest), None);
    }

    #[test]
    fn test_every_neighbor_is_on_the_rack() {
        for column in 1..=COLS {
            for row in 1..=ROWS {
                let slot = Slot::new(column, row);
                for coord in slot.neighbors().iter().flatten() {
                    assert!(coord.in_bounds());
                }
            }
        }
    }

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::NorthWest.opposite(), Direction::SouthEast);
    }

    #[test]
    fn test_render_empty_and_owned() {
        let display = plain();
        let mut slot = Slot::new(1, 6);
        assert_eq!(slot.render(&display), "|  ");

        slot.claim(Player::Red);
        assert_eq!(slot.render(&display), "|\u{278A} ");

        let mut slot = Slot::new(2, 6);
        slot.claim(Player::Yellow);
        assert_eq!(slot.render(&display), "|\u{278B} ");
    }

    #[test]
    fn test_render_last_column_closes_row() {
        let display = plain();
        assert_eq!(Slot::new(7, 1).render(&display), "|  |\n");
    }

    #[test]
    fn test_render_colored_marker() {
        let mut slot = Slot::new(1, 6);
        slot.claim(Player::Red);
        let rendered = slot.render(&DisplayConfig::default());
        assert!(rendered.starts_with('|'));
        assert!(rendered.contains('\u{278A}'));
    }
}
