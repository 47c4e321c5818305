use enum_map::Enum;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sticker colors of the standard palette.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Yellow,
    Orange,
    Blue,
    Green,
}

impl Color {
    /// The color on the opposite face of a solved cube.
    pub fn opposite(self) -> Self {
        use Color::*;

        match self {
            White => Yellow,
            Yellow => White,
            Red => Orange,
            Orange => Red,
            Blue => Green,
            Green => Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "WHITE",
            Color::Red => "RED",
            Color::Yellow => "YELLOW",
            Color::Orange => "ORANGE",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Where a face currently sits relative to the viewer.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Front,
    Right,
    Left,
    Up,
    Down,
    Back,
}

impl Role {
    pub fn opposite(self) -> Self {
        use Role::*;

        match self {
            Front => Back,
            Back => Front,
            Right => Left,
            Left => Right,
            Up => Down,
            Down => Up,
        }
    }

    /// Returns the role of the face bordering this one along `side` of this
    /// role's grid.
    pub fn neighbor(self, side: Side) -> Self {
        use Role::*;

        match (self, side) {
            (Front | Right | Left | Back, Side::Up) => Up,
            (Front | Right | Left | Back, Side::Down) => Down,

            (Front, Side::Right) => Right,
            (Front, Side::Left) => Left,
            (Right, Side::Right) => Back,
            (Right, Side::Left) => Front,
            (Left, Side::Right) => Front,
            (Left, Side::Left) => Back,
            (Back, Side::Right) => Left,
            (Back, Side::Left) => Right,

            (Up, Side::Up) => Back,
            (Up, Side::Down) => Front,
            (Down, Side::Up) => Front,
            (Down, Side::Down) => Back,
            (Up | Down, Side::Right) => Right,
            (Up | Down, Side::Left) => Left,
        }
    }

    /// Returns the side of this role's grid that borders `other`, or `None` if
    /// the two roles are the same or opposite.
    pub fn side_towards(self, other: Self) -> Option<Side> {
        Side::CLOCKWISE
            .into_iter()
            .find(|&side| self.neighbor(side) == other)
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Front => "Front",
            Role::Right => "Right",
            Role::Left => "Left",
            Role::Up => "Up",
            Role::Down => "Down",
            Role::Back => "Back",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One edge of a face's grid, as seen looking at the face from outside the cube.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Up,
    Right,
    Down,
    Left,
}

impl Side {
    pub const CLOCKWISE: [Side; 4] = [Side::Up, Side::Right, Side::Down, Side::Left];

    /// The three cells along this side, in clockwise order around the face.
    pub fn strip(self) -> [Cell; 3] {
        match self {
            Side::Up => [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
            Side::Right => [Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)],
            Side::Down => [Cell::new(2, 2), Cell::new(2, 1), Cell::new(2, 0)],
            Side::Left => [Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)],
        }
    }
}

/// Direction of a quarter turn, as seen looking at the turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spin {
    Clockwise,
    AntiClockwise,
}

impl Spin {
    pub fn inverse(self) -> Self {
        match self {
            Spin::Clockwise => Spin::AntiClockwise,
            Spin::AntiClockwise => Spin::Clockwise,
        }
    }
}

/// Axis of a whole-cube reorientation.
///
/// X spins the cube about the up-down line (up face turns clockwise), Y about
/// the left-right line (left face turns clockwise) and Z about the front-back
/// line (front face turns clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A cell of a 3x3 face grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const CENTER: Cell = Cell::new(1, 1);
    /// Corner cells, clockwise from the top-left.
    pub const CORNERS: [Cell; 4] = [
        Cell::new(0, 0),
        Cell::new(0, 2),
        Cell::new(2, 2),
        Cell::new(2, 0),
    ];
    /// Edge cells, clockwise from the top.
    pub const EDGES: [Cell; 4] = [
        Cell::new(0, 1),
        Cell::new(1, 2),
        Cell::new(2, 1),
        Cell::new(1, 0),
    ];

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All nine cells in reading order.
    pub fn all() -> impl Iterator<Item = Cell> {
        iproduct!(0..3, 0..3).map(|(row, col)| Cell::new(row, col))
    }

    /// Returns the cell this one lands on after a quarter turn of the grid.
    pub fn turned(self, spin: Spin) -> Self {
        match spin {
            Spin::Clockwise => Cell::new(self.col, 2 - self.row),
            Spin::AntiClockwise => Cell::new(2 - self.col, self.row),
        }
    }
}

/// Where a single sticker currently sits: a cell on the face named by its
/// center color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub face: Color,
    pub cell: Cell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::enum_iter;
    use itertools::Itertools;

    /// Neighbors along opposite sides are opposite roles, and every neighbor
    /// relation is seen from both faces.
    #[test]
    fn neighbor_table_consistent() {
        for role in enum_iter::<Role>() {
            let around = Side::CLOCKWISE.map(|side| role.neighbor(side));
            assert!(around.iter().all_unique(), "{role} has repeated neighbors");
            assert!(!around.contains(&role));
            assert!(!around.contains(&role.opposite()));
            assert_eq!(around[0].opposite(), around[2]);
            assert_eq!(around[1].opposite(), around[3]);
            for neighbor in around {
                assert!(
                    neighbor.side_towards(role).is_some(),
                    "{neighbor} does not border {role}"
                );
            }
        }
    }

    #[test]
    fn side_towards_opposite_is_none() {
        for role in enum_iter::<Role>() {
            assert_eq!(role.side_towards(role), None);
            assert_eq!(role.side_towards(role.opposite()), None);
        }
    }

    #[test]
    fn quarter_turns_cycle_cells() {
        for cell in Cell::all() {
            let mut turned = cell;
            for _ in 0..4 {
                turned = turned.turned(Spin::Clockwise);
            }
            assert_eq!(turned, cell);
            assert_eq!(cell.turned(Spin::Clockwise).turned(Spin::AntiClockwise), cell);
        }
        assert_eq!(Cell::CENTER.turned(Spin::Clockwise), Cell::CENTER);
        for i in 0..4 {
            assert_eq!(Cell::CORNERS[i].turned(Spin::Clockwise), Cell::CORNERS[(i + 1) % 4]);
            assert_eq!(Cell::EDGES[i].turned(Spin::Clockwise), Cell::EDGES[(i + 1) % 4]);
        }
    }

    /// Strips walk the border clockwise, so each one starts where the previous ended.
    #[test]
    fn strips_chain_clockwise() {
        for (a, b) in Side::CLOCKWISE.into_iter().circular_tuple_windows() {
            assert_eq!(a.strip()[2], b.strip()[0]);
        }
        for (side, edge) in Side::CLOCKWISE.into_iter().zip(Cell::EDGES) {
            assert_eq!(side.strip()[1], edge);
        }
    }

    #[test]
    fn opposite_colors_pair_up() {
        for color in enum_iter::<Color>() {
            assert_ne!(color.opposite(), color);
            assert_eq!(color.opposite().opposite(), color);
        }
    }
}
