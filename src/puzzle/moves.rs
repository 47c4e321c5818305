use std::fmt;
use std::str::FromStr;

use crate::puzzle::common::{Axis, Spin};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("empty move")]
    Empty,
    #[error("unknown move {0:?}")]
    Unknown(String),
}

/// One primitive operation on a cube: a turn of the front face or a
/// reorientation of the whole cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Front(Spin),
    Cube(Axis, Spin),
}

impl Move {
    #[rustfmt::skip]
    pub const ALL: [Move; 8] = [
        Move::Front(Spin::Clockwise), Move::Front(Spin::AntiClockwise),
        Move::Cube(Axis::X, Spin::Clockwise), Move::Cube(Axis::X, Spin::AntiClockwise),
        Move::Cube(Axis::Y, Spin::Clockwise), Move::Cube(Axis::Y, Spin::AntiClockwise),
        Move::Cube(Axis::Z, Spin::Clockwise), Move::Cube(Axis::Z, Spin::AntiClockwise),
    ];

    pub fn spin(self) -> Spin {
        match self {
            Move::Front(spin) | Move::Cube(_, spin) => spin,
        }
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Move::Front(spin) => Move::Front(spin.inverse()),
            Move::Cube(axis, spin) => Move::Cube(axis, spin.inverse()),
        }
    }

    pub fn is_reorientation(self) -> bool {
        matches!(self, Move::Cube(..))
    }

    pub fn name(self) -> String {
        let letter = match self {
            Move::Front(_) => 'F',
            Move::Cube(Axis::X, _) => 'X',
            Move::Cube(Axis::Y, _) => 'Y',
            Move::Cube(Axis::Z, _) => 'Z',
        };
        match self.spin() {
            Spin::Clockwise => letter.to_string(),
            Spin::AntiClockwise => format!("{letter}'"),
        }
    }

    /// Parses whitespace-separated moves, e.g. `"F X' F'"`.
    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, ParseMoveError> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (letter, spin) = match s.strip_suffix('\'') {
            Some(rest) => (rest, Spin::AntiClockwise),
            None => (s, Spin::Clockwise),
        };
        match letter {
            "" if s.is_empty() => Err(ParseMoveError::Empty),
            "F" | "f" => Ok(Move::Front(spin)),
            "X" | "x" => Ok(Move::Cube(Axis::X, spin)),
            "Y" | "y" => Ok(Move::Cube(Axis::Y, spin)),
            "Z" | "z" => Ok(Move::Cube(Axis::Z, spin)),
            _ => Err(ParseMoveError::Unknown(s.to_string())),
        }
    }
}
