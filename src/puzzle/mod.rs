pub mod common;
pub mod cube;
pub mod face;
pub mod moves;
pub mod orientation;
pub mod piece;
pub mod scramble;
pub mod validate;

pub use common::{Axis, Cell, Color, Location, Role, Side, Spin};
pub use cube::Cube;
pub use face::{Face, Sticker};
pub use moves::{Move, ParseMoveError};
pub use orientation::Orientation;
pub use piece::{Piece, PieceCycle, PieceError, PieceId, PieceKind, Pieces};
pub use scramble::ScrambleSettings;
pub use validate::InvariantError;
