use itertools::Itertools;
use std::fmt;

use crate::puzzle::common::{Cell, Color, Location, Side, Spin};
use crate::puzzle::cube::Cube;
use crate::puzzle::orientation::Orientation;
use crate::puzzle::piece::{Piece, PieceCycle, PieceId, Pieces};

/// What one cell of a face holds: a piece and the color it shows there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    pub piece: PieceId,
    pub color: Color,
}

/// One side of the cube, permanently named by its center color.
///
/// The piece grid and the color grid always change together; every write
/// goes through [`Face::put`], which also tells the piece where its sticker
/// went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    color: Color,
    pieces: [[PieceId; 3]; 3],
    colors: [[Color; 3]; 3],
}

impl Face {
    /// Builds the face `color` and its pieces. Pieces already built by a
    /// neighboring face are reused, so shared edges and corners are aliased.
    pub(crate) fn new(color: Color, orientation: &Orientation, pieces: &mut Pieces) -> Self {
        let around = Side::CLOCKWISE.map(|side| orientation.adjacent(color, side));

        let center = pieces.intern(Piece::center(color));
        let mut face = Self {
            color,
            pieces: [[center; 3]; 3],
            colors: [[color; 3]; 3],
        };

        for (i, cell) in Cell::CORNERS.into_iter().enumerate() {
            // corner i sits between side i-1 and side i
            let id = pieces.intern(Piece::corner(color, around[(i + 3) % 4], around[i]));
            face.put(pieces, cell, Sticker { piece: id, color });
        }
        for (i, cell) in Cell::EDGES.into_iter().enumerate() {
            let id = pieces.intern(Piece::edge(color, around[i]));
            face.put(pieces, cell, Sticker { piece: id, color });
        }
        face.put(
            pieces,
            Cell::CENTER,
            Sticker {
                piece: center,
                color,
            },
        );

        face
    }

    /// The color naming this face.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn color_at(&self, cell: Cell) -> Color {
        self.colors[cell.row][cell.col]
    }

    pub fn piece_at(&self, cell: Cell) -> PieceId {
        self.pieces[cell.row][cell.col]
    }

    pub fn sticker(&self, cell: Cell) -> Sticker {
        Sticker {
            piece: self.piece_at(cell),
            color: self.color_at(cell),
        }
    }

    pub fn color_grid(&self) -> &[[Color; 3]; 3] {
        &self.colors
    }

    pub fn piece_grid(&self) -> &[[PieceId; 3]; 3] {
        &self.pieces
    }

    pub fn center(&self) -> PieceId {
        self.piece_at(Cell::CENTER)
    }

    /// Corner pieces, clockwise from the top-left.
    pub fn corners(&self) -> PieceCycle {
        PieceCycle::new(Cell::CORNERS.map(|cell| self.piece_at(cell)))
    }

    /// Edge pieces, clockwise from the top.
    pub fn edges(&self) -> PieceCycle {
        PieceCycle::new(Cell::EDGES.map(|cell| self.piece_at(cell)))
    }

    /// True if all nine cells show the same color.
    pub fn is_uniform(&self) -> bool {
        self.colors.iter().flatten().all_equal()
    }

    pub(crate) fn put(&mut self, pieces: &mut Pieces, cell: Cell, sticker: Sticker) {
        self.pieces[cell.row][cell.col] = sticker.piece;
        self.colors[cell.row][cell.col] = sticker.color;
        pieces.place(
            sticker.piece,
            sticker.color,
            Location {
                face: self.color,
                cell,
            },
        );
    }

    /// Spins this face's own stickers a quarter turn in place. Neighboring
    /// faces are left alone.
    pub(crate) fn rotate_matrix(&mut self, pieces: &mut Pieces, spin: Spin) {
        let before: [(Cell, Sticker); 8] = std::array::from_fn(|i| {
            let cell = if i < 4 {
                Cell::CORNERS[i]
            } else {
                Cell::EDGES[i - 4]
            };
            (cell, self.sticker(cell))
        });
        for (cell, sticker) in before {
            self.put(pieces, cell.turned(spin), sticker);
        }
    }

    pub(crate) fn rotate_matrix_n(&mut self, pieces: &mut Pieces, spin: Spin, count: usize) {
        for _ in 0..count % 4 {
            self.rotate_matrix(pieces, spin);
        }
    }

    pub fn up_side<'c>(&self, cube: &'c Cube) -> &'c Face {
        cube.neighbor(self.color, Side::Up)
    }

    pub fn right_side<'c>(&self, cube: &'c Cube) -> &'c Face {
        cube.neighbor(self.color, Side::Right)
    }

    pub fn down_side<'c>(&self, cube: &'c Cube) -> &'c Face {
        cube.neighbor(self.color, Side::Down)
    }

    pub fn left_side<'c>(&self, cube: &'c Cube) -> &'c Face {
        cube.neighbor(self.color, Side::Left)
    }

    pub fn back_side<'c>(&self, cube: &'c Cube) -> &'c Face {
        cube.side(cube.orientation().opposite(self.color))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.colors {
            writeln!(f, "{}", row.iter().map(|c| format!("{c:<8}")).join(""))?;
        }
        Ok(())
    }
}
