use itertools::Itertools;

use crate::puzzle::common::{Cell, Color, Location, Role};
use crate::puzzle::cube::Cube;
use crate::puzzle::piece::PieceId;
use crate::util::enum_iter;

/// A broken consistency rule, reported by [`Cube::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("{role} and {} hold {a} and {b}, which are not opposite colors", .role.opposite())]
    SplitAxis { role: Role, a: Color, b: Color },
    #[error("{color} plays {role}, but {role} is held by {holder}")]
    RoleMismatch {
        color: Color,
        role: Role,
        holder: Color,
    },
    #[error("{color} shows on {count} cells instead of 9")]
    ColorCount { color: Color, count: usize },
    #[error("the center of the {face} face has moved")]
    MovedCenter { face: Color },
    #[error("{shown} on the {face} face at {cell:?} is not a color of piece {piece}")]
    ForeignColor {
        face: Color,
        cell: Cell,
        piece: PieceId,
        shown: Color,
    },
    #[error("piece {piece} places its {color} sticker at {recorded:?}, not at {actual:?}")]
    StaleLocation {
        piece: PieceId,
        color: Color,
        recorded: Option<Location>,
        actual: Location,
    },
    #[error("piece {piece} shows on {cells} cells but has {arity} colors")]
    Scattered {
        piece: PieceId,
        cells: usize,
        arity: usize,
    },
    #[error("piece {piece} shows on faces {a} and {b}, which do not touch")]
    Torn { piece: PieceId, a: Color, b: Color },
    #[error("piece {piece} shows at {a:?} and {b:?}, which are not the same spot on their shared edge")]
    Misaligned {
        piece: PieceId,
        a: Location,
        b: Location,
    },
}

impl Cube {
    /// Checks that roles, both face grids and the pieces all agree.
    pub fn validate(&self) -> Result<(), InvariantError> {
        self.validate_roles()?;
        self.validate_colors()?;
        self.validate_stickers()?;
        self.validate_pieces()
    }

    fn validate_roles(&self) -> Result<(), InvariantError> {
        let orientation = self.orientation();
        for (role, color) in orientation.iter() {
            let a = color;
            let b = orientation.face(role.opposite());
            if b != a.opposite() {
                return Err(InvariantError::SplitAxis { role, a, b });
            }
            let holder = orientation.face(orientation.role(color));
            if holder != color {
                return Err(InvariantError::RoleMismatch {
                    color,
                    role: orientation.role(color),
                    holder,
                });
            }
        }
        Ok(())
    }

    fn validate_colors(&self) -> Result<(), InvariantError> {
        let counts = self
            .faces()
            .flat_map(|face| face.color_grid().iter().flatten().copied())
            .counts();
        for color in enum_iter::<Color>() {
            let count = counts.get(&color).copied().unwrap_or(0);
            if count != 9 {
                return Err(InvariantError::ColorCount { color, count });
            }
        }
        Ok(())
    }

    /// Every cell's color belongs to its piece, and the piece knows it is there.
    fn validate_stickers(&self) -> Result<(), InvariantError> {
        for face in self.faces() {
            let expected_center = Location {
                face: face.color(),
                cell: Cell::CENTER,
            };
            if self.center_location(face.color()) != Some(expected_center) {
                return Err(InvariantError::MovedCenter { face: face.color() });
            }

            for cell in Cell::all() {
                let sticker = face.sticker(cell);
                let piece = self.piece(sticker.piece);
                if !piece.has_color(sticker.color) {
                    return Err(InvariantError::ForeignColor {
                        face: face.color(),
                        cell,
                        piece: sticker.piece,
                        shown: sticker.color,
                    });
                }
                let actual = Location {
                    face: face.color(),
                    cell,
                };
                let recorded = piece.location(sticker.color);
                if recorded != Some(actual) {
                    return Err(InvariantError::StaleLocation {
                        piece: sticker.piece,
                        color: sticker.color,
                        recorded,
                        actual,
                    });
                }
            }
        }
        Ok(())
    }

    /// Every piece shows once per color, on faces that touch each other, at
    /// cells that meet across the shared edge.
    fn validate_pieces(&self) -> Result<(), InvariantError> {
        let mut cells_of = vec![Vec::new(); self.pieces().len()];
        for face in self.faces() {
            for cell in Cell::all() {
                cells_of[face.piece_at(cell).index()].push(Location {
                    face: face.color(),
                    cell,
                });
            }
        }

        for (id, piece) in self.pieces().iter() {
            let cells = &cells_of[id.index()];
            let arity = piece.kind().arity();
            if cells.len() != arity {
                return Err(InvariantError::Scattered {
                    piece: id,
                    cells: cells.len(),
                    arity,
                });
            }
            for (&a, &b) in cells.iter().tuple_combinations() {
                self.validate_seam(id, arity, a, b)?;
            }
        }
        Ok(())
    }

    /// Two stickers of one piece sit on the edge their faces share, at mirrored
    /// positions along it: edges on the middle cell, corners on an end.
    fn validate_seam(
        &self,
        piece: PieceId,
        arity: usize,
        a: Location,
        b: Location,
    ) -> Result<(), InvariantError> {
        let orientation = self.orientation();
        let (Some(towards), Some(back)) = (
            orientation.side_towards(a.face, b.face),
            orientation.side_towards(b.face, a.face),
        ) else {
            return Err(InvariantError::Torn {
                piece,
                a: a.face,
                b: b.face,
            });
        };

        let aligned = match towards.strip().iter().position(|&cell| cell == a.cell) {
            Some(i) => back.strip()[2 - i] == b.cell && (i == 1) == (arity == 2),
            None => false,
        };
        if !aligned {
            return Err(InvariantError::Misaligned { piece, a, b });
        }
        Ok(())
    }
}
