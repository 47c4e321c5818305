use enum_map::EnumMap;
use std::fmt;

use crate::puzzle::common::{Axis, Color, Location, Role, Side, Spin};
use crate::puzzle::face::Face;
use crate::puzzle::moves::Move;
use crate::puzzle::orientation::Orientation;
use crate::puzzle::piece::{Piece, PieceId, Pieces};
use crate::util::shifted;

/// In-place spins and role cycle making up one whole-cube reorientation.
struct Reorientation {
    /// Faces, by their role before the move, and how far they spin.
    spins: &'static [(Role, Spin, usize)],
    /// Each role takes the face of the role after it.
    cycle: [Role; 4],
}

impl Reorientation {
    fn of(axis: Axis, spin: Spin) -> Self {
        use Role::*;
        use Spin::*;

        match (axis, spin) {
            (Axis::X, Clockwise) => Self {
                spins: &[(Up, Clockwise, 1), (Down, AntiClockwise, 1)],
                cycle: [Right, Back, Left, Front],
            },
            (Axis::X, AntiClockwise) => Self {
                spins: &[(Up, AntiClockwise, 1), (Down, Clockwise, 1)],
                cycle: [Right, Front, Left, Back],
            },
            (Axis::Y, Clockwise) => Self {
                spins: &[
                    (Left, Clockwise, 1),
                    (Right, AntiClockwise, 1),
                    (Back, Clockwise, 2),
                    (Down, Clockwise, 2),
                ],
                cycle: [Front, Up, Back, Down],
            },
            (Axis::Y, AntiClockwise) => Self {
                spins: &[
                    (Right, Clockwise, 1),
                    (Left, AntiClockwise, 1),
                    (Back, Clockwise, 2),
                    (Up, Clockwise, 2),
                ],
                cycle: [Front, Down, Back, Up],
            },
            (Axis::Z, Clockwise) => Self {
                spins: &[
                    (Right, Clockwise, 1),
                    (Up, Clockwise, 1),
                    (Left, Clockwise, 1),
                    (Down, Clockwise, 1),
                    (Back, AntiClockwise, 1),
                    (Front, Clockwise, 1),
                ],
                cycle: [Up, Left, Down, Right],
            },
            (Axis::Z, AntiClockwise) => Self {
                spins: &[
                    (Right, AntiClockwise, 1),
                    (Up, AntiClockwise, 1),
                    (Left, AntiClockwise, 1),
                    (Down, AntiClockwise, 1),
                    (Back, Clockwise, 1),
                    (Front, AntiClockwise, 1),
                ],
                cycle: [Up, Right, Down, Left],
            },
        }
    }
}

/// A 3x3x3 cube: six faces, the pieces they share, and which face currently
/// plays which role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    pub(crate) faces: EnumMap<Color, Face>,
    orientation: Orientation,
    pub(crate) pieces: Pieces,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl Cube {
    /// Creates a solved cube held with `primary` in front.
    pub fn new(primary: Color) -> Self {
        let orientation = Orientation::seeded(primary);
        let mut pieces = Pieces::default();
        // every role is assigned before any face builds its pieces
        let faces = EnumMap::from_fn(|color| Face::new(color, &orientation, &mut pieces));
        Self {
            faces,
            orientation,
            pieces,
        }
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn pieces(&self) -> &Pieces {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    /// The face named by `color`, wherever it currently is.
    pub fn side(&self, color: Color) -> &Face {
        &self.faces[color]
    }

    /// The role the face `color` currently plays.
    pub fn side_location(&self, color: Color) -> Role {
        self.orientation.role(color)
    }

    /// The face currently playing `role`.
    pub fn face(&self, role: Role) -> &Face {
        self.side(self.orientation.face(role))
    }

    pub fn front(&self) -> &Face {
        self.face(Role::Front)
    }

    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.values()
    }

    /// The face bordering `color` along `side` of its grid.
    pub fn neighbor(&self, color: Color, side: Side) -> &Face {
        self.side(self.orientation.adjacent(color, side))
    }

    /// Edge pieces of the face `color`, clockwise from the top, keeping only
    /// those that carry `filter` if given.
    pub fn edge_pieces(&self, color: Color, filter: Option<Color>) -> Vec<PieceId> {
        let edges = self.side(color).edges();
        match filter {
            Some(wanted) => edges.with_color(&self.pieces, wanted).collect(),
            None => edges.iter().collect(),
        }
    }

    /// Corner pieces of the face `color`, clockwise from the top-left,
    /// keeping only those that carry `filter` if given.
    pub fn corner_pieces(&self, color: Color, filter: Option<Color>) -> Vec<PieceId> {
        let corners = self.side(color).corners();
        match filter {
            Some(wanted) => corners.with_color(&self.pieces, wanted).collect(),
            None => corners.iter().collect(),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.faces.values().all(Face::is_uniform)
    }

    pub fn apply(&mut self, mv: Move) {
        match mv {
            Move::Front(spin) => self.turn_front(spin),
            Move::Cube(axis, spin) => self.rotate(axis, spin),
        }
    }

    pub fn apply_n(&mut self, mv: Move, count: usize) {
        for _ in 0..count {
            self.apply(mv);
        }
    }

    pub fn apply_all<I: IntoIterator<Item = Move>>(&mut self, moves: I) {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Turns the face `color` a quarter turn, carrying the border rows of
    /// its four neighbors along.
    pub fn turn_face(&mut self, color: Color, spin: Spin) {
        log::trace!("turning {color} {spin:?}");
        self.faces[color].rotate_matrix(&mut self.pieces, spin);
        self.adjust_neighbors(color, spin);
    }

    pub fn turn_face_n(&mut self, color: Color, spin: Spin, count: usize) {
        for _ in 0..count {
            self.turn_face(color, spin);
        }
    }

    pub fn turn_front(&mut self, spin: Spin) {
        self.turn_face(self.orientation.face(Role::Front), spin);
    }

    pub fn rotate_front_clockwise(&mut self, count: usize) {
        self.apply_n(Move::Front(Spin::Clockwise), count);
    }

    pub fn rotate_front_anti_clockwise(&mut self, count: usize) {
        self.apply_n(Move::Front(Spin::AntiClockwise), count);
    }

    /// Moves the ring of twelve neighbor cells around `color` after its own
    /// grid has turned.
    fn adjust_neighbors(&mut self, color: Color, spin: Spin) {
        let strips = Side::CLOCKWISE.map(|side| {
            let neighbor = self.orientation.adjacent(color, side);
            let facing = self
                .orientation
                .side_towards(neighbor, color)
                .expect("adjacent faces always share an edge");
            (neighbor, facing.strip())
        });
        // the shared edge runs the other way round the neighbor
        let ring: [Location; 12] = std::array::from_fn(|i| {
            let (face, strip) = strips[i / 3];
            Location {
                face,
                cell: strip[2 - i % 3],
            }
        });

        let stickers = ring.map(|loc| self.faces[loc.face].sticker(loc.cell));
        let by = match spin {
            Spin::Clockwise => 3,
            Spin::AntiClockwise => 9,
        };
        for (loc, sticker) in ring.into_iter().zip(shifted(stickers, by)) {
            self.faces[loc.face].put(&mut self.pieces, loc.cell, sticker);
        }
    }

    /// Reorients the whole cube a quarter turn about `axis`. No piece leaves
    /// its face; roles are relabeled and the faces whose grid frame changes
    /// are spun in place.
    pub fn rotate(&mut self, axis: Axis, spin: Spin) {
        log::trace!("rotating cube {axis:?} {spin:?}");
        let Reorientation { spins, cycle } = Reorientation::of(axis, spin);
        for &(role, face_spin, count) in spins {
            let color = self.orientation.face(role);
            self.faces[color].rotate_matrix_n(&mut self.pieces, face_spin, count);
        }
        self.orientation.cycle(cycle);
    }

    pub fn rotate_n(&mut self, axis: Axis, spin: Spin, count: usize) {
        self.apply_n(Move::Cube(axis, spin), count);
    }

    pub fn rotate_cube_x_clockwise(&mut self, count: usize) {
        self.rotate_n(Axis::X, Spin::Clockwise, count);
    }

    pub fn rotate_cube_x_anti_clockwise(&mut self, count: usize) {
        self.rotate_n(Axis::X, Spin::AntiClockwise, count);
    }

    pub fn rotate_cube_y_clockwise(&mut self, count: usize) {
        self.rotate_n(Axis::Y, Spin::Clockwise, count);
    }

    pub fn rotate_cube_y_anti_clockwise(&mut self, count: usize) {
        self.rotate_n(Axis::Y, Spin::AntiClockwise, count);
    }

    pub fn rotate_cube_z_clockwise(&mut self, count: usize) {
        self.rotate_n(Axis::Z, Spin::Clockwise, count);
    }

    pub fn rotate_cube_z_anti_clockwise(&mut self, count: usize) {
        self.rotate_n(Axis::Z, Spin::AntiClockwise, count);
    }

    /// Reorients the cube so that the face `color` is in front.
    pub fn rotate_to_side(&mut self, color: Color) {
        let role = self.side_location(color);
        log::debug!("bringing {color} from {role} to front");
        match role {
            Role::Front => {}
            Role::Right => self.rotate_cube_x_clockwise(1),
            Role::Left => self.rotate_cube_x_anti_clockwise(1),
            Role::Up => self.rotate_cube_y_clockwise(1),
            Role::Down => self.rotate_cube_y_anti_clockwise(1),
            Role::Back => self.rotate_cube_x_clockwise(2),
        }
    }

    /// Where the center of the face `color` sits; used by validation.
    pub(crate) fn center_location(&self, color: Color) -> Option<Location> {
        self.piece(self.side(color).center()).location(color)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=====================RUBIK'S CUBE======================")?;
        for role in [
            Role::Front,
            Role::Right,
            Role::Left,
            Role::Up,
            Role::Down,
            Role::Back,
        ] {
            writeln!(f)?;
            writeln!(f, "{role} Side ({}):", self.orientation.face(role))?;
            write!(f, "{}", self.face(role))?;
        }
        Ok(())
    }
}
