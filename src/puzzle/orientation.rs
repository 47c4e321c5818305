use enum_map::{enum_map, EnumMap};

use crate::puzzle::common::{Color, Role, Side};

/// Which face plays which role. Kept in both directions so that lookups by
/// role and by color are both total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    faces: EnumMap<Role, Color>,
    roles: EnumMap<Color, Role>,
}

impl Orientation {
    /// The starting orientation for a cube held with `primary` in front.
    pub fn seeded(primary: Color) -> Self {
        use Color::*;

        let (right, left, up, down) = match primary {
            White => (Red, Orange, Blue, Green),
            Orange => (White, Yellow, Blue, Green),
            Red => (Yellow, White, Blue, Green),
            Yellow => (Orange, Red, Blue, Green),
            Green => (Red, Orange, White, Yellow),
            Blue => (Red, Orange, Yellow, White),
        };

        Self::from_faces(enum_map! {
            Role::Front => primary,
            Role::Right => right,
            Role::Left => left,
            Role::Up => up,
            Role::Down => down,
            Role::Back => primary.opposite(),
        })
    }

    fn from_faces(faces: EnumMap<Role, Color>) -> Self {
        let roles = EnumMap::from_fn(|color: Color| {
            faces
                .iter()
                .find(|(_, c)| **c == color)
                .map(|(role, _)| role)
                .expect("every color plays exactly one role")
        });
        Self { faces, roles }
    }

    /// The face currently playing `role`.
    pub fn face(&self, role: Role) -> Color {
        self.faces[role]
    }

    /// The role currently played by the face `color`.
    pub fn role(&self, color: Color) -> Role {
        self.roles[color]
    }

    /// The face bordering `color` along `side` of its grid.
    pub fn adjacent(&self, color: Color, side: Side) -> Color {
        self.face(self.role(color).neighbor(side))
    }

    /// The face across the cube from `color`.
    pub fn opposite(&self, color: Color) -> Color {
        self.face(self.role(color).opposite())
    }

    /// The side of `from`'s grid that borders the face `to`.
    pub fn side_towards(&self, from: Color, to: Color) -> Option<Side> {
        self.role(from).side_towards(self.role(to))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        self.faces.iter().map(|(role, &color)| (role, color))
    }

    /// Hands each role in `cycle` the face of the role after it; the last role
    /// takes the face of the first.
    pub(crate) fn cycle(&mut self, cycle: [Role; 4]) {
        let taken = cycle.map(|role| self.faces[role]);
        for (i, &role) in cycle.iter().enumerate() {
            let color = taken[(i + 1) % 4];
            self.faces[role] = color;
            self.roles[color] = role;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::enum_iter;
    use pretty_assertions::assert_eq;

    /// Every seed is a bijection that keeps the fixed opposite pairs.
    #[test]
    fn seeds_pair_opposites() {
        for primary in enum_iter::<Color>() {
            let orientation = Orientation::seeded(primary);
            assert_eq!(orientation.face(Role::Front), primary);
            for role in enum_iter::<Role>() {
                let color = orientation.face(role);
                assert_eq!(orientation.role(color), role);
                assert_eq!(orientation.face(role.opposite()), color.opposite());
            }
        }
    }

    /// All six seeds describe the same physical coloring, so the corner
    /// front-up-right always reads clockwise the same way.
    #[test]
    fn seeds_share_chirality() {
        let white = Orientation::seeded(Color::White);
        let clockwise_triples = |o: &Orientation| {
            let mut triples = Vec::new();
            for color in enum_iter::<Color>() {
                for i in 0..4 {
                    let ccw = o.adjacent(color, Side::CLOCKWISE[(i + 3) % 4]);
                    let cw = o.adjacent(color, Side::CLOCKWISE[i]);
                    triples.push((color, ccw, cw));
                }
            }
            triples.sort_by_key(|&(a, b, c)| (a as u8, b as u8, c as u8));
            triples
        };
        let expected = clockwise_triples(&white);
        for primary in enum_iter::<Color>() {
            assert_eq!(clockwise_triples(&Orientation::seeded(primary)), expected);
        }
    }

    #[test]
    fn adjacency_is_mutual() {
        let orientation = Orientation::seeded(Color::Red);
        for color in enum_iter::<Color>() {
            for side in Side::CLOCKWISE {
                let neighbor = orientation.adjacent(color, side);
                let back = orientation
                    .side_towards(neighbor, color)
                    .expect("neighbors share an edge");
                assert_eq!(orientation.adjacent(neighbor, back), color);
            }
            assert_eq!(orientation.side_towards(color, orientation.opposite(color)), None);
        }
    }

    #[test]
    fn cycle_four_times_is_identity() {
        let start = Orientation::seeded(Color::White);
        let mut orientation = start.clone();
        orientation.cycle([Role::Right, Role::Back, Role::Left, Role::Front]);
        assert_eq!(orientation.face(Role::Front), Color::Red);
        assert_eq!(orientation.face(Role::Left), Color::White);
        assert_eq!(orientation.role(Color::Yellow), Role::Right);
        for _ in 0..3 {
            orientation.cycle([Role::Right, Role::Back, Role::Left, Role::Front]);
        }
        assert_eq!(orientation, start);
    }

    #[test]
    #[should_panic(expected = "every color plays exactly one role")]
    fn repeated_color_is_refused() {
        Orientation::from_faces(enum_map! {
            Role::Front => Color::White,
            Role::Right => Color::Red,
            Role::Left => Color::Orange,
            Role::Up => Color::Blue,
            Role::Down => Color::Green,
            Role::Back => Color::White,
        });
    }
}
