use std::fmt;
use std::ops::Index;

use crate::puzzle::common::{Color, Location};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    #[error("a piece carries 1 to 3 colors, not {0}")]
    Arity(usize),
    #[error("color {0} appears twice on one piece")]
    RepeatedColor(Color),
}

/// Stable index of a piece in its cube's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Center,
    Edge,
    Corner,
}

impl PieceKind {
    /// Number of stickers on a piece of this kind.
    pub fn arity(self) -> usize {
        match self {
            PieceKind::Center => 1,
            PieceKind::Edge => 2,
            PieceKind::Corner => 3,
        }
    }
}

/// The stickers of one piece: their colors in construction order, and where
/// each one currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stickers<const N: usize> {
    colors: [Color; N],
    locations: [Option<Location>; N],
}

impl<const N: usize> Stickers<N> {
    fn new(colors: [Color; N]) -> Self {
        Self {
            colors,
            locations: [None; N],
        }
    }
}

/// A single physical piece of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Center(Stickers<1>),
    Edge(Stickers<2>),
    Corner(Stickers<3>),
}

impl Piece {
    pub fn center(color: Color) -> Self {
        Piece::Center(Stickers::new([color]))
    }

    pub fn edge(own: Color, other: Color) -> Self {
        Piece::Edge(Stickers::new([own, other]))
    }

    pub fn corner(own: Color, ccw: Color, cw: Color) -> Self {
        Piece::Corner(Stickers::new([own, ccw, cw]))
    }

    /// Builds a piece from an explicit color list; its length decides the kind.
    pub fn from_colors(colors: &[Color]) -> Result<Self, PieceError> {
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(PieceError::RepeatedColor(*color));
            }
        }
        match colors {
            &[a] => Ok(Self::center(a)),
            &[a, b] => Ok(Self::edge(a, b)),
            &[a, b, c] => Ok(Self::corner(a, b, c)),
            _ => Err(PieceError::Arity(colors.len())),
        }
    }

    pub fn kind(&self) -> PieceKind {
        match self {
            Piece::Center(_) => PieceKind::Center,
            Piece::Edge(_) => PieceKind::Edge,
            Piece::Corner(_) => PieceKind::Corner,
        }
    }

    pub fn colors(&self) -> &[Color] {
        self.stickers().0
    }

    pub fn has_color(&self, color: Color) -> bool {
        self.colors().contains(&color)
    }

    /// For an edge piece, the color paired with `color`.
    pub fn other_color(&self, color: Color) -> Option<Color> {
        match self {
            Piece::Edge(Stickers {
                colors: [a, b], ..
            }) if *a == color => Some(*b),
            Piece::Edge(Stickers {
                colors: [a, b], ..
            }) if *b == color => Some(*a),
            _ => None,
        }
    }

    /// Where the sticker of the given color currently sits.
    pub fn location(&self, color: Color) -> Option<Location> {
        let (colors, locations) = self.stickers();
        let i = colors.iter().position(|&c| c == color)?;
        locations[i]
    }

    /// Location of the first sticker, which names the piece's home face.
    pub fn position(&self) -> Option<Location> {
        self.stickers().1[0]
    }

    /// Each color paired with its current location.
    pub fn locations(&self) -> impl Iterator<Item = (Color, Option<Location>)> + '_ {
        let (colors, locations) = self.stickers();
        colors.iter().copied().zip(locations.iter().copied())
    }

    /// Records that the sticker of `color` now sits at `location`. Returns
    /// `false` if the piece has no such sticker.
    pub(crate) fn set_location(&mut self, color: Color, location: Location) -> bool {
        let (colors, locations) = self.stickers_mut();
        match colors.iter().position(|&c| c == color) {
            Some(i) => {
                locations[i] = Some(location);
                true
            }
            None => false,
        }
    }

    /// True if both pieces carry the same set of colors, in any order.
    pub fn same_colors(&self, colors: &[Color]) -> bool {
        self.colors().len() == colors.len() && colors.iter().all(|&c| self.has_color(c))
    }

    fn stickers(&self) -> (&[Color], &[Option<Location>]) {
        match self {
            Piece::Center(s) => (&s.colors, &s.locations),
            Piece::Edge(s) => (&s.colors, &s.locations),
            Piece::Corner(s) => (&s.colors, &s.locations),
        }
    }

    fn stickers_mut(&mut self) -> (&[Color], &mut [Option<Location>]) {
        match self {
            Piece::Center(s) => (&s.colors, &mut s.locations),
            Piece::Edge(s) => (&s.colors, &mut s.locations),
            Piece::Corner(s) => (&s.colors, &mut s.locations),
        }
    }
}

/// Arena owning every piece of a cube. Faces refer to pieces by `PieceId`,
/// so a piece shared by two or three faces exists exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pieces(Vec<Piece>);

impl Pieces {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.0.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.0.iter().enumerate().map(|(i, piece)| (PieceId(i), piece))
    }

    /// Finds the piece carrying exactly this set of colors.
    pub fn find(&self, colors: &[Color]) -> Option<PieceId> {
        self.iter()
            .find(|(_, piece)| piece.same_colors(colors))
            .map(|(id, _)| id)
    }

    /// Returns the existing piece with the same colors as `piece`, or adds it.
    pub(crate) fn intern(&mut self, piece: Piece) -> PieceId {
        match self.find(piece.colors()) {
            Some(id) => id,
            None => {
                self.0.push(piece);
                PieceId(self.0.len() - 1)
            }
        }
    }

    pub(crate) fn place(&mut self, id: PieceId, color: Color, location: Location) {
        let placed = self.0[id.0].set_location(color, location);
        assert!(placed, "piece {id} has no {color} sticker");
    }
}

impl Index<PieceId> for Pieces {
    type Output = Piece;

    fn index(&self, id: PieceId) -> &Piece {
        &self.0[id.0]
    }
}

/// Four pieces of one kind on one face, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCycle([PieceId; 4]);

impl PieceCycle {
    pub(crate) fn new(ids: [PieceId; 4]) -> Self {
        Self(ids)
    }

    pub fn first(&self) -> PieceId {
        self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, piece: PieceId) -> bool {
        self.0.contains(&piece)
    }

    /// The piece clockwise after `piece`.
    pub fn next(&self, piece: PieceId) -> Option<PieceId> {
        self.at(piece, 1)
    }

    /// The piece visited last when going round from `piece`, i.e. the one
    /// just before it.
    pub fn last(&self, piece: PieceId) -> Option<PieceId> {
        self.at(piece, 3)
    }

    /// The piece `offset` steps clockwise from `start`.
    pub fn at(&self, start: PieceId, offset: usize) -> Option<PieceId> {
        let i = self.0.iter().position(|&id| id == start)?;
        Some(self.0[(i + offset) % 4])
    }

    /// Pieces of the cycle carrying `color`, keeping the clockwise order.
    pub fn with_color<'a>(
        &'a self,
        pieces: &'a Pieces,
        color: Color,
    ) -> impl Iterator<Item = PieceId> + 'a {
        self.iter().filter(move |&id| pieces[id].has_color(color))
    }
}
