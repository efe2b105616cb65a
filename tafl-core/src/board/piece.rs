use std::{
    fmt::{Debug, Display, Write},
    str::FromStr,
};

/// The role a piece plays on the board, independent of its colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// Convenience method for constructing a white [`Piece`].
    pub const fn white(self) -> Piece {
        Piece::new(Color::White, self)
    }

    /// Convenience method for constructing a black [`Piece`].
    pub const fn black(self) -> Piece {
        Piece::new(Color::Black, self)
    }

    /// Convenience method for constructing a [`Piece`] with the supplied
    /// [`Color`].
    pub const fn with_color(self, color: Color) -> Piece {
        Piece::new(color, self)
    }

    /// Get the FEN representation of the white version of this piece.
    pub const fn as_uppercase_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Get the FEN representation of the black version of this piece.
    pub const fn as_lowercase_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Returns true if this piece type is a slider (i.e. a bishop, rook, or
    /// queen).
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    /// Index into a 6-entry, per-piece-type table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Material value used by move ordering (distinct scale from [`crate::eval`]'s
    /// material table; kept local since move ordering has no use for the PST
    /// terms the evaluator cares about).
    pub const fn ordering_value(self) -> i32 {
        match self {
            PieceType::Pawn => 100,
            PieceType::Knight => 320,
            PieceType::Bishop => 330,
            PieceType::Rook => 500,
            PieceType::Queen => 900,
            PieceType::King => 20000,
        }
    }
}

/// Convenience aliases.
impl PieceType {
    pub const P: Self = Self::Pawn;
    pub const N: Self = Self::Knight;
    pub const B: Self = Self::Bishop;
    pub const R: Self = Self::Rook;
    pub const Q: Self = Self::Queen;
    pub const K: Self = Self::King;
}

/// Represents a player in a chess game (either white or black).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    pub const fn is_black(self) -> bool {
        !self.is_white()
    }

    /// Inverts the color, i.e. maps [`Color::White`] to [`Color::Black`] and
    /// vice versa.
    pub const fn flip(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

/// Represents the contents of a single square.
///
/// Unlike a bitboard-backed engine, this board is a flat 64-element mailbox,
/// so "no piece here" is a variant of [`Piece`] itself rather than being
/// modelled with [`Option`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Piece {
    #[default]
    Empty,
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
}

impl Piece {
    /// Constructs a [`Piece`] from a [`Color`] and a [`PieceType`].
    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        match (color, piece_type) {
            (Color::White, PieceType::Pawn) => Self::WhitePawn,
            (Color::White, PieceType::Knight) => Self::WhiteKnight,
            (Color::White, PieceType::Bishop) => Self::WhiteBishop,
            (Color::White, PieceType::Rook) => Self::WhiteRook,
            (Color::White, PieceType::Queen) => Self::WhiteQueen,
            (Color::White, PieceType::King) => Self::WhiteKing,
            (Color::Black, PieceType::Pawn) => Self::BlackPawn,
            (Color::Black, PieceType::Knight) => Self::BlackKnight,
            (Color::Black, PieceType::Bishop) => Self::BlackBishop,
            (Color::Black, PieceType::Rook) => Self::BlackRook,
            (Color::Black, PieceType::Queen) => Self::BlackQueen,
            (Color::Black, PieceType::King) => Self::BlackKing,
        }
    }

    pub const fn pawn(color: Color) -> Self {
        Self::new(color, PieceType::Pawn)
    }

    pub const fn knight(color: Color) -> Self {
        Self::new(color, PieceType::Knight)
    }

    pub const fn bishop(color: Color) -> Self {
        Self::new(color, PieceType::Bishop)
    }

    pub const fn rook(color: Color) -> Self {
        Self::new(color, PieceType::Rook)
    }

    pub const fn queen(color: Color) -> Self {
        Self::new(color, PieceType::Queen)
    }

    pub const fn king(color: Color) -> Self {
        Self::new(color, PieceType::King)
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Returns the [`Color`] of this piece, or [`None`] if the square is empty.
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::WhitePawn
            | Piece::WhiteKnight
            | Piece::WhiteBishop
            | Piece::WhiteRook
            | Piece::WhiteQueen
            | Piece::WhiteKing => Some(Color::White),
            Piece::BlackPawn
            | Piece::BlackKnight
            | Piece::BlackBishop
            | Piece::BlackRook
            | Piece::BlackQueen
            | Piece::BlackKing => Some(Color::Black),
        }
    }

    pub const fn is_color(self, color: Color) -> bool {
        matches!(
            (self.color(), color),
            (Some(Color::White), Color::White) | (Some(Color::Black), Color::Black)
        )
    }

    /// Returns the [`PieceType`] of this piece, or [`None`] if the square is
    /// empty.
    pub const fn piece_type(self) -> Option<PieceType> {
        match self {
            Piece::Empty => None,
            Piece::WhitePawn | Piece::BlackPawn => Some(PieceType::Pawn),
            Piece::WhiteKnight | Piece::BlackKnight => Some(PieceType::Knight),
            Piece::WhiteBishop | Piece::BlackBishop => Some(PieceType::Bishop),
            Piece::WhiteRook | Piece::BlackRook => Some(PieceType::Rook),
            Piece::WhiteQueen | Piece::BlackQueen => Some(PieceType::Queen),
            Piece::WhiteKing | Piece::BlackKing => Some(PieceType::King),
        }
    }

    pub const fn is_pawn(self) -> bool {
        matches!(self.piece_type(), Some(PieceType::Pawn))
    }

    pub const fn is_king(self) -> bool {
        matches!(self.piece_type(), Some(PieceType::King))
    }

    pub const fn is_slider(self) -> bool {
        matches!(self.piece_type(), Some(pt) if pt.is_slider())
    }

    /// Discriminant in `0..13`, used to index Zobrist piece-square tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_fen_char(self) -> char {
        match self {
            Piece::Empty => ' ',
            _ => match self.color().unwrap() {
                Color::White => self.piece_type().unwrap().as_uppercase_char(),
                Color::Black => self.piece_type().unwrap().as_lowercase_char(),
            },
        }
    }

    pub const fn try_from_fen_char(c: char) -> Option<Self> {
        let piece_type = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return None,
        };

        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Some(Self::new(color, piece_type))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.as_fen_char())
    }
}

impl FromStr for Piece {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 1 {
            s.chars()
                .next()
                .and_then(Piece::try_from_fen_char)
                .ok_or(())
        } else {
            Err(())
        }
    }
}

impl From<(Color, PieceType)> for Piece {
    fn from((color, piece_type): (Color, PieceType)) -> Self {
        Self::new(color, piece_type)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_PIECE_TYPES: &[PieceType] = &PieceType::ALL;
    const ALL_COLORS: &[Color] = &[Color::White, Color::Black];

    #[test]
    fn piece_create_and_unpack() {
        for &color in ALL_COLORS {
            for &piece_type in ALL_PIECE_TYPES {
                let piece = Piece::new(color, piece_type);
                assert_eq!(piece.color(), Some(color));
                assert_eq!(piece.piece_type(), Some(piece_type));
            }
        }
    }

    #[test]
    fn empty_has_no_color_or_type() {
        assert_eq!(Piece::Empty.color(), None);
        assert_eq!(Piece::Empty.piece_type(), None);
        assert!(Piece::Empty.is_empty());
    }

    #[test]
    fn color_flip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
    }

    #[test]
    fn piece_as_fen_char() {
        let cases = [
            (Piece::WhitePawn, 'P'),
            (Piece::WhiteBishop, 'B'),
            (Piece::WhiteKing, 'K'),
            (Piece::BlackKnight, 'n'),
            (Piece::BlackRook, 'r'),
            (Piece::BlackQueen, 'q'),
        ];
        for (piece, expected) in cases {
            assert_eq!(piece.as_fen_char(), expected);
        }
    }

    #[test]
    fn piece_try_from_fen_char() {
        let cases = [
            ('P', Piece::WhitePawn),
            ('B', Piece::WhiteBishop),
            ('K', Piece::WhiteKing),
            ('n', Piece::BlackKnight),
            ('r', Piece::BlackRook),
            ('q', Piece::BlackQueen),
        ];
        for (piece, expected) in cases {
            assert_eq!(Piece::try_from_fen_char(piece), Some(expected));
        }

        assert_eq!(Piece::try_from_fen_char('X'), None);
        assert_eq!(Piece::try_from_fen_char('a'), None);
    }

    #[test]
    fn piece_display_and_from_str() {
        for &color in ALL_COLORS {
            for &piece_type in ALL_PIECE_TYPES {
                let piece = Piece::new(color, piece_type);
                let s = format!("{piece}");
                assert_eq!(s.parse(), Ok(piece));
            }
        }
    }
}
