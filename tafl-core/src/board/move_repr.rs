use std::fmt::{Debug, Display};

use bitflags::bitflags;

use super::{PieceType, Square};

bitflags! {
    /// Flags describing special properties of a [`Move`].
    ///
    /// Unlike the bitboard-era encoding this was grounded on, the captured
    /// piece is not carried on the flags -- [`super::Position::make_move`]
    /// looks the captured piece up from the board itself, since a mailbox
    /// board can answer that question for free.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        const CAPTURE    = 0b001;
        const EN_PASSANT = 0b010;
        const CASTLE     = 0b100;
    }
}

/// A single chess move, as produced by move generation.
///
/// Moves are plain values: they carry no reference back to the position they
/// were generated from, and the captured piece (if any) is recomputed by
/// [`super::Position::make_move`] rather than stored here.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
    flags: MoveFlags,
}

impl Move {
    pub const fn new(
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
        flags: MoveFlags,
    ) -> Self {
        Self {
            from,
            to,
            promotion,
            flags,
        }
    }

    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, None, MoveFlags::empty())
    }

    pub const fn capture(from: Square, to: Square) -> Self {
        Self::new(from, to, None, MoveFlags::CAPTURE)
    }

    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self::new(
            from,
            to,
            None,
            MoveFlags::CAPTURE.union(MoveFlags::EN_PASSANT),
        )
    }

    pub const fn castle(from: Square, to: Square) -> Self {
        Self::new(from, to, None, MoveFlags::CASTLE)
    }

    pub const fn promotion(
        from: Square,
        to: Square,
        promotion: PieceType,
        is_capture: bool,
    ) -> Self {
        let flags = if is_capture {
            MoveFlags::CAPTURE
        } else {
            MoveFlags::empty()
        };
        Self::new(from, to, Some(promotion), flags)
    }

    pub const fn from_square(self) -> Square {
        self.from
    }

    pub const fn to_square(self) -> Square {
        self.to
    }

    pub const fn promotion_piece(self) -> Option<PieceType> {
        self.promotion
    }

    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    pub const fn is_capture(self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    pub const fn is_en_passant(self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    pub const fn is_castle(self) -> bool {
        self.flags.contains(MoveFlags::CASTLE)
    }

    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// A move is "tactical" (considered by quiescence search) if it is a
    /// capture, en passant, or promotion.
    pub const fn is_tactical(self) -> bool {
        self.is_capture() || self.is_promotion()
    }

    /// A "quiet" move is neither a capture, en passant, promotion, nor castle.
    pub const fn is_quiet(self) -> bool {
        !self.is_capture() && !self.is_promotion() && !self.is_castle()
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.as_uppercase_char())?;
        }
        if self.is_castle() {
            write!(f, " (castle)")?;
        }
        if self.is_en_passant() {
            write!(f, " (e.p.)")?;
        }
        Ok(())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.as_lowercase_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Square;

    #[test]
    fn quiet_move_has_no_flags() {
        let m = Move::quiet(Square::E2, Square::E4);
        assert!(!m.is_capture());
        assert!(!m.is_castle());
        assert!(!m.is_en_passant());
        assert!(m.is_quiet());
    }

    #[test]
    fn capture_sets_capture_flag() {
        let m = Move::capture(Square::E4, Square::D5);
        assert!(m.is_capture());
        assert!(m.is_tactical());
        assert!(!m.is_quiet());
    }

    #[test]
    fn en_passant_implies_capture() {
        let m = Move::en_passant(Square::E5, Square::D6);
        assert!(m.is_capture());
        assert!(m.is_en_passant());
    }

    #[test]
    fn promotion_display() {
        let m = Move::promotion(Square::E7, Square::E8, PieceType::Queen, false);
        assert_eq!(format!("{m}"), "e7e8q");
        assert!(m.is_promotion());
        assert!(m.is_tactical());
    }
}
