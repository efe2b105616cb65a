use std::{
    fmt::{Display, Write},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// A centipawn evaluation, from the perspective of whoever is asking.
///
/// Search always deals in "side to move" perspective and negates at each
/// recursive step; [`crate::evaluation::evaluate`] returns White's
/// perspective. Wrapping the bare integer keeps those two conventions from
/// being mixed up by accident, and keeps mate-distance arithmetic
/// (`MATE - ply`) off of a type that also means "material difference".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub i32);

impl Score {
    /// Effectively infinite, used to seed alpha-beta windows. Not
    /// `i32::MAX` so that negating and adding small deltas never overflows.
    pub const INF: Self = Self(1_000_000_000);

    pub const DRAW: Self = Self(0);

    const MATE_SCORE: i32 = 1_000_000;

    /// Anything with a magnitude above this is a mate score, not a material
    /// evaluation -- a real position's material imbalance never approaches
    /// this.
    const MATE_THRESHOLD: i32 = Self::MATE_SCORE - 1_000;

    pub const fn get(self) -> i32 {
        self.0
    }

    /// A mate score for the side to move, `ply` plies from the root. Closer
    /// mates score higher so that search prefers them.
    pub const fn mated_in(ply: u32) -> Self {
        Self(-Self::MATE_SCORE + ply as i32)
    }

    pub const fn is_mate(self) -> bool {
        self.0.abs() > Self::MATE_THRESHOLD
    }

    /// Shifts a mate score found `ply_from_root` plies deep into a
    /// root-relative score before storing it in the transposition table, so
    /// that the same mate is worth the same key regardless of which node
    /// first discovered it.
    pub fn sub_plies_for_mate(self, ply_from_root: u32) -> Self {
        if self.is_mate() {
            Self(self.0 + self.0.signum() * ply_from_root as i32)
        } else {
            self
        }
    }

    /// Inverse of [`Self::sub_plies_for_mate`], applied when reading a mate
    /// score back out of the transposition table at a given ply.
    pub fn add_plies_for_mate(self, ply_from_root: u32) -> Self {
        if self.is_mate() {
            Self(self.0 - self.0.signum() * ply_from_root as i32)
        } else {
            self
        }
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<i32> for Score {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for Score {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sub for Score {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<i32> for Score {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign for Score {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = self.0.signum();
        let val = self.0.abs();

        f.write_char(if sign >= 0 { '+' } else { '-' })?;

        if val > Self::MATE_THRESHOLD {
            let plies_to_mate = Self::MATE_SCORE - val;
            let moves_to_mate = (plies_to_mate + 1) / 2;
            write!(f, "M{moves_to_mate}")
        } else {
            write!(f, "{:.2}", val as f64 / 100.0)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negation_flips_sign() {
        assert_eq!(-Score(150), Score(-150));
    }

    #[test]
    fn mate_scores_closer_to_root_are_larger_in_magnitude() {
        assert!(Score::mated_in(1).get() < Score::mated_in(5).get());
    }

    #[test]
    fn ordinary_scores_are_not_mate() {
        assert!(!Score(900).is_mate());
        assert!(Score::mated_in(3).is_mate());
    }

    #[test]
    fn mate_ply_shift_round_trips() {
        let stored = Score::mated_in(2).sub_plies_for_mate(5);
        assert_eq!(stored.add_plies_for_mate(5), Score::mated_in(2));
    }

    #[test]
    fn display_formats_mate_scores() {
        assert_eq!(format!("{}", Score::mated_in(4)), "-M2");
    }
}
