use tafl_core::board::Move;

/// Two killer-move slots per ply: quiet moves that caused a beta cutoff
/// elsewhere at the same depth are tried early, since siblings often share
/// refutations.
#[derive(Default)]
pub struct KillerTable {
    buckets: [KillerBucket; 64],
}

#[derive(Default, Clone, Copy)]
struct KillerBucket {
    killers: [Option<Move>; 2],
}

impl KillerTable {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn store(&mut self, ply: u32, m: Move) {
        if let Some(bucket) = self.buckets.get_mut(ply as usize) {
            bucket.store(m);
        }
    }

    pub fn slot(&self, ply: u32, slot: usize) -> Option<Move> {
        self.buckets.get(ply as usize).and_then(|b| b.killers[slot])
    }
}

impl KillerBucket {
    fn store(&mut self, m: Move) {
        if self.killers[0] == Some(m) {
            return;
        }
        self.killers[1] = self.killers[0];
        self.killers[0] = Some(m);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use tafl_core::board::Square;

    #[test]
    fn stores_most_recent_killer_in_slot_zero() {
        let mut table = KillerTable::default();
        let a = Move::quiet(Square::E2, Square::E4);
        let b = Move::quiet(Square::D2, Square::D4);

        table.store(3, a);
        table.store(3, b);

        assert_eq!(table.slot(3, 0), Some(b));
        assert_eq!(table.slot(3, 1), Some(a));
    }

    #[test]
    fn storing_the_same_move_again_does_not_duplicate_it() {
        let mut table = KillerTable::default();
        let a = Move::quiet(Square::E2, Square::E4);

        table.store(1, a);
        table.store(1, a);

        assert_eq!(table.slot(1, 0), Some(a));
        assert_eq!(table.slot(1, 1), None);
    }
}
