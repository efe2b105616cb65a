use tafl_core::board::{Color, Move};

/// Quiet-move history heuristic, indexed by side to move, origin, and
/// destination square -- grounded on the teacher's own history table, but
/// keyed on `[from][to]` rather than `[piece][to]` since the base
/// specification defines the bonus in those terms.
pub struct HistoryTable {
    table: [[[i32; 64]; 64]; 2],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self {
            table: [[[0; 64]; 64]; 2],
        }
    }
}

impl HistoryTable {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, side: Color, m: Move) -> i32 {
        self.table[side.index()][m.from_square().index()][m.to_square().index()]
    }

    pub fn add_bonus(&mut self, side: Color, m: Move, bonus: i32) {
        self.table[side.index()][m.from_square().index()][m.to_square().index()] += bonus;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use tafl_core::board::Square;

    #[test]
    fn bonuses_accumulate_per_side_and_squares() {
        let mut table = HistoryTable::default();
        let m = Move::quiet(Square::E2, Square::E4);

        table.add_bonus(Color::White, m, 16);
        table.add_bonus(Color::White, m, 9);

        assert_eq!(table.get(Color::White, m), 25);
        assert_eq!(table.get(Color::Black, m), 0);
    }
}
