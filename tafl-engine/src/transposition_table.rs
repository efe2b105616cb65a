use tafl_core::board::Move;

use crate::score::Score;

/// How a stored score relates to the search window it was found with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranspositionEntry {
    pub key: u64,
    pub depth: u32,
    pub bound: Bound,
    pub score: Score,
    pub best_move: Option<Move>,
}

/// A fixed 2^20-entry, direct-mapped transposition table.
///
/// Unlike the teacher's bucketed, zerocopy-backed table (four ways per
/// 64-byte-aligned bucket, keyed by a truncated 16-bit tag), this is a plain
/// `Vec` of one entry per slot: simpler, and the base specification fixes
/// both the size and the "replace if new depth >= stored depth" policy as
/// observable behavior, so there's no room left for a fancier replacement
/// scheme to add value.
pub struct TranspositionTable {
    entries: Vec<Option<TranspositionEntry>>,
    mask: usize,
}

impl TranspositionTable {
    pub const SIZE: usize = 1 << 20;

    pub fn new() -> Self {
        Self {
            entries: vec![None; Self::SIZE],
            mask: Self::SIZE - 1,
        }
    }

    fn index(&self, key: u64) -> usize {
        key as usize & self.mask
    }

    pub fn probe(&self, key: u64) -> Option<TranspositionEntry> {
        self.entries[self.index(key)].filter(|entry| entry.key == key)
    }

    pub fn store(&mut self, entry: TranspositionEntry) {
        let index = self.index(entry.key);
        let replace = match &self.entries[index] {
            Some(existing) => entry.depth >= existing.depth,
            None => true,
        };
        if replace {
            self.entries[index] = Some(entry);
        }
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(key: u64, depth: u32) -> TranspositionEntry {
        TranspositionEntry {
            key,
            depth,
            bound: Bound::Exact,
            score: Score(0),
            best_move: None,
        }
    }

    #[test]
    fn round_trips_a_stored_entry() {
        let mut tt = TranspositionTable::new();
        tt.store(entry(42, 3));
        assert_eq!(tt.probe(42), Some(entry(42, 3)));
    }

    #[test]
    fn probe_misses_on_key_collision_at_the_same_slot() {
        let mut tt = TranspositionTable::new();
        let other_key = 42 + TranspositionTable::SIZE as u64;
        tt.store(entry(42, 3));
        tt.store(entry(other_key, 3));
        assert_eq!(tt.probe(42), None);
        assert_eq!(tt.probe(other_key), Some(entry(other_key, 3)));
    }

    #[test]
    fn shallower_depth_does_not_replace_deeper_entry() {
        let mut tt = TranspositionTable::new();
        tt.store(entry(7, 5));
        tt.store(entry(7, 2));
        assert_eq!(tt.probe(7), Some(entry(7, 5)));
    }

    #[test]
    fn equal_depth_does_replace() {
        let mut tt = TranspositionTable::new();
        tt.store(entry(7, 5));
        tt.store(TranspositionEntry {
            bound: Bound::Lower,
            ..entry(7, 5)
        });
        assert_eq!(tt.probe(7).unwrap().bound, Bound::Lower);
    }

    #[test]
    fn clear_empties_all_slots() {
        let mut tt = TranspositionTable::new();
        tt.store(entry(7, 5));
        tt.clear();
        assert_eq!(tt.probe(7), None);
    }
}
