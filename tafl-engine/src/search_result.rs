use tafl_core::board::Move;

use crate::score::Score;

/// Outcome of a (possibly time-limited) search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Move>,
    pub score: Score,
    pub nodes: u64,
    pub depth_done: u32,
    pub timed_out: bool,
}
