//! Iterative-deepening negamax search with alpha-beta pruning, quiescence,
//! and a transposition table.

use std::time::{Duration, Instant};

use tafl_core::board::{Color, Move, Position};
use tafl_core::move_gen::{self, MoveVec};

use crate::{
    diag,
    evaluation::evaluate,
    move_ordering::{self, HistoryTable, KillerTable},
    score::Score,
    search_result::SearchResult,
    transposition_table::{Bound, TranspositionEntry, TranspositionTable},
};

/// In practice a search should never reach this depth; it just avoids
/// pathological recursion if something upstream miscounts.
const MAX_SEARCH_DEPTH: u32 = 256;

/// Checking the wall clock on every node is wasteful; batching the check
/// behind a node-count gate avoids most of the syscall cost.
const NODE_CHECK_INTERVAL: u64 = 2048;

struct Deadline {
    start: Instant,
    budget: Option<Duration>,
    stopped: bool,
}

impl Deadline {
    fn unbounded() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
            stopped: false,
        }
    }

    fn timed(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
            stopped: false,
        }
    }

    fn poll(&mut self, nodes: u64) -> bool {
        if self.stopped {
            return true;
        }
        let Some(budget) = self.budget else {
            return false;
        };
        if nodes % NODE_CHECK_INTERVAL != 0 {
            return false;
        }
        self.stopped = self.start.elapsed() >= budget;
        self.stopped
    }
}

/// Owns the state that should persist across moves within a game: the
/// transposition table. Killer and history tables are cleared at the start
/// of every search since they're cheap to rebuild and ply-indexed state
/// from a previous, unrelated search tree isn't useful.
pub struct SearchContext {
    tt: TranspositionTable,
    killers: KillerTable,
    history: HistoryTable,
    nodes: u64,
    deadline: Deadline,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            tt: TranspositionTable::new(),
            killers: KillerTable::default(),
            history: HistoryTable::default(),
            nodes: 0,
            deadline: Deadline::unbounded(),
        }
    }

    pub fn clear_table(&mut self) {
        self.tt.clear();
    }

    /// Fixed-depth root search; never times out.
    pub fn find_best_move(&mut self, position: &mut Position, depth: u32) -> SearchResult {
        self.killers.clear();
        self.history.clear();
        self.nodes = 0;
        self.deadline = Deadline::unbounded();
        self.iterative_deepening(position, depth.max(1))
    }

    /// Iterative deepening from depth 1 up to `max_depth`, stopping once
    /// `time_ms` milliseconds have elapsed. The last fully-completed
    /// iteration's result is returned; a deadline firing mid-iteration
    /// discards that iteration's result entirely.
    pub fn find_best_move_timed(
        &mut self,
        position: &mut Position,
        max_depth: u32,
        time_ms: u64,
    ) -> SearchResult {
        self.killers.clear();
        self.history.clear();
        self.nodes = 0;
        self.deadline = Deadline::timed(Duration::from_millis(time_ms));
        self.iterative_deepening(position, max_depth.max(1))
    }

    fn iterative_deepening(&mut self, position: &mut Position, max_depth: u32) -> SearchResult {
        let root_moves = move_gen::generate_legal_moves(position);

        let mut best_move = root_moves.first().copied();
        let mut best_score = Score::DRAW;
        let mut pv_move = best_move;
        let mut depth_done = 0;

        for depth in 1..=max_depth.min(MAX_SEARCH_DEPTH) {
            let (score, m, completed) = self.search_root(position, depth, pv_move);

            if !completed {
                break;
            }

            best_score = score;
            if m.is_some() {
                best_move = m;
                pv_move = m;
            }
            depth_done = depth;
            diag!("completed depth={depth} score={score} nodes={}", self.nodes);

            if best_score.is_mate() || self.deadline.poll(self.nodes) {
                break;
            }
        }

        SearchResult {
            best: best_move,
            score: best_score,
            nodes: self.nodes,
            depth_done,
            timed_out: depth_done < max_depth,
        }
    }

    fn search_root(
        &mut self,
        position: &mut Position,
        depth: u32,
        tt_move: Option<Move>,
    ) -> (Score, Option<Move>, bool) {
        let mut moves = move_gen::generate_legal_moves(position);
        if moves.is_empty() {
            return (Score::DRAW, None, true);
        }

        move_ordering::order_moves(&mut moves, position, tt_move, 0, &self.killers, &self.history);

        let mut alpha = -Score::INF;
        let beta = Score::INF;
        let mut best_move = None;

        for m in moves {
            let undo = position.make_move(m).expect("legal move always applies");
            let score = -self.negamax(position, depth - 1, 1, -beta, -alpha);
            position.unmake_move(m, undo);

            if self.deadline.stopped {
                return (alpha, best_move, false);
            }

            if score > alpha {
                alpha = score;
                best_move = Some(m);
            }
        }

        (alpha, best_move, true)
    }

    fn negamax(
        &mut self,
        position: &mut Position,
        depth: u32,
        ply: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;
        if self.deadline.poll(self.nodes) {
            return alpha;
        }

        let key = position.zobrist_hash();
        let alpha_orig = alpha;
        let mut tt_move = None;

        if let Some(entry) = self.tt.probe(key) {
            diag!("TT hit at ply={ply} depth={depth} entry={:?}", entry);
            tt_move = entry.best_move;

            if entry.depth >= depth {
                let score = entry.score.add_plies_for_mate(ply);
                match entry.bound {
                    Bound::Exact => return score,
                    Bound::Lower => {
                        if score >= beta {
                            return score;
                        }
                        alpha = alpha.max(score);
                    }
                    Bound::Upper => {
                        if score <= alpha {
                            return score;
                        }
                        beta = beta.min(score);
                    }
                }

                if alpha >= beta {
                    return score;
                }
            }
        }

        let mut moves = move_gen::generate_legal_moves(position);
        if moves.is_empty() {
            return if position.in_check(position.side_to_move()) {
                Score::mated_in(ply)
            } else {
                Score::DRAW
            };
        }

        if depth == 0 {
            return self.quiescence(position, ply, alpha, beta);
        }

        move_ordering::order_moves(&mut moves, position, tt_move, ply, &self.killers, &self.history);

        let mut best_move = None;
        let mut best_score = -Score::INF;

        for m in moves {
            let undo = position.make_move(m).expect("legal move always applies");
            let score = -self.negamax(position, depth - 1, ply + 1, -beta, -alpha);
            position.unmake_move(m, undo);

            if score > best_score {
                best_score = score;
                best_move = Some(m);
            }
            if best_score > alpha {
                alpha = best_score;
            }
            if alpha >= beta {
                move_ordering::record_cutoff(
                    m,
                    position.side_to_move(),
                    depth,
                    ply,
                    &mut self.killers,
                    &mut self.history,
                );
                break;
            }
        }

        let bound = if best_score <= alpha_orig {
            Bound::Upper
        } else if best_score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };

        self.tt.store(TranspositionEntry {
            key,
            depth,
            bound,
            score: best_score.sub_plies_for_mate(ply),
            best_move,
        });

        best_score
    }

    fn quiescence(
        &mut self,
        position: &mut Position,
        ply: u32,
        mut alpha: Score,
        beta: Score,
    ) -> Score {
        self.nodes += 1;

        let stand_pat = side_relative_eval(position);
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut pseudo_legal = MoveVec::new();
        move_gen::generate_pseudo_legal_moves(position, &mut pseudo_legal);

        let mut tactical: MoveVec = pseudo_legal.into_iter().filter(|m| m.is_tactical()).collect();
        move_ordering::order_moves(&mut tactical, position, None, ply, &self.killers, &self.history);

        for m in tactical {
            let undo = position
                .make_move(m)
                .expect("pseudo-legal move always applies to the board");
            let score = -self.quiescence(position, ply + 1, -beta, -alpha);
            position.unmake_move(m, undo);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

fn side_relative_eval(position: &Position) -> Score {
    let score = evaluate(position);
    match position.side_to_move() {
        Color::White => score,
        Color::Black => -score,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use tafl_core::board::Square;

    #[test]
    fn finds_mate_in_one() {
        let mut position = Position::from_fen("6k1/8/6K1/8/8/8/8/R7 w - - 0 1").unwrap();
        let mut ctx = SearchContext::new();

        let result = ctx.find_best_move(&mut position, 3);

        assert!(result.score.is_mate());
        assert_eq!(result.best, Some(Move::quiet(Square::A1, Square::A8)));
    }

    #[test]
    fn stalemate_scores_as_a_draw() {
        let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut ctx = SearchContext::new();

        let result = ctx.find_best_move(&mut position, 2);

        assert_eq!(result.score, Score::DRAW);
        assert_eq!(result.best, None);
    }

    #[test]
    fn deeper_search_does_not_blunder_a_free_queen() {
        let mut position = Position::from_fen("4k3/8/8/3q4/8/8/8/4K2R w - - 0 1").unwrap();
        let mut ctx = SearchContext::new();

        let result = ctx.find_best_move(&mut position, 4);

        assert!(result.best.is_some());
        assert!(result.score.get() <= 0);
    }

    #[test]
    fn node_count_is_positive_after_a_search() {
        let mut position = Position::starting_position();
        let mut ctx = SearchContext::new();

        let result = ctx.find_best_move(&mut position, 3);

        assert!(result.nodes > 0);
        assert_eq!(result.depth_done, 3);
        assert!(!result.timed_out);
    }

    #[test]
    fn quiescence_surviving_a_king_capture_does_not_panic() {
        // Quiescence orders captures by MVV-LVA without filtering king
        // safety, so a king capture can be the move actually played; the
        // king-less side must still generate moves (including castling
        // checks) on the next ply without panicking.
        let mut position =
            Position::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
        let mut ctx = SearchContext::new();

        let result = ctx.find_best_move(&mut position, 3);

        assert!(result.nodes > 0);
    }

    #[test]
    fn timed_search_reports_the_deadline() {
        let mut position = Position::starting_position();
        let mut ctx = SearchContext::new();

        let result = ctx.find_best_move_timed(&mut position, 64, 50);

        assert!(result.depth_done >= 1);
    }
}
