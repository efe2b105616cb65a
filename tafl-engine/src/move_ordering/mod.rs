//! Move ordering: cheap per-move scores used to sort each node's move list
//! so that alpha-beta prunes as much of the tree as possible.

mod history_table;
mod killer_table;

pub use history_table::HistoryTable;
pub use killer_table::KillerTable;

use tafl_core::board::{Color, Move, PieceType, Position};

const TT_MOVE_SCORE: i32 = 2_000_000_000;
const PROMOTION_BASE_SCORE: i32 = 1_000_000;
const CAPTURE_BASE_SCORE: i32 = 900_000;
const KILLER_SLOT_0_SCORE: i32 = 800_000;
const KILLER_SLOT_1_SCORE: i32 = 790_000;

/// Sorts `moves` descending by [`score_move`]. Relies on the standard
/// library's documented stable sort so that move-generation order breaks
/// ties deterministically.
pub fn order_moves(
    moves: &mut [Move],
    position: &Position,
    tt_move: Option<Move>,
    ply: u32,
    killers: &KillerTable,
    history: &HistoryTable,
) {
    moves.sort_by_key(|&m| -score_move(m, position, tt_move, ply, killers, history));
}

pub fn score_move(
    m: Move,
    position: &Position,
    tt_move: Option<Move>,
    ply: u32,
    killers: &KillerTable,
    history: &HistoryTable,
) -> i32 {
    if Some(m) == tt_move {
        return TT_MOVE_SCORE;
    }

    if let Some(promo) = m.promotion_piece() {
        return PROMOTION_BASE_SCORE + promo.ordering_value();
    }

    if m.is_capture() {
        let attacker = position
            .piece_at(m.from_square())
            .piece_type()
            .expect("mover is never empty");
        let victim_type = if m.is_en_passant() {
            PieceType::Pawn
        } else {
            position
                .piece_at(m.to_square())
                .piece_type()
                .expect("capture target is never empty")
        };
        return CAPTURE_BASE_SCORE + 10 * victim_type.ordering_value() - attacker.ordering_value();
    }

    if killers.slot(ply, 0) == Some(m) {
        return KILLER_SLOT_0_SCORE;
    }
    if killers.slot(ply, 1) == Some(m) {
        return KILLER_SLOT_1_SCORE;
    }

    history.get(position.side_to_move(), m)
}

/// Records a quiet move that caused a beta cutoff: promoted to killer slot
/// 0, and its history bonus bumped by `depth^2`.
pub fn record_cutoff(
    m: Move,
    side: Color,
    depth: u32,
    ply: u32,
    killers: &mut KillerTable,
    history: &mut HistoryTable,
) {
    if m.is_quiet() {
        killers.store(ply, m);
        history.add_bonus(side, m, (depth * depth) as i32);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use tafl_core::board::Square;

    #[test]
    fn tt_move_sorts_first() {
        let position = Position::starting_position();
        let tt_move = Move::quiet(Square::D2, Square::D4);
        let mut moves = vec![Move::quiet(Square::E2, Square::E4), tt_move];

        order_moves(
            &mut moves,
            &position,
            Some(tt_move),
            0,
            &KillerTable::default(),
            &HistoryTable::default(),
        );

        assert_eq!(moves[0], tt_move);
    }

    #[test]
    fn captures_outrank_quiet_killer_moves() {
        let position = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let capture = Move::capture(Square::E4, Square::D5);
        let quiet = Move::quiet(Square::E1, Square::D1);

        let mut killers = KillerTable::default();
        killers.store(0, quiet);

        let mut moves = vec![quiet, capture];
        order_moves(&mut moves, &position, None, 0, &killers, &HistoryTable::default());

        assert_eq!(moves[0], capture);
    }

    #[test]
    fn record_cutoff_ignores_captures() {
        let mut killers = KillerTable::default();
        let mut history = HistoryTable::default();
        let capture = Move::capture(Square::E4, Square::D5);

        record_cutoff(capture, Color::White, 4, 0, &mut killers, &mut history);

        assert_eq!(killers.slot(0, 0), None);
    }

    #[test]
    fn promotion_outranks_plain_capture() {
        let position = Position::from_fen("4k3/P6p/8/8/8/8/8/4K2R w - - 0 1").unwrap();
        let promo = Move::promotion(Square::A7, Square::A8, PieceType::Queen, false);
        let capture = Move::capture(Square::H1, Square::H7);

        assert!(
            score_move(promo, &position, None, 0, &KillerTable::default(), &HistoryTable::default())
                > score_move(
                    capture,
                    &position,
                    None,
                    0,
                    &KillerTable::default(),
                    &HistoryTable::default()
                )
        );
    }
}
