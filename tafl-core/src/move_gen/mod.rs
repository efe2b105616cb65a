//! Move generation.
//!
//! Pseudo-legal moves are generated per piece kind, then filtered down to
//! legal moves by trial: make each one on a scratch copy of the position,
//! keep it if the mover isn't left in check. This is the naive algorithm --
//! no pin or check masks are precomputed -- traded deliberately for
//! simplicity over the bitboard-era generator's precomputed-mask approach.

use arrayvec::ArrayVec;

use crate::board::{Castling, Color, Move, Piece, PieceType, Position, Square};

/// Maximum number of moves that could occur in a legal position, used for
/// stack-allocating a vector to hold moves.
pub const MAX_MOVES: usize = 256;

pub type MoveVec = ArrayVec<Move, MAX_MOVES>;

/// Promotion order used whenever a pawn push or capture reaches the back
/// rank: queen first, then the underpromotion choices.
const POSSIBLE_PROMOTIONS: &[PieceType] = &[
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

fn try_square(rank: i8, file: i8) -> Option<Square> {
    if (0..8).contains(&rank) && (0..8).contains(&file) {
        Square::new(rank as u8, file as u8)
    } else {
        None
    }
}

/// Appends every pseudo-legal move for the side to move onto `out`, in the
/// fixed order pawns, knights, bishops, rooks, queens, king.
pub fn generate_pseudo_legal_moves(position: &Position, out: &mut MoveVec) {
    let us = position.side_to_move();
    gen_pawn_moves(position, us, out);
    gen_step_moves(position, us, Piece::knight(us), &KNIGHT_DELTAS, out);
    gen_sliding_moves(position, us, PieceType::Bishop, &DIAGONAL_DIRS, out);
    gen_sliding_moves(position, us, PieceType::Rook, &ORTHOGONAL_DIRS, out);
    gen_sliding_moves(position, us, PieceType::Queen, &ALL_DIRS, out);
    gen_step_moves(position, us, Piece::king(us), &KING_DELTAS, out);
    gen_castling_moves(position, us, out);
}

/// Filters pseudo-legal moves down to legal ones by trial make/unmake on a
/// scratch copy of `position`.
pub fn generate_legal_moves(position: &Position) -> MoveVec {
    let mut pseudo = MoveVec::new();
    generate_pseudo_legal_moves(position, &mut pseudo);

    let us = position.side_to_move();
    let mut scratch = position.clone();
    let mut legal = MoveVec::new();
    for m in pseudo {
        let Ok(undo) = scratch.make_move(m) else {
            continue;
        };
        if !scratch.in_check(us) {
            legal.push(m);
        }
        scratch.unmake_move(m, undo);
    }
    legal
}

fn gen_pawn_moves(position: &Position, us: Color, out: &mut MoveVec) {
    let pawn = Piece::pawn(us);
    let rank_dir: i8 = if us.is_white() { 1 } else { -1 };
    let start_rank: u8 = if us.is_white() { 1 } else { 6 };
    let promo_rank: u8 = if us.is_white() { 7 } else { 0 };

    for from in Square::all() {
        if position.piece_at(from) != pawn {
            continue;
        }
        let rank = from.rank() as i8;
        let file = from.file() as i8;

        if let Some(one_step) = try_square(rank + rank_dir, file) {
            if position.piece_at(one_step).is_empty() {
                push_pawn_move(out, from, one_step, promo_rank, false);

                if from.rank() == start_rank {
                    if let Some(two_step) = try_square(rank + 2 * rank_dir, file) {
                        if position.piece_at(two_step).is_empty() {
                            out.push(Move::quiet(from, two_step));
                        }
                    }
                }
            }
        }

        for file_delta in [-1i8, 1i8] {
            let Some(to) = try_square(rank + rank_dir, file + file_delta) else {
                continue;
            };
            let target = position.piece_at(to);
            if target.color() == Some(us.flip()) {
                push_pawn_move(out, from, to, promo_rank, true);
            } else if target.is_empty() && position.en_passant_square() == Some(to) {
                out.push(Move::en_passant(from, to));
            }
        }
    }
}

fn push_pawn_move(out: &mut MoveVec, from: Square, to: Square, promo_rank: u8, is_capture: bool) {
    if to.rank() == promo_rank {
        for &promo in POSSIBLE_PROMOTIONS {
            out.push(Move::promotion(from, to, promo, is_capture));
        }
    } else if is_capture {
        out.push(Move::capture(from, to));
    } else {
        out.push(Move::quiet(from, to));
    }
}

fn gen_step_moves(position: &Position, us: Color, piece: Piece, deltas: &[(i8, i8)], out: &mut MoveVec) {
    for from in Square::all() {
        if position.piece_at(from) != piece {
            continue;
        }
        let rank = from.rank() as i8;
        let file = from.file() as i8;
        for &(dr, df) in deltas {
            let Some(to) = try_square(rank + dr, file + df) else {
                continue;
            };
            let target = position.piece_at(to);
            if target.is_empty() {
                out.push(Move::quiet(from, to));
            } else if target.color() == Some(us.flip()) {
                out.push(Move::capture(from, to));
            }
        }
    }
}

fn gen_sliding_moves(
    position: &Position,
    us: Color,
    piece_type: PieceType,
    dirs: &[(i8, i8)],
    out: &mut MoveVec,
) {
    let piece = Piece::new(us, piece_type);
    for from in Square::all() {
        if position.piece_at(from) != piece {
            continue;
        }
        for &(dr, df) in dirs {
            let mut rank = from.rank() as i8;
            let mut file = from.file() as i8;
            loop {
                rank += dr;
                file += df;
                let Some(to) = try_square(rank, file) else {
                    break;
                };
                let target = position.piece_at(to);
                if target.is_empty() {
                    out.push(Move::quiet(from, to));
                    continue;
                }
                if target.color() == Some(us.flip()) {
                    out.push(Move::capture(from, to));
                }
                break;
            }
        }
    }
}

fn gen_castling_moves(position: &Position, us: Color, out: &mut MoveVec) {
    let rank = match us {
        Color::White => 0u8,
        Color::Black => 7u8,
    };
    let king_home = Square::new_unchecked(rank, 4);
    if position.piece_at(king_home) != Piece::king(us) {
        return;
    }

    if position.in_check(us) {
        return;
    }

    let them = us.flip();
    let (kingside_right, queenside_right) = match us {
        Color::White => (Castling::WHITE_KINGSIDE, Castling::WHITE_QUEENSIDE),
        Color::Black => (Castling::BLACK_KINGSIDE, Castling::BLACK_QUEENSIDE),
    };

    if position.castling_rights().contains(kingside_right) {
        let f = Square::new_unchecked(rank, 5);
        let g = Square::new_unchecked(rank, 6);
        if position.piece_at(f).is_empty()
            && position.piece_at(g).is_empty()
            && !position.is_square_attacked(f, them)
            && !position.is_square_attacked(g, them)
        {
            out.push(Move::castle(king_home, g));
        }
    }

    if position.castling_rights().contains(queenside_right) {
        let d = Square::new_unchecked(rank, 3);
        let c = Square::new_unchecked(rank, 2);
        let b = Square::new_unchecked(rank, 1);
        if position.piece_at(b).is_empty()
            && position.piece_at(c).is_empty()
            && position.piece_at(d).is_empty()
            && !position.is_square_attacked(d, them)
            && !position.is_square_attacked(c, them)
        {
            out.push(Move::castle(king_home, c));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Position;

    fn legal(fen: &str) -> MoveVec {
        generate_legal_moves(&Position::from_fen(fen).unwrap())
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        assert_eq!(legal(crate::board::STARTING_POSITION_FEN).len(), 20);
    }

    #[test]
    fn promotion_expands_to_four_moves() {
        let moves = legal("8/P6k/8/8/8/8/7K/8 w - - 0 1");
        let promos: Vec<_> = moves
            .iter()
            .filter(|m| m.from_square() == Square::A7)
            .collect();
        assert_eq!(promos.len(), 4);
        assert_eq!(promos[0].promotion_piece(), Some(PieceType::Queen));
        assert_eq!(promos[1].promotion_piece(), Some(PieceType::Rook));
        assert_eq!(promos[2].promotion_piece(), Some(PieceType::Bishop));
        assert_eq!(promos[3].promotion_piece(), Some(PieceType::Knight));
    }

    #[test]
    fn en_passant_capture_is_generated() {
        let moves = legal("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        assert!(moves
            .iter()
            .any(|m| m.is_en_passant() && m.from_square() == Square::E5 && m.to_square() == Square::D6));
    }

    #[test]
    fn castling_blocked_by_attacked_crossing_square() {
        let moves = legal("r3k2r/8/5r2/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(!moves
            .iter()
            .any(|m| m.is_castle() && m.to_square() == Square::G1));
        assert!(moves
            .iter()
            .any(|m| m.is_castle() && m.to_square() == Square::C1));
    }

    #[test]
    fn king_in_check_must_resolve_it() {
        let moves = legal("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");
        assert!(moves.iter().all(|m| m.from_square() == Square::E1));
    }

    #[test]
    fn stalemate_has_no_legal_moves() {
        assert!(legal("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").is_empty());
    }

    #[test]
    fn pseudo_legal_generation_does_not_panic_without_a_king() {
        // Reachable from quiescence search, which plays pseudo-legal
        // captures (including of a king) without a legality filter: the
        // king-less side still generates moves for everything else.
        let position = Position::from_fen("8/8/8/8/8/8/8/R6R w KQ - 0 1").unwrap();
        let mut out = MoveVec::new();
        generate_pseudo_legal_moves(&position, &mut out);
        assert!(!out.iter().any(|m| m.is_castle()));
    }
}
