//! Leaf-counted move-tree enumeration, used to validate move generation and
//! make/unmake against known reference counts.

use crate::{board::Position, move_gen};

/// Counts the leaf nodes of the legal move tree rooted at `position`, to the
/// given `depth`.
pub fn perft(position: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = move_gen::generate_legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for m in moves {
        let undo = position.make_move(m).expect("legal move always applies");
        nodes += perft(position, depth - 1);
        position.unmake_move(m, undo);
    }
    nodes
}

/// Like [`perft`], but returns the per-root-move breakdown alongside the
/// total, for `divide`-style debugging output.
pub fn divide(position: &mut Position, depth: u32) -> (Vec<(crate::board::Move, u64)>, u64) {
    let moves = move_gen::generate_legal_moves(position);

    let mut breakdown = Vec::with_capacity(moves.len());
    let mut total = 0;
    for m in moves {
        let undo = position.make_move(m).expect("legal move always applies");
        let count = if depth == 0 { 1 } else { perft(position, depth - 1) };
        position.unmake_move(m, undo);

        breakdown.push((m, count));
        total += count;
    }

    (breakdown, total)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::STARTING_POSITION_FEN;

    #[test]
    fn starting_position_perft_1_to_4() {
        let mut position = Position::from_fen(STARTING_POSITION_FEN).unwrap();
        assert_eq!(perft(&mut position, 1), 20);
        assert_eq!(perft(&mut position, 2), 400);
        assert_eq!(perft(&mut position, 3), 8_902);
        assert_eq!(perft(&mut position, 4), 197_281);
    }

    #[test]
    fn kiwipete_perft_2() {
        let mut position =
            Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
                .unwrap();
        assert_eq!(perft(&mut position, 1), 48);
        assert_eq!(perft(&mut position, 2), 2_039);
    }

    #[test]
    fn perft_zero_is_one() {
        let mut position = Position::starting_position();
        assert_eq!(perft(&mut position, 0), 1);
    }
}
