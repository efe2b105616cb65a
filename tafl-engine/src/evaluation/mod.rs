pub mod piece_tables;

use tafl_core::board::{Color, Position, Square};

use crate::score::Score;
use piece_tables::{material_score, phase_weight, piece_square_value};

/// Highest possible phase weight; reached once both sides still have their
/// full complement of minor/major pieces.
const MAX_PHASE: i32 = 24;

/// Static evaluation of `position`, in centipawns from White's perspective.
///
/// Deterministic and side-effect free: the same position always returns the
/// same score.
pub fn evaluate(position: &Position) -> Score {
    let mut material = 0;
    let mut middlegame_pst = 0;
    let mut endgame_pst = 0;
    let mut phase = 0;

    for square in Square::all() {
        let piece = position.piece_at(square);
        let Some(color) = piece.color() else {
            continue;
        };
        let piece_type = piece.piece_type().expect("non-empty piece has a type");
        let sign = match color {
            Color::White => 1,
            Color::Black => -1,
        };

        material += material_score(piece_type) * sign;
        phase += phase_weight(piece_type);

        let index = match color {
            Color::White => square.index(),
            Color::Black => square.index() ^ 56,
        };
        let (mg, eg) = piece_square_value(piece_type, index);
        middlegame_pst += mg * sign;
        endgame_pst += eg * sign;
    }

    let phase = phase.min(MAX_PHASE);
    let endgame_weight = (MAX_PHASE - phase) * 256 / MAX_PHASE;
    let middlegame_weight = 256 - endgame_weight;
    let tapered_pst = (middlegame_pst * middlegame_weight + endgame_pst * endgame_weight) / 256;

    Score(material + tapered_pst)
}
