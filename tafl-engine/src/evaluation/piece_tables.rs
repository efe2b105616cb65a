use tafl_core::board::PieceType;

#[rustfmt::skip]
mod tables {
    // Janky macro to flip the order of the rows, because we'd like the rows to
    // match the chessboard from our perspective, but index 0 (top-left) is
    // actually a1 (bottom-left) in our square representation.
    macro_rules! flipped_8 {
        ($($remaining:expr),* $(,)?) => {
            flipped_8![$($remaining),* , ;]
        };
        (
            $a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr, $h:expr,
            $($remaining:expr,)*
            ;
            $($rest:expr,)*
        ) => {
            flipped_8![
                $($remaining,)*
                ;
                $a, $b, $c, $d, $e, $f, $g, $h,
                $($rest,)*
            ]
        };
        (; $($rest:expr,)*) => {
            [$($rest,)*]
        };
    }

    // Pawn and knight shapes are kept from the original reference evaluator;
    // bishop/rook/queen/king tables are supplemented from the teacher's own
    // piece_tables.rs, scaled down by a factor of 10 to sit on the same
    // material scale as this evaluator's P=100 convention.
    pub const PAWN: [i32; 64] = flipped_8![
          0,  0,  0,  0,  0,  0,  0,  0,
         50, 50, 50, 50, 50, 50, 50, 50,
         10, 10, 20, 30, 30, 20, 10, 10,
          5,  5, 10, 25, 25, 10,  5,  5,
          0,  0,  0, 20, 20,  0,  0,  0,
          5, -5,-10,  0,  0,-10, -5,  5,
          5, 10, 10,-20,-20, 10, 10,  5,
          0,  0,  0,  0,  0,  0,  0,  0,
    ];

    pub const KNIGHT: [i32; 64] = flipped_8![
        -50,-40,-30,-30,-30,-30,-40,-50,
        -40,-20,  0,  0,  0,  0,-20,-40,
        -30,  0, 10, 15, 15, 10,  0,-30,
        -30,  5, 15, 20, 20, 15,  5,-30,
        -30,  0, 15, 20, 20, 15,  0,-30,
        -30,  5, 10, 15, 15, 10,  5,-30,
        -40,-20,  0,  5,  5,  0,-20,-40,
        -50,-40,-30,-30,-30,-30,-40,-50,
    ];

    pub const BISHOP: [i32; 64] = flipped_8![
        -20,-10,-10,-10,-10,-10,-10,-20,
        -10,  0,  0,  0,  0,  0,  0,-10,
        -10,  0,  5, 10, 10,  5,  0,-10,
        -10,  5,  5, 10, 10,  5,  5,-10,
        -10,  0, 10, 10, 10, 10,  0,-10,
        -10, 10, 10, 10, 10, 10, 10,-10,
        -10,  5,  0,  0,  0,  0,  5,-10,
        -20,-10,-10,-10,-10,-10,-10,-20,
    ];

    pub const ROOK: [i32; 64] = flipped_8![
          0,  0,  0,  0,  0,  0,  0,  0,
          5, 10, 10, 10, 10, 10, 10,  5,
         -5,  0,  0,  0,  0,  0,  0, -5,
         -5,  0,  0,  0,  0,  0,  0, -5,
         -5,  0,  0,  0,  0,  0,  0, -5,
         -5,  0,  0,  0,  0,  0,  0, -5,
         -5,  0,  0,  0,  0,  0,  0, -5,
          0,  0,  0,  5,  5,  0,  0,  0,
    ];

    pub const QUEEN: [i32; 64] = flipped_8![
        -20,-10,-10, -5, -5,-10,-10,-20,
        -10,  0,  0,  0,  0,  0,  0,-10,
        -10,  0,  5,  5,  5,  5,  0,-10,
         -5,  0,  5,  5,  5,  5,  0, -5,
          0,  0,  5,  5,  5,  5,  0, -5,
        -10,  5,  5,  5,  5,  5,  0,-10,
        -10,  0,  5,  0,  0,  0,  0,-10,
        -20,-10,-10, -5, -5,-10,-10,-20,
    ];

    pub const KING_MIDDLE_GAME: [i32; 64] = flipped_8![
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -20,-30,-30,-40,-40,-30,-30,-20,
        -10,-20,-20,-20,-20,-20,-20,-10,
         20, 20,  0,  0,  0,  0, 20, 20,
         20, 30, 10,  0,  0, 10, 30, 20,
    ];

    pub const KING_END_GAME: [i32; 64] = flipped_8![
        -50,-40,-30,-20,-20,-30,-40,-50,
        -30,-20,-10,  0,  0,-10,-20,-30,
        -30,-10, 20, 30, 30, 20,-10,-30,
        -30,-10, 30, 40, 40, 30,-10,-30,
        -30,-10, 30, 40, 40, 30,-10,-30,
        -30,-10, 20, 30, 30, 20,-10,-30,
        -30,-30,  0,  0,  0,  0,-30,-30,
        -50,-30,-30,-30,-30,-30,-30,-50,
    ];
}

pub const fn material_score(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 100,
        PieceType::Knight => 320,
        PieceType::Bishop => 330,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 0,
    }
}

/// Returns the `(middlegame, endgame)` piece-square value for `piece_type`
/// at `index` (already adjusted for color: callers pass `square.index()` for
/// white and `square.index() ^ 56` for black).
pub fn piece_square_value(piece_type: PieceType, index: usize) -> (i32, i32) {
    match piece_type {
        PieceType::Pawn => (tables::PAWN[index], tables::PAWN[index]),
        PieceType::Knight => (tables::KNIGHT[index], tables::KNIGHT[index]),
        PieceType::Bishop => (tables::BISHOP[index], tables::BISHOP[index]),
        PieceType::Rook => (tables::ROOK[index], tables::ROOK[index]),
        PieceType::Queen => (tables::QUEEN[index], tables::QUEEN[index]),
        PieceType::King => (tables::KING_MIDDLE_GAME[index], tables::KING_END_GAME[index]),
    }
}

/// Phase weight contributed by one piece of `piece_type`, used to compute
/// `phase = min(24, 4*Q + 2*R + 1*B + 1*N)` over both sides.
pub const fn phase_weight(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Knight | PieceType::Bishop => 1,
        PieceType::Rook => 2,
        PieceType::Queen => 4,
        PieceType::Pawn | PieceType::King => 0,
    }
}
