use thiserror::Error;

use super::{Castling, Color, Piece, Position, Square};

/// Errors that can occur while parsing a FEN string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FenParseError {
    #[error("expected 4-6 whitespace separated fields, found {0}")]
    WrongFieldCount(usize),
    #[error("expected 8 ranks in piece placement field, found {0}")]
    WrongRankCount(usize),
    #[error("invalid piece character {0:?}")]
    InvalidPieceChar(char),
    #[error("too many squares in rank")]
    RankOverflow,
    #[error("invalid side to move, expected 'w' or 'b'")]
    InvalidSideToMove,
    #[error("invalid castling rights field")]
    InvalidCastlingRights,
    #[error("invalid en passant square")]
    InvalidEnPassantSquare,
    #[error("invalid halfmove clock")]
    InvalidHalfmoveClock,
    #[error("invalid fullmove number")]
    InvalidFullmoveNumber,
}

pub fn position_to_fen(position: &Position) -> String {
    let mut result = String::new();

    for rank in (0..8).rev() {
        let mut empty_squares = 0;
        for file in 0..8 {
            let square = Square::new_unchecked(rank, file);
            let piece = position.piece_at(square);
            if piece.is_empty() {
                empty_squares += 1;
            } else {
                if empty_squares > 0 {
                    result.push((empty_squares + b'0') as char);
                }
                result.push(piece.as_fen_char());
                empty_squares = 0;
            }
        }
        if empty_squares > 0 {
            result.push((empty_squares + b'0') as char);
        }
        if rank > 0 {
            result.push('/');
        }
    }

    result.push(' ');
    result.push(if position.side_to_move().is_white() {
        'w'
    } else {
        'b'
    });
    result.push(' ');
    result.push_str(&position.castling_rights().as_fen_str());
    result.push(' ');
    match position.en_passant_square() {
        Some(square) => result.push_str(&square.to_string()),
        None => result.push('-'),
    }
    result.push(' ');
    result.push_str(&position.halfmove_clock().to_string());
    result.push(' ');
    result.push_str(&position.fullmove_number().to_string());

    result
}

pub fn try_parse_fen(fen: &str) -> Result<Position, FenParseError> {
    let fields: Vec<_> = fen.split_whitespace().collect();
    if fields.len() != 6 && fields.len() != 4 {
        return Err(FenParseError::WrongFieldCount(fields.len()));
    }

    let placement = fields[0];
    let side_to_move = fields[1];
    let castling = fields[2];
    let en_passant = fields[3];
    let halfmove_clock = fields.get(4).copied().unwrap_or("0");
    let fullmove_number = fields.get(5).copied().unwrap_or("1");

    let ranks: Vec<_> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenParseError::WrongRankCount(ranks.len()));
    }

    let mut board = [Piece::Empty; 64];
    for (rank_index, rank_pieces) in ranks.into_iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file = 0u8;
        for c in rank_pieces.chars() {
            if file >= 8 {
                return Err(FenParseError::RankOverflow);
            }
            if let Some(digit) = c.to_digit(10) {
                file += digit as u8;
            } else {
                let piece = Piece::try_from_fen_char(c).ok_or(FenParseError::InvalidPieceChar(c))?;
                let square = Square::new(rank, file).ok_or(FenParseError::RankOverflow)?;
                board[square.index()] = piece;
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenParseError::RankOverflow);
        }
    }

    let side_to_move = match side_to_move {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(FenParseError::InvalidSideToMove),
    };

    let castling_rights = if castling == "-" {
        Castling::empty()
    } else {
        let mut flags = Castling::empty();
        for c in castling.chars() {
            flags |= match c {
                'K' => Castling::WHITE_KINGSIDE,
                'Q' => Castling::WHITE_QUEENSIDE,
                'k' => Castling::BLACK_KINGSIDE,
                'q' => Castling::BLACK_QUEENSIDE,
                _ => return Err(FenParseError::InvalidCastlingRights),
            };
        }
        flags
    };

    let en_passant_square = if en_passant == "-" {
        None
    } else {
        Some(
            en_passant
                .parse::<Square>()
                .map_err(|_| FenParseError::InvalidEnPassantSquare)?,
        )
    };

    let halfmove_clock = halfmove_clock
        .parse()
        .map_err(|_| FenParseError::InvalidHalfmoveClock)?;
    let fullmove_number = fullmove_number
        .parse()
        .map_err(|_| FenParseError::InvalidFullmoveNumber)?;

    Ok(Position::new(
        board,
        side_to_move,
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
    ))
}
