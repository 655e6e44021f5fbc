use log::trace;

use super::piece::{Color, Piece};
use super::position::{CastlingRights, Position};
use super::square::{parse_square, row_of, square_name};
use crate::error::FenError;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parses a six-field FEN string into a fresh position with empty history.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, active, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::FieldCount(fields.len()));
        };

        let mut pos = Position::empty();
        pos.board = parse_placement(placement)?;
        pos.side_to_move = match active {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::ActiveColor(other.to_string())),
        };
        pos.castling = parse_castling(castling)?;
        pos.en_passant = parse_en_passant(en_passant)?;
        pos.halfmove_clock = halfmove
            .parse()
            .map_err(|_| FenError::MoveCounter(halfmove.to_string()))?;
        pos.fullmove_number = fullmove
            .parse()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| FenError::MoveCounter(fullmove.to_string()))?;

        Ok(pos)
    }

    /// Replaces this position with the one described by `fen`.
    /// On error nothing is changed.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Position::from_fen(fen)?;
        trace!("loaded position {}", fen);
        Ok(())
    }

    /// Serializes the current position; round-trips through `from_fen`.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        // Row 0 is the 8th rank, so rows come out in FEN order
        for row in 0..8 {
            let mut empty_count = 0;
            for file in 0..8 {
                match self.board[row * 8 + file] {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        let rights = [
            (self.castling.white_kingside, 'K'),
            (self.castling.white_queenside, 'Q'),
            (self.castling.black_kingside, 'k'),
            (self.castling.black_queenside, 'q'),
        ];
        let castling: String = rights.iter().filter(|(on, _)| *on).map(|&(_, c)| c).collect();
        fen.push(' ');
        fen.push_str(if castling.is_empty() { "-" } else { &castling });

        fen.push(' ');
        match self.en_passant() {
            Some(sq) => fen.push_str(&square_name(sq)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

fn parse_placement(placement: &str) -> Result<[Option<Piece>; 64], FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = [None; 64];
    for (row, rank) in ranks.iter().enumerate() {
        let mut file = 0;
        for c in rank.chars() {
            match c {
                '1'..='8' => file += c as usize - '0' as usize,
                _ => {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                    if file < 8 {
                        board[row * 8 + file] = Some(piece);
                    }
                    file += 1;
                }
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth { rank: 8 - row, files: file });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::default();
    if field == "-" {
        return Ok(rights);
    }

    let invalid = || FenError::Castling(field.to_string());
    for c in field.chars() {
        let flag = match c {
            'K' => &mut rights.white_kingside,
            'Q' => &mut rights.white_queenside,
            'k' => &mut rights.black_kingside,
            'q' => &mut rights.black_queenside,
            _ => return Err(invalid()),
        };
        if *flag {
            return Err(invalid());
        }
        *flag = true;
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<u8>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    // Target squares live on rank 6 (row 2) or rank 3 (row 5)
    match parse_square(field) {
        Some(sq) if row_of(sq) == 2 || row_of(sq) == 5 => Ok(Some(sq as u8)),
        _ => Err(FenError::EnPassant(field.to_string())),
    }
}
