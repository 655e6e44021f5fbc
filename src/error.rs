//! Error types for the engine
//!
//! Ordinary game flow (illegal moves offered by a caller, checkmate,
//! stalemate, empty history) is never an error at the `Position` level; these
//! types only cover malformed input crossing the text boundary.

use thiserror::Error;

/// Rejected FEN input. Returned before the position is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 6 FEN fields, found {0}")]
    FieldCount(usize),

    #[error("invalid piece placement character '{0}'")]
    InvalidPiece(char),

    #[error("piece placement must describe 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files instead of 8")]
    RankWidth { rank: usize, files: usize },

    #[error("invalid active color '{0}'")]
    ActiveColor(String),

    #[error("invalid castling availability '{0}'")]
    Castling(String),

    #[error("invalid en passant square '{0}'")]
    EnPassant(String),

    #[error("invalid move counter '{0}'")]
    MoveCounter(String),
}

/// Rejected move text. The position is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("malformed move notation '{0}'")]
    Malformed(String),

    #[error("'{0}' is not a legal move in this position")]
    Illegal(String),
}

/// Anything the text protocol can fail on
#[derive(Error, Debug)]
pub enum UciError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error(transparent)]
    Move(#[from] MoveParseError),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

pub type UciResult<T> = Result<T, UciError>;
