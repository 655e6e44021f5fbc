mod attacks;
mod fen;
mod moves;
mod piece;
mod piece_moves;
mod position;
pub mod square;

#[cfg(test)]
mod tests;

pub use fen::START_FEN;
pub use moves::*;
pub use piece::*;
pub use position::*;
