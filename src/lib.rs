//! Mailbox chess engine: a 64-cell board with legal move generation,
//! reversible make/unmake, perft, and an iterative-deepening alpha-beta
//! search, driven over a small UCI-style text protocol.

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;
pub mod uci;

pub use agent::{Evaluator, MaterialEvaluator, SearchEngine, SearchResult};
pub use config::{Difficulty, EngineConfig};
pub use error::{FenError, MoveParseError, UciError};
pub use game_repr::{Color, Move, MoveType, Piece, Position, Type, START_FEN};
pub use orchestrator::{GameResult, Orchestrator};
