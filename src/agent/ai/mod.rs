// AI - Minimax with Alpha-Beta Pruning
//
// Classical deterministic search over the mailbox position:
// - iterative deepening to a fixed depth
// - alpha-beta pruning inside an absolute (White-positive) score frame
// - MVV-LVA style move ordering
// - a pluggable leaf evaluator

mod evaluation;
mod move_ordering;
mod piece_square_tables;
mod search;

#[cfg(test)]
mod tests;

pub use evaluation::{piece_value, Evaluator, MaterialEvaluator};
pub use move_ordering::{generate_ordered_moves, score_move};
pub use search::{SearchEngine, SearchResult, MATE_SCORE};
