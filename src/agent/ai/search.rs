// Iterative deepening minimax with alpha-beta pruning
//
// Scores are absolute: positive favours White. White maximises, Black
// minimises. Each depth 1..=max is searched from scratch with the same move
// ordering, and the last completed depth supplies the answer.

use std::time::Instant;

use log::info;

use crate::game_repr::{Color, Move, Position};
use super::evaluation::{Evaluator, KING_VALUE};
use super::move_ordering::generate_ordered_moves;

/// Base score of a checkmate. The remaining depth is added on top so that
/// quicker mates score higher than slower ones.
pub const MATE_SCORE: i32 = KING_VALUE * 1000;

const INFINITY: i32 = i32::MAX;

/// Result of a search operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the root has no legal moves
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u32,
    pub nodes_searched: u64,
}

/// Score of a node whose side to move has no legal moves
pub(crate) fn terminal_score(pos: &Position, depth: u32) -> i32 {
    let side = pos.side_to_move();
    if !pos.is_in_check(side) {
        return 0;
    }

    let mate = MATE_SCORE + depth as i32;
    match side {
        Color::White => -mate,
        Color::Black => mate,
    }
}

pub struct SearchEngine<E: Evaluator> {
    evaluator: E,
    nodes: u64,
}

impl<E: Evaluator> SearchEngine<E> {
    pub fn new(evaluator: E) -> Self {
        Self { evaluator, nodes: 0 }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Searches depths 1 through `max_depth` (at least 1) and returns the
    /// best move of the deepest iteration. The position is left as it was.
    pub fn find_best_move(&mut self, pos: &mut Position, max_depth: u32) -> SearchResult {
        let start_time = Instant::now();
        let max_depth = max_depth.max(1);
        let maximizing = pos.side_to_move() == Color::White;
        self.nodes = 0;

        let moves = generate_ordered_moves(pos);
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: terminal_score(pos, max_depth),
                depth: max_depth,
                nodes_searched: 1,
            };
        }

        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes_searched: 0,
        };

        for depth in 1..=max_depth {
            let mut alpha = -INFINITY;
            let mut beta = INFINITY;
            let mut best_score = if maximizing { -INFINITY } else { INFINITY };
            let mut best_move = moves[0];

            for &mv in &moves {
                let score = {
                    let mut child = pos.scoped_move(mv);
                    self.minimax(&mut child, depth - 1, alpha, beta, !maximizing)
                };

                // Ties keep the earlier move
                if maximizing {
                    if score > best_score {
                        best_score = score;
                        best_move = mv;
                    }
                    alpha = alpha.max(score);
                } else {
                    if score < best_score {
                        best_score = score;
                        best_move = mv;
                    }
                    beta = beta.min(score);
                }
            }

            result = SearchResult {
                best_move: Some(best_move),
                score: best_score,
                depth,
                nodes_searched: self.nodes,
            };

            info!(
                "depth {} score {} nodes {} time {}ms best {}",
                depth,
                best_score,
                self.nodes,
                start_time.elapsed().as_millis(),
                best_move
            );
        }

        result
    }

    /// Minimax value of `pos` searched `depth` plies deep inside `[alpha, beta]`.
    pub fn minimax(
        &mut self,
        pos: &mut Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            if !pos.has_legal_moves() {
                return terminal_score(pos, 0);
            }
            return self.evaluator.evaluate(pos);
        }

        let moves = generate_ordered_moves(pos);
        if moves.is_empty() {
            return terminal_score(pos, depth);
        }

        if maximizing {
            let mut value = -INFINITY;
            for mv in moves {
                let mut child = pos.scoped_move(mv);
                value = value.max(self.minimax(&mut child, depth - 1, alpha, beta, false));
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for mv in moves {
                let mut child = pos.scoped_move(mv);
                value = value.min(self.minimax(&mut child, depth - 1, alpha, beta, true));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}
