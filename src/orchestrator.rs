//! Game coordination between the position, the search and the text protocol.
//!
//! The [`Orchestrator`] owns the live [`Position`] and a [`SearchEngine`]. The
//! protocol layer talks only to it: load a position, apply moves from text,
//! ask for a best move, run perft. Errors stay typed and never leave the
//! position half-updated.

use log::warn;

use crate::agent::{Evaluator, MaterialEvaluator, SearchEngine, SearchResult};
use crate::config::EngineConfig;
use crate::error::{FenError, MoveParseError, UciResult};
use crate::game_repr::{Color, Move, Position};

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black is checkmated
    WhiteWins,
    /// White is checkmated
    BlackWins,
    /// The side to move has no legal moves but is not in check
    Stalemate,
}

pub struct Orchestrator<E: Evaluator = MaterialEvaluator> {
    position: Position,
    engine: SearchEngine<E>,
    config: EngineConfig,
}

impl Orchestrator<MaterialEvaluator> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_evaluator(config, MaterialEvaluator)
    }
}

impl<E: Evaluator> Orchestrator<E> {
    pub fn with_evaluator(config: EngineConfig, evaluator: E) -> Self {
        Self {
            position: Position::starting(),
            engine: SearchEngine::new(evaluator),
            config,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Back to the initial position with an empty history
    pub fn reset(&mut self) {
        self.position = Position::starting();
    }

    /// Replaces the position from FEN; unchanged on error
    pub fn load_position(&mut self, fen: &str) -> Result<(), FenError> {
        self.position.load_fen(fen)
    }

    /// Sets up `fen` (or the initial position when `None`) and plays `moves`.
    ///
    /// Everything is applied to a scratch copy first, so a bad FEN or any bad
    /// move leaves the current position exactly as it was.
    pub fn set_position(&mut self, fen: Option<&str>, moves: &[&str]) -> UciResult<()> {
        let mut staged = match fen {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::starting(),
        };

        for text in moves {
            let mv = staged.parse_move(text)?;
            staged.make_move(mv);
        }

        self.position = staged;
        Ok(())
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.position.all_legal_moves().into_vec()
    }

    /// Parses and plays one move in coordinate notation
    pub fn apply_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.position.parse_move(text).inspect_err(|e| warn!("{}", e))?;
        self.position.make_move(mv);
        Ok(mv)
    }

    /// Takes back the last applied move, if any
    pub fn undo_move(&mut self) {
        self.position.unmake_move();
    }

    /// Full search result at `depth`, or at the configured depth when `None`
    pub fn search(&mut self, depth: Option<u32>) -> SearchResult {
        let depth = depth.unwrap_or(self.config.search_depth);
        self.engine.find_best_move(&mut self.position, depth)
    }

    pub fn find_best_move(&mut self, depth: u32) -> Option<Move> {
        self.search(Some(depth)).best_move
    }

    /// Static evaluation of the current position (White-positive)
    pub fn evaluate(&self) -> i32 {
        self.engine.evaluator().evaluate(&self.position)
    }

    pub fn perft(&mut self, depth: u32) -> u64 {
        self.position.perft(depth)
    }

    pub fn divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        self.position.divide(depth)
    }

    /// `None` while the side to move still has a legal move
    pub fn game_result(&mut self) -> Option<GameResult> {
        if self.position.has_legal_moves() {
            return None;
        }

        let side = self.position.side_to_move();
        if !self.position.is_in_check(side) {
            return Some(GameResult::Stalemate);
        }

        Some(match side {
            Color::White => GameResult::BlackWins,
            Color::Black => GameResult::WhiteWins,
        })
    }
}
