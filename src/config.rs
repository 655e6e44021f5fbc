//! Engine configuration.
//!
//! A [`Difficulty`] is a named search depth; [`EngineConfig`] carries the
//! depth the engine searches when `go` has no explicit depth.

use clap::ValueEnum;

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Difficulty {
    /// Depth 2. Sees captures and simple replies.
    Easy,
    /// Depth 4. Two full moves ahead.
    #[default]
    Medium,
    /// Depth 6. Slow without pruning help beyond alpha-beta.
    Hard,
}

impl Difficulty {
    pub fn depth(&self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Default depth for `go`, always at least 1
    pub search_depth: u32,
}

impl EngineConfig {
    pub fn new(search_depth: u32) -> Self {
        Self { search_depth: search_depth.max(1) }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}
