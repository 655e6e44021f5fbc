pub mod ai;
pub use ai::{Evaluator, MaterialEvaluator, SearchEngine, SearchResult};
