pub mod collector;
pub mod orchestrator;
pub mod scorer;

pub use collector::{ScoredItem, TopK};
pub use orchestrator::{rank, rank_with_cancel};
pub use scorer::{best_score, Metric, Score};
