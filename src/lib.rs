//! # namescreen
//!
//! Fuzzy name screening over a candidate pool:
//! - Best-of-metric similarity (Jaro-Winkler, Levenshtein, Hamming)
//! - Alias boosting on both the query and candidate side
//! - Parallel per-candidate scoring on rayon
//! - Bounded, thread-safe top-K collection with deterministic tie-breaks
//! - Adapters: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use namescreen::{Candidate, Query, RankOptions, Screener};
//!
//! fn main() -> namescreen::Result<()> {
//!     let pool = vec![
//!         Candidate::new("sdn-1", "JON SMITH", Vec::<&str>::new()),
//!         Candidate::new("sdn-2", "ALICE JONES", ["JOHN SMYTHE"]),
//!     ];
//!     let screener = Screener::new(pool, RankOptions { limit: 2, min_match: 0.5, threads: None })?;
//!
//!     for hit in screener.search(&Query::new("John Smith", Vec::<&str>::new()))? {
//!         println!("{} - {:.3}", hit.payload, hit.score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod ranking;

// Re-export primary types
pub use crate::core::{to_json_rows, Candidate, Query, RankedResult, Record};
pub use config::RankOptions;
pub use engine::Screener;
pub use error::{Result, ScreenError};
pub use ranking::{best_score, rank, rank_with_cancel, Metric, Score};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
