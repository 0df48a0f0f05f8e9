use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::config::RankOptions;
use crate::core::{Candidate, Query, RankedResult};
use crate::error::Result;
use crate::ranking::{rank, rank_with_cancel};

/// Screening engine over a fixed candidate pool.
///
/// Candidates are normalized once when the pool is built; every search scores
/// the whole pool in parallel.
pub struct Screener<T> {
    candidates: Vec<Candidate<T>>,
    options: RankOptions,
    pool: Option<rayon::ThreadPool>,
}

impl<T> Screener<T>
where
    T: Clone + Send + Sync,
{
    /// Create a screener, starting a dedicated worker pool when
    /// `options.threads` is set
    pub fn new(candidates: Vec<Candidate<T>>, options: RankOptions) -> Result<Self> {
        options.validate()?;

        let pool = match options.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("namescreen-{i}"))
                    .build()?,
            ),
            None => None,
        };

        tracing::info!(
            candidates = candidates.len(),
            limit = options.limit,
            min_match = options.min_match,
            threads = ?options.threads,
            "screener ready"
        );

        Ok(Self {
            candidates,
            options,
            pool,
        })
    }

    pub fn options(&self) -> &RankOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Search with the configured limit and threshold
    pub fn search(&self, query: &Query) -> Result<Vec<RankedResult<T>>> {
        self.search_with(query, self.options.limit, self.options.min_match)
    }

    /// Search with an explicit limit and threshold
    pub fn search_with(
        &self,
        query: &Query,
        limit: usize,
        min_match: f64,
    ) -> Result<Vec<RankedResult<T>>> {
        self.install(|| rank(limit, min_match, query, &self.candidates))
    }

    /// Search with the configured options, skipping candidates not yet
    /// scored once `cancel` is set
    pub fn search_with_cancel(
        &self,
        query: &Query,
        cancel: &AtomicBool,
    ) -> Result<Vec<RankedResult<T>>> {
        let RankOptions { limit, min_match, .. } = self.options;
        self.install(|| rank_with_cancel(limit, min_match, query, &self.candidates, cancel))
    }
}

impl<T> Screener<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Run a search on tokio's blocking pool so async callers are not stalled
    /// by the CPU-bound scoring.
    pub async fn search_async(
        self: Arc<Self>,
        query: Query,
        limit: usize,
        min_match: f64,
    ) -> Result<Vec<RankedResult<T>>> {
        tokio::task::spawn_blocking(move || self.search_with(&query, limit, min_match)).await?
    }
}
