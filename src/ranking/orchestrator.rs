use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::core::{Candidate, Query, RankedResult};
use crate::error::{Result, ScreenError};
use crate::ranking::collector::{ScoredItem, TopK};
use crate::ranking::scorer::{best_score, jaro_winkler};

/// Reject thresholds outside `[0, 1]` before any work is dispatched
pub(crate) fn validate_min_match(min_match: f64) -> Result<()> {
    if !min_match.is_finite() || !(0.0..=1.0).contains(&min_match) {
        return Err(ScreenError::InvalidParameter(format!(
            "min_match must be within [0, 1], got {min_match}"
        )));
    }
    Ok(())
}

/// Score one candidate against the query.
///
/// The base score is the best metric between the candidate's name and the
/// query's primary name. Aliases on either side can only raise the value via
/// Jaro-Winkler; the reported metric always comes from the base score.
fn score_candidate<'a, T>(
    position: usize,
    candidate: &'a Candidate<T>,
    query: &Query,
) -> ScoredItem<'a, T> {
    let base = best_score(candidate.name(), &query.primary);
    let mut score = base.value;

    for alias in candidate.aliases().iter().filter(|a| !a.is_empty()) {
        score = score.max(jaro_winkler(alias, &query.primary));
    }
    for alias in query.aliases.iter().filter(|a| !a.is_empty()) {
        score = score.max(jaro_winkler(candidate.name(), alias));
    }

    ScoredItem::new(candidate.payload(), position, score, base.metric)
}

/// Rank `candidates` against `query`, returning at most `limit` results with
/// a score of at least `min_match`, best first.
///
/// Candidates are scored in parallel on the current rayon pool; the call
/// returns once every scoring task has finished.
pub fn rank<T>(
    limit: usize,
    min_match: f64,
    query: &Query,
    candidates: &[Candidate<T>],
) -> Result<Vec<RankedResult<T>>>
where
    T: Clone + Sync,
{
    let never = AtomicBool::new(false);
    rank_with_cancel(limit, min_match, query, candidates, &never)
}

/// Like [`rank`], but stops starting new scoring tasks once `cancel` is set.
///
/// Tasks already running finish and whatever the collector holds at that
/// point is returned.
pub fn rank_with_cancel<T>(
    limit: usize,
    min_match: f64,
    query: &Query,
    candidates: &[Candidate<T>],
    cancel: &AtomicBool,
) -> Result<Vec<RankedResult<T>>>
where
    T: Clone + Sync,
{
    validate_min_match(min_match)?;

    if candidates.is_empty() || limit == 0 {
        return Ok(Vec::new());
    }

    let start = Instant::now();
    let top = TopK::new(limit, min_match);

    candidates
        .par_iter()
        .enumerate()
        .for_each(|(position, candidate)| {
            if cancel.load(Ordering::Relaxed) {
                return;
            }
            top.add(score_candidate(position, candidate, query));
        });

    if cancel.load(Ordering::Relaxed) {
        tracing::debug!(query = %query.primary, "ranking cancelled, returning partial results");
    }

    let results: Vec<RankedResult<T>> = top
        .into_items()
        .into_iter()
        .map(|item| {
            tracing::trace!(position = item.position, score = item.score, metric = %item.metric, "retained");
            RankedResult::new(item.value.clone(), item.score)
        })
        .collect();

    tracing::debug!(
        query = %query.primary,
        candidates = candidates.len(),
        retained = results.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "ranked candidates"
    );

    Ok(results)
}
