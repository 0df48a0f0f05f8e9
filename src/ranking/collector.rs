//! Bounded top-K collector shared by concurrent scoring tasks.

use std::cmp::Ordering;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ranking::scorer::Metric;

/// One candidate's score for a single ranking call
#[derive(Debug)]
pub struct ScoredItem<'a, T> {
    /// Candidate that was scored
    pub value: &'a T,

    /// Position of the candidate in the input sequence
    pub position: usize,

    /// Best similarity (0.0 - 1.0)
    pub score: f64,

    /// Metric that produced the base score
    pub metric: Metric,
}

impl<'a, T> ScoredItem<'a, T> {
    pub fn new(value: &'a T, position: usize, score: f64, metric: Metric) -> Self {
        Self {
            value,
            position,
            score,
            metric,
        }
    }
}

impl<T> Clone for ScoredItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScoredItem<'_, T> {}

/// Descending score, then ascending input position
fn rank_cmp<T>(a: &ScoredItem<'_, T>, b: &ScoredItem<'_, T>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Keeps the `limit` best items scoring at least `min_match`.
///
/// `add` may be called from any number of threads. Items are stored sorted;
/// once full, a new item only enters by strictly outranking the current last
/// item, which it then evicts.
pub struct TopK<'a, T> {
    limit: usize,
    min_match: f64,
    items: Mutex<Vec<ScoredItem<'a, T>>>,
}

impl<'a, T> TopK<'a, T> {
    pub fn new(limit: usize, min_match: f64) -> Self {
        Self {
            limit,
            min_match,
            items: Mutex::new(Vec::with_capacity(limit)),
        }
    }

    // A panic while holding the lock cannot leave the vec unsorted: every
    // mutation below is a single insert or pop.
    fn lock(&self) -> MutexGuard<'_, Vec<ScoredItem<'a, T>>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Offer an item; returns whether it was retained.
    pub fn add(&self, item: ScoredItem<'a, T>) -> bool {
        // NaN fails this comparison and is dropped too
        if self.limit == 0 || !(item.score >= self.min_match) {
            return false;
        }

        let mut items = self.lock();
        if items.len() >= self.limit {
            match items.last() {
                Some(worst) if rank_cmp(&item, worst) == Ordering::Less => {
                    items.pop();
                }
                _ => return false,
            }
        }

        let at = items.partition_point(|held| rank_cmp(held, &item) != Ordering::Greater);
        items.insert(at, item);
        true
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the retained items, best first.
    ///
    /// Only complete once every producer has finished.
    pub fn items(&self) -> Vec<ScoredItem<'a, T>> {
        self.lock().clone()
    }

    /// Consume the collector, returning the retained items best first
    pub fn into_items(self) -> Vec<ScoredItem<'a, T>> {
        self.items.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    static NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

    fn item(position: usize, score: f64) -> ScoredItem<'static, &'static str> {
        ScoredItem::new(&NAMES[position], position, score, Metric::JaroWinkler)
    }

    fn scores(top: &TopK<'_, &str>) -> Vec<f64> {
        top.items().iter().map(|i| i.score).collect()
    }

    #[test]
    fn test_keeps_descending_order() {
        let top = TopK::new(5, 0.0);
        for (pos, score) in [0.3, 0.9, 0.1, 0.7, 0.5].into_iter().enumerate() {
            assert!(top.add(item(pos, score)));
        }
        assert_eq!(scores(&top), vec![0.9, 0.7, 0.5, 0.3, 0.1]);
    }

    #[test]
    fn test_rejects_below_min_match() {
        let top = TopK::new(3, 0.5);
        assert!(!top.add(item(0, 0.49)));
        assert!(top.add(item(1, 0.5)));
        assert!(!top.add(item(2, f64::NAN)));
        assert_eq!(scores(&top), vec![0.5]);
    }

    #[test]
    fn test_zero_limit_retains_nothing() {
        let top = TopK::new(0, 0.0);
        assert!(!top.add(item(0, 1.0)));
        assert!(top.is_empty());
    }

    #[test]
    fn test_evicts_lowest_when_full() {
        let top = TopK::new(2, 0.0);
        top.add(item(0, 0.6));
        top.add(item(1, 0.8));
        assert!(top.add(item(2, 0.7)));
        assert_eq!(scores(&top), vec![0.8, 0.7]);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_full_ignores_lower_or_equal() {
        let top = TopK::new(2, 0.0);
        top.add(item(0, 0.9));
        top.add(item(1, 0.6));
        let before: Vec<usize> = top.items().iter().map(|i| i.position).collect();

        assert!(!top.add(item(2, 0.5)));
        assert!(!top.add(item(3, 0.6)));

        let after: Vec<usize> = top.items().iter().map(|i| i.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_later_tie_with_kth_is_dropped() {
        let top = TopK::new(2, 0.0);
        top.add(item(0, 0.9));
        top.add(item(1, 0.7));
        assert!(!top.add(item(2, 0.7)));

        let kept: Vec<&str> = top.items().iter().map(|i| *i.value).collect();
        assert_eq!(kept, vec!["a", "b"]);
    }

    #[test]
    fn test_ties_ordered_by_position() {
        let top = TopK::new(3, 0.0);
        top.add(item(2, 0.5));
        top.add(item(0, 0.5));
        top.add(item(1, 0.5));
        let positions: Vec<usize> = top.items().iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_concurrent_adds_are_bounded() {
        let values: Vec<usize> = (0..1000).collect();
        let top = TopK::new(10, 0.25);

        thread::scope(|s| {
            for chunk in values.chunks(100) {
                let top = &top;
                s.spawn(move || {
                    for v in chunk {
                        top.add(ScoredItem::new(v, *v, *v as f64 / 1000.0, Metric::Levenshtein));
                    }
                });
            }
        });

        let items = top.into_items();
        assert_eq!(items.len(), 10);
        let kept: Vec<usize> = items.iter().map(|i| *i.value).collect();
        assert_eq!(kept, (990..1000).rev().collect::<Vec<_>>());
        assert!(items.iter().all(|i| i.score >= 0.25));
    }
}
