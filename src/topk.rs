//! Top-K selection by GPA
//!
//! **Problem**: ranking the whole roster is O(N log N) when only the best
//! few students are wanted.
//!
//! **Solution**: bounded min-heap selection, O(N log K). The heap keeps the
//! worst-ranked candidate on top so it can be evicted as better ones arrive.
//!
//! Ranking order is total and deterministic: higher metric first, ties
//! broken by lower student ID.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

/// One entry in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedStudent {
    /// Student ID
    pub id: u32,
    /// Student name
    pub name: String,
    /// GPA used for ranking
    pub gpa: f64,
    /// Mean raw score
    pub average_grade: f64,
}

/// A (student, metric) pair competing for a ranking slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Student ID
    pub id: u32,
    /// Ranking metric (GPA)
    pub metric: f64,
}

impl Candidate {
    /// `Less` means `self` ranks ahead of `other`.
    #[must_use]
    pub fn rank_order(&self, other: &Self) -> Ordering {
        other
            .metric
            .total_cmp(&self.metric)
            .then_with(|| self.id.cmp(&other.id))
    }
}

// Worst-ranked candidate compares greatest, so it sits at the top of the max-heap
#[derive(Debug)]
struct MinHeapItem(Candidate);

impl PartialEq for MinHeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinHeapItem {}

impl Ord for MinHeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.rank_order(&other.0)
    }
}

impl PartialOrd for MinHeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Select the best `k` candidates in ranking order.
///
/// `k == 0` yields an empty vector; `k` at or beyond the candidate count
/// yields every candidate, sorted.
///
/// # Examples
///
/// ```rust
/// use roster_db::topk::{select_top_k, Candidate};
///
/// let candidates = vec![
///     Candidate { id: 2, metric: 4.0 },
///     Candidate { id: 1, metric: 4.0 },
///     Candidate { id: 3, metric: 2.5 },
/// ];
/// let top = select_top_k(candidates, 1);
/// assert_eq!(top[0].id, 1);
/// ```
#[must_use]
pub fn select_top_k(candidates: Vec<Candidate>, k: usize) -> Vec<Candidate> {
    if k == 0 {
        return Vec::new();
    }

    // If k >= len, just sort everything
    if k >= candidates.len() {
        let mut all = candidates;
        all.sort_by(Candidate::rank_order);
        return all;
    }

    let mut heap: BinaryHeap<MinHeapItem> = BinaryHeap::with_capacity(k);
    for candidate in candidates {
        if heap.len() < k {
            heap.push(MinHeapItem(candidate));
        } else if let Some(top) = heap.peek() {
            if candidate.rank_order(&top.0) == Ordering::Less {
                heap.pop();
                heap.push(MinHeapItem(candidate));
            }
        }
    }

    let mut result: Vec<Candidate> = heap.into_iter().map(|item| item.0).collect();
    result.sort_by(Candidate::rank_order);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(id: u32, metric: f64) -> Candidate {
        Candidate { id, metric }
    }

    fn ids(result: &[Candidate]) -> Vec<u32> {
        result.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_k_zero_is_empty() {
        assert!(select_top_k(vec![c(1, 3.0)], 0).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(select_top_k(Vec::new(), 5).is_empty());
    }

    #[test]
    fn test_k_larger_than_input_returns_all_sorted() {
        let result = select_top_k(vec![c(1, 1.0), c(2, 3.0), c(3, 2.0)], 10);
        assert_eq!(ids(&result), vec![2, 3, 1]);
    }

    #[test]
    fn test_heap_path_selects_best() {
        let candidates = (1..=100).map(|id| c(id, f64::from(id % 17))).collect();
        let result = select_top_k(candidates, 3);
        // metric 16 is reached by ids 16, 33, 50, 67, 84
        assert_eq!(ids(&result), vec![16, 33, 50]);
    }

    #[test]
    fn test_tie_broken_by_lower_id() {
        let result = select_top_k(vec![c(2, 4.0), c(1, 4.0)], 1);
        assert_eq!(ids(&result), vec![1]);

        let result = select_top_k(vec![c(5, 4.0), c(3, 4.0), c(9, 4.0), c(1, 2.0)], 2);
        assert_eq!(ids(&result), vec![3, 5]);
    }

    #[test]
    fn test_heap_and_sort_paths_agree() {
        let candidates: Vec<Candidate> = (0..50)
            .map(|id| c(id, f64::from((id * 7) % 5)))
            .collect();
        let full = select_top_k(candidates.clone(), candidates.len());
        for k in 1..candidates.len() {
            let partial = select_top_k(candidates.clone(), k);
            assert_eq!(ids(&partial), ids(&full[..k]));
        }
    }
}
