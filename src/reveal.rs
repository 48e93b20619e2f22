//! Revealed answers of the current question

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tracks which answers of the current question are visible
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealTracker {
    /// Number of answers of the current question
    total: usize,
    /// Indices revealed so far
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    /// Creates a tracker for a question with `total` answers
    pub fn new(total: usize) -> Self {
        Self {
            total,
            revealed: BTreeSet::new(),
        }
    }

    /// Clears every reveal and binds the tracker to a new question
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.revealed.clear();
    }

    /// Reveals a single answer
    ///
    /// Indices outside the current question are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the answer was hidden before
    pub fn reveal(&mut self, index: usize) -> bool {
        index < self.total && self.revealed.insert(index)
    }

    /// Reveals every answer of the current question
    pub fn reveal_all(&mut self) {
        self.revealed.extend(0..self.total);
    }

    /// Checks whether the answer at `index` is visible
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    /// Checks whether every answer is visible
    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.len() == self.total
    }

    /// Number of visible answers
    pub fn count(&self) -> usize {
        self.revealed.len()
    }

    /// Number of answers of the current question
    pub fn total(&self) -> usize {
        self.total
    }

    /// Visible indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.revealed.iter().copied()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_single() {
        let mut tracker = RevealTracker::new(3);
        assert!(tracker.reveal(1));
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(0));
        assert_eq!(tracker.count(), 1);
    }

    #[test]
    fn test_reveal_twice_is_noop() {
        let mut tracker = RevealTracker::new(3);
        assert!(tracker.reveal(2));
        assert!(!tracker.reveal(2));
        assert_eq!(tracker.count(), 1);
    }

    #[test]
    fn test_reveal_out_of_bounds_ignored() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.reveal(2));
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_reveal_count_monotonic() {
        let mut tracker = RevealTracker::new(5);
        let mut last = 0;
        for index in [3, 3, 0, 4, 0, 1, 2, 2] {
            tracker.reveal(index);
            assert!(tracker.count() >= last);
            last = tracker.count();
        }
        assert!(tracker.is_fully_revealed());
    }

    #[test]
    fn test_reveal_all() {
        for total in 1..8 {
            let mut tracker = RevealTracker::new(total);
            tracker.reveal(0);
            tracker.reveal_all();
            assert!(tracker.is_fully_revealed());
            assert_eq!(tracker.indices().collect::<Vec<_>>(), (0..total).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_reset_clears() {
        let mut tracker = RevealTracker::new(2);
        tracker.reveal_all();
        tracker.reset(4);
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.total(), 4);
        assert!(!tracker.is_fully_revealed());
    }
}
