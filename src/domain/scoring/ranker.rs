//! Ranker - competition ranking by closeness and priority banding.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Closeness at or above which an alternative is High priority.
pub const HIGH_PRIORITY_THRESHOLD: f64 = 0.95;

/// Closeness at or above which an alternative is at least Medium priority.
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 0.80;

/// Priority band derived from a closeness coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriorityBand {
    High,
    Medium,
    Low,
}

impl PriorityBand {
    /// Classifies a closeness coefficient.
    pub fn from_closeness(closeness: f64) -> Self {
        if closeness >= HIGH_PRIORITY_THRESHOLD {
            PriorityBand::High
        } else if closeness >= MEDIUM_PRIORITY_THRESHOLD {
            PriorityBand::Medium
        } else {
            PriorityBand::Low
        }
    }

    /// Returns the display label for this band.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityBand::High => "High",
            PriorityBand::Medium => "Medium",
            PriorityBand::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct Ranker;

impl Ranker {
    /// Row indices ordered by closeness descending.
    ///
    /// The sort is stable, so exact ties keep input order.
    pub fn descending_order(closeness: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..closeness.len()).collect();
        order.sort_by(|&a, &b| Self::compare_desc(closeness[a], closeness[b]));
        order
    }

    /// Competition ("min") ranks, in input order.
    ///
    /// Rank 1 is the highest closeness. Equal values share the best rank of
    /// their group and the next distinct value skips: 1, 1, 3.
    pub fn competition_ranks(closeness: &[f64]) -> Vec<u32> {
        let order = Self::descending_order(closeness);
        let mut ranks = vec![0u32; closeness.len()];

        let mut previous: Option<(f64, u32)> = None;
        for (position, &row) in order.iter().enumerate() {
            let value = closeness[row];
            let rank = match previous {
                Some((prev_value, prev_rank)) if prev_value == value => prev_rank,
                _ => position as u32 + 1,
            };
            ranks[row] = rank;
            previous = Some((value, rank));
        }

        ranks
    }

    fn compare_desc(a: f64, b: f64) -> Ordering {
        b.total_cmp(&a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Banding

    #[test]
    fn band_boundaries_are_inclusive_from_below() {
        assert_eq!(PriorityBand::from_closeness(0.95), PriorityBand::High);
        assert_eq!(PriorityBand::from_closeness(1.0), PriorityBand::High);
        assert_eq!(PriorityBand::from_closeness(0.9499), PriorityBand::Medium);
        assert_eq!(PriorityBand::from_closeness(0.80), PriorityBand::Medium);
        assert_eq!(PriorityBand::from_closeness(0.7999), PriorityBand::Low);
        assert_eq!(PriorityBand::from_closeness(0.0), PriorityBand::Low);
    }

    #[test]
    fn band_labels() {
        assert_eq!(PriorityBand::High.to_string(), "High");
        assert_eq!(PriorityBand::Medium.label(), "Medium");
        assert_eq!(PriorityBand::Low.label(), "Low");
    }

    // Ranking

    #[test]
    fn empty_input_has_no_ranks() {
        assert!(Ranker::competition_ranks(&[]).is_empty());
        assert!(Ranker::descending_order(&[]).is_empty());
    }

    #[test]
    fn distinct_values_rank_sequentially() {
        let ranks = Ranker::competition_ranks(&[0.2, 0.9, 0.5]);
        assert_eq!(ranks, vec![3, 1, 2]);
    }

    #[test]
    fn ties_share_best_rank_and_skip() {
        let ranks = Ranker::competition_ranks(&[0.7, 0.9, 0.9, 0.1]);
        assert_eq!(ranks, vec![3, 1, 1, 4]);
    }

    #[test]
    fn tie_in_the_middle() {
        let ranks = Ranker::competition_ranks(&[0.9, 0.5, 0.5, 0.5, 0.2]);
        assert_eq!(ranks, vec![1, 2, 2, 2, 5]);
    }

    #[test]
    fn all_tied_are_rank_one() {
        let ranks = Ranker::competition_ranks(&[0.0, 0.0, 0.0]);
        assert_eq!(ranks, vec![1, 1, 1]);
    }

    #[test]
    fn descending_order_is_stable_for_ties() {
        let order = Ranker::descending_order(&[0.5, 0.9, 0.5, 0.9, 0.1]);
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }
}
