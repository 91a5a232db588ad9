use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Frequency table of two-dice sums.
///
/// Only sums that were actually rolled appear as keys; a sum with zero
/// occurrences is absent rather than stored as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTable {
    counts: BTreeMap<u8, u64>,
}

impl DiceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sum: u8) {
        *self.counts.entry(sum).or_insert(0) += 1;
    }

    /// Occurrences of `sum`; zero when it was never rolled.
    pub fn count(&self, sum: u8) -> u64 {
        self.counts.get(&sum).copied().unwrap_or(0)
    }

    /// Sum of all counts, equal to the number of trials performed.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&sum, &count)| (sum, count))
    }

    /// The first `limit` entries in ascending order of sum.
    pub fn first(&self, limit: usize) -> Vec<(u8, u64)> {
        self.iter().take(limit).collect()
    }
}

/// Descriptive summary of a list of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}
