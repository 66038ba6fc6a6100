//! Insertion-ordered condition counts.
//!
//! Tied conditions are reported in the order they were first counted, so the tally keeps
//! its entries in a `Vec` and uses a `HashMap` only to find a condition's slot.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ConditionTally {
    counts: Vec<(String, u32)>,
    positions: HashMap<String, usize>,
}

impl ConditionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to the count for `condition`, inserting it at the end if unseen.
    pub fn increment(&mut self, condition: &str) {
        match self.positions.get(condition) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.positions.insert(condition.to_string(), self.counts.len());
                self.counts.push((condition.to_string(), 1));
            }
        }
    }

    pub fn count(&self, condition: &str) -> u32 {
        self.positions
            .get(condition)
            .map_or(0, |&i| self.counts[i].1)
    }

    pub fn max_count(&self) -> Option<u32> {
        self.counts.iter().map(|(_, n)| *n).max()
    }

    /// Conditions whose count equals the maximum, in first-seen order.
    pub fn top_conditions(&self) -> Vec<String> {
        let Some(max) = self.max_count() else {
            return Vec::new();
        };
        self.counts
            .iter()
            .filter(|(_, n)| *n == max)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(name, n)| (name.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
