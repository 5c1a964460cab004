//! Insertion-ordered operation collections.

use std::collections::VecDeque;

use chrono::TimeDelta;
use lapse_types::{Operation, TimeRange};
use serde::{Deserialize, Serialize};

use crate::OperationStats;

/// An ordered collection of operations.
///
/// Order is arrival order, which need not match the order the operations
/// started in. Aggregate queries return `None` when the set is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationSet {
    ops: VecDeque<Operation>,
}

impl OperationSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ops: VecDeque::new(),
        }
    }

    /// Creates an empty set with room for `capacity` operations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: VecDeque::with_capacity(capacity),
        }
    }

    /// Number of operations in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the set holds no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Appends an operation at the back.
    pub fn push(&mut self, op: Operation) {
        self.ops.push_back(op);
    }

    /// Removes and returns the oldest operation.
    pub fn pop_front(&mut self) -> Option<Operation> {
        self.ops.pop_front()
    }

    /// Returns the operation at `index` in arrival order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Operation> {
        self.ops.get(index)
    }

    /// Iterates over the operations in arrival order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Operation> + '_ {
        self.ops.iter()
    }

    /// Copies the operations into a `Vec`, preserving order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Operation> {
        self.ops.iter().cloned().collect()
    }

    /// Mean signed duration.
    ///
    /// Returns `None` for an empty set, or if the summed durations overflow.
    #[must_use]
    pub fn average(&self) -> Option<TimeDelta> {
        if self.ops.is_empty() {
            return None;
        }
        let count = i32::try_from(self.ops.len()).ok()?;
        let sum = self
            .ops
            .iter()
            .try_fold(TimeDelta::zero(), |sum, op| sum.checked_add(&op.duration()))?;
        Some(sum / count)
    }

    /// The operation with the greatest signed duration; the first one wins ties.
    #[must_use]
    pub fn longest(&self) -> Option<&Operation> {
        self.ops.iter().reduce(|longest, op| {
            if op.duration() > longest.duration() {
                op
            } else {
                longest
            }
        })
    }

    /// The operation with the smallest signed duration; the first one wins ties.
    #[must_use]
    pub fn shortest(&self) -> Option<&Operation> {
        self.ops.iter().reduce(|shortest, op| {
            if op.duration() < shortest.duration() {
                op
            } else {
                shortest
            }
        })
    }

    /// The operation with the earliest start; the first one wins ties.
    #[must_use]
    pub fn started_first(&self) -> Option<&Operation> {
        self.ops.iter().reduce(|first, op| {
            if op.runtime.start < first.runtime.start {
                op
            } else {
                first
            }
        })
    }

    /// The operation with the latest end.
    ///
    /// Unlike the other queries, ties go to the operation that arrived last:
    /// a candidate only loses when its end is strictly before the current pick's.
    #[must_use]
    pub fn ended_last(&self) -> Option<&Operation> {
        self.ops.iter().reduce(|last, op| {
            if op.runtime.end < last.runtime.end {
                last
            } else {
                op
            }
        })
    }

    /// Range from the earliest start to the latest end.
    #[must_use]
    pub fn full_range(&self) -> Option<TimeRange> {
        Some(TimeRange {
            start: self.started_first()?.runtime.start,
            end: self.ended_last()?.runtime.end,
        })
    }

    /// Summary of the set's durations and span.
    #[must_use]
    pub fn stats(&self) -> Option<OperationStats> {
        Some(OperationStats {
            count: self.len(),
            average: self.average()?,
            shortest: self.shortest()?.duration(),
            longest: self.longest()?.duration(),
            span: self.full_range()?,
        })
    }
}

impl From<Vec<Operation>> for OperationSet {
    fn from(ops: Vec<Operation>) -> Self {
        Self { ops: ops.into() }
    }
}

impl FromIterator<Operation> for OperationSet {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl Extend<Operation> for OperationSet {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl IntoIterator for OperationSet {
    type Item = Operation;
    type IntoIter = std::collections::vec_deque::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a OperationSet {
    type Item = &'a Operation;
    type IntoIter = std::collections::vec_deque::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
