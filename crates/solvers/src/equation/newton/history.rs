use std::slice;

use super::IterationRecord;

/// The ordered iteration records of one solve.
///
/// Records are appended by the solver only; callers get read access.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct History {
    records: Vec<IterationRecord>,
}

impl History {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub(super) fn push(&mut self, record: IterationRecord) {
        debug_assert_eq!(record.iter, self.records.len() + 1);
        self.records.push(record);
    }

    /// Returns all records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Returns the number of completed iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a IterationRecord;
    type IntoIter = slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for History {
    type Item = IterationRecord;
    type IntoIter = std::vec::IntoIter<IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
