//! Ordered, growable row lists with a minimum-count floor

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("At least {floor} row(s) must remain")]
    AtFloor { floor: usize },

    #[error("No row at index {index} (have {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Rows that can be appended and removed by index, never dropping below
/// `floor` through removal.
///
/// A list may be built with fewer rows than the floor (e.g. an entity that
/// arrived without any); validation reports that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowList<T> {
    rows: Vec<T>,
    floor: usize,
}

impl<T> RowList<T> {
    pub fn new(floor: usize) -> Self {
        Self {
            rows: Vec::new(),
            floor,
        }
    }

    pub fn from_rows(rows: Vec<T>, floor: usize) -> Self {
        Self { rows, floor }
    }

    pub fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    /// Remove the row at `index`, refusing when only `floor` rows remain.
    pub fn remove(&mut self, index: usize) -> Result<T, RowError> {
        if index >= self.rows.len() {
            return Err(RowError::OutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        if !self.can_remove() {
            return Err(RowError::AtFloor { floor: self.floor });
        }
        Ok(self.rows.remove(index))
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > self.floor
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.rows.get_mut(index)
    }

    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.rows.iter().position(pred)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }
}

impl<'a, T> IntoIterator for &'a RowList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
