//! Relation accessor over records fetched together with their row.

use crate::relation::{RelatedSet, RelationError};

/// Related records that are already in memory.
///
/// The usual accessor when the ORM integration eager-loads relations along
/// with the rows. Both [`RelatedSet`] operations are infallible here; the
/// `Result` shape belongs to the seam, not to this implementation.
///
/// # Example
///
/// ```
/// use colonnade::{EagerSet, RelatedSet};
///
/// let set = EagerSet::new(vec!["a".to_string(), "b".to_string()]);
/// assert!(set.exists()?);
/// assert_eq!(set.all()?, vec!["a".to_string(), "b".to_string()]);
/// # Ok::<(), colonnade::RelationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EagerSet<R> {
    records: Vec<R>,
}

impl<R> EagerSet<R> {
    /// Wrap already-fetched records.
    pub fn new(records: Vec<R>) -> Self {
        EagerSet { records }
    }

    /// An accessor with no related records.
    pub fn empty() -> Self {
        EagerSet {
            records: Vec::new(),
        }
    }

    /// Number of related records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no related records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the underlying records.
    pub fn records(&self) -> &[R] {
        &self.records
    }
}

impl<R> Default for EagerSet<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> From<Vec<R>> for EagerSet<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl<R: Clone> RelatedSet for EagerSet<R> {
    type Record = R;

    fn exists(&self) -> Result<bool, RelationError> {
        Ok(!self.records.is_empty())
    }

    fn all(&self) -> Result<Vec<R>, RelationError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_records() {
        let set = EagerSet::<String>::empty();
        assert!(!set.exists().unwrap());
        assert!(set.all().unwrap().is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn records_keep_their_order() {
        let set = EagerSet::from(vec![3, 1, 2]);
        assert!(set.exists().unwrap());
        assert_eq!(set.all().unwrap(), vec![3, 1, 2]);
    }
}
