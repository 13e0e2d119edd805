//! Core trait for relation accessors.

use crate::relation::RelationError;

/// Read-only access to the records related to one row through one field.
///
/// Implementations are handed out per row by the ORM integration; columns
/// only ever call the two methods below. Either call may trigger a deferred
/// fetch, whose failure surfaces as a [`RelationError`].
pub trait RelatedSet {
    /// The related record type.
    type Record;

    /// Whether the set contains any records.
    ///
    /// # Errors
    ///
    /// Returns an error when answering requires a fetch and the fetch
    /// fails.
    fn exists(&self) -> Result<bool, RelationError>;

    /// Every related record, in the accessor's natural order.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch fails.
    fn all(&self) -> Result<Vec<Self::Record>, RelationError>;
}
