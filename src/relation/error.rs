//! Error type for relation accessors.

use std::fmt;

/// Failure reported by a relation accessor.
#[derive(Debug)]
pub enum RelationError {
    /// A deferred fetch of the related records failed.
    Fetch(String),
    /// The accessor cannot satisfy the requested operation. Raised by
    /// integrations whose backing store lacks one of the [`RelatedSet`]
    /// capabilities.
    ///
    /// [`RelatedSet`]: crate::relation::RelatedSet
    Unsupported(String),
}

impl fmt::Display for RelationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationError::Fetch(msg) => {
                write!(f, "Relation fetch error: {msg}")
            }
            RelationError::Unsupported(msg) => {
                write!(f, "Unsupported relation operation: {msg}")
            }
        }
    }
}

impl std::error::Error for RelationError {}
