//! The relation-accessor seam between the ORM layer and columns.
//!
//! Columns never traverse relations themselves. They consume a
//! [`RelatedSet`]: the read-only handle an ORM integration hands out for
//! "the records related to this row through this field". Two accessors
//! ship:
//! - [`EagerSet`]: related records fetched together with their row
//! - [`LazySet`]: records fetched on first use through an injected loader
//!
//! Accessors report fetch failures through [`RelationError`] instead of
//! recovering locally; retry policy belongs to the ORM integration.

pub mod eager;
pub mod error;
pub mod lazy;
pub mod traits;

#[doc(inline)]
pub use eager::EagerSet;
#[doc(inline)]
pub use error::RelationError;
#[doc(inline)]
pub use lazy::LazySet;
#[doc(inline)]
pub use traits::RelatedSet;
