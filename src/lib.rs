//! # Colonnade
//!
//! Server-side HTML table rendering for ORM-backed records.
//!
//! The crate turns rows owned by an ORM layer into escaped HTML tables:
//! - **Columns**: display types such as [`RelationListColumn`], which renders
//!   the members of a many-to-many relation as one separator-joined cell
//! - **Relation seam**: the [`RelatedSet`] trait plus eager and lazy accessors
//! - **Schema**: [`FieldDescriptor`] metadata that drives table
//!   auto-generation
//! - **Table**: explicit column-rule registration and `<table>` assembly
//!
//! # Example
//!
//! ```
//! use colonnade::{EagerSet, RelationListColumn};
//!
//! let tags: EagerSet<String> = EagerSet::new(vec!["dev".into(), "ops".into()]);
//! let column = RelationListColumn::new();
//! let cell = column.render(&tags)?;
//! assert_eq!(cell.as_str(), "dev, ops");
//! # Ok::<(), colonnade::RenderError>(())
//! ```

pub mod columns;
pub mod config;
pub mod html;
pub mod relation;
pub mod schema;
pub mod table;
pub mod text;
pub mod util;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[doc(inline)]
pub use columns::{ColumnOptions, RelationListColumn, RenderError};
#[doc(inline)]
pub use config::RenderConfig;
#[doc(inline)]
pub use html::{escape, Html};
#[doc(inline)]
pub use relation::{EagerSet, LazySet, RelatedSet, RelationError};
#[doc(inline)]
pub use schema::{FieldDescriptor, FieldKind, ModelSchema, SchemaError};
#[doc(inline)]
pub use table::{BoundColumn, HasRelations, Rule, Table, TableBuilder};
#[doc(inline)]
pub use text::{force_text, LazyText};
