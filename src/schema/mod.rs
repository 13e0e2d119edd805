//! Model metadata driving table auto-generation.
//!
//! - [`FieldKind`]: the kinds of model fields a table can display
//! - [`FieldDescriptor`]: one field's metadata (name, label, kind)
//! - [`ModelSchema`]: a model's field list, loadable from a JSON document

pub mod field;
pub mod model;

#[doc(inline)]
pub use field::{FieldDescriptor, FieldKind};
#[doc(inline)]
pub use model::{ModelSchema, SchemaError};
