//! Row-facing column bindings.

use crate::columns::{ColumnOptions, RelationListColumn, RenderError};
use crate::html::Html;
use crate::relation::RelatedSet;
use crate::util::ucfirst;

/// Capability a row type must offer to relation columns: hand out the
/// relation accessor bound to a field name.
///
/// The ORM integration implements this once per row type. A row that does
/// not know the requested field returns `None`, which surfaces as
/// [`RenderError::MissingField`] at render time.
pub trait HasRelations {
    /// The accessor type handed out for relation fields.
    type Set: RelatedSet;

    /// The accessor for `field`, or `None` when the row has no such
    /// relation.
    fn relation(&self, field: &str) -> Option<&Self::Set>;
}

/// A column bound to a concrete row type, ready to render cells.
pub trait BoundColumn<Row>: Send + Sync {
    /// Header label for this column. Plain text; the table escapes it.
    fn header(&self) -> String;

    /// Shared column configuration.
    fn options(&self) -> &ColumnOptions;

    /// Render the cell for one row.
    ///
    /// # Errors
    ///
    /// Implementations propagate every failure; the table layer owns how
    /// failures reach the user.
    fn render_cell(&self, row: &Row) -> Result<Html, RenderError>;
}

/// [`RelationListColumn`] bound to the field it displays.
pub struct BoundRelationList<S: RelatedSet> {
    field: String,
    column: RelationListColumn<S>,
}

impl<S: RelatedSet> BoundRelationList<S> {
    /// Bind `column` to the relation named `field`.
    pub fn new(field: impl Into<String>, column: RelationListColumn<S>) -> Self {
        BoundRelationList {
            field: field.into(),
            column,
        }
    }

    /// The bound field name.
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl<Row, S> BoundColumn<Row> for BoundRelationList<S>
where
    Row: HasRelations<Set = S>,
    S: RelatedSet,
{
    fn header(&self) -> String {
        match &self.column.options().verbose_name {
            Some(name) => name.clone(),
            None => ucfirst(&self.field),
        }
    }

    fn options(&self) -> &ColumnOptions {
        self.column.options()
    }

    fn render_cell(&self, row: &Row) -> Result<Html, RenderError> {
        let set = row
            .relation(&self.field)
            .ok_or_else(|| RenderError::MissingField(self.field.clone()))?;
        self.column.render(set)
    }
}
