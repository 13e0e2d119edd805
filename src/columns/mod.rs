//! Column types and their shared configuration.
//!
//! A column is a reusable description of how one table column renders:
//! constructed once per table definition, then applied to many rows. The
//! options every column type shares live in [`ColumnOptions`];
//! [`RelationListColumn`] is the display type for many-to-many relation
//! fields.

pub mod relation_list;

#[doc(inline)]
pub use relation_list::RelationListColumn;

use std::fmt;

use crate::relation::RelationError;

/// Configuration shared by every column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOptions {
    /// Header label. When unset, the label is derived from the bound field.
    pub verbose_name: Option<String>,
    /// Whether the table offers ordering by this column. `None` means the
    /// column type's default applies.
    pub orderable: Option<bool>,
    /// Whether the column is rendered at all.
    pub visible: bool,
    /// Literal placeholder emitted for cells with nothing to show. Emitted
    /// verbatim, so it must be trusted text.
    pub empty_text: String,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        ColumnOptions {
            verbose_name: None,
            orderable: None,
            visible: true,
            empty_text: "-".to_string(),
        }
    }
}

impl ColumnOptions {
    /// Effective orderability, treating an unset flag as orderable.
    pub fn is_orderable(&self) -> bool {
        self.orderable.unwrap_or(true)
    }
}

/// Failure while rendering a cell.
///
/// Rendering performs no local recovery: every failure is reported to the
/// table layer, which owns user-visible error presentation.
#[derive(Debug)]
pub enum RenderError {
    /// The relation accessor failed.
    Relation(RelationError),
    /// A column could not produce display text for a record.
    Transform(String),
    /// The row does not expose the relation the column is bound to.
    MissingField(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Relation(err) => {
                write!(f, "Relation error: {err}")
            }
            RenderError::Transform(msg) => {
                write!(f, "Transform error: {msg}")
            }
            RenderError::MissingField(field) => {
                write!(f, "Row has no relation for field '{field}'")
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<RelationError> for RenderError {
    fn from(err: RelationError) -> Self {
        RenderError::Relation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_visible_and_undecided_ordering() {
        let options = ColumnOptions::default();
        assert!(options.visible);
        assert_eq!(options.orderable, None);
        assert!(options.is_orderable());
        assert_eq!(options.empty_text, "-");
    }

    #[test]
    fn render_error_display() {
        let err = RenderError::from(RelationError::Fetch("timed out".to_string()));
        assert_eq!(err.to_string(), "Relation error: Relation fetch error: timed out");

        let err = RenderError::MissingField("tags".to_string());
        assert_eq!(err.to_string(), "Row has no relation for field 'tags'");
    }
}
