//! Field metadata descriptors.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The kind of a model field.
///
/// Serialized in `snake_case`, matching the schema JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
    /// Many-to-one relationship to another model.
    ForeignKey,
    /// Many-to-many relationship through a join table.
    ManyToMany,
}

impl FieldKind {
    /// Whether the field refers to other records rather than a scalar value.
    pub fn is_relation(self) -> bool {
        matches!(self, FieldKind::ForeignKey | FieldKind::ManyToMany)
    }
}

/// Metadata for one model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as the model declares it.
    pub name: String,
    /// Explicit human label, when the model supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,
    /// Field kind.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Descriptor whose label is derived from the name.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        FieldDescriptor {
            name: name.into(),
            verbose_name: None,
            kind,
        }
    }

    /// Attach an explicit human label.
    pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
        self.verbose_name = Some(verbose_name.into());
        self
    }

    /// The human label: the explicit one when set, otherwise the field name
    /// with underscores replaced by spaces.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.verbose_name {
            Some(name) => Cow::Borrowed(name.as_str()),
            None if self.name.contains('_') => Cow::Owned(self.name.replace('_', " ")),
            None => Cow::Borrowed(self.name.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_the_explicit_verbose_name() {
        let field = FieldDescriptor::new("tags", FieldKind::ManyToMany)
            .with_verbose_name("topic tags");
        assert_eq!(field.label(), "topic tags");
    }

    #[test]
    fn label_humanizes_the_field_name() {
        let field = FieldDescriptor::new("project_tags", FieldKind::ManyToMany);
        assert_eq!(field.label(), "project tags");

        let field = FieldDescriptor::new("tags", FieldKind::ManyToMany);
        assert_eq!(field.label(), "tags");
    }

    #[test]
    fn relation_kinds() {
        assert!(FieldKind::ManyToMany.is_relation());
        assert!(FieldKind::ForeignKey.is_relation());
        assert!(!FieldKind::Text.is_relation());
        assert!(!FieldKind::DateTime.is_relation());
    }

    #[test]
    fn kind_names_are_snake_case() {
        let json = serde_json::to_string(&FieldKind::ManyToMany).unwrap();
        assert_eq!(json, "\"many_to_many\"");
        let kind: FieldKind = serde_json::from_str("\"date_time\"").unwrap();
        assert_eq!(kind, FieldKind::DateTime);
    }
}
