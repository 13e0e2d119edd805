//! Model schema documents.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::field::FieldDescriptor;

/// Schema loading or validation error.
#[derive(Debug)]
pub enum SchemaError {
    /// The document is not valid JSON for a schema.
    Parse(serde_json::Error),
    /// The document parsed but violates a schema rule.
    Invalid(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Parse(err) => write!(f, "Schema parse error: {err}"),
            SchemaError::Invalid(msg) => write!(f, "Invalid schema: {msg}"),
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse(err)
    }
}

/// The displayable fields of one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Model name, e.g. `"Person"`.
    pub model: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl ModelSchema {
    /// Load a schema from a JSON document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] for malformed JSON and
    /// [`SchemaError::Invalid`] for duplicate field names.
    pub fn from_json(document: &str) -> Result<Self, SchemaError> {
        let schema: ModelSchema = serde_json::from_str(document)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Check the schema rules JSON alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Invalid`] when two fields share a name.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::Invalid(format!(
                    "duplicate field name '{}' in model '{}'",
                    field.name, self.model
                )));
            }
        }
        Ok(())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    const BOOK: &str = r#"{
        "model": "Book",
        "fields": [
            {"name": "title", "kind": "text"},
            {"name": "published", "kind": "date"},
            {"name": "authors", "verbose_name": "written by", "kind": "many_to_many"}
        ]
    }"#;

    #[test]
    fn loads_a_valid_document() {
        let schema = ModelSchema::from_json(BOOK).unwrap();
        assert_eq!(schema.model, "Book");
        assert_eq!(schema.fields.len(), 3);

        let authors = schema.field("authors").unwrap();
        assert_eq!(authors.kind, FieldKind::ManyToMany);
        assert_eq!(authors.label(), "written by");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ModelSchema::from_json("{not json").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_field_kinds() {
        let document = r#"{"model": "X", "fields": [{"name": "a", "kind": "blob"}]}"#;
        let err = ModelSchema::from_json(document).unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let document = r#"{
            "model": "X",
            "fields": [
                {"name": "a", "kind": "text"},
                {"name": "a", "kind": "integer"}
            ]
        }"#;
        let err = ModelSchema::from_json(document).unwrap_err();
        match err {
            SchemaError::Invalid(msg) => assert!(msg.contains("duplicate field name 'a'")),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn field_lookup_misses_return_none() {
        let schema = ModelSchema::from_json(BOOK).unwrap();
        assert!(schema.field("missing").is_none());
    }
}
