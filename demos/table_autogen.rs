//! Schema-driven table generation.
//!
//! Loads a model schema from JSON, lets the default rules claim its
//! many-to-many fields, and prints the assembled `<table>` fragment.
//! Fields no rule claims (like `title` below) are skipped.
//!
//! Run with:
//! ```bash
//! cargo run --example table_autogen
//! ```

use colonnade::{EagerSet, HasRelations, ModelSchema, TableBuilder};

struct BookRow {
    authors: EagerSet<String>,
}

impl HasRelations for BookRow {
    type Set = EagerSet<String>;

    fn relation(&self, field: &str) -> Option<&Self::Set> {
        (field == "authors").then_some(&self.authors)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = ModelSchema::from_json(
        r#"{
            "model": "Book",
            "fields": [
                {"name": "title", "kind": "text"},
                {"name": "authors", "kind": "many_to_many"}
            ]
        }"#,
    )?;

    let table = TableBuilder::<BookRow>::with_default_rules().build(&schema);

    let rows = vec![
        BookRow {
            authors: EagerSet::new(vec!["Niklaus Wirth".to_string()]),
        },
        BookRow {
            authors: EagerSet::new(vec!["Ada".to_string(), "Grace".to_string()]),
        },
        BookRow {
            authors: EagerSet::empty(),
        },
    ];

    println!("{}", table.to_html(&rows)?);
    Ok(())
}
