//! Relation-list column basics.
//!
//! Demonstrates the rendering contract: default hooks, a custom separator,
//! a filter that reorders and limits, the empty-set placeholder, and
//! escaping of hostile item text.
//!
//! Run with:
//! ```bash
//! cargo run --example relation_column
//! ```

use colonnade::{EagerSet, RelatedSet, RelationListColumn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let friends: EagerSet<String> = EagerSet::new(vec![
        "Ada".to_string(),
        "Grace".to_string(),
        "Niklaus".to_string(),
    ]);

    let column = RelationListColumn::new();
    println!("default:  {}", column.render(&friends)?);

    let piped = RelationListColumn::new().separator(" | ");
    println!("custom:   {}", piped.render(&friends)?);

    let last_two = RelationListColumn::new().filter(|set: &EagerSet<String>| {
        let mut records = set.all()?;
        records.reverse();
        records.truncate(2);
        Ok(records)
    });
    println!("filtered: {}", last_two.render(&friends)?);

    let empty = EagerSet::<String>::empty();
    println!("empty:    {}", column.render(&empty)?);

    let hostile = EagerSet::new(vec!["<script>alert(1)</script>".to_string()]);
    println!("escaped:  {}", column.render(&hostile)?);

    Ok(())
}
