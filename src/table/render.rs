//! Generated tables and HTML assembly.

use std::fmt;

use crate::columns::RenderError;
use crate::html::{escape, Html};
use crate::table::column::BoundColumn;

/// A renderable table: an ordered list of columns bound to a row type.
///
/// The column list is fixed at construction; rendering borrows the table
/// immutably, so one table serves many rows and many concurrent renders.
pub struct Table<Row> {
    columns: Vec<Box<dyn BoundColumn<Row>>>,
}

impl<Row> Table<Row> {
    /// Table over an explicit column list.
    pub fn new(columns: Vec<Box<dyn BoundColumn<Row>>>) -> Self {
        Table { columns }
    }

    /// The bound columns, in display order.
    pub fn columns(&self) -> &[Box<dyn BoundColumn<Row>>] {
        &self.columns
    }

    /// Number of columns, including invisible ones.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header labels of the visible columns.
    pub fn headers(&self) -> Vec<String> {
        self.visible().map(|column| column.header()).collect()
    }

    /// Render the visible cells of one row, in column order.
    ///
    /// # Errors
    ///
    /// The first failing cell aborts the row.
    pub fn render_row(&self, row: &Row) -> Result<Vec<Html>, RenderError> {
        self.visible()
            .map(|column| column.render_cell(row))
            .collect()
    }

    /// Render a complete `<table>` fragment for `rows`.
    ///
    /// Header text is escaped here; cell values are already safe markup.
    /// Orderable columns carry an `orderable` class on their `<th>`.
    ///
    /// # Errors
    ///
    /// The first failing cell aborts the whole fragment.
    pub fn to_html(&self, rows: &[Row]) -> Result<Html, RenderError> {
        let mut out = String::from("<table>\n<thead>\n<tr>");
        for column in self.visible() {
            if column.options().is_orderable() {
                out.push_str("<th class=\"orderable\">");
            } else {
                out.push_str("<th>");
            }
            out.push_str(escape(&column.header()).as_str());
            out.push_str("</th>");
        }
        out.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in rows {
            out.push_str("<tr>");
            for cell in self.render_row(row)? {
                out.push_str("<td>");
                out.push_str(cell.as_str());
                out.push_str("</td>");
            }
            out.push_str("</tr>\n");
        }

        out.push_str("</tbody>\n</table>");
        Ok(Html::raw(out))
    }

    fn visible(&self) -> impl Iterator<Item = &dyn BoundColumn<Row>> {
        self.columns
            .iter()
            .filter(|column| column.options().visible)
            .map(|column| column.as_ref())
    }
}

impl<Row> fmt::Debug for Table<Row> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.headers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::RelationListColumn;
    use crate::relation::EagerSet;
    use crate::table::column::{BoundRelationList, HasRelations};
    use crate::test_helpers::{people, Person};

    struct TeamRow {
        members: EagerSet<Person>,
    }

    impl HasRelations for TeamRow {
        type Set = EagerSet<Person>;

        fn relation(&self, field: &str) -> Option<&Self::Set> {
            (field == "members").then_some(&self.members)
        }
    }

    fn member_column() -> Box<dyn BoundColumn<TeamRow>> {
        let column: RelationListColumn<EagerSet<Person>> =
            RelationListColumn::from_transform(|person: &Person| person.full_name());
        Box::new(BoundRelationList::new("members", column))
    }

    #[test]
    fn renders_headers_and_rows() {
        let table = Table::new(vec![member_column()]);
        assert_eq!(table.headers(), vec!["Members".to_string()]);

        let row = TeamRow {
            members: EagerSet::new(people(3, 7)),
        };
        let cells = table.render_row(&row).unwrap();
        assert_eq!(cells.len(), 1);
        // Three members, two separators.
        assert_eq!(cells[0].as_str().matches(", ").count(), 2);
    }

    #[test]
    fn invisible_columns_are_skipped() {
        let mut hidden: RelationListColumn<EagerSet<Person>> =
            RelationListColumn::from_transform(|person: &Person| person.full_name());
        hidden.options_mut().visible = false;

        let table: Table<TeamRow> = Table::new(vec![
            Box::new(BoundRelationList::new("members", hidden)),
            member_column(),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.headers().len(), 1);

        let row = TeamRow {
            members: EagerSet::new(people(2, 11)),
        };
        assert_eq!(table.render_row(&row).unwrap().len(), 1);
    }

    #[test]
    fn to_html_assembles_the_fragment() {
        let table = Table::new(vec![member_column()]);
        let rows = vec![
            TeamRow {
                members: EagerSet::new(vec![Person::new("Ada", "Lovelace")]),
            },
            TeamRow {
                members: EagerSet::empty(),
            },
        ];

        let html = table.to_html(&rows).unwrap();
        let html = html.as_str();
        assert!(html.starts_with("<table>"));
        // Relation columns are not orderable, so no class is emitted.
        assert!(html.contains("<th>Members</th>"));
        assert!(html.contains("<td>Ada Lovelace</td>"));
        assert!(html.contains("<td>-</td>"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn empty_table_renders_no_body_cells() {
        let table: Table<TeamRow> = Table::new(Vec::new());
        assert!(table.is_empty());

        let row = TeamRow {
            members: EagerSet::empty(),
        };
        let html = table.to_html(&[row]).unwrap();
        assert!(!html.as_str().contains("<td>"));
    }
}
