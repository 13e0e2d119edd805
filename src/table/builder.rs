//! Explicit column-rule registration and table generation.
//!
//! Auto-generation walks a model schema and, for each field, tries the
//! registered rules in order. The first rule whose predicate accepts the
//! field and whose factory produces a column wins; fields no rule claims
//! are left out of the table. Registration is explicit: nothing registers
//! itself as a side effect of being linked in.

use std::fmt;

use crate::columns::RelationListColumn;
use crate::config::RenderConfig;
use crate::relation::RelatedSet;
use crate::schema::{FieldDescriptor, FieldKind, ModelSchema};
use crate::table::column::{BoundColumn, BoundRelationList, HasRelations};
use crate::table::render::Table;

/// Factory half of a rule: builds the bound column for an accepted field,
/// or reports "not applicable" so the next rule can try.
pub type ColumnFactory<Row> = Box<
    dyn Fn(&FieldDescriptor, &RenderConfig) -> Option<Box<dyn BoundColumn<Row>>> + Send + Sync,
>;

/// One auto-generation rule: a predicate over field descriptors plus the
/// factory that builds the column.
pub struct Rule<Row> {
    name: &'static str,
    applies: fn(&FieldDescriptor) -> bool,
    build: ColumnFactory<Row>,
}

impl<Row> Rule<Row> {
    /// A named rule from its predicate and factory.
    pub fn new(
        name: &'static str,
        applies: fn(&FieldDescriptor) -> bool,
        build: impl Fn(&FieldDescriptor, &RenderConfig) -> Option<Box<dyn BoundColumn<Row>>>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Rule {
            name,
            applies,
            build: Box::new(build),
        }
    }

    /// The rule's name, used in generation logs.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<Row> fmt::Debug for Rule<Row> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// The rule that claims many-to-many fields for [`RelationListColumn`].
pub fn relation_list_rule<Row>() -> Rule<Row>
where
    Row: HasRelations + 'static,
    Row::Set: 'static,
    <Row::Set as RelatedSet>::Record: fmt::Display,
{
    Rule::new(
        "relation_list",
        |field| field.kind == FieldKind::ManyToMany,
        |field, config| {
            let mut column = RelationListColumn::<Row::Set>::from_field(field)?
                .separator(config.separator.clone());
            column.options_mut().empty_text = config.empty_text.clone();
            Some(Box::new(BoundRelationList::new(field.name.clone(), column)))
        },
    )
}

/// The rules every table starts from. Currently just the relation-list
/// rule; scalar fields are expected to be claimed by application rules.
pub fn default_rules<Row>() -> Vec<Rule<Row>>
where
    Row: HasRelations + 'static,
    Row::Set: 'static,
    <Row::Set as RelatedSet>::Record: fmt::Display,
{
    vec![relation_list_rule()]
}

/// Builds [`Table`]s from model schemas using explicitly registered rules.
pub struct TableBuilder<Row> {
    rules: Vec<Rule<Row>>,
    config: RenderConfig,
}

impl<Row> TableBuilder<Row> {
    /// Builder with no rules registered.
    pub fn new() -> Self {
        TableBuilder {
            rules: Vec::new(),
            config: RenderConfig::default(),
        }
    }

    /// Builder pre-loaded with [`default_rules`].
    pub fn with_default_rules() -> Self
    where
        Row: HasRelations + 'static,
        Row::Set: 'static,
        <Row::Set as RelatedSet>::Record: fmt::Display,
    {
        TableBuilder {
            rules: default_rules(),
            config: RenderConfig::default(),
        }
    }

    /// Use `config` as the rendering defaults seeded into generated
    /// columns.
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Register `rule` after the already-registered ones.
    pub fn rule(mut self, rule: Rule<Row>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Generate a table for `schema`.
    ///
    /// Fields are visited in declaration order; for each, the first rule
    /// whose predicate and factory both accept it contributes the column.
    /// Unclaimed fields are skipped.
    pub fn build(&self, schema: &ModelSchema) -> Table<Row> {
        let mut columns: Vec<Box<dyn BoundColumn<Row>>> = Vec::new();
        for field in &schema.fields {
            match self.detect(field) {
                Some((rule_name, column)) => {
                    log::debug!(
                        "field '{}' handled by column rule '{}'",
                        field.name,
                        rule_name
                    );
                    columns.push(column);
                }
                None => {
                    log::debug!("no column rule matched field '{}', skipping", field.name);
                }
            }
        }
        Table::new(columns)
    }

    fn detect(&self, field: &FieldDescriptor) -> Option<(&'static str, Box<dyn BoundColumn<Row>>)> {
        for rule in &self.rules {
            if !(rule.applies)(field) {
                continue;
            }
            if let Some(column) = (rule.build)(field, &self.config) {
                return Some((rule.name, column));
            }
        }
        None
    }
}

impl<Row> Default for TableBuilder<Row> {
    fn default() -> Self {
        Self::new()
    }
}
