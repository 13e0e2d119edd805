//! Display column for many-to-many relation fields.

use std::fmt;

use crate::columns::{ColumnOptions, RenderError};
use crate::html::{escape, Html};
use crate::relation::{RelatedSet, RelationError};
use crate::schema::{FieldDescriptor, FieldKind};
use crate::text::force_text;
use crate::util::ucfirst;

/// Default separator between rendered items.
pub const DEFAULT_SEPARATOR: &str = ", ";

type TransformFn<R> = Box<dyn Fn(&R) -> String + Send + Sync>;
type FilterFn<S> =
    Box<dyn Fn(&S) -> Result<Vec<<S as RelatedSet>::Record>, RelationError> + Send + Sync>;

/// Renders the members of a many-to-many relation as one escaped,
/// separator-joined cell.
///
/// Ordering defaults to disabled for this column.
///
/// Two hooks cover the usual customizations, both injected at construction:
/// - `transform` turns one related record into display text; the default is
///   [`force_text`]
/// - `filter` picks which records to show and in what order; the default is
///   the accessor's full set
///
/// Displaying a list of friends by name:
///
/// ```
/// use colonnade::{EagerSet, RelationListColumn};
///
/// #[derive(Clone)]
/// struct Friend {
///     first_name: String,
///     last_name: String,
/// }
///
/// let column = RelationListColumn::from_transform(|friend: &Friend| {
///     format!("{} {}", friend.first_name, friend.last_name)
/// });
///
/// let friends = EagerSet::new(vec![
///     Friend { first_name: "Grace".into(), last_name: "Hopper".into() },
///     Friend { first_name: "Ada".into(), last_name: "Lovelace".into() },
/// ]);
/// assert_eq!(column.render(&friends)?.as_str(), "Grace Hopper, Ada Lovelace");
/// # Ok::<(), colonnade::RenderError>(())
/// ```
pub struct RelationListColumn<S: RelatedSet> {
    options: ColumnOptions,
    transform: TransformFn<S::Record>,
    filter: FilterFn<S>,
    separator: String,
}

impl<S: RelatedSet> RelationListColumn<S> {
    /// Column with default options and hooks.
    pub fn new() -> Self
    where
        S::Record: fmt::Display,
    {
        Self::with_options(ColumnOptions::default())
    }

    /// Column with explicit options and default hooks.
    ///
    /// Leaves `orderable` untouched when the caller set it; otherwise it
    /// defaults to `false`.
    pub fn with_options(options: ColumnOptions) -> Self
    where
        S::Record: fmt::Display,
    {
        Self::assemble(options, Box::new(|record| force_text(record)))
    }

    /// Column whose per-record text comes entirely from `transform`, for
    /// record types with no `Display` of their own.
    pub fn from_transform(
        transform: impl Fn(&S::Record) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::assemble(ColumnOptions::default(), Box::new(transform))
    }

    fn assemble(mut options: ColumnOptions, transform: TransformFn<S::Record>) -> Self {
        options.orderable.get_or_insert(false);
        RelationListColumn {
            options,
            transform,
            filter: Box::new(|set: &S| set.all()),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Replace the per-record transform.
    pub fn transform(
        mut self,
        transform: impl Fn(&S::Record) -> String + Send + Sync + 'static,
    ) -> Self {
        self.transform = Box::new(transform);
        self
    }

    /// Replace the filter selecting which records to display, in what
    /// order.
    pub fn filter(
        mut self,
        filter: impl Fn(&S) -> Result<Vec<S::Record>, RelationError> + Send + Sync + 'static,
    ) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Replace the separator inserted between items.
    ///
    /// The separator is escaped at render time; markup-significant
    /// characters in it are neutralized, not emitted.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Shared column configuration.
    pub fn options(&self) -> &ColumnOptions {
        &self.options
    }

    /// Mutable access for the base attributes the table framework may set
    /// after construction.
    pub fn options_mut(&mut self) -> &mut ColumnOptions {
        &mut self.options
    }

    /// Render the relation accessor for one row.
    ///
    /// An empty relation renders as the configured placeholder, returned
    /// verbatim. Otherwise each filtered record is transformed, escaped,
    /// and joined with the escaped separator; the result needs no further
    /// escaping.
    ///
    /// # Errors
    ///
    /// Accessor failures surface as [`RenderError::Relation`]; nothing is
    /// recovered locally.
    pub fn render(&self, set: &S) -> Result<Html, RenderError> {
        if !set.exists()? {
            return Ok(Html::raw(self.options.empty_text.clone()));
        }

        let records = (self.filter)(set)?;
        let separator = escape(&self.separator);
        let items: Vec<String> = records
            .iter()
            .map(|record| escape(&(self.transform)(record)).into_string())
            .collect();

        Ok(Html::raw(items.join(separator.as_str())))
    }

    /// Column instance for a many-to-many field descriptor.
    ///
    /// Returns `None` for any other field kind so table generation can try
    /// the next candidate column type. The instance takes its header from
    /// the field's label, first character upper-cased.
    pub fn from_field(field: &FieldDescriptor) -> Option<Self>
    where
        S::Record: fmt::Display,
    {
        if field.kind != FieldKind::ManyToMany {
            return None;
        }

        let options = ColumnOptions {
            verbose_name: Some(ucfirst(&field.label())),
            ..ColumnOptions::default()
        };
        Some(Self::with_options(options))
    }
}

impl<S: RelatedSet> Default for RelationListColumn<S>
where
    S::Record: fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RelatedSet> fmt::Debug for RelationListColumn<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationListColumn")
            .field("options", &self.options)
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}
