//! Trigger method clause builder
//!
//! A [`TriggerMethod`] extends a [`Trigger`] header with the method the trigger
//! fires on, the optional `OF` column list, the `ON` table, `FOR EACH ROW` and
//! an optional `WHEN` predicate:
//!
//! ```text
//! <header>UPDATE OF name,age ON users FOR EACH ROW  WHEN <predicate>
//! ```
//!
//! Every keyword is appended space-separated and the clause always ends with a
//! single trailing space, so adjacent keywords produce double spaces. SQLite
//! accepts the result as-is.

use std::sync::Arc;

use super::completed_trigger::CompletedTrigger;
use super::traits::{QueryStatement, WriteSql};
use super::trigger::Trigger;
use crate::error::{TriggerError, TriggerResult};
use crate::sql_writer::SqlWriter;
use crate::types::{IntoTableName, Property, TriggerEvent};

/// Trigger method clause builder
///
/// # Examples
///
/// ```rust
/// use reinhardt_trigger::{Property, Query, QueryStatement, TriggerEvent, TriggerMethod};
///
/// let mut trigger = Query::trigger("users_rename");
/// trigger.after();
///
/// let mut method = TriggerMethod::new(
///     trigger,
///     TriggerEvent::Update,
///     "users",
///     vec![Property::new("name")],
/// )
/// .unwrap();
/// method.for_each_row();
///
/// assert_eq!(
///     method.to_sql(),
///     "CREATE TRIGGER IF NOT EXISTS `users_rename` AFTER UPDATE OF name ON users FOR EACH ROW  "
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TriggerMethod {
	pub(crate) trigger: Trigger,
	pub(crate) event: TriggerEvent,
	pub(crate) table: String,
	pub(crate) columns: Vec<Property>,
	pub(crate) for_each_row: bool,
	pub(crate) when: Option<Arc<dyn WriteSql + Send + Sync>>,
}

impl TriggerMethod {
	/// Create a method clause.
	///
	/// # Errors
	///
	/// Returns [`TriggerError::InvalidTriggerDefinition`] if `columns` is not
	/// empty and `event` is not [`TriggerEvent::Update`].
	pub fn new(
		trigger: Trigger,
		event: TriggerEvent,
		table: impl IntoTableName,
		columns: Vec<Property>,
	) -> TriggerResult<Self> {
		if !columns.is_empty() && !event.accepts_columns() {
			tracing::debug!(
				trigger = %trigger.name,
				event = %event,
				columns = columns.len(),
				"rejected OF columns for non-UPDATE trigger method"
			);
			return Err(TriggerError::InvalidTriggerDefinition { event });
		}
		Ok(Self::unchecked(trigger, event, table, columns))
	}

	/// Create a method clause from a textual method name such as `"update"`.
	///
	/// # Errors
	///
	/// Returns [`TriggerError::UnknownEvent`] for an unrecognized method name,
	/// and otherwise fails like [`TriggerMethod::new`].
	pub fn parse(
		trigger: Trigger,
		method_name: &str,
		table: impl IntoTableName,
		columns: Vec<Property>,
	) -> TriggerResult<Self> {
		let event = method_name.parse::<TriggerEvent>()?;
		Self::new(trigger, event, table, columns)
	}

	pub(crate) fn unchecked(
		trigger: Trigger,
		event: TriggerEvent,
		table: impl IntoTableName,
		columns: Vec<Property>,
	) -> Self {
		Self {
			trigger,
			event,
			table: table.into_table_name(),
			columns,
			for_each_row: false,
			when: None,
		}
	}

	/// Add `FOR EACH ROW`. Calling this more than once has no further effect.
	pub fn for_each_row(&mut self) -> &mut Self {
		self.for_each_row = true;
		self
	}

	/// Set the `WHEN` predicate, replacing any previous one.
	///
	/// A predicate that renders nothing (an empty [`ConditionGroup`] or blank
	/// raw SQL) leaves the clause without `WHEN`.
	///
	/// [`ConditionGroup`]: crate::expr::ConditionGroup
	pub fn when<C>(&mut self, predicate: C) -> &mut Self
	where
		C: WriteSql + Send + Sync + 'static,
	{
		self.when = Some(Arc::new(predicate));
		self
	}

	/// Finish the clause with the first statement of the trigger body.
	///
	/// The builder is left untouched and can still be rendered or reused.
	pub fn begin<Q>(&self, statement: Q) -> CompletedTrigger
	where
		Q: QueryStatement + Send + Sync + 'static,
	{
		CompletedTrigger::new(self.clone(), Arc::new(statement))
	}

	/// Returns the header this clause extends.
	pub fn trigger(&self) -> &Trigger {
		&self.trigger
	}

	/// Returns the method.
	pub fn event(&self) -> TriggerEvent {
		self.event
	}

	/// Returns the resolved table name.
	pub fn table(&self) -> &str {
		&self.table
	}

	/// Returns the `OF` columns in input order.
	pub fn columns(&self) -> &[Property] {
		&self.columns
	}

	/// Returns true if `FOR EACH ROW` was requested.
	pub fn is_for_each_row(&self) -> bool {
		self.for_each_row
	}

	/// Returns true if a `WHEN` predicate is set and renders any SQL.
	pub fn has_when(&self) -> bool {
		self.when.as_ref().is_some_and(|predicate| !predicate.is_empty())
	}
}

impl QueryStatement for TriggerMethod {
	fn to_sql(&self) -> String {
		let mut writer = SqlWriter::from(self.trigger.to_sql());
		writer.push(self.event.as_str());
		if !self.columns.is_empty() {
			writer.push_space_separated("OF");
			writer.push_list(&self.columns, ",", |column, w| column.write_sql(w));
		}
		writer.push_space_separated("ON");
		writer.push(&self.table);
		if self.for_each_row {
			writer.push_space_separated("FOR EACH ROW");
		}
		if let Some(predicate) = self.when.as_ref().filter(|p| !p.is_empty()) {
			writer.push_space_separated("WHEN");
			predicate.write_sql(&mut writer);
			writer.push_space();
		}
		writer.push_space();
		writer.into_string()
	}
}
