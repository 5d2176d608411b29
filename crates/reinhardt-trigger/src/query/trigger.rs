//! Trigger header builder
//!
//! This module provides the [`Trigger`] type that renders the
//! `CREATE [TEMP] TRIGGER IF NOT EXISTS <name> [timing]` prefix and hands out
//! [`TriggerMethod`] builders for the three row methods.

use super::drop_trigger::DropTriggerStatement;
use super::traits::QueryStatement;
use super::trigger_method::TriggerMethod;
use crate::error::TriggerResult;
use crate::sql_writer::SqlWriter;
use crate::types::{IntoTableName, Property, TriggerEvent, TriggerTiming};

/// Trigger header builder
///
/// # Examples
///
/// ```rust
/// use reinhardt_trigger::{Query, QueryStatement};
///
/// let mut trigger = Query::trigger("users_audit");
/// trigger.temporary().before();
/// assert_eq!(
///     trigger.to_sql(),
///     "CREATE TEMP TRIGGER IF NOT EXISTS `users_audit` BEFORE "
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
	pub(crate) name: String,
	pub(crate) temporary: bool,
	pub(crate) timing: Option<TriggerTiming>,
}

impl Trigger {
	/// Start a trigger named `name`.
	pub fn create(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			temporary: false,
			timing: None,
		}
	}

	/// Create the trigger as TEMP.
	pub fn temporary(&mut self) -> &mut Self {
		self.temporary = true;
		self
	}

	/// Fire before the method.
	pub fn before(&mut self) -> &mut Self {
		self.with_timing(Some(TriggerTiming::Before))
	}

	/// Fire after the method.
	pub fn after(&mut self) -> &mut Self {
		self.with_timing(Some(TriggerTiming::After))
	}

	/// Fire instead of the method (views only).
	pub fn instead_of(&mut self) -> &mut Self {
		self.with_timing(Some(TriggerTiming::InsteadOf))
	}

	/// Set or clear the timing. The last call wins.
	pub fn with_timing(&mut self, timing: Option<TriggerTiming>) -> &mut Self {
		self.timing = timing;
		self
	}

	/// Returns the trigger name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true if the trigger is TEMP.
	pub fn is_temporary(&self) -> bool {
		self.temporary
	}

	/// Returns the timing, if set.
	pub fn timing(&self) -> Option<TriggerTiming> {
		self.timing
	}

	/// Start a DELETE method clause on `table`.
	pub fn delete_on(&self, table: impl IntoTableName) -> TriggerMethod {
		TriggerMethod::unchecked(self.clone(), TriggerEvent::Delete, table, Vec::new())
	}

	/// Start an INSERT method clause on `table`.
	pub fn insert_on(&self, table: impl IntoTableName) -> TriggerMethod {
		TriggerMethod::unchecked(self.clone(), TriggerEvent::Insert, table, Vec::new())
	}

	/// Start an UPDATE method clause on `table`, optionally restricted to
	/// `columns`.
	///
	/// UPDATE always accepts an `OF` list, so this never fails in practice;
	/// it returns a `Result` to share the construction path of
	/// [`TriggerMethod::new`].
	pub fn update_on<I, P>(&self, table: impl IntoTableName, columns: I) -> TriggerResult<TriggerMethod>
	where
		I: IntoIterator<Item = P>,
		P: Into<Property>,
	{
		TriggerMethod::new(
			self.clone(),
			TriggerEvent::Update,
			table,
			columns.into_iter().map(Into::into).collect(),
		)
	}

	/// Build a `DROP TRIGGER IF EXISTS` statement for this trigger.
	pub fn drop_statement(&self) -> DropTriggerStatement {
		let mut stmt = DropTriggerStatement::new();
		stmt.name(self.name.clone()).if_exists();
		stmt
	}
}

impl QueryStatement for Trigger {
	fn to_sql(&self) -> String {
		let mut writer = SqlWriter::from("CREATE ");
		if self.temporary {
			writer.push("TEMP ");
		}
		writer.push("TRIGGER IF NOT EXISTS ");
		writer.push_quoted_if_needed(&self.name);
		writer.push_space();
		if let Some(timing) = self.timing {
			writer.push(timing.as_str());
			writer.push_space();
		}
		writer.into_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_trigger_defaults() {
		let trigger = Trigger::create("t");
		assert_eq!(trigger.name(), "t");
		assert!(!trigger.is_temporary());
		assert_eq!(trigger.timing(), None);
		assert_eq!(trigger.to_sql(), "CREATE TRIGGER IF NOT EXISTS `t` ");
	}

	#[rstest]
	#[case(TriggerTiming::Before, "CREATE TRIGGER IF NOT EXISTS `t` BEFORE ")]
	#[case(TriggerTiming::After, "CREATE TRIGGER IF NOT EXISTS `t` AFTER ")]
	#[case(TriggerTiming::InsteadOf, "CREATE TRIGGER IF NOT EXISTS `t` INSTEAD OF ")]
	fn test_trigger_timing(#[case] timing: TriggerTiming, #[case] expected: &str) {
		let mut trigger = Trigger::create("t");
		trigger.with_timing(Some(timing));
		assert_eq!(trigger.to_sql(), expected);
	}

	#[rstest]
	fn test_trigger_last_timing_wins() {
		let mut trigger = Trigger::create("t");
		trigger.before().instead_of().after();
		assert_eq!(trigger.timing(), Some(TriggerTiming::After));
	}

	#[rstest]
	fn test_trigger_temporary_quoted_name() {
		let mut trigger = Trigger::create("\"t\"");
		trigger.temporary();
		assert_eq!(trigger.to_sql(), "CREATE TEMP TRIGGER IF NOT EXISTS \"t\" ");
	}

	#[rstest]
	fn test_trigger_shortcuts() {
		let trigger = Trigger::create("t");

		assert_eq!(trigger.insert_on("users").event(), TriggerEvent::Insert);
		assert_eq!(trigger.delete_on("users").event(), TriggerEvent::Delete);

		let update = trigger.update_on("users", ["name", "age"]).unwrap();
		assert_eq!(update.event(), TriggerEvent::Update);
		assert_eq!(update.columns().len(), 2);
	}

	#[rstest]
	fn test_trigger_update_on_without_columns() {
		let trigger = Trigger::create("t");
		let update = trigger.update_on("users", Vec::<Property>::new()).unwrap();
		assert!(update.columns().is_empty());
	}

	#[rstest]
	fn test_trigger_drop_statement() {
		let mut trigger = Trigger::create("users_audit");
		trigger.after();
		assert_eq!(
			trigger.drop_statement().to_sql(),
			"DROP TRIGGER IF EXISTS `users_audit`"
		);
	}
}
