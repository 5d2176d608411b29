//! Completed trigger: a method clause plus its `BEGIN ... END` body.

use std::sync::Arc;

use super::drop_trigger::DropTriggerStatement;
use super::traits::QueryStatement;
use super::trigger_method::TriggerMethod;

/// A full `CREATE TRIGGER` statement.
///
/// Produced by [`TriggerMethod::begin`]; further body statements are appended
/// with [`CompletedTrigger::and`].
#[derive(Debug, Clone)]
pub struct CompletedTrigger {
	trigger_method: TriggerMethod,
	statements: Vec<Arc<dyn QueryStatement + Send + Sync>>,
}

impl CompletedTrigger {
	pub(crate) fn new(
		trigger_method: TriggerMethod,
		first: Arc<dyn QueryStatement + Send + Sync>,
	) -> Self {
		tracing::debug!(
			trigger = %trigger_method.trigger.name,
			event = %trigger_method.event,
			table = %trigger_method.table,
			"built trigger"
		);
		Self {
			trigger_method,
			statements: vec![first],
		}
	}

	/// Append a statement to the trigger body.
	pub fn and<Q>(&mut self, statement: Q) -> &mut Self
	where
		Q: QueryStatement + Send + Sync + 'static,
	{
		self.statements.push(Arc::new(statement));
		self
	}

	/// Returns the method clause.
	pub fn trigger_method(&self) -> &TriggerMethod {
		&self.trigger_method
	}

	/// Returns the trigger name.
	pub fn name(&self) -> &str {
		self.trigger_method.trigger.name()
	}

	/// Returns the number of body statements.
	pub fn statement_count(&self) -> usize {
		self.statements.len()
	}

	/// Build a `DROP TRIGGER IF EXISTS` statement for this trigger.
	pub fn drop_statement(&self) -> DropTriggerStatement {
		self.trigger_method.trigger.drop_statement()
	}
}

impl QueryStatement for CompletedTrigger {
	fn to_sql(&self) -> String {
		let body = self
			.statements
			.iter()
			.map(|s| s.to_sql())
			.collect::<Vec<_>>()
			.join(";\n");
		format!("{}\nBEGIN\n{};\nEND", self.trigger_method.to_sql(), body)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::query::Query;
	use rstest::rstest;

	#[rstest]
	fn test_completed_single_statement() {
		let mut trigger = Query::trigger("t");
		trigger.after();
		let completed = trigger
			.insert_on("users")
			.begin("INSERT INTO audit(user_id) VALUES (NEW.id)");

		assert_eq!(
			completed.to_sql(),
			"CREATE TRIGGER IF NOT EXISTS `t` AFTER INSERT ON users \nBEGIN\nINSERT INTO audit(user_id) VALUES (NEW.id);\nEND"
		);
	}

	#[rstest]
	fn test_completed_multiple_statements() {
		let mut completed = Query::trigger("t").delete_on("users").begin("DELETE FROM a");
		completed.and("DELETE FROM b").and(String::from("DELETE FROM c"));

		assert_eq!(completed.statement_count(), 3);
		assert!(
			completed
				.to_sql()
				.ends_with("\nBEGIN\nDELETE FROM a;\nDELETE FROM b;\nDELETE FROM c;\nEND")
		);
	}

	#[rstest]
	fn test_completed_accessors() {
		let completed = Query::trigger("users_cleanup")
			.delete_on("users")
			.begin("SELECT 1");

		assert_eq!(completed.name(), "users_cleanup");
		assert_eq!(completed.trigger_method().table(), "users");
		assert_eq!(
			completed.drop_statement().to_sql(),
			"DROP TRIGGER IF EXISTS `users_cleanup`"
		);
	}

	#[rstest]
	fn test_completed_nested_statement() {
		let mut drop = Query::drop_trigger();
		drop.name("other");
		let completed = Query::trigger("t").insert_on("users").begin(drop);

		assert!(completed.to_sql().contains("\nBEGIN\nDROP TRIGGER `other`;\nEND"));
	}
}
