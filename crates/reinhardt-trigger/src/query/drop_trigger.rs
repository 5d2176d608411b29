//! DROP TRIGGER statement builder
//!
//! This module provides the `DropTriggerStatement` type for building SQL DROP TRIGGER queries.

use super::traits::QueryStatement;
use crate::sql_writer::SqlWriter;

/// DROP TRIGGER statement builder
///
/// # Examples
///
/// ```rust
/// use reinhardt_trigger::{Query, QueryStatement};
///
/// let mut query = Query::drop_trigger();
/// query.name("users_audit").if_exists();
/// assert_eq!(query.to_sql(), "DROP TRIGGER IF EXISTS `users_audit`");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropTriggerStatement {
	pub(crate) name: Option<String>,
	pub(crate) if_exists: bool,
}

impl DropTriggerStatement {
	/// Create a new DROP TRIGGER statement
	pub fn new() -> Self {
		Self::default()
	}

	/// Take the ownership of data in the current statement
	pub fn take(&mut self) -> Self {
		std::mem::take(self)
	}

	/// Set the trigger name
	pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
		self.name = Some(name.into());
		self
	}

	/// Add IF EXISTS clause
	pub fn if_exists(&mut self) -> &mut Self {
		self.if_exists = true;
		self
	}
}

impl QueryStatement for DropTriggerStatement {
	fn to_sql(&self) -> String {
		let mut writer = SqlWriter::from("DROP TRIGGER");
		if self.if_exists {
			writer.push_space();
			writer.push("IF EXISTS");
		}
		if let Some(name) = &self.name {
			writer.push_space();
			writer.push_quoted_if_needed(name);
		}
		writer.into_string()
	}
}
