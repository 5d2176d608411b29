//! Rendering capabilities shared by every trigger fragment.

use std::fmt::Debug;

use crate::sql_writer::SqlWriter;

/// A complete statement that renders its own SQL text.
///
/// Trigger headers, method clauses, completed triggers and the statements
/// placed in a trigger body all implement this trait.
pub trait QueryStatement: Debug {
	/// Render the statement as SQL.
	fn to_sql(&self) -> String;
}

/// A fragment that appends itself to a shared [`SqlWriter`].
///
/// Used for `WHEN` predicates, columns and values, which render inline into
/// the buffer of the enclosing statement.
pub trait WriteSql: Debug {
	/// Append this fragment to `writer`.
	fn write_sql(&self, writer: &mut SqlWriter);

	/// Returns true if this fragment renders no SQL at all.
	///
	/// Empty fragments are skipped by enclosing groups and `WHEN` clauses.
	fn is_empty(&self) -> bool {
		false
	}
}

// Raw SQL is trusted and emitted verbatim.

impl QueryStatement for String {
	fn to_sql(&self) -> String {
		self.clone()
	}
}

impl QueryStatement for &'static str {
	fn to_sql(&self) -> String {
		(*self).to_string()
	}
}

impl WriteSql for String {
	fn write_sql(&self, writer: &mut SqlWriter) {
		writer.push(self);
	}

	fn is_empty(&self) -> bool {
		self.trim().is_empty()
	}
}

impl WriteSql for &'static str {
	fn write_sql(&self, writer: &mut SqlWriter) {
		writer.push(self);
	}

	fn is_empty(&self) -> bool {
		self.trim().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_raw_statement() {
		let owned = String::from("DELETE FROM sessions");
		assert_eq!(owned.to_sql(), "DELETE FROM sessions");
		assert_eq!("SELECT 1".to_sql(), "SELECT 1");
	}

	#[rstest]
	fn test_raw_predicate() {
		let mut writer = SqlWriter::from("WHEN ");
		"NEW.id > 0".write_sql(&mut writer);
		String::from(" AND 1").write_sql(&mut writer);
		assert_eq!(writer.sql(), "WHEN NEW.id > 0 AND 1");
	}

	#[rstest]
	#[case("", true)]
	#[case("  \n\t", true)]
	#[case("NEW.id > 0", false)]
	fn test_raw_predicate_is_empty(#[case] raw: &'static str, #[case] expected: bool) {
		assert_eq!(WriteSql::is_empty(&raw), expected);
		assert_eq!(WriteSql::is_empty(&raw.to_string()), expected);
	}
}
