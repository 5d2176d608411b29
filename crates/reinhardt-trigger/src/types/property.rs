//! Column references.

use std::fmt;

use crate::expr::{BinOper, Condition};
use crate::query::WriteSql;
use crate::sql_writer::SqlWriter;
use crate::value::Value;

/// A column, optionally qualified by a table or row alias.
///
/// Inside a trigger the `NEW` and `OLD` pseudo-rows are the usual qualifiers,
/// see [`Property::new_row`] and [`Property::old_row`].
///
/// # Example
///
/// ```rust
/// use reinhardt_trigger::Property;
///
/// let cond = Property::new_row("age").gte(18);
/// assert_eq!(cond.to_string(), "NEW.age >= 18");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
	qualifier: Option<String>,
	name: String,
}

impl Property {
	/// Create an unqualified column reference.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			qualifier: None,
			name: name.into(),
		}
	}

	/// Create a column reference qualified by `qualifier`.
	pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			qualifier: Some(qualifier.into()),
			name: name.into(),
		}
	}

	/// `NEW.<name>`
	pub fn new_row(name: impl Into<String>) -> Self {
		Self::qualified("NEW", name)
	}

	/// `OLD.<name>`
	pub fn old_row(name: impl Into<String>) -> Self {
		Self::qualified("OLD", name)
	}

	/// Returns the column name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the qualifier, if any.
	pub fn qualifier(&self) -> Option<&str> {
		self.qualifier.as_deref()
	}

	fn compare(&self, oper: BinOper, value: impl Into<Value>) -> Condition {
		Condition::new(self.clone(), oper, value)
	}

	/// `self = value`
	pub fn eq(&self, value: impl Into<Value>) -> Condition {
		self.compare(BinOper::Equal, value)
	}

	/// `self <> value`
	pub fn ne(&self, value: impl Into<Value>) -> Condition {
		self.compare(BinOper::NotEqual, value)
	}

	/// `self > value`
	pub fn gt(&self, value: impl Into<Value>) -> Condition {
		self.compare(BinOper::GreaterThan, value)
	}

	/// `self >= value`
	pub fn gte(&self, value: impl Into<Value>) -> Condition {
		self.compare(BinOper::GreaterThanOrEqual, value)
	}

	/// `self < value`
	pub fn lt(&self, value: impl Into<Value>) -> Condition {
		self.compare(BinOper::SmallerThan, value)
	}

	/// `self <= value`
	pub fn lte(&self, value: impl Into<Value>) -> Condition {
		self.compare(BinOper::SmallerThanOrEqual, value)
	}

	/// `self LIKE pattern`
	pub fn like(&self, pattern: impl Into<String>) -> Condition {
		self.compare(BinOper::Like, Value::String(pattern.into()))
	}

	/// `self IS NULL`
	pub fn is_null(&self) -> Condition {
		self.compare(BinOper::Is, Value::Null)
	}

	/// `self IS NOT NULL`
	pub fn is_not_null(&self) -> Condition {
		self.compare(BinOper::IsNot, Value::Null)
	}
}

impl WriteSql for Property {
	fn write_sql(&self, writer: &mut SqlWriter) {
		if let Some(qualifier) = &self.qualifier {
			writer.push(qualifier);
			writer.push(".");
		}
		writer.push(&self.name);
	}
}

impl fmt::Display for Property {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut writer = SqlWriter::new();
		self.write_sql(&mut writer);
		f.write_str(writer.sql())
	}
}

impl From<&str> for Property {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for Property {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}
