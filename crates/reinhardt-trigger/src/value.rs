//! Inline SQL values.
//!
//! Trigger DDL cannot carry bound parameters, so every value used inside a
//! `WHEN` predicate is rendered as a literal.

use crate::query::WriteSql;
use crate::sql_writer::SqlWriter;
use crate::types::Property;

/// A literal or column operand of a predicate.
///
/// # Example
///
/// ```rust
/// use reinhardt_trigger::{SqlWriter, Value, WriteSql};
///
/// let mut writer = SqlWriter::new();
/// Value::from("it's").write_sql(&mut writer);
/// assert_eq!(writer.sql(), "'it''s'");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// SQL NULL
	Null,
	/// Boolean, rendered as `1` / `0`
	Bool(bool),
	/// 64-bit signed integer
	Int(i64),
	/// 64-bit floating point, rendered as `NULL` when not finite
	Double(f64),
	/// Text, rendered single-quoted
	String(String),
	/// Another column, rendered unquoted
	Column(Property),
}

impl Value {
	/// Returns `true` if this value is SQL NULL.
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl WriteSql for Value {
	fn write_sql(&self, writer: &mut SqlWriter) {
		match self {
			Self::Null => writer.push("NULL"),
			Self::Bool(v) => writer.push(if *v { "1" } else { "0" }),
			Self::Int(v) => writer.push(&v.to_string()),
			// SQLite has no literal for NaN or infinity
			Self::Double(v) if !v.is_finite() => writer.push("NULL"),
			Self::Double(v) => writer.push(&v.to_string()),
			Self::String(v) => {
				// Escape single quotes by doubling them
				writer.push("'");
				writer.push(&v.replace('\'', "''"));
				writer.push("'");
			}
			Self::Column(property) => property.write_sql(writer),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Self::Int(i64::from(v))
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Self::Int(v)
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Self::Int(i64::from(v))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::Double(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl From<Property> for Value {
	fn from(v: Property) -> Self {
		Self::Column(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map_or(Self::Null, Into::into)
	}
}
