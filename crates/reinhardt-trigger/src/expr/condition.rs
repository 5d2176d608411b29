//! Condition system for trigger `WHEN` clauses.
//!
//! This module provides [`Condition`] for single comparisons and
//! [`ConditionGroup`] for combining them.

use std::fmt;
use std::sync::Arc;

use super::operators::BinOper;
use crate::query::WriteSql;
use crate::sql_writer::SqlWriter;
use crate::types::Property;
use crate::value::Value;

/// Type of condition combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionType {
	/// All conditions must be true (AND)
	#[default]
	All,
	/// Any condition must be true (OR)
	Any,
}

impl ConditionType {
	fn separator(&self) -> &'static str {
		match self {
			Self::All => " AND ",
			Self::Any => " OR ",
		}
	}
}

/// A single comparison `<column> <operator> <value>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
	lhs: Property,
	oper: BinOper,
	rhs: Value,
}

impl Condition {
	/// Create a comparison.
	pub fn new(lhs: impl Into<Property>, oper: BinOper, rhs: impl Into<Value>) -> Self {
		Self {
			lhs: lhs.into(),
			oper,
			rhs: rhs.into(),
		}
	}

	/// Returns the left-hand column.
	pub fn column(&self) -> &Property {
		&self.lhs
	}

	/// Returns the comparison operator.
	pub fn operator(&self) -> BinOper {
		self.oper
	}

	/// Returns the right-hand value.
	pub fn value(&self) -> &Value {
		&self.rhs
	}

	/// Combine with another predicate using AND.
	pub fn and<C>(self, other: C) -> ConditionGroup
	where
		C: WriteSql + Send + Sync + 'static,
	{
		ConditionGroup::all().add(self).add(other)
	}

	/// Combine with another predicate using OR.
	pub fn or<C>(self, other: C) -> ConditionGroup
	where
		C: WriteSql + Send + Sync + 'static,
	{
		ConditionGroup::any().add(self).add(other)
	}
}

impl WriteSql for Condition {
	fn write_sql(&self, writer: &mut SqlWriter) {
		self.lhs.write_sql(writer);
		writer.push_space_separated(self.oper.as_str());
		self.rhs.write_sql(writer);
	}
}

impl fmt::Display for Condition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut writer = SqlWriter::new();
		self.write_sql(&mut writer);
		f.write_str(writer.sql())
	}
}

/// A parenthesized chain of predicates.
///
/// # Example
///
/// ```rust
/// use reinhardt_trigger::{ConditionGroup, Property};
///
/// let group = ConditionGroup::any()
///     .add(Property::new_row("role").eq("admin"))
///     .add(Property::new_row("role").eq("owner"));
/// assert_eq!(group.to_string(), "(NEW.role = 'admin' OR NEW.role = 'owner')");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConditionGroup {
	condition_type: ConditionType,
	conditions: Vec<Arc<dyn WriteSql + Send + Sync>>,
}

impl ConditionGroup {
	/// Create a group that requires all predicates (AND).
	pub fn all() -> Self {
		Self {
			condition_type: ConditionType::All,
			conditions: Vec::new(),
		}
	}

	/// Create a group that requires any predicate (OR).
	pub fn any() -> Self {
		Self {
			condition_type: ConditionType::Any,
			conditions: Vec::new(),
		}
	}

	/// Add a predicate.
	#[must_use]
	// Intentional builder-pattern method, not std::ops::Add
	#[allow(clippy::should_implement_trait)]
	pub fn add<C>(mut self, condition: C) -> Self
	where
		C: WriteSql + Send + Sync + 'static,
	{
		self.conditions.push(Arc::new(condition));
		self
	}

	/// Returns how the predicates are combined.
	pub fn condition_type(&self) -> ConditionType {
		self.condition_type
	}

	/// Returns the number of predicates.
	pub fn len(&self) -> usize {
		self.conditions.len()
	}

	/// Returns true if the group renders nothing, either because it has no
	/// predicates or because every predicate is itself empty.
	pub fn is_empty(&self) -> bool {
		self.conditions.iter().all(|c| c.is_empty())
	}
}

impl WriteSql for ConditionGroup {
	fn write_sql(&self, writer: &mut SqlWriter) {
		let conditions: Vec<_> = self
			.conditions
			.iter()
			.filter(|c| !c.is_empty())
			.collect();
		if conditions.is_empty() {
			return;
		}
		writer.push("(");
		writer.push_list(&conditions, self.condition_type.separator(), |c, w| {
			c.write_sql(w)
		});
		writer.push(")");
	}

	fn is_empty(&self) -> bool {
		ConditionGroup::is_empty(self)
	}
}

impl fmt::Display for ConditionGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut writer = SqlWriter::new();
		self.write_sql(&mut writer);
		f.write_str(writer.sql())
	}
}
