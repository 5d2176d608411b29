//! Comparison operators for trigger predicates.

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOper {
	/// Equal (=)
	Equal,
	/// Not equal (<>)
	NotEqual,
	/// Less than (<)
	SmallerThan,
	/// Less than or equal (<=)
	SmallerThanOrEqual,
	/// Greater than (>)
	GreaterThan,
	/// Greater than or equal (>=)
	GreaterThanOrEqual,
	/// LIKE
	Like,
	/// IS
	Is,
	/// IS NOT
	IsNot,
}

impl BinOper {
	/// Returns the SQL representation of this operator.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Equal => "=",
			Self::NotEqual => "<>",
			Self::SmallerThan => "<",
			Self::SmallerThanOrEqual => "<=",
			Self::GreaterThan => ">",
			Self::GreaterThanOrEqual => ">=",
			Self::Like => "LIKE",
			Self::Is => "IS",
			Self::IsNot => "IS NOT",
		}
	}
}
