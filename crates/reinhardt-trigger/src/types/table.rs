//! Table references.
//!
//! A trigger is attached to a table. The table can be named directly with a
//! string, or through a type-tagged [`ModelTable`] whose name comes from the
//! [`Model`] implementation.

use std::fmt;
use std::marker::PhantomData;

/// A type that maps onto a database table.
///
/// # Example
///
/// ```rust
/// use reinhardt_trigger::{IntoTableName, Model, ModelTable};
///
/// struct User;
///
/// impl Model for User {
///     fn table_name() -> &'static str {
///         "users"
///     }
/// }
///
/// assert_eq!(ModelTable::<User>::new().into_table_name(), "users");
/// ```
pub trait Model {
	/// Returns the table name this model is stored in.
	fn table_name() -> &'static str;
}

/// Type-tagged reference to the table of model `M`.
pub struct ModelTable<M> {
	_model: PhantomData<fn() -> M>,
}

impl<M: Model> ModelTable<M> {
	/// Create a reference to the table of `M`.
	pub fn new() -> Self {
		Self {
			_model: PhantomData,
		}
	}
}

impl<M: Model> Default for ModelTable<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M> Clone for ModelTable<M> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<M> Copy for ModelTable<M> {}

impl<M: Model> fmt::Debug for ModelTable<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ModelTable").field(&M::table_name()).finish()
	}
}

/// Conversion into a resolved table name.
pub trait IntoTableName {
	/// Resolve the table name.
	fn into_table_name(self) -> String;
}

impl<M: Model> IntoTableName for ModelTable<M> {
	fn into_table_name(self) -> String {
		M::table_name().to_string()
	}
}

impl IntoTableName for &str {
	fn into_table_name(self) -> String {
		self.to_string()
	}
}

impl IntoTableName for String {
	fn into_table_name(self) -> String {
		self
	}
}

impl IntoTableName for &String {
	fn into_table_name(self) -> String {
		self.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Order;

	impl Model for Order {
		fn table_name() -> &'static str {
			"shop_orders"
		}
	}

	#[rstest]
	fn test_model_table_resolves_name() {
		let table = ModelTable::<Order>::new();
		assert_eq!(table.into_table_name(), "shop_orders");
	}

	#[rstest]
	fn test_model_table_is_copy() {
		let table = ModelTable::<Order>::default();
		let copy = table;
		assert_eq!(table.into_table_name(), copy.into_table_name());
	}

	#[rstest]
	fn test_model_table_debug() {
		assert_eq!(
			format!("{:?}", ModelTable::<Order>::new()),
			"ModelTable(\"shop_orders\")"
		);
	}

	#[rstest]
	fn test_string_table_names() {
		let owned = String::from("users");
		assert_eq!("users".into_table_name(), "users");
		assert_eq!((&owned).into_table_name(), "users");
		assert_eq!(owned.into_table_name(), "users");
	}
}
