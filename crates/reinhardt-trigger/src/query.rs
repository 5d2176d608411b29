//! Trigger statement builders.
//!
//! A trigger is assembled in three steps:
//!
//! 1. [`Trigger`]: the `CREATE TRIGGER` header (name, TEMP, timing)
//! 2. [`TriggerMethod`]: the method clause (`UPDATE OF ... ON ... FOR EACH ROW WHEN ...`)
//! 3. [`CompletedTrigger`]: the `BEGIN ... END` body
//!
//! ```rust
//! use reinhardt_trigger::{Property, Query, QueryStatement};
//!
//! let mut trigger = Query::trigger("users_touch");
//! trigger.after();
//!
//! let mut method = trigger.update_on("users", ["name"]).unwrap();
//! method
//!     .for_each_row()
//!     .when(Property::new_row("name").ne(Property::old_row("name")));
//!
//! let completed = method.begin("UPDATE users SET touched = 1 WHERE id = NEW.id");
//!
//! assert_eq!(
//!     completed.to_sql(),
//!     "CREATE TRIGGER IF NOT EXISTS `users_touch` AFTER UPDATE OF name ON users \
//!      FOR EACH ROW  WHEN NEW.name <> OLD.name  \nBEGIN\n\
//!      UPDATE users SET touched = 1 WHERE id = NEW.id;\nEND"
//! );
//! ```

pub mod completed_trigger;
pub mod drop_trigger;
pub mod traits;
pub mod trigger;
pub mod trigger_method;

pub use completed_trigger::CompletedTrigger;
pub use drop_trigger::DropTriggerStatement;
pub use traits::{QueryStatement, WriteSql};
pub use trigger::Trigger;
pub use trigger_method::TriggerMethod;

/// Entry point for trigger statements.
#[derive(Debug, Clone, Copy)]
pub struct Query;

impl Query {
	/// Start a `CREATE TRIGGER` statement.
	///
	/// ```rust
	/// use reinhardt_trigger::{Query, QueryStatement};
	///
	/// let trigger = Query::trigger("users_audit");
	/// assert_eq!(trigger.to_sql(), "CREATE TRIGGER IF NOT EXISTS `users_audit` ");
	/// ```
	pub fn trigger(name: impl Into<String>) -> Trigger {
		Trigger::create(name)
	}

	/// Start a `DROP TRIGGER` statement.
	///
	/// ```rust
	/// use reinhardt_trigger::{Query, QueryStatement};
	///
	/// let mut stmt = Query::drop_trigger();
	/// stmt.name("users_audit");
	/// assert_eq!(stmt.to_sql(), "DROP TRIGGER `users_audit`");
	/// ```
	pub fn drop_trigger() -> DropTriggerStatement {
		DropTriggerStatement::new()
	}
}
