//! # Reinhardt Trigger
//!
//! Fluent builder for SQLite `CREATE TRIGGER` statements.
//!
//! ## Architecture
//!
//! A trigger is assembled in three steps, each returning the builder for the
//! next one:
//!
//! 1. [`Trigger`]: name, `TEMP`, and timing (`BEFORE`, `AFTER`, `INSTEAD OF`)
//! 2. [`TriggerMethod`]: method, `OF` columns, `ON` table, `FOR EACH ROW`, `WHEN`
//! 3. [`CompletedTrigger`]: the statements between `BEGIN` and `END`
//!
//! The crate only produces SQL text. Executing it is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_trigger::prelude::*;
//!
//! struct User;
//!
//! impl Model for User {
//!     fn table_name() -> &'static str {
//!         "users"
//!     }
//! }
//!
//! let mut trigger = Query::trigger("users_audit");
//! trigger.after();
//!
//! let mut method = trigger.insert_on(ModelTable::<User>::new());
//! method.for_each_row();
//!
//! let completed = method.begin("INSERT INTO audit(user_id) VALUES (NEW.id)");
//!
//! assert_eq!(
//!     completed.to_sql(),
//!     "CREATE TRIGGER IF NOT EXISTS `users_audit` AFTER INSERT ON users FOR EACH ROW  \
//!      \nBEGIN\nINSERT INTO audit(user_id) VALUES (NEW.id);\nEND"
//! );
//! ```
//!
//! ## Validation
//!
//! SQLite only accepts an `OF` column list after `UPDATE`. Supplying columns
//! for any other method fails at construction:
//!
//! ```rust
//! use reinhardt_trigger::prelude::*;
//!
//! let result = TriggerMethod::new(
//!     Query::trigger("bad"),
//!     TriggerEvent::Delete,
//!     "users",
//!     vec![Property::new("name")],
//! );
//! assert!(matches!(
//!     result,
//!     Err(TriggerError::InvalidTriggerDefinition { event: TriggerEvent::Delete })
//! ));
//! ```

pub mod error;
pub mod expr;
pub mod manifest;
pub mod query;
pub mod sql_writer;
pub mod types;
pub mod value;

/// Commonly used types.
pub mod prelude {
	pub use crate::error::{TriggerError, TriggerResult};
	pub use crate::expr::{BinOper, Condition, ConditionGroup, ConditionType};
	pub use crate::manifest::{ManifestError, TriggerConfig, TriggerManifest};
	pub use crate::query::{
		CompletedTrigger, DropTriggerStatement, Query, QueryStatement, Trigger, TriggerMethod,
		WriteSql,
	};
	pub use crate::sql_writer::SqlWriter;
	pub use crate::types::{
		IntoTableName, Model, ModelTable, Property, TriggerEvent, TriggerTiming,
	};
	pub use crate::value::Value;
}

pub use prelude::*;
