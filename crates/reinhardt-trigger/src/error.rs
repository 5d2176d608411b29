//! Error types for trigger construction.

use crate::types::TriggerEvent;

/// Errors raised while building a trigger definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
	/// An `OF` column list was supplied for a method other than UPDATE.
	///
	/// SQLite only accepts `UPDATE OF col1,col2`; `INSERT OF ...` and
	/// `DELETE OF ...` are rejected here instead of at execution time.
	#[error("A trigger OF columns list can only be used with an UPDATE method, got {event}")]
	InvalidTriggerDefinition {
		/// The method the columns were attached to
		event: TriggerEvent,
	},

	/// A method name that is not INSERT, UPDATE or DELETE.
	#[error("Unknown trigger method: {0:?} (expected INSERT, UPDATE or DELETE)")]
	UnknownEvent(String),

	/// A timing keyword that is not BEFORE, AFTER or INSTEAD OF.
	#[error("Unknown trigger timing: {0:?} (expected BEFORE, AFTER or INSTEAD OF)")]
	UnknownTiming(String),
}

/// Result type for trigger construction.
pub type TriggerResult<T> = Result<T, TriggerError>;
