//! Trigger method and timing keywords.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::TriggerError;

/// The row operation a trigger fires on.
///
/// # Example
///
/// ```rust
/// use reinhardt_trigger::TriggerEvent;
///
/// let event: TriggerEvent = "update".parse().unwrap();
/// assert_eq!(event, TriggerEvent::Update);
/// assert_eq!(event.as_str(), "UPDATE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum TriggerEvent {
	/// INSERT
	Insert,
	/// UPDATE
	Update,
	/// DELETE
	Delete,
}

impl TriggerEvent {
	/// Returns the SQL keyword for this method.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Insert => "INSERT",
			Self::Update => "UPDATE",
			Self::Delete => "DELETE",
		}
	}

	/// Returns true if an `OF` column list may follow this method.
	#[must_use]
	pub fn accepts_columns(&self) -> bool {
		matches!(self, Self::Update)
	}
}

impl fmt::Display for TriggerEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TriggerEvent {
	type Err = TriggerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_uppercase().as_str() {
			"INSERT" => Ok(Self::Insert),
			"UPDATE" => Ok(Self::Update),
			"DELETE" => Ok(Self::Delete),
			_ => Err(TriggerError::UnknownEvent(s.to_string())),
		}
	}
}

impl TryFrom<String> for TriggerEvent {
	type Error = TriggerError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// When a trigger fires relative to its method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum TriggerTiming {
	/// BEFORE
	Before,
	/// AFTER
	After,
	/// INSTEAD OF (views only)
	InsteadOf,
}

impl TriggerTiming {
	/// Returns the SQL keyword for this timing.
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Before => "BEFORE",
			Self::After => "AFTER",
			Self::InsteadOf => "INSTEAD OF",
		}
	}
}

impl fmt::Display for TriggerTiming {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TriggerTiming {
	type Err = TriggerError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().replace('_', " ").to_ascii_uppercase();
		match normalized.as_str() {
			"BEFORE" => Ok(Self::Before),
			"AFTER" => Ok(Self::After),
			"INSTEAD OF" => Ok(Self::InsteadOf),
			_ => Err(TriggerError::UnknownTiming(s.to_string())),
		}
	}
}

impl TryFrom<String> for TriggerTiming {
	type Error = TriggerError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
