//! Declarative trigger manifests.
//!
//! A manifest is a TOML document listing triggers as `[[trigger]]` tables.
//! Each entry is built through the same fluent API as hand-written triggers,
//! so it is subject to the same validation.
//!
//! ```toml
//! [[trigger]]
//! name = "users_audit"
//! timing = "after"
//! event = "update"
//! table = "users"
//! columns = ["name"]
//! for_each_row = true
//! when = "NEW.name <> OLD.name"
//! statements = ["INSERT INTO audit(user_id) VALUES (NEW.id)"]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::TriggerError;
use crate::query::{CompletedTrigger, Query, TriggerMethod};
use crate::types::{Property, TriggerEvent, TriggerTiming};

/// Errors raised while loading or building a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
	/// The manifest file could not be read.
	#[error("Failed to read trigger manifest {path}: {source}")]
	IoError {
		/// Path of the manifest
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// The manifest is not valid TOML or does not match the expected shape.
	#[error("Failed to parse trigger manifest: {message}")]
	ParseError {
		/// Parser message
		message: String,
	},

	/// A trigger declares no body statements.
	#[error("Trigger {trigger:?} has no statements")]
	EmptyBody {
		/// Trigger name
		trigger: String,
	},

	/// Two triggers share the same name.
	#[error("Trigger {trigger:?} is declared more than once")]
	DuplicateName {
		/// Trigger name
		trigger: String,
	},

	/// A trigger definition was rejected.
	#[error("Invalid trigger {trigger:?}: {source}")]
	Trigger {
		/// Trigger name
		trigger: String,
		/// The rejection
		#[source]
		source: TriggerError,
	},
}

/// A set of trigger declarations.
#[derive(Debug, Clone, Default, Deserialize)]
#[non_exhaustive]
pub struct TriggerManifest {
	/// Declared triggers, in file order
	#[serde(default, rename = "trigger")]
	pub triggers: Vec<TriggerConfig>,
}

/// A single `[[trigger]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TriggerConfig {
	/// Trigger name
	pub name: String,
	/// Create as TEMP
	#[serde(default)]
	pub temporary: bool,
	/// BEFORE / AFTER / INSTEAD OF
	#[serde(default)]
	pub timing: Option<TriggerTiming>,
	/// INSERT / UPDATE / DELETE
	pub event: TriggerEvent,
	/// Table the trigger is attached to
	pub table: String,
	/// `OF` columns (UPDATE only)
	#[serde(default)]
	pub columns: Vec<String>,
	/// Add `FOR EACH ROW`
	#[serde(default)]
	pub for_each_row: bool,
	/// Raw `WHEN` predicate
	#[serde(default)]
	pub when: Option<String>,
	/// Body statements, in execution order
	#[serde(default)]
	pub statements: Vec<String>,
}

impl TriggerManifest {
	/// Load a manifest from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| ManifestError::IoError {
			path: path.to_path_buf(),
			source,
		})?;
		let manifest = Self::from_toml(&content)?;
		tracing::info!(
			path = %path.display(),
			triggers = manifest.triggers.len(),
			"loaded trigger manifest"
		);
		Ok(manifest)
	}

	/// Parse a manifest from a TOML string.
	pub fn from_toml(content: &str) -> Result<Self, ManifestError> {
		toml::from_str(content).map_err(|e| ManifestError::ParseError {
			message: e.to_string(),
		})
	}

	/// Build every declared trigger, in file order.
	///
	/// # Errors
	///
	/// Fails on the first duplicate name, empty body or rejected definition.
	pub fn build(&self) -> Result<Vec<CompletedTrigger>, ManifestError> {
		let mut seen = HashSet::new();
		for config in &self.triggers {
			if !seen.insert(config.name.as_str()) {
				return Err(ManifestError::DuplicateName {
					trigger: config.name.clone(),
				});
			}
		}
		self.triggers.iter().map(TriggerConfig::build).collect()
	}
}

impl TriggerConfig {
	/// Build this entry into a completed trigger.
	pub fn build(&self) -> Result<CompletedTrigger, ManifestError> {
		let Some((first, rest)) = self.statements.split_first() else {
			return Err(ManifestError::EmptyBody {
				trigger: self.name.clone(),
			});
		};

		let mut trigger = Query::trigger(self.name.clone());
		trigger.with_timing(self.timing);
		if self.temporary {
			trigger.temporary();
		}

		let columns = self.columns.iter().map(Property::new).collect();
		let mut method = TriggerMethod::new(trigger, self.event, self.table.as_str(), columns)
			.map_err(|source| ManifestError::Trigger {
				trigger: self.name.clone(),
				source,
			})?;
		if self.for_each_row {
			method.for_each_row();
		}
		// A blank `when` means no predicate
		if let Some(predicate) = self.when.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
			method.when(predicate.to_string());
		}

		let mut completed = method.begin(first.clone());
		for statement in rest {
			completed.and(statement.clone());
		}
		Ok(completed)
	}
}
