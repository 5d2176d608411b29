//! Type definitions for trigger keywords, table references and columns.
//!
//! - [`TriggerEvent`]: The firing method (INSERT, UPDATE, DELETE)
//! - [`TriggerTiming`]: BEFORE, AFTER or INSTEAD OF
//! - [`Model`] / [`ModelTable`]: Type-tagged table references
//! - [`IntoTableName`]: Conversion trait resolving a table name
//! - [`Property`]: Column reference

mod property;
mod table;
mod trigger;

pub use property::Property;
pub use table::{IntoTableName, Model, ModelTable};
pub use trigger::{TriggerEvent, TriggerTiming};
