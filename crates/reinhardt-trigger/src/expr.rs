//! Predicate system for trigger `WHEN` clauses.
//!
//! This module provides a small set of boolean expressions that render
//! themselves inline:
//!
//! - [`Condition`]: A single comparison (`NEW.age >= 18`)
//! - [`ConditionGroup`]: Conditions combined with AND / OR
//! - [`BinOper`]: Comparison operators

mod condition;
mod operators;

pub use condition::{Condition, ConditionGroup, ConditionType};
pub use operators::BinOper;

#[cfg(test)]
mod tests;
