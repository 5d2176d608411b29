//! Integration tests for expr module.

use super::*;
use crate::types::Property;
use crate::value::Value;
use rstest::rstest;

#[rstest]
#[case(BinOper::Equal, "x = 1")]
#[case(BinOper::NotEqual, "x <> 1")]
#[case(BinOper::SmallerThan, "x < 1")]
#[case(BinOper::SmallerThanOrEqual, "x <= 1")]
#[case(BinOper::GreaterThan, "x > 1")]
#[case(BinOper::GreaterThanOrEqual, "x >= 1")]
#[case(BinOper::Like, "x LIKE 1")]
#[case(BinOper::Is, "x IS 1")]
#[case(BinOper::IsNot, "x IS NOT 1")]
fn test_condition_operators(#[case] oper: BinOper, #[case] expected: &str) {
	let cond = Condition::new("x", oper, 1);
	assert_eq!(cond.to_string(), expected);
}

#[rstest]
fn test_condition_accessors() {
	let cond = Property::new_row("age").lt(18);

	assert_eq!(cond.column(), &Property::new_row("age"));
	assert_eq!(cond.operator(), BinOper::SmallerThan);
	assert_eq!(cond.value(), &Value::Int(18));
}

#[rstest]
fn test_condition_and() {
	let group = Property::new("a").eq(1).and(Property::new("b").eq(true));

	assert_eq!(group.condition_type(), ConditionType::All);
	assert_eq!(group.len(), 2);
	assert_eq!(group.to_string(), "(a = 1 AND b = 1)");
}

#[rstest]
fn test_condition_or() {
	let group = Property::new("a").is_null().or(Property::new("b").gt(2.5));

	assert_eq!(group.condition_type(), ConditionType::Any);
	assert_eq!(group.to_string(), "(a IS NULL OR b > 2.5)");
}

#[rstest]
fn test_condition_group_empty() {
	let group = ConditionGroup::all();

	assert!(group.is_empty());
	assert_eq!(group.len(), 0);
	assert_eq!(group.to_string(), "");
	assert_eq!(ConditionGroup::default().condition_type(), ConditionType::All);
}

#[rstest]
fn test_condition_and_empty_group() {
	let group = Property::new("x").eq(1).and(ConditionGroup::any());

	assert!(!group.is_empty());
	assert_eq!(group.to_string(), "(x = 1)");
}

#[rstest]
fn test_condition_group_skips_empty_children() {
	let group = ConditionGroup::all()
		.add(ConditionGroup::any())
		.add(Property::new("a").eq(1))
		.add("")
		.add(ConditionGroup::all().add(ConditionGroup::any()))
		.add(Property::new("b").eq(2));

	assert_eq!(group.len(), 5);
	assert_eq!(group.to_string(), "(a = 1 AND b = 2)");
}

#[rstest]
fn test_condition_group_only_empty_children() {
	let group = ConditionGroup::any()
		.add(ConditionGroup::all())
		.add(ConditionGroup::any());

	assert!(group.is_empty());
	assert_eq!(group.to_string(), "");
}

#[rstest]
fn test_condition_group_nested() {
	let group = ConditionGroup::any()
		.add(Property::new("x").eq(1).and(Property::new("y").eq(2)))
		.add(Property::new("z").eq(3));

	assert_eq!(group.to_string(), "((x = 1 AND y = 2) OR z = 3)");
}

#[rstest]
fn test_condition_group_raw_sql() {
	let group = ConditionGroup::all()
		.add("NEW.total > OLD.total")
		.add(Property::new_row("status").ne("closed"));

	assert_eq!(
		group.to_string(),
		"(NEW.total > OLD.total AND NEW.status <> 'closed')"
	);
}
