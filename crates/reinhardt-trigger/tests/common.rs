//! Common test utilities and fixtures for trigger integration tests

// Suppress warnings for items that may not be used in all test files.
// Each test binary compiles common.rs separately, causing unused code warnings.
#![allow(dead_code, unreachable_pub)]

use rstest::fixture;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use reinhardt_trigger::Model;

/// Model stored in the `users` table
pub struct User;

impl Model for User {
	fn table_name() -> &'static str {
		"users"
	}
}

/// In-memory SQLite database with the `users`, `audit` and `sessions` tables.
///
/// The pool holds a single connection that never expires, since every
/// connection to `sqlite::memory:` opens its own database.
#[fixture]
pub async fn sqlite_pool() -> SqlitePool {
	let pool = SqlitePoolOptions::new()
		.max_connections(1)
		.min_connections(1)
		.idle_timeout(None)
		.max_lifetime(None)
		.connect("sqlite::memory:")
		.await
		.expect("Failed to open in-memory SQLite database");

	for ddl in [
		"CREATE TABLE users (
			id INTEGER PRIMARY KEY,
			name TEXT NOT NULL,
			email TEXT,
			age INTEGER
		)",
		"CREATE TABLE audit (
			id INTEGER PRIMARY KEY AUTOINCREMENT,
			user_id INTEGER,
			note TEXT
		)",
		"CREATE TABLE sessions (
			id INTEGER PRIMARY KEY,
			user_id INTEGER NOT NULL
		)",
	] {
		sqlx::query(ddl)
			.execute(&pool)
			.await
			.expect("Failed to create table");
	}

	pool
}

/// Execute a statement, panicking on failure.
pub async fn execute(pool: &SqlitePool, sql: &str) {
	sqlx::query(sql)
		.execute(pool)
		.await
		.unwrap_or_else(|e| panic!("Failed to execute {sql:?}: {e}"));
}

/// Number of rows in `table`.
pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
	let sql = format!("SELECT COUNT(*) FROM {table}");
	sqlx::query_scalar::<_, i64>(&sql)
		.fetch_one(pool)
		.await
		.expect("Failed to count rows")
}

/// Number of triggers named `name`, including TEMP triggers.
pub async fn trigger_count(pool: &SqlitePool, name: &str) -> i64 {
	sqlx::query_scalar::<_, i64>(
		"SELECT COUNT(*) FROM (
			SELECT name FROM sqlite_master WHERE type = 'trigger' AND name = ?1
			UNION ALL
			SELECT name FROM sqlite_temp_master WHERE type = 'trigger' AND name = ?1
		)",
	)
	.bind(name)
	.fetch_one(pool)
	.await
	.expect("Failed to query trigger catalog")
}
