//! SQL writer utility for building trigger text.
//!
//! [`SqlWriter`] is the single accumulating buffer that every trigger fragment
//! renders into. Fragments append themselves; nothing is ever removed.

/// SQL text buffer.
///
/// # Example
///
/// ```rust
/// use reinhardt_trigger::SqlWriter;
///
/// let mut writer = SqlWriter::new();
/// writer.push("INSERT");
/// writer.push_space_separated("ON");
/// writer.push_quoted_if_needed("users");
/// assert_eq!(writer.sql(), "INSERT ON `users`");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlWriter {
	sql: String,
}

impl SqlWriter {
	/// Create a new empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a raw SQL fragment.
	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Append a single space.
	///
	/// Unlike [`push_space_separated`](Self::push_space_separated) this never
	/// collapses with a preceding space.
	pub fn push_space(&mut self) {
		self.sql.push(' ');
	}

	/// Append a keyword surrounded by single spaces (`" OF "`).
	pub fn push_space_separated(&mut self, keyword: &str) {
		self.sql.push(' ');
		self.sql.push_str(keyword);
		self.sql.push(' ');
	}

	/// Append an identifier, wrapping it in backticks unless it is already
	/// quoted with backticks or double quotes.
	///
	/// Backticks inside a name that gets wrapped are doubled.
	pub fn push_quoted_if_needed(&mut self, name: &str) {
		if is_quoted(name) {
			self.sql.push_str(name);
		} else {
			self.sql.push('`');
			self.sql.push_str(&name.replace('`', "``"));
			self.sql.push('`');
		}
	}

	/// Append `items` separated by `separator`, rendering each with `f`.
	pub fn push_list<T, F>(&mut self, items: &[T], separator: &str, mut f: F)
	where
		F: FnMut(&T, &mut Self),
	{
		for (i, item) in items.iter().enumerate() {
			if i > 0 {
				self.sql.push_str(separator);
			}
			f(item, self);
		}
	}

	/// Returns the accumulated SQL.
	pub fn sql(&self) -> &str {
		&self.sql
	}

	/// Consume the writer and return the SQL.
	pub fn into_string(self) -> String {
		self.sql
	}

	/// Returns true if nothing was written yet.
	pub fn is_empty(&self) -> bool {
		self.sql.is_empty()
	}

	/// Returns the length of the SQL written so far.
	pub fn len(&self) -> usize {
		self.sql.len()
	}
}

impl From<&str> for SqlWriter {
	fn from(s: &str) -> Self {
		Self { sql: s.to_string() }
	}
}

impl From<String> for SqlWriter {
	fn from(sql: String) -> Self {
		Self { sql }
	}
}

fn is_quoted(name: &str) -> bool {
	name.len() >= 2
		&& ((name.starts_with('`') && name.ends_with('`'))
			|| (name.starts_with('"') && name.ends_with('"')))
}
